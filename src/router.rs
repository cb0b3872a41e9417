use axum::{Router, routing::get};
use std::sync::Arc;

use crate::db::{AppRegistry, FirebaseOptions};
use crate::handlers::pages::{about_handler, index_handler, post_handler};

#[derive(Clone)]
pub struct HnState {
    pub registry: Arc<AppRegistry>,
    pub options: Arc<FirebaseOptions>,
}

impl HnState {
    pub fn new(registry: Arc<AppRegistry>, options: FirebaseOptions) -> Self {
        Self {
            registry,
            options: Arc::new(options),
        }
    }
}

pub fn hn_router(state: HnState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/post", get(post_handler))
        .with_state(state)
}
