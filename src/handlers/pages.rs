use axum::{
    extract::{Query, State},
    response::Html,
};
use leptos::prelude::*;
use tracing::info;

use crate::pages::{About, Index, Post, PostQuery, get_initial_props};
use crate::view::{Page, document, with_layout};
use crate::{HnError, router::HnState};

/// GET / -> home page.
pub async fn index_handler() -> Html<String> {
    Html(document("Home", with_layout(Index).render()))
}

/// GET /about -> about page.
pub async fn about_handler() -> Html<String> {
    Html(document("About", with_layout(About).render()))
}

/// GET /post?id=<id> -> initializes the database if needed, reads the item, renders it.
pub async fn post_handler(
    State(state): State<HnState>,
    Query(query): Query<PostQuery>,
) -> Result<Html<String>, HnError> {
    let db = state.registry.load_db(&state.options);
    let props = get_initial_props(&db, &query).await?;
    let Some(item) = props.item else {
        info!(id = %query.id, "item not found");
        return Err(HnError::ItemNotFound(query.id));
    };
    let body = with_layout(|| view! { <Post item=item.clone()/> }).render();
    Ok(Html(document(&item.title, body)))
}
