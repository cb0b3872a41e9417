use leptos::prelude::*;
use serde::Deserialize;
use tracing::debug;

use crate::db::DbRef;
use crate::error::HnError;
use crate::types::Item;

#[derive(Debug, Clone, Deserialize)]
pub struct PostQuery {
    pub id: String,
}

/// Data the post page needs before it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInitialProps {
    pub item: Option<Item>,
}

/// Point-read `item/<id>` under `db`. A missing item is `None`, not an error;
/// an empty id or one that is not a valid key is `InvalidPath`.
pub async fn get_initial_props(
    db: &DbRef,
    query: &PostQuery,
) -> Result<PostInitialProps, HnError> {
    let snapshot = db.child("item")?.child(&query.id)?.once_value().await?;
    let item = snapshot.val::<Item>()?;
    debug!(key = ?snapshot.key, found = item.is_some(), "loaded item");
    Ok(PostInitialProps { item })
}

#[component]
pub fn Post(item: Item) -> impl IntoView {
    let Item { title, url } = item;
    let href = url.clone();
    view! {
        <div>
            <h1>{title}</h1>
            <p>
                "URL: "
                <a target="_blank" href=href>{url}</a>
            </p>
        </div>
    }
}
