use serde::Deserialize;

/// A Hacker News item as stored under `v0/item/<id>`.
///
/// Only the fields the post page shows are kept; everything else in the
/// record is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}
