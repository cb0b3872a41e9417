use crate::db::app::FirebaseApp;
use crate::error::HnError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// A location in the database, relative to the app's root URL.
#[derive(Debug, Clone)]
pub struct DbRef {
    app: Arc<FirebaseApp>,
    segments: Vec<String>,
}

impl DbRef {
    pub fn root(app: Arc<FirebaseApp>) -> Self {
        Self {
            app,
            segments: Vec::new(),
        }
    }

    pub fn app(&self) -> &Arc<FirebaseApp> {
        &self.app
    }

    /// Navigate below this location. `path` may hold several `/`-separated
    /// keys but must name at least one, and no key may contain `.`, `#`, `$`,
    /// `[`, `]` or a control character.
    pub fn child(&self, path: &str) -> Result<Self, HnError> {
        let mut segments = self.segments.clone();
        segments.extend(split_path(path)?);
        Ok(Self {
            app: self.app.clone(),
            segments,
        })
    }

    /// Reference at `path` below the root without key validation.
    pub(crate) fn unchecked(app: Arc<FirebaseApp>, path: &str) -> Self {
        Self {
            app,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Last path segment; `None` at the root.
    pub fn key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// REST endpoint for this location: `<database_url>/<path>.json`.
    pub fn rest_url(&self) -> Result<Url, HnError> {
        let mut url = Url::parse(self.app.database_url())?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| HnError::InvalidDatabaseUrl(self.app.database_url().to_string()))?;
            path.pop_if_empty();
            match self.segments.split_last() {
                Some((last, parents)) => {
                    path.extend(parents);
                    path.push(&format!("{last}.json"));
                }
                None => {
                    path.push(".json");
                }
            }
        }
        Ok(url)
    }

    /// Single point-in-time read of this location.
    pub async fn once_value(&self) -> Result<DataSnapshot, HnError> {
        let url = self.rest_url()?;
        debug!(url = %url, "point read");
        let value = self
            .app
            .client()
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(DataSnapshot {
            key: self.key().map(str::to_string),
            value,
        })
    }
}

/// Split a child path into keys, rejecting anything that would not address a
/// node strictly below the current one.
pub(crate) fn split_path(path: &str) -> Result<Vec<String>, HnError> {
    let invalid = path
        .chars()
        .any(|c| matches!(c, '.' | '#' | '$' | '[' | ']') || c.is_ascii_control());
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if invalid || segments.is_empty() {
        return Err(HnError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

/// Raw value returned by a point read.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSnapshot {
    pub key: Option<String>,
    pub value: Value,
}

impl DataSnapshot {
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    /// Decode the value; a missing location decodes to `None`.
    pub fn val<T: DeserializeOwned>(&self) -> Result<Option<T>, HnError> {
        if !self.exists() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(self.value.clone())?))
    }
}
