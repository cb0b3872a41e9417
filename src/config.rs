use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::db::FirebaseOptions;

pub const DEFAULT_DATABASE_URL: &str = "https://hacker-news.firebaseio.com";
pub const DEFAULT_ROOT_PATH: &str = "v0";

/// Process-wide configuration, resolved once from defaults and `HN_*` env vars.
pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: invalid HN_* configuration"));

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Realtime database root, e.g. `https://hacker-news.firebaseio.com`.
    pub database_url: String,
    /// Sub-path every handle is scoped to.
    pub root_path: String,
    pub listen_addr: String,
    pub loglevel: String,
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            root_path: DEFAULT_ROOT_PATH.to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            loglevel: "info".to_string(),
            proxy: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("HN_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn firebase_options(&self) -> FirebaseOptions {
        FirebaseOptions {
            database_url: self.database_url.clone(),
            root_path: self.root_path.clone(),
            proxy: self.proxy.clone(),
        }
    }
}
