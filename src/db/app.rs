use crate::db::reference::{DbRef, split_path};
use crate::error::HnError;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info};
use url::Url;

/// Connection settings for the realtime database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseOptions {
    pub database_url: String,
    pub root_path: String,
    pub proxy: Option<String>,
}

/// A configured connection: HTTP client plus database root.
#[derive(Debug)]
pub struct FirebaseApp {
    client: reqwest::Client,
    database_url: String,
}

impl FirebaseApp {
    /// Validate the options and build the HTTP client.
    pub fn new(options: &FirebaseOptions) -> Result<Self, HnError> {
        let parsed = Url::parse(&options.database_url)?;
        if parsed.cannot_be_a_base() {
            return Err(HnError::InvalidDatabaseUrl(options.database_url.clone()));
        }
        split_path(&options.root_path)?;
        let mut builder = reqwest::Client::builder().user_agent("hn-post/0.1");
        if let Some(proxy_url) = options.proxy.as_deref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        Ok(Self {
            client: builder.build()?,
            database_url: options.database_url.clone(),
        })
    }

    /// App built without validation; reads against it report whatever is wrong.
    fn detached(options: &FirebaseOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            database_url: options.database_url.clone(),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Result of one initialization attempt.
#[derive(Debug)]
pub enum InitOutcome {
    Initialized,
    AlreadyInitialized,
    Failed(HnError),
}

/// Holds at most one default app; the first successful initialization wins.
#[derive(Debug, Default)]
pub struct AppRegistry {
    default_app: OnceLock<Arc<FirebaseApp>>,
}

impl AppRegistry {
    pub const fn new() -> Self {
        Self {
            default_app: OnceLock::new(),
        }
    }

    pub fn app(&self) -> Option<Arc<FirebaseApp>> {
        self.default_app.get().cloned()
    }

    /// Initialize the default app once. Failures leave the registry empty.
    pub fn initialize_app(&self, options: &FirebaseOptions) -> InitOutcome {
        if self.default_app.get().is_some() {
            return InitOutcome::AlreadyInitialized;
        }
        let app = match FirebaseApp::new(options) {
            Ok(app) => Arc::new(app),
            Err(e) => return InitOutcome::Failed(e),
        };
        match self.default_app.set(app) {
            Ok(()) => {
                info!(database_url = %options.database_url, "database app initialized");
                InitOutcome::Initialized
            }
            // Lost the race to a concurrent caller.
            Err(_) => InitOutcome::AlreadyInitialized,
        }
    }

    /// Initialize if needed and hand out a reference at the configured root.
    ///
    /// Never fails: an initialization error is logged and a reference is still
    /// returned, so the problem only shows up on the first read.
    pub fn load_db(&self, options: &FirebaseOptions) -> DbRef {
        match self.initialize_app(options) {
            InitOutcome::Initialized => {}
            InitOutcome::AlreadyInitialized => {
                debug!("database app already initialized; reusing");
            }
            InitOutcome::Failed(e) => {
                error!(error = %e, database_url = %options.database_url, "database initialization error");
            }
        }
        let app = self
            .app()
            .unwrap_or_else(|| Arc::new(FirebaseApp::detached(options)));
        DbRef::unchecked(app, &options.root_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records the level of every event emitted while installed.
    #[derive(Clone, Default)]
    struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for LevelRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    impl LevelRecorder {
        fn count(&self, level: Level) -> usize {
            self.0.lock().unwrap().iter().filter(|l| **l == level).count()
        }
    }

    fn recorded(f: impl FnOnce()) -> LevelRecorder {
        let recorder = LevelRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        tracing::subscriber::with_default(subscriber, f);
        recorder
    }

    fn options(url: &str) -> FirebaseOptions {
        FirebaseOptions {
            database_url: url.to_string(),
            root_path: "v0".to_string(),
            proxy: None,
        }
    }

    #[test]
    fn second_initialization_reports_already_initialized() {
        let registry = AppRegistry::new();
        let opts = options("https://hacker-news.firebaseio.com");

        assert!(matches!(registry.initialize_app(&opts), InitOutcome::Initialized));
        assert!(matches!(
            registry.initialize_app(&opts),
            InitOutcome::AlreadyInitialized
        ));
    }

    #[test]
    fn load_db_twice_yields_v0_handles() {
        let registry = AppRegistry::new();
        let opts = options("https://hacker-news.firebaseio.com");

        let first = registry.load_db(&opts);
        let second = registry.load_db(&opts);

        assert_eq!(first.path(), "v0");
        assert_eq!(second.path(), "v0");
        assert!(Arc::ptr_eq(first.app(), second.app()));
    }

    #[test]
    fn first_app_is_kept_after_reinitialization() {
        let registry = AppRegistry::new();
        registry.initialize_app(&options("https://first.example.com"));
        registry.initialize_app(&options("https://second.example.com"));

        let app = registry.app().expect("app should be set");
        assert_eq!(app.database_url(), "https://first.example.com");
    }

    #[test]
    fn invalid_url_fails_without_poisoning() {
        let registry = AppRegistry::new();

        let outcome = registry.initialize_app(&options("not a url"));
        assert!(matches!(outcome, InitOutcome::Failed(HnError::UrlParse(_))));
        assert!(registry.app().is_none());

        let outcome = registry.initialize_app(&options("https://hacker-news.firebaseio.com"));
        assert!(matches!(outcome, InitOutcome::Initialized));
    }

    #[test]
    fn bad_proxy_fails_initialization() {
        let registry = AppRegistry::new();
        let mut opts = options("https://hacker-news.firebaseio.com");
        opts.proxy = Some("::not a proxy::".to_string());

        assert!(matches!(
            registry.initialize_app(&opts),
            InitOutcome::Failed(HnError::Reqwest(_))
        ));
    }

    #[test]
    fn load_db_after_failure_still_returns_handle() {
        let registry = AppRegistry::new();
        let opts = options("mailto:nobody");

        let db = registry.load_db(&opts);

        assert_eq!(db.path(), "v0");
        assert_eq!(db.app().database_url(), "mailto:nobody");
        assert!(registry.app().is_none());
    }

    #[test]
    fn invalid_root_path_fails_initialization() {
        let registry = AppRegistry::new();
        let mut opts = options("https://hacker-news.firebaseio.com");
        opts.root_path = "..".to_string();

        assert!(matches!(
            registry.initialize_app(&opts),
            InitOutcome::Failed(HnError::InvalidPath(_))
        ));
    }

    #[test]
    fn failed_initialization_logs_one_error() {
        let recorder = recorded(|| {
            let registry = AppRegistry::new();
            let db = registry.load_db(&options("mailto:nobody"));
            assert_eq!(db.path(), "v0");
        });

        assert_eq!(recorder.count(Level::ERROR), 1);
    }

    #[test]
    fn reinitialization_logs_no_error() {
        let recorder = recorded(|| {
            let registry = AppRegistry::new();
            let opts = options("https://hacker-news.firebaseio.com");
            registry.load_db(&opts);
            registry.load_db(&opts);
        });

        assert_eq!(recorder.count(Level::ERROR), 0);
    }
}
