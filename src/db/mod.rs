//! Realtime database client: app registry and path references.
//!
//! Layout:
//! - `app.rs`: one-time app initialization and the `load_db` entry point
//! - `reference.rs`: `DbRef` path navigation and `DataSnapshot` point reads

pub mod app;
pub mod reference;

pub use app::{AppRegistry, FirebaseApp, FirebaseOptions, InitOutcome};
pub use reference::{DataSnapshot, DbRef};
