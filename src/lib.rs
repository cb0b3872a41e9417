pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod types;
pub mod view;

pub use db::{AppRegistry, DbRef, FirebaseOptions, InitOutcome};
pub use error::HnError;
pub use types::Item;
