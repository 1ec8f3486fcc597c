//! SQLite persistence for the desktop host.
//!
//! Provides connection management, schema migrations, and a key-value store
//! that stands in for browser local storage.
//!
//! # Usage
//!
//! ```no_run
//! use accessibility_widget::database::SqliteStore;
//! use accessibility_widget::services::persistence::KeyValueStore;
//!
//! let mut store = SqliteStore::open("widget.db").expect("failed to open database");
//! store.set("accessibility-widget-settings", "{}").expect("write failed");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::{Database, SqliteStore};
