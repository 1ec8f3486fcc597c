//! Accessibility widget: a floating panel for font size, contrast, line height
//! and read-aloud, with settings persisted across sessions.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
pub mod ui;
