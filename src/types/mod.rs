// Accessibility widget shared type definitions
// Each submodule defines plain data used across services and managers.

pub mod config;
pub mod errors;
pub mod notice;
pub mod panel;
pub mod settings;
pub mod speech;
