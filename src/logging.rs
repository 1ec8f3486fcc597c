//! Logger setup for the binary.
//!
//! The library only emits through the `log` facade; hosts decide where it goes.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs `env_logger`. `RUST_LOG` wins over `default_filter`.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init(default_filter: &str) {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(default_filter);
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            eprintln!("logger already installed: {}", e);
        }
    });
}
