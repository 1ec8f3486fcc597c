// Accessibility widget services
// Services implement the widget core: settings, persistence, page effects,
// read-aloud, voices and configuration.

pub mod config_loader;
pub mod content_extractor;
pub mod persistence;
pub mod playback;
pub mod settings_engine;
pub mod speech_engine;
pub mod style_applier;
pub mod text_chunker;
pub mod voice_catalog;
