//! Integration-level tests for the SettingsEngine public API.
//!
//! These tests exercise loading, cycling, reset and the deferred write path
//! through the public trait interface.

use accessibility_widget::services::persistence::{KeyValueStore, MemoryStore};
use accessibility_widget::services::settings_engine::{parse_stored, SettingsEngine, SettingsEngineTrait};
use accessibility_widget::types::settings::{Level, Settings};

const KEY: &str = "accessibility-widget-settings";

#[test]
fn test_load_defaults_when_nothing_stored() {
    let mut engine = SettingsEngine::new(MemoryStore::new(), KEY);
    assert_eq!(engine.load(), Settings::default());
}

#[test]
fn test_mutations_return_new_value() {
    let mut engine = SettingsEngine::new(MemoryStore::new(), KEY);
    engine.load();
    assert_eq!(engine.cycle_font_size().font_size, Level::Large);
    assert!(engine.toggle_contrast().high_contrast);
    assert_eq!(engine.cycle_line_height().line_height, Level::Large);
    assert_eq!(engine.cycle_speech_rate().speech_rate.value(), 1.2);
    assert_eq!(engine.cycle_speech_rate().speech_rate.value(), 0.6);
}

#[test]
fn test_only_latest_snapshot_is_written() {
    let mut engine = SettingsEngine::new(MemoryStore::new(), KEY);
    engine.cycle_font_size();
    engine.cycle_font_size();
    assert!(engine.persistence().has_pending());

    engine.flush();
    assert!(!engine.persistence().has_pending());
    let stored = engine.persistence().store().get(KEY).unwrap().unwrap();
    assert_eq!(parse_stored(&stored).font_size, Level::ExtraLarge);
}

#[test]
fn test_reset_persists_defaults() {
    let store = MemoryStore::with_entry(KEY, r#"{"fontSizeLevel":2,"highContrast":true}"#);
    let mut engine = SettingsEngine::new(store, KEY);
    assert_eq!(engine.load().font_size, Level::ExtraLarge);

    assert_eq!(engine.reset_to_defaults(), Settings::default());
    engine.flush();
    let mut reloaded = SettingsEngine::new(engine.persistence().store().clone(), KEY);
    assert_eq!(reloaded.load(), Settings::default());
}

#[test]
fn test_non_object_record_yields_defaults() {
    for raw in ["[1,2,3]", "\"text\"", "null", "{truncated"] {
        assert_eq!(parse_stored(raw), Settings::default(), "record: {}", raw);
    }
}

#[test]
fn test_speech_rate_and_voice_restored() {
    let settings = parse_stored(r#"{"speechRate":0.8,"voiceName":"Ioana"}"#);
    assert_eq!(settings.speech_rate.value(), 0.8);
    assert_eq!(settings.voice_name.as_deref(), Some("Ioana"));

    let settings = parse_stored(r#"{"speechRate":0.7,"voiceName":""}"#);
    assert_eq!(settings.speech_rate.value(), 1.0);
    assert_eq!(settings.voice_name, None);
}
