// Accessibility Widget Settings Engine
// Holds the four preferences plus the preferred voice, cycles them through their
// legal values, and mirrors every change into the persistence adapter.
// Load is tolerant: each stored field that is missing or illegal keeps its default.

use serde_json::{Map, Value};

use crate::services::persistence::{KeyValueStore, PersistenceAdapter};
use crate::types::settings::{Level, Settings, SpeechRate};

/// Trait defining the settings engine interface.
///
/// Every mutating operation returns the new settings value.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Settings;
    fn get_settings(&self) -> &Settings;
    fn cycle_font_size(&mut self) -> Settings;
    fn toggle_contrast(&mut self) -> Settings;
    fn cycle_line_height(&mut self) -> Settings;
    fn cycle_speech_rate(&mut self) -> Settings;
    fn set_voice_name(&mut self, name: Option<String>) -> Settings;
    fn reset_to_defaults(&mut self) -> Settings;
}

/// Settings engine persisting through a [`PersistenceAdapter`].
pub struct SettingsEngine<S: KeyValueStore> {
    settings: Settings,
    persistence: PersistenceAdapter<S>,
}

impl<S: KeyValueStore> SettingsEngine<S> {
    pub fn new(store: S, storage_key: &str) -> Self {
        Self {
            settings: Settings::default(),
            persistence: PersistenceAdapter::new(store, storage_key),
        }
    }

    /// Writes any pending settings snapshot to the store.
    pub fn flush(&mut self) {
        self.persistence.flush();
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut PersistenceAdapter<S> {
        &mut self.persistence
    }

    fn commit(&mut self, settings: Settings) -> Settings {
        self.settings = settings;
        match serde_json::to_string(&self.settings.to_stored()) {
            Ok(json) => self.persistence.schedule_save(json),
            Err(e) => log::warn!("failed to serialize settings: {}", e),
        }
        self.settings.clone()
    }
}

/// Parses a stored record field by field.
///
/// A record that is not a JSON object yields full defaults.
pub fn parse_stored(raw: &str) -> Settings {
    let defaults = Settings::default();
    let map = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            log::warn!("stored settings are not an object, using defaults");
            return defaults;
        }
        Err(e) => {
            log::warn!("failed to parse stored settings: {}", e);
            return defaults;
        }
    };

    Settings {
        font_size: level_field(&map, "fontSizeLevel").unwrap_or(defaults.font_size),
        high_contrast: field(&map, "highContrast", Value::as_bool)
            .unwrap_or(defaults.high_contrast),
        line_height: level_field(&map, "lineHeightLevel").unwrap_or(defaults.line_height),
        speech_rate: field(&map, "speechRate", |v| {
            v.as_f64().and_then(SpeechRate::from_value)
        })
        .unwrap_or(defaults.speech_rate),
        voice_name: field(&map, "voiceName", |v| {
            v.as_str().filter(|s| !s.is_empty()).map(str::to_string)
        }),
    }
}

fn field<T>(map: &Map<String, Value>, name: &str, read: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let value = map.get(name)?;
    if value.is_null() {
        return None;
    }
    let parsed = read(value);
    if parsed.is_none() {
        log::warn!("ignoring illegal stored value for '{}': {}", name, value);
    }
    parsed
}

fn level_field(map: &Map<String, Value>, name: &str) -> Option<Level> {
    field(map, name, |v| v.as_u64().and_then(Level::from_index))
}

impl<S: KeyValueStore> SettingsEngineTrait for SettingsEngine<S> {
    /// Loads settings from the store, overwriting defaults where a stored value is legal.
    ///
    /// Never fails: a missing key, unreadable store or corrupted record yields defaults.
    fn load(&mut self) -> Settings {
        self.settings = match self.persistence.load() {
            Some(raw) => parse_stored(&raw),
            None => Settings::default(),
        };
        log::debug!("settings loaded: {:?}", self.settings);
        self.settings.clone()
    }

    fn get_settings(&self) -> &Settings {
        &self.settings
    }

    fn cycle_font_size(&mut self) -> Settings {
        let mut next = self.settings.clone();
        next.font_size = next.font_size.next();
        self.commit(next)
    }

    fn toggle_contrast(&mut self) -> Settings {
        let mut next = self.settings.clone();
        next.high_contrast = !next.high_contrast;
        self.commit(next)
    }

    fn cycle_line_height(&mut self) -> Settings {
        let mut next = self.settings.clone();
        next.line_height = next.line_height.next();
        self.commit(next)
    }

    fn cycle_speech_rate(&mut self) -> Settings {
        let mut next = self.settings.clone();
        next.speech_rate = next.speech_rate.next();
        self.commit(next)
    }

    fn set_voice_name(&mut self, name: Option<String>) -> Settings {
        let mut next = self.settings.clone();
        next.voice_name = name;
        self.commit(next)
    }

    /// Restores factory defaults and persists them.
    fn reset_to_defaults(&mut self) -> Settings {
        self.commit(Settings::default())
    }
}
