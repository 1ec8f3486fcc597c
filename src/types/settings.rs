use serde::{Deserialize, Serialize};

/// Discrete magnitude used by both font size and line height.
///
/// Cycles `Normal -> Large -> ExtraLarge -> Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Normal, Level::Large, Level::ExtraLarge];

    /// Returns the next level, wrapping `ExtraLarge` back to `Normal`.
    pub fn next(self) -> Level {
        match self {
            Level::Normal => Level::Large,
            Level::Large => Level::ExtraLarge,
            Level::ExtraLarge => Level::Normal,
        }
    }

    /// Persisted numeric form (0, 1 or 2).
    pub fn index(self) -> u8 {
        match self {
            Level::Normal => 0,
            Level::Large => 1,
            Level::ExtraLarge => 2,
        }
    }

    pub fn from_index(index: u64) -> Option<Level> {
        match index {
            0 => Some(Level::Normal),
            1 => Some(Level::Large),
            2 => Some(Level::ExtraLarge),
            _ => None,
        }
    }
}

/// Speech rates offered by the rate control, in cycling order.
pub const SPEECH_RATES: [f32; 4] = [0.6, 0.8, 1.0, 1.2];

const DEFAULT_RATE_INDEX: usize = 2;

/// A speech rate restricted to [`SPEECH_RATES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeechRate(usize);

impl SpeechRate {
    pub fn all() -> impl Iterator<Item = SpeechRate> {
        (0..SPEECH_RATES.len()).map(SpeechRate)
    }

    pub fn value(self) -> f32 {
        SPEECH_RATES[self.0]
    }

    /// Returns the next rate, wrapping 1.2 back to 0.6.
    pub fn next(self) -> SpeechRate {
        SpeechRate((self.0 + 1) % SPEECH_RATES.len())
    }

    /// Matches a stored number against the legal rates.
    pub fn from_value(value: f64) -> Option<SpeechRate> {
        SPEECH_RATES
            .iter()
            .position(|rate| (f64::from(*rate) - value).abs() < 1e-3)
            .map(SpeechRate)
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        SpeechRate(DEFAULT_RATE_INDEX)
    }
}

/// The user's accessibility preferences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub font_size: Level,
    pub high_contrast: bool,
    pub line_height: Level,
    pub speech_rate: SpeechRate,
    /// Preferred voice, by platform voice name.
    pub voice_name: Option<String>,
}

impl Settings {
    pub fn to_stored(&self) -> StoredSettings {
        StoredSettings {
            font_size_level: self.font_size.index(),
            high_contrast: self.high_contrast,
            line_height_level: self.line_height.index(),
            speech_rate: self.speech_rate.value(),
            voice_name: self.voice_name.clone(),
        }
    }
}

/// Wire form of [`Settings`] kept under the storage key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub font_size_level: u8,
    pub high_contrast: bool,
    pub line_height_level: u8,
    pub speech_rate: f32,
    #[serde(default)]
    pub voice_name: Option<String>,
}
