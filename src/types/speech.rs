use serde::{Deserialize, Serialize};

/// A synthesis voice as reported by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub name: String,
    /// BCP 47 tag, e.g. `ro-RO`.
    pub lang: String,
    #[serde(default)]
    pub local_service: bool,
    #[serde(default)]
    pub default: bool,
}

/// Identifies one dispatched chunk: the session generation and chunk index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UtteranceTag {
    pub generation: u64,
    pub index: usize,
}

/// One `speak` request handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub voice: Option<String>,
    pub tag: UtteranceTag,
}

/// Callback reported by the engine for a tagged utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechEvent {
    pub tag: UtteranceTag,
    pub kind: SpeechEventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEventKind {
    Started,
    Ended,
    Failed(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Speaking,
}
