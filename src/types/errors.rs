use std::fmt;

// === StorageError ===

/// Errors raised by a key-value store backing the persisted settings.
#[derive(Debug)]
pub enum StorageError {
    /// The store cannot be used at all (disabled, sandboxed, closed).
    Unavailable(String),
    /// Reading a key failed.
    ReadFailed(String),
    /// Writing a key failed (quota, I/O, constraint).
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Unavailable(e.to_string())
    }
}

// === SpeechError ===

/// Errors raised by the platform speech engine.
#[derive(Debug, PartialEq)]
pub enum SpeechError {
    /// The platform offers no speech synthesis.
    Unavailable,
    /// The engine refused or failed to speak an utterance.
    SpeakFailed(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Unavailable => write!(f, "Speech synthesis is not available"),
            SpeechError::SpeakFailed(msg) => write!(f, "Speech synthesis failed: {}", msg),
        }
    }
}

impl std::error::Error for SpeechError {}

// === PlaybackError ===

/// Errors related to read-aloud sessions.
#[derive(Debug, PartialEq)]
pub enum PlaybackError {
    /// The page has no readable text.
    NoReadableContent,
    /// Read-aloud was requested on a platform without speech synthesis.
    SpeechUnavailable,
    /// The engine failed while speaking; the session was aborted.
    EngineFailed(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::NoReadableContent => {
                write!(f, "No readable text was found on this page")
            }
            PlaybackError::SpeechUnavailable => {
                write!(f, "Speech synthesis is not supported here")
            }
            PlaybackError::EngineFailed(msg) => {
                write!(f, "Reading stopped because of a speech error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

impl From<SpeechError> for PlaybackError {
    fn from(e: SpeechError) -> Self {
        match e {
            SpeechError::Unavailable => PlaybackError::SpeechUnavailable,
            SpeechError::SpeakFailed(msg) => PlaybackError::EngineFailed(msg),
        }
    }
}

// === ConfigError ===

/// Errors related to loading the widget configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    IoError(String),
    /// The config file is not valid JSON for `WidgetConfig`.
    SerializationError(String),
    /// A config value is outside its legal range.
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
