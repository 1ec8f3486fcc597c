use serde::{Deserialize, Serialize};

use super::errors::PlaybackError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    NoReadableContent,
    SpeechFailed,
}

/// A dismissible message shown inside the panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Builds the user-facing notice for a playback failure.
    ///
    /// Returns `None` for errors that are never surfaced (missing speech support
    /// only disables the control).
    pub fn from_playback_error(error: &PlaybackError) -> Option<Notice> {
        let kind = match error {
            PlaybackError::NoReadableContent => NoticeKind::NoReadableContent,
            PlaybackError::EngineFailed(_) => NoticeKind::SpeechFailed,
            PlaybackError::SpeechUnavailable => return None,
        };
        Some(Notice {
            kind,
            message: error.to_string(),
        })
    }
}
