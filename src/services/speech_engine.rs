//! Narrow interface over the platform speech engine.
//!
//! The engine is a single global resource: at most one utterance speaks at a
//! time. Start/end/error callbacks are delivered back to the widget as
//! [`SpeechEvent`](crate::types::speech::SpeechEvent) values carrying the
//! utterance tag.

use crate::types::errors::SpeechError;
use crate::types::speech::{Utterance, Voice};

pub trait SpeechEngine {
    /// Whether the platform can synthesize speech at all.
    fn is_available(&self) -> bool;
    fn speak(&mut self, utterance: Utterance) -> Result<(), SpeechError>;
    /// Requests cancellation of the current utterance. A trailing callback may or
    /// may not follow.
    fn cancel(&mut self);
    fn list_voices(&self) -> Vec<Voice>;
}

/// Engine for platforms without speech synthesis.
#[derive(Debug, Default)]
pub struct NoSpeech;

impl SpeechEngine for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _utterance: Utterance) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn cancel(&mut self) {}

    fn list_voices(&self) -> Vec<Voice> {
        Vec::new()
    }
}
