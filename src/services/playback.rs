//! Speech Playback Session: `Idle -> Speaking -> Idle`.
//!
//! Chunks are spoken strictly one after another: chunk `i + 1` is dispatched
//! only after chunk `i` reported its end and the inter-chunk pause elapsed.
//! Every session gets a fresh generation number and every utterance is tagged
//! with it, so callbacks from a cancelled session are discarded. Cancellation
//! flips the state to Idle immediately and never waits for a confirming callback.

use crate::services::speech_engine::SpeechEngine;
use crate::types::errors::PlaybackError;
use crate::types::speech::{PlaybackStatus, SpeechEvent, SpeechEventKind, Utterance, UtteranceTag};

/// Voice parameters captured when a session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceParams {
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub voice: Option<String>,
}

pub struct PlaybackSession {
    status: PlaybackStatus,
    chunks: Vec<String>,
    current_index: usize,
    generation: u64,
    params: Option<UtteranceParams>,
    /// When the current chunk is due, if it has not been dispatched yet.
    next_dispatch_at: Option<u64>,
    /// Until when 100 % is shown after a completed session.
    hold_until: Option<u64>,
    chunk_pause_ms: u64,
    progress_hold_ms: u64,
}

impl PlaybackSession {
    pub fn new(chunk_pause_ms: u64, progress_hold_ms: u64) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            chunks: Vec::new(),
            current_index: 0,
            generation: 0,
            params: None,
            next_dispatch_at: None,
            hold_until: None,
            chunk_pause_ms,
            progress_hold_ms,
        }
    }

    /// Starts a fresh session over `chunks`.
    ///
    /// A session already speaking is stopped first, even when the new one is
    /// then rejected for having nothing to read. Rejected without any state
    /// change when the engine is unavailable.
    pub fn start<E: SpeechEngine + ?Sized>(
        &mut self,
        chunks: Vec<String>,
        params: UtteranceParams,
        engine: &mut E,
    ) -> Result<(), PlaybackError> {
        if !engine.is_available() {
            return Err(PlaybackError::SpeechUnavailable);
        }
        if self.status == PlaybackStatus::Speaking {
            log::debug!("restarting read-aloud, stopping session {}", self.generation);
            self.stop(engine);
        }
        if chunks.is_empty() {
            return Err(PlaybackError::NoReadableContent);
        }

        self.generation += 1;
        self.status = PlaybackStatus::Speaking;
        self.chunks = chunks;
        self.current_index = 0;
        self.params = Some(params);
        self.next_dispatch_at = None;
        self.hold_until = None;
        log::info!(
            "read-aloud session {} started with {} chunks",
            self.generation,
            self.chunks.len()
        );
        self.dispatch_current(engine)
    }

    /// Cancels the engine and returns to Idle. No-op while Idle.
    pub fn stop<E: SpeechEngine + ?Sized>(&mut self, engine: &mut E) {
        if self.status == PlaybackStatus::Idle {
            return;
        }
        engine.cancel();
        log::info!(
            "read-aloud session {} stopped at chunk {}/{}",
            self.generation,
            self.current_index + 1,
            self.chunks.len()
        );
        self.reset_idle();
    }

    /// Feeds one engine callback into the state machine.
    ///
    /// Callbacks from another generation, for another chunk, or arriving while
    /// Idle are ignored. A failure aborts the session and is returned so the
    /// caller can surface it.
    pub fn handle_event(&mut self, event: &SpeechEvent, now_ms: u64) -> Result<(), PlaybackError> {
        let current = UtteranceTag {
            generation: self.generation,
            index: self.current_index,
        };
        if self.status != PlaybackStatus::Speaking
            || self.next_dispatch_at.is_some()
            || event.tag != current
        {
            log::debug!("discarding stale speech callback {:?}", event);
            return Ok(());
        }

        match &event.kind {
            SpeechEventKind::Started => Ok(()),
            SpeechEventKind::Ended => {
                if self.current_index + 1 < self.chunks.len() {
                    self.current_index += 1;
                    self.next_dispatch_at = Some(now_ms.saturating_add(self.chunk_pause_ms));
                } else {
                    log::info!("read-aloud session {} finished", self.generation);
                    self.reset_idle();
                    self.hold_until = Some(now_ms.saturating_add(self.progress_hold_ms));
                }
                Ok(())
            }
            SpeechEventKind::Failed(msg) => {
                log::warn!(
                    "read-aloud session {} failed at chunk {}: {}",
                    self.generation,
                    self.current_index + 1,
                    msg
                );
                self.reset_idle();
                Err(PlaybackError::EngineFailed(msg.clone()))
            }
        }
    }

    /// Advances timers: dispatches a due chunk and expires the 100 % hold.
    pub fn tick<E: SpeechEngine + ?Sized>(&mut self, now_ms: u64, engine: &mut E) -> Result<(), PlaybackError> {
        match self.status {
            PlaybackStatus::Speaking => {
                if self.next_dispatch_at.is_some_and(|due| now_ms >= due) {
                    self.next_dispatch_at = None;
                    return self.dispatch_current(engine);
                }
            }
            PlaybackStatus::Idle => {
                if self.hold_until.is_some_and(|until| now_ms >= until) {
                    self.hold_until = None;
                }
            }
        }
        Ok(())
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_speaking(&self) -> bool {
        self.status == PlaybackStatus::Speaking
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Index of the chunk being spoken. Meaningful only while Speaking.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// `round(current_index / chunks * 100)` while Speaking, 100 while a finished
    /// session is being held, 0 otherwise.
    pub fn progress_percent(&self) -> u8 {
        match self.status {
            PlaybackStatus::Speaking if !self.chunks.is_empty() => {
                let ratio = self.current_index as f64 / self.chunks.len() as f64;
                (ratio * 100.0).round() as u8
            }
            PlaybackStatus::Idle if self.hold_until.is_some() => 100,
            _ => 0,
        }
    }

    fn dispatch_current<E: SpeechEngine + ?Sized>(&mut self, engine: &mut E) -> Result<(), PlaybackError> {
        let (Some(text), Some(params)) =
            (self.chunks.get(self.current_index).cloned(), self.params.clone())
        else {
            self.reset_idle();
            return Ok(());
        };
        let utterance = Utterance {
            text,
            lang: params.lang,
            rate: params.rate,
            pitch: params.pitch,
            voice: params.voice,
            tag: UtteranceTag {
                generation: self.generation,
                index: self.current_index,
            },
        };
        log::debug!(
            "speaking chunk {}/{} of session {}",
            self.current_index + 1,
            self.chunks.len(),
            self.generation
        );
        if let Err(e) = engine.speak(utterance) {
            log::warn!("speech engine rejected chunk {}: {}", self.current_index + 1, e);
            self.reset_idle();
            return Err(e.into());
        }
        Ok(())
    }

    fn reset_idle(&mut self) {
        self.status = PlaybackStatus::Idle;
        self.chunks.clear();
        self.current_index = 0;
        self.next_dispatch_at = None;
        self.hold_until = None;
    }
}
