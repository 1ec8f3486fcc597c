//! Widget core for the accessibility panel.
//!
//! Central struct owning the settings, the read-aloud session, the voice catalog
//! and the panel. Every embedding (webview host, JSON dispatch, in-process
//! component) drives the widget through this one type.

use serde::Serialize;

use crate::managers::panel_manager::{PanelGeometry, PanelManager, PanelManagerTrait};
use crate::services::content_extractor::{ContentExtractor, ContentExtractorTrait};
use crate::services::persistence::KeyValueStore;
use crate::services::playback::{PlaybackSession, UtteranceParams};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::speech_engine::SpeechEngine;
use crate::services::style_applier::{StyleApplier, StyleApplierTrait, StyleTarget};
use crate::services::text_chunker;
use crate::services::voice_catalog::{VoiceCatalog, VoiceCatalogTrait};
use crate::types::config::WidgetConfig;
use crate::types::errors::PlaybackError;
use crate::types::notice::Notice;
use crate::types::panel::{Activation, Control, Layout, Position, Viewport};
use crate::types::settings::{Level, Settings, StoredSettings};
use crate::types::speech::{PlaybackStatus, SpeechEvent, Voice};

/// The page the widget is mounted into.
pub trait PageHost: StyleTarget {
    /// Current markup of the page body.
    fn page_html(&self) -> String;
    fn viewport(&self) -> Viewport;
}

/// Optional hooks invoked after each committed settings change.
#[derive(Default)]
pub struct WidgetCallbacks {
    pub on_font_size_change: Option<Box<dyn FnMut(Level)>>,
    pub on_contrast_change: Option<Box<dyn FnMut(bool)>>,
    pub on_line_height_change: Option<Box<dyn FnMut(Level)>>,
}

/// Serializable view of the panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    pub open: bool,
    pub layout: Layout,
    pub position: Position,
    pub style: String,
}

/// Everything a host needs to render the panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub settings: StoredSettings,
    pub classes: Vec<String>,
    pub speech_available: bool,
    pub status: PlaybackStatus,
    pub progress_percent: u8,
    pub chunk_count: usize,
    pub voice: Option<String>,
    pub voice_count: usize,
    pub panel: PanelSnapshot,
    pub notice: Option<Notice>,
}

pub struct Widget<E: SpeechEngine, S: KeyValueStore, P: PageHost> {
    config: WidgetConfig,
    engine: E,
    page: P,
    settings: SettingsEngine<S>,
    applier: StyleApplier,
    extractor: ContentExtractor,
    playback: PlaybackSession,
    voices: VoiceCatalog,
    panel: PanelManager,
    callbacks: WidgetCallbacks,
    notice: Option<Notice>,
    speech_available: bool,
}

impl<E: SpeechEngine, S: KeyValueStore, P: PageHost> Widget<E, S, P> {
    /// Creates an unmounted widget. Nothing touches the page or the store until
    /// [`Widget::mount`].
    pub fn new(config: WidgetConfig, engine: E, store: S, page: P) -> Self {
        let settings = SettingsEngine::new(store, &config.storage_key);
        let panel = PanelManager::new(PanelGeometry::from_config(&config), page.viewport());
        Self {
            settings,
            applier: StyleApplier::new(&config.panel_id),
            extractor: ContentExtractor::new(&config.panel_id),
            playback: PlaybackSession::new(config.chunk_pause_ms, config.progress_hold_ms),
            voices: VoiceCatalog::new(&config.locale, &config.voice_name_hints),
            panel,
            callbacks: WidgetCallbacks::default(),
            notice: None,
            speech_available: false,
            config,
            engine,
            page,
        }
    }

    pub fn with_callbacks(mut self, callbacks: WidgetCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Restores persisted settings, applies them to the page and detects speech
    /// support.
    pub fn mount(&mut self) {
        let settings = self.settings.load();
        self.applier.apply(&settings, &mut self.page);
        self.speech_available = self.engine.is_available();
        if self.speech_available {
            let voices = self.engine.list_voices();
            self.refresh_voices(voices);
        } else {
            log::info!("speech synthesis unavailable, read-aloud disabled");
        }
        self.panel.set_viewport(self.page.viewport());
        log::info!("accessibility widget mounted (panel '{}')", self.config.panel_id);
    }

    // ─── Settings ───

    pub fn cycle_font_size(&mut self) -> Settings {
        let before = self.settings.get_settings().clone();
        let after = self.settings.cycle_font_size();
        self.settings_changed(&before, &after);
        after
    }

    pub fn toggle_contrast(&mut self) -> Settings {
        let before = self.settings.get_settings().clone();
        let after = self.settings.toggle_contrast();
        self.settings_changed(&before, &after);
        after
    }

    pub fn cycle_line_height(&mut self) -> Settings {
        let before = self.settings.get_settings().clone();
        let after = self.settings.cycle_line_height();
        self.settings_changed(&before, &after);
        after
    }

    /// Affects the next read-aloud session only.
    pub fn cycle_speech_rate(&mut self) -> Settings {
        let before = self.settings.get_settings().clone();
        let after = self.settings.cycle_speech_rate();
        self.settings_changed(&before, &after);
        after
    }

    pub fn reset_to_defaults(&mut self) -> Settings {
        let before = self.settings.get_settings().clone();
        let after = self.settings.reset_to_defaults();
        self.voices.select_best();
        self.settings_changed(&before, &after);
        after
    }

    pub fn settings(&self) -> &Settings {
        self.settings.get_settings()
    }

    fn settings_changed(&mut self, before: &Settings, after: &Settings) {
        self.applier.apply(after, &mut self.page);
        if before.font_size != after.font_size {
            if let Some(cb) = self.callbacks.on_font_size_change.as_mut() {
                cb(after.font_size);
            }
        }
        if before.high_contrast != after.high_contrast {
            if let Some(cb) = self.callbacks.on_contrast_change.as_mut() {
                cb(after.high_contrast);
            }
        }
        if before.line_height != after.line_height {
            if let Some(cb) = self.callbacks.on_line_height_change.as_mut() {
                cb(after.line_height);
            }
        }
    }

    // ─── Read-aloud ───

    /// Reads the page aloud from the beginning, replacing any running session.
    ///
    /// Failures are surfaced as a notice and returned.
    pub fn start_reading(&mut self) -> Result<(), PlaybackError> {
        if !self.speech_available {
            return Err(PlaybackError::SpeechUnavailable);
        }
        let blocks = self.extractor.readable_blocks(&self.page.page_html());
        let chunks = text_chunker::chunk_blocks(&blocks, self.config.max_chunk_chars);
        let params = UtteranceParams {
            lang: self.config.locale.clone(),
            rate: self.settings.get_settings().speech_rate.value(),
            pitch: self.config.pitch,
            voice: self.voices.selected().map(|v| v.name.clone()),
        };
        let result = self.playback.start(chunks, params, &mut self.engine);
        match &result {
            Ok(()) => self.notice = None,
            Err(e) => self.surface(e),
        }
        result
    }

    pub fn stop_reading(&mut self) {
        self.playback.stop(&mut self.engine);
    }

    /// Feeds an engine callback into the running session.
    pub fn handle_speech_event(&mut self, event: &SpeechEvent, now_ms: u64) {
        if let Err(e) = self.playback.handle_event(event, now_ms) {
            self.surface(&e);
        }
    }

    pub fn playback(&self) -> &PlaybackSession {
        &self.playback
    }

    pub fn is_speech_available(&self) -> bool {
        self.speech_available
    }

    /// Re-detects speech support, e.g. after the host reported a change.
    pub fn set_speech_available(&mut self, available: bool) {
        if !available {
            self.stop_reading();
        }
        self.speech_available = available;
    }

    // ─── Voices ───

    /// Replaces the voice list. The persisted voice is preferred when offered.
    pub fn refresh_voices(&mut self, voices: Vec<Voice>) {
        self.voices.refresh(voices);
        if let Some(name) = self.settings.get_settings().voice_name.clone() {
            if self.voices.selected().is_some_and(|v| v.name == name) {
                return;
            }
            if self.voices.select_by_name(&name).is_none() {
                log::debug!("saved voice '{}' not offered, keeping best match", name);
            }
        }
    }

    /// Selects the next voice. Affects the next read-aloud session only.
    pub fn next_voice(&mut self) -> Option<String> {
        let name = self.voices.cycle_next().map(|v| v.name.clone())?;
        self.settings.set_voice_name(Some(name.clone()));
        Some(name)
    }

    pub fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }

    // ─── Panel ───

    /// Performs the action of `control`.
    ///
    /// Pointer activation and Enter/Space key activation are the same
    /// transition. Returns whether the control acted.
    pub fn activate(&mut self, control: Control, activation: &Activation) -> bool {
        if !activation.is_activating() {
            return false;
        }
        match control {
            Control::TogglePanel => {
                self.panel.toggle();
            }
            Control::FontSize => {
                self.cycle_font_size();
            }
            Control::Contrast => {
                self.toggle_contrast();
            }
            Control::LineHeight => {
                self.cycle_line_height();
            }
            Control::SpeechRate => {
                self.cycle_speech_rate();
            }
            Control::ReadAloud => {
                if !self.speech_available {
                    return false;
                }
                let _ = self.start_reading();
            }
            Control::StopReading => self.stop_reading(),
            Control::NextVoice => {
                self.next_voice();
            }
            Control::Reset => {
                self.reset_to_defaults();
            }
            Control::DismissNotice => self.dismiss_notice(),
        }
        true
    }

    /// Handles a key press outside of any control. Escape closes the panel.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == "Escape" && self.panel.is_open() {
            self.panel.close();
            return true;
        }
        false
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.panel.set_viewport(viewport);
    }

    pub fn panel(&self) -> &PanelManager {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut PanelManager {
        &mut self.panel
    }

    // ─── Notices ───

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn surface(&mut self, error: &PlaybackError) {
        if let Some(notice) = Notice::from_playback_error(error) {
            log::info!("notice: {}", notice.message);
            self.notice = Some(notice);
        }
    }

    // ─── Event loop ───

    /// Advances timers and flushes pending persistence writes.
    pub fn tick(&mut self, now_ms: u64) {
        if let Err(e) = self.playback.tick(now_ms, &mut self.engine) {
            self.surface(&e);
        }
        self.settings.flush();
    }

    /// Stops reading and flushes settings. Call before the host goes away.
    pub fn unmount(&mut self) {
        self.stop_reading();
        self.settings.flush();
        log::info!("accessibility widget unmounted");
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            settings: self.settings.get_settings().to_stored(),
            classes: self.applier.applied().iter().map(|c| c.to_string()).collect(),
            speech_available: self.speech_available,
            status: self.playback.status(),
            progress_percent: self.playback.progress_percent(),
            chunk_count: self.playback.chunks().len(),
            voice: self.voices.selected().map(|v| v.name.clone()),
            voice_count: self.voices.voices().len(),
            panel: PanelSnapshot {
                open: self.panel.is_open(),
                layout: self.panel.layout(),
                position: self.panel.position(),
                style: self.panel.inline_style(),
            },
            notice: self.notice.clone(),
        }
    }

    /// CSS defining the global accessibility classes.
    pub fn stylesheet(&self) -> String {
        self.applier.stylesheet()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn store(&self) -> &S {
        self.settings.persistence().store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.settings.persistence_mut().store_mut()
    }
}
