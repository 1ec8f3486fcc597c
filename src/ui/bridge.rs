//! Script bridge between the widget core and `widget.js`.
//!
//! The core never calls into the page directly. Speech requests and root class
//! changes are queued as [`BridgeCommand`]s and rendered to calls on
//! `window.__accessibilityWidget`, which the host evaluates in the page.

use serde_json::json;

use crate::app::PageHost;
use crate::services::speech_engine::SpeechEngine;
use crate::services::style_applier::StyleTarget;
use crate::types::errors::SpeechError;
use crate::types::panel::Viewport;
use crate::types::speech::{Utterance, Voice};

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCommand {
    Speak(Utterance),
    Cancel,
    AddRootClass(String),
    RemoveRootClass(String),
}

impl BridgeCommand {
    /// Renders the command as a JS statement.
    pub fn to_script(&self) -> String {
        let call = match self {
            BridgeCommand::Speak(utterance) => {
                let payload = serde_json::to_string(utterance).unwrap_or_else(|_| "null".to_string());
                format!("speak({})", payload)
            }
            BridgeCommand::Cancel => "cancel()".to_string(),
            BridgeCommand::AddRootClass(class) => format!("addRootClass({})", json!(class)),
            BridgeCommand::RemoveRootClass(class) => format!("removeRootClass({})", json!(class)),
        };
        format!("window.__accessibilityWidget && window.__accessibilityWidget.{};", call)
    }
}

/// Drains `commands` into one script.
pub fn render_script(commands: Vec<BridgeCommand>) -> String {
    commands
        .iter()
        .map(BridgeCommand::to_script)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Speech engine backed by the page's Web Speech API.
///
/// Availability and the voice list are reported by the script.
#[derive(Debug, Default)]
pub struct ScriptSpeechEngine {
    available: bool,
    voices: Vec<Voice>,
    outbox: Vec<BridgeCommand>,
}

impl ScriptSpeechEngine {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            ..Self::default()
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn set_voices(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
    }

    pub fn take_commands(&mut self) -> Vec<BridgeCommand> {
        std::mem::take(&mut self.outbox)
    }

    pub fn pending(&self) -> &[BridgeCommand] {
        &self.outbox
    }
}

impl SpeechEngine for ScriptSpeechEngine {
    fn is_available(&self) -> bool {
        self.available
    }

    fn speak(&mut self, utterance: Utterance) -> Result<(), SpeechError> {
        if !self.available {
            return Err(SpeechError::Unavailable);
        }
        self.outbox.push(BridgeCommand::Speak(utterance));
        Ok(())
    }

    fn cancel(&mut self) {
        self.outbox.push(BridgeCommand::Cancel);
    }

    fn list_voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }
}

/// Page mirrored from the script: the last reported markup and viewport.
#[derive(Debug, Default)]
pub struct ScriptPage {
    html: String,
    viewport: Viewport,
    outbox: Vec<BridgeCommand>,
}

impl ScriptPage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_html(&mut self, html: String) {
        self.html = html;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn take_commands(&mut self) -> Vec<BridgeCommand> {
        std::mem::take(&mut self.outbox)
    }
}

impl StyleTarget for ScriptPage {
    fn add_root_class(&mut self, class: &str) {
        self.outbox.push(BridgeCommand::AddRootClass(class.to_string()));
    }

    fn remove_root_class(&mut self, class: &str) {
        self.outbox.push(BridgeCommand::RemoveRootClass(class.to_string()));
    }
}

impl PageHost for ScriptPage {
    fn page_html(&self) -> String {
        self.html.clone()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
