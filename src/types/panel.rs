use serde::{Deserialize, Serialize};

/// Top-left corner of the panel, in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

/// Every interactive control of the panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    TogglePanel,
    FontSize,
    Contrast,
    LineHeight,
    SpeechRate,
    ReadAloud,
    StopReading,
    NextVoice,
    Reset,
    DismissNotice,
}

impl Control {
    pub const ALL: [Control; 10] = [
        Control::TogglePanel,
        Control::FontSize,
        Control::Contrast,
        Control::LineHeight,
        Control::SpeechRate,
        Control::ReadAloud,
        Control::StopReading,
        Control::NextVoice,
        Control::Reset,
        Control::DismissNotice,
    ];
}

/// How a control was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    /// A key press, carrying the DOM `KeyboardEvent.key` value.
    Key(String),
}

impl Activation {
    /// Enter and Space activate a control exactly like a click.
    pub fn is_activating(&self) -> bool {
        match self {
            Activation::Pointer => true,
            Activation::Key(key) => matches!(key.as_str(), "Enter" | " " | "Space" | "Spacebar"),
        }
    }
}
