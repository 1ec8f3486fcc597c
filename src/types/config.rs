use serde::{Deserialize, Serialize};

/// Deployment configuration for the widget.
///
/// Every field falls back to its default when absent from the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// The single key the settings record is stored under.
    pub storage_key: String,
    /// Target speech locale (BCP 47).
    pub locale: String,
    /// Voice-name substrings that also identify a target-locale voice.
    pub voice_name_hints: Vec<String>,
    pub max_chunk_chars: usize,
    pub chunk_pause_ms: u64,
    pub progress_hold_ms: u64,
    pub pitch: f32,
    /// DOM id of the widget panel.
    pub panel_id: String,
    pub mobile_breakpoint_px: f64,
    pub viewport_margin_px: f64,
    pub panel_width_px: f64,
    pub panel_height_px: f64,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "accessibility-widget-settings".to_string(),
            locale: "ro-RO".to_string(),
            voice_name_hints: vec![
                "romanian".to_string(),
                "română".to_string(),
                "romana".to_string(),
            ],
            max_chunk_chars: 200,
            chunk_pause_ms: 250,
            progress_hold_ms: 1500,
            pitch: 1.0,
            panel_id: "accessibility-widget".to_string(),
            mobile_breakpoint_px: 768.0,
            viewport_margin_px: 10.0,
            panel_width_px: 280.0,
            panel_height_px: 360.0,
            log_level: "info".to_string(),
        }
    }
}
