//! Method handler for messages posted by `widget.js`.
//!
//! Each message is `{"method": "...", "params": {...}}`. `handle_method`
//! dispatches it to the [`Widget`] and answers with the widget snapshot. Speech
//! and class changes produced by the call are left queued on the bridge; the
//! host collects them with [`drain_script`].

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::Widget;
use crate::managers::panel_manager::PanelManagerTrait;
use crate::services::persistence::KeyValueStore;
use crate::types::panel::{Activation, Control, Position, Viewport};
use crate::types::speech::{SpeechEvent, SpeechEventKind, UtteranceTag, Voice};
use crate::ui::bridge::{render_script, ScriptPage, ScriptSpeechEngine};

/// Widget driven by the page script.
pub type ScriptWidget<S> = Widget<ScriptSpeechEngine, S, ScriptPage>;

fn f64_param(params: &Value, name: &str) -> Result<f64, String> {
    params
        .get(name)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| format!("missing {}", name))
}

fn position_param(params: &Value) -> Result<Position, String> {
    Ok(Position {
        x: f64_param(params, "x")?,
        y: f64_param(params, "y")?,
    })
}

fn viewport_param(params: &Value) -> Result<Viewport, String> {
    Ok(Viewport {
        width: f64_param(params, "width")?,
        height: f64_param(params, "height")?,
    })
}

fn voices_param(params: &Value) -> Result<Vec<Voice>, String> {
    match params.get("voices") {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| format!("invalid voices: {}", e)),
        None => Ok(Vec::new()),
    }
}

fn control_param(params: &Value) -> Result<Control, String> {
    let v = params.get("control").ok_or("missing control")?;
    serde_json::from_value(v.clone()).map_err(|e| format!("invalid control: {}", e))
}

fn speech_event_param(params: &Value) -> Result<SpeechEvent, String> {
    let generation = params.get("generation").and_then(|v| v.as_u64()).ok_or("missing generation")?;
    let index = params.get("index").and_then(|v| v.as_u64()).ok_or("missing index")? as usize;
    let kind = match params.get("type").and_then(|v| v.as_str()).ok_or("missing type")? {
        "start" => SpeechEventKind::Started,
        "end" => SpeechEventKind::Ended,
        "error" => SpeechEventKind::Failed(
            params
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown")
                .to_string(),
        ),
        other => return Err(format!("unknown speech event type: {}", other)),
    };
    Ok(SpeechEvent {
        tag: UtteranceTag { generation, index },
        kind,
    })
}

/// Dispatch a method call from the page script.
///
/// Returns `Ok(snapshot)` on success or `Err(String)` with an error message.
/// Read-aloud failures are not errors here; they show up as the snapshot's notice.
pub fn handle_method<S: KeyValueStore>(
    widget: &Mutex<ScriptWidget<S>>,
    method: &str,
    params: &Value,
    now_ms: u64,
) -> Result<Value, String> {
    let mut w = widget.lock().map_err(|e| e.to_string())?;
    match method {
        // ─── Lifecycle ───
        "widget.mount" => {
            let available = params.get("speechAvailable").and_then(|v| v.as_bool()).unwrap_or(false);
            let voices = voices_param(params)?;
            w.engine_mut().set_available(available);
            w.engine_mut().set_voices(voices);
            if let Ok(viewport) = viewport_param(params) {
                w.page_mut().set_viewport(viewport);
            }
            w.mount();
        }
        "widget.state" => {}
        "widget.tick" => w.tick(now_ms),
        "widget.stylesheet" => return Ok(json!({"css": w.stylesheet()})),
        "ping" => return Ok(json!({"pong": true})),

        // ─── Settings ───
        "settings.cycle_font_size" => {
            w.cycle_font_size();
        }
        "settings.toggle_contrast" => {
            w.toggle_contrast();
        }
        "settings.cycle_line_height" => {
            w.cycle_line_height();
        }
        "settings.cycle_speech_rate" => {
            w.cycle_speech_rate();
        }
        "settings.reset" => {
            w.reset_to_defaults();
        }

        // ─── Controls ───
        "control.activate" => {
            let control = control_param(params)?;
            let activation = match params.get("key").and_then(|v| v.as_str()) {
                Some(key) => Activation::Key(key.to_string()),
                None => Activation::Pointer,
            };
            w.activate(control, &activation);
        }
        "control.key" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            w.key_down(key);
        }

        // ─── Panel ───
        "panel.toggle" => {
            w.panel_mut().toggle();
        }
        "panel.drag_start" => {
            let pointer = position_param(params)?;
            w.panel_mut().begin_drag(pointer);
        }
        "panel.drag_move" => {
            let pointer = position_param(params)?;
            w.panel_mut().drag_to(pointer);
        }
        "panel.drag_end" => w.panel_mut().end_drag(),
        "panel.viewport" => {
            let viewport = viewport_param(params)?;
            w.page_mut().set_viewport(viewport);
            w.set_viewport(viewport);
        }

        // ─── Page and speech ───
        "page.content" => {
            let html = params.get("html").and_then(|v| v.as_str()).ok_or("missing html")?;
            w.page_mut().set_html(html.to_string());
        }
        "speech.start" => {
            if let Some(html) = params.get("html").and_then(|v| v.as_str()) {
                w.page_mut().set_html(html.to_string());
            }
            if let Err(e) = w.start_reading() {
                log::debug!("read-aloud not started: {}", e);
            }
        }
        "speech.stop" => w.stop_reading(),
        "speech.event" => {
            let event = speech_event_param(params)?;
            w.handle_speech_event(&event, now_ms);
        }
        "speech.availability" => {
            let available = params.get("available").and_then(|v| v.as_bool()).ok_or("missing available")?;
            w.engine_mut().set_available(available);
            w.set_speech_available(available);
        }
        "voices.changed" => {
            let voices = voices_param(params)?;
            w.engine_mut().set_voices(voices.clone());
            w.refresh_voices(voices);
        }
        "voices.next" => {
            w.next_voice();
        }
        "notice.dismiss" => w.dismiss_notice(),

        _ => return Err(format!("unknown method: {}", method)),
    }
    serde_json::to_value(w.snapshot()).map_err(|e| e.to_string())
}

/// Takes every queued bridge command and renders them as one script.
///
/// Class changes come first so the page restyles before speech starts.
pub fn drain_script<S: KeyValueStore>(widget: &Mutex<ScriptWidget<S>>) -> Result<String, String> {
    let mut w = widget.lock().map_err(|e| e.to_string())?;
    let mut commands = w.page_mut().take_commands();
    commands.extend(w.engine_mut().take_commands());
    Ok(render_script(commands))
}
