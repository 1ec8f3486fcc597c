//! WebView host for the widget using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(WIDGET_JS)` mounts the widget on every page
//!   the host navigates to.
//! - The demo page is served via the `a11y://` custom protocol with the script
//!   inlined, because initialization scripts do not run on custom-protocol pages
//!   on Windows WebView2.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; answers go back with
//!   `evaluate_script`.
//! - A timer wake-up drives `Widget::tick` for chunk pauses and saves.

use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::Widget;
use crate::database::SqliteStore;
use crate::platform;
use crate::rpc_handler::{drain_script, handle_method, ScriptWidget};
use crate::services::config_loader;
use crate::types::config::WidgetConfig;
use crate::types::panel::Viewport;
use crate::ui::bridge::{ScriptPage, ScriptSpeechEngine};

const WIDGET_JS: &str = include_str!("../../resources/widget/widget.js");
const DEMO_HTML: &str = include_str!("../../resources/widget/demo.html");
const DEMO_URL: &str = "a11y://localhost/";
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

/// First `max_chars` characters of an IPC body, for logging.
fn preview(body: &str, max_chars: usize) -> &str {
    body.char_indices().nth(max_chars).map_or(body, |(i, _)| &body[..i])
}

fn demo_page() -> String {
    DEMO_HTML.replace("/*WIDGET_JS*/", WIDGET_JS)
}

/// Opens the settings database, falling back to an in-memory one.
fn open_store() -> Result<SqliteStore, Box<dyn Error>> {
    let path = platform::get_database_path();
    if let Some(dir) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            log::warn!("cannot create {}: {}", dir.display(), e);
        }
    }
    match SqliteStore::open(&path) {
        Ok(store) => Ok(store),
        Err(e) => {
            log::warn!("{}; settings will not survive a restart", e);
            Ok(SqliteStore::open_in_memory()?)
        }
    }
}

/// Builds the script answering one IPC call: queued bridge commands, then the
/// fresh snapshot.
fn answer_script(widget: &Mutex<ScriptWidget<SqliteStore>>, snapshot: &Value) -> String {
    let mut script = drain_script(widget).unwrap_or_default();
    script.push_str(&format!(
        "\nwindow.__accessibilityWidget && window.__accessibilityWidget.render({});",
        snapshot
    ));
    script
}

fn handle_ipc(
    widget: &Mutex<ScriptWidget<SqliteStore>>,
    started: Instant,
    message: &str,
) -> Option<UserEvent> {
    let request: Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("malformed IPC message: {}", e);
            return None;
        }
    };
    let method = request.get("method").and_then(|v| v.as_str()).unwrap_or_default();
    let params = request.get("params").cloned().unwrap_or_else(|| json!({}));
    let now_ms = started.elapsed().as_millis() as u64;

    match handle_method(widget, method, &params, now_ms) {
        Ok(snapshot) => {
            let mut script = String::new();
            if method == "widget.mount" {
                if let Ok(w) = widget.lock() {
                    script.push_str(&format!(
                        "window.__accessibilityWidget && window.__accessibilityWidget.injectStylesheet({});\n",
                        json!(w.stylesheet())
                    ));
                }
            }
            script.push_str(&answer_script(widget, &snapshot));
            Some(UserEvent::EvalScript(script))
        }
        Err(e) => {
            log::warn!("IPC {} failed: {}", method, e);
            None
        }
    }
}

/// Runs the host window. `url` defaults to the bundled demo page.
pub fn run(url: Option<String>) -> Result<(), Box<dyn Error>> {
    let config: WidgetConfig = config_loader::load_config_or_default(&config_loader::default_config_path());
    let store = open_store()?;
    let page = ScriptPage::new(Viewport::default());
    let widget = Widget::new(config, ScriptSpeechEngine::default(), store, page);
    let widget = Arc::new(Mutex::new(widget));
    let started = Instant::now();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Accessibility Widget")
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let ipc_widget = widget.clone();
    let start_url = url.unwrap_or_else(|| DEMO_URL.to_string());
    log::info!("opening {}", start_url);

    let builder = WebViewBuilder::new()
        .with_custom_protocol("a11y".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(Cow::Owned(demo_page().into_bytes()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&[][..])))
        })
        .with_initialization_script(WIDGET_JS)
        .with_url(&start_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            log::trace!("[IPC] {}", preview(body, 200));
            if let Some(event) = handle_ipc(&ipc_widget, started, body) {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    let mut last_snapshot = Value::Null;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + TICK_INTERVAL);

        match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                let now_ms = started.elapsed().as_millis() as u64;
                if let Ok(snapshot) = handle_method(&widget, "widget.tick", &json!({}), now_ms) {
                    let commands = drain_script(&widget).unwrap_or_default();
                    if !commands.is_empty() || snapshot != last_snapshot {
                        let script = format!(
                            "{}\nwindow.__accessibilityWidget && window.__accessibilityWidget.render({});",
                            commands, snapshot
                        );
                        let _ = webview.evaluate_script(&script);
                        last_snapshot = snapshot;
                    }
                }
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Ok(mut w) = widget.lock() {
                    w.unmount();
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
