//! Accessibility widget host.
//!
//! Entry point: opens a WebView window with the widget mounted on a demo page
//! (or the URL given as the first argument). When built without the `gui`
//! feature, runs a console demo against an in-memory store and a scripted page.

use accessibility_widget::logging;
use accessibility_widget::services::config_loader;

#[cfg(feature = "gui")]
fn main() {
    let config = config_loader::load_config_or_default(&config_loader::default_config_path());
    logging::init(&config.log_level);
    let url = std::env::args().nth(1);
    if let Err(e) = accessibility_widget::ui::webview_app::run(url) {
        log::error!("accessibility widget host failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use accessibility_widget::app::Widget;
    use accessibility_widget::services::persistence::{KeyValueStore, MemoryStore};
    use accessibility_widget::services::voice_catalog::VoiceCatalogTrait;
    use accessibility_widget::types::panel::{Activation, Control, Viewport};
    use accessibility_widget::types::speech::{SpeechEvent, SpeechEventKind, UtteranceTag, Voice};
    use accessibility_widget::ui::bridge::{render_script, ScriptPage, ScriptSpeechEngine};

    let config = config_loader::load_config_or_default(&config_loader::default_config_path());
    logging::init(&config.log_level);

    println!();
    println!("  Accessibility widget v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut engine = ScriptSpeechEngine::new(true);
    engine.set_voices(vec![
        Voice {
            name: "Ioana (Compact)".to_string(),
            lang: "ro-RO".to_string(),
            local_service: true,
            default: false,
        },
        Voice {
            name: "Andrei".to_string(),
            lang: "ro-RO".to_string(),
            local_service: true,
            default: false,
        },
    ]);
    let mut page = ScriptPage::new(Viewport::default());
    page.set_html(
        "<h1>Bună ziua</h1><p>Acesta este un exemplu. Textul se citește pe fragmente!</p>".to_string(),
    );

    let mut widget = Widget::new(config, engine, MemoryStore::new(), page);
    widget.mount();
    println!("  voice: {:?}", widget.voices().selected().map(|v| v.name.as_str()));

    let enter = Activation::Key("Enter".to_string());
    for control in [Control::TogglePanel, Control::FontSize, Control::Contrast, Control::LineHeight] {
        widget.activate(control, &enter);
    }
    widget.tick(0);
    println!("  classes: {}", widget.snapshot().classes.join(" "));
    println!("  stored:  {:?}", widget.store().get(&widget.config().storage_key));

    widget.activate(Control::ReadAloud, &Activation::Pointer);
    let mut now = 0;
    while widget.playback().is_speaking() {
        let script = render_script(widget.engine_mut().take_commands());
        if !script.is_empty() {
            println!("  > {}", script);
        }
        let tag = UtteranceTag {
            generation: widget.playback().generation(),
            index: widget.playback().current_index(),
        };
        now += 1_000;
        widget.handle_speech_event(&SpeechEvent { tag, kind: SpeechEventKind::Ended }, now);
        println!("  progress: {}%", widget.snapshot().progress_percent);
        now += widget.config().chunk_pause_ms;
        widget.tick(now);
    }
    println!("  status: {:?}, progress: {}%", widget.playback().status(), widget.playback().progress_percent());

    widget.unmount();
    println!();
}
