//! Tests for the SQLite-backed settings store (connection + migrations).

use accessibility_widget::app::{PageHost, Widget};
use accessibility_widget::database::{Database, SqliteStore};
use accessibility_widget::services::persistence::KeyValueStore;
use accessibility_widget::services::speech_engine::NoSpeech;
use accessibility_widget::services::style_applier::StyleTarget;
use accessibility_widget::types::config::WidgetConfig;
use accessibility_widget::types::panel::Viewport;
use accessibility_widget::types::settings::Level;
use tempfile::TempDir;

#[derive(Default)]
struct BlankPage;

impl StyleTarget for BlankPage {
    fn add_root_class(&mut self, _class: &str) {}
    fn remove_root_class(&mut self, _class: &str) {}
}

impl PageHost for BlankPage {
    fn page_html(&self) -> String {
        String::new()
    }
    fn viewport(&self) -> Viewport {
        Viewport::default()
    }
}

#[test]
fn test_migrations_create_kv_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let count: i64 = db
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_get_set_remove() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_values_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.db");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set("accessibility-widget-settings", r#"{"fontSizeLevel":1}"#).unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        store.get("accessibility-widget-settings").unwrap().as_deref(),
        Some(r#"{"fontSizeLevel":1}"#)
    );
}

#[test]
fn test_widget_settings_survive_restart() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        let mut widget = Widget::new(WidgetConfig::default(), NoSpeech, store, BlankPage);
        widget.mount();
        widget.cycle_line_height();
        widget.cycle_line_height();
        widget.toggle_contrast();
        widget.unmount();
    }

    let store = SqliteStore::open(&path).unwrap();
    let mut widget = Widget::new(WidgetConfig::default(), NoSpeech, store, BlankPage);
    widget.mount();
    assert_eq!(widget.settings().line_height, Level::ExtraLarge);
    assert!(widget.settings().high_contrast);
    assert_eq!(widget.settings().font_size, Level::Normal);
}
