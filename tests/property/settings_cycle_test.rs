//! Property-based tests for the settings transitions.
//!
//! Each transition is a cyclic group: font size and line height have order 3,
//! speech rate order 4 and contrast order 2, whatever the starting settings.

use accessibility_widget::services::persistence::MemoryStore;
use accessibility_widget::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use accessibility_widget::types::settings::SPEECH_RATES;
use proptest::prelude::*;

const KEY: &str = "accessibility-widget-settings";

/// Strategy for a legal stored record.
fn arb_record() -> impl Strategy<Value = String> {
    (0..3u8, any::<bool>(), 0..3u8, 0..SPEECH_RATES.len()).prop_map(|(font, contrast, line, rate)| {
        format!(
            r#"{{"fontSizeLevel":{},"highContrast":{},"lineHeightLevel":{},"speechRate":{}}}"#,
            font, contrast, line, SPEECH_RATES[rate]
        )
    })
}

fn engine(record: &str) -> SettingsEngine<MemoryStore> {
    let mut engine = SettingsEngine::new(MemoryStore::with_entry(KEY, record), KEY);
    engine.load();
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn font_size_has_order_three(record in arb_record(), n in 0..8usize) {
        let mut engine = engine(&record);
        let before = engine.get_settings().clone();
        for _ in 0..3 * n {
            engine.cycle_font_size();
        }
        prop_assert_eq!(engine.get_settings(), &before);
        if n > 0 {
            engine.cycle_font_size();
            prop_assert_ne!(engine.get_settings().font_size, before.font_size);
        }
    }

    #[test]
    fn line_height_has_order_three(record in arb_record(), n in 0..8usize) {
        let mut engine = engine(&record);
        let before = engine.get_settings().clone();
        for _ in 0..3 * n {
            engine.cycle_line_height();
        }
        prop_assert_eq!(engine.get_settings(), &before);
    }

    #[test]
    fn speech_rate_has_order_four(record in arb_record(), n in 0..8usize) {
        let mut engine = engine(&record);
        let before = engine.get_settings().clone();
        for _ in 0..4 * n {
            engine.cycle_speech_rate();
        }
        prop_assert_eq!(engine.get_settings(), &before);
        for k in 1..4 {
            engine.cycle_speech_rate();
            prop_assert_ne!(engine.get_settings().speech_rate, before.speech_rate, "after {} steps", k);
        }
    }

    #[test]
    fn contrast_has_order_two(record in arb_record(), n in 0..8usize) {
        let mut engine = engine(&record);
        let before = engine.get_settings().clone();
        for _ in 0..2 * n {
            engine.toggle_contrast();
        }
        prop_assert_eq!(engine.get_settings(), &before);
    }
}
