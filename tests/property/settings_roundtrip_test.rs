//! Property-based tests for loading the persisted settings record.
//!
//! Whatever is stored under the key, loading yields settings whose every field
//! holds a legal value, and legal settings survive a save/load cycle.

use accessibility_widget::services::settings_engine::parse_stored;
use accessibility_widget::types::settings::{Level, Settings, SpeechRate, SPEECH_RATES};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Arbitrary JSON scalar, including values that are illegal for every field.
fn arb_json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-5.0f64..5.0).prop_map(|f| json!(f)),
        "[a-zA-Z ]{0,12}".prop_map(Value::String),
        Just(json!([1, 2])),
        Just(json!({"nested": true})),
    ]
}

/// Arbitrary record: each known field is absent or holds an arbitrary value.
fn arb_record() -> impl Strategy<Value = Value> {
    let fields = ["fontSizeLevel", "highContrast", "lineHeightLevel", "speechRate", "voiceName"];
    prop::collection::vec(prop::option::of(arb_json_scalar()), fields.len()).prop_map(move |values| {
        let mut map = Map::new();
        for (name, value) in fields.iter().zip(values) {
            if let Some(value) = value {
                map.insert(name.to_string(), value);
            }
        }
        Value::Object(map)
    })
}

fn arb_settings() -> impl Strategy<Value = Settings> {
    (
        0..3u64,
        any::<bool>(),
        0..3u64,
        0..SPEECH_RATES.len(),
        prop::option::of("[A-Za-z]{1,10}"),
    )
        .prop_map(|(font, contrast, line, rate, voice)| Settings {
            font_size: Level::from_index(font).unwrap(),
            high_contrast: contrast,
            line_height: Level::from_index(line).unwrap(),
            speech_rate: SpeechRate::all().nth(rate).unwrap(),
            voice_name: voice,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn corrupted_record_loads_legal_values(record in arb_record()) {
        let settings = parse_stored(&record.to_string());
        let stored = settings.to_stored();
        prop_assert!(stored.font_size_level <= 2);
        prop_assert!(stored.line_height_level <= 2);
        prop_assert!(SPEECH_RATES.contains(&stored.speech_rate));
        prop_assert!(stored.voice_name.as_deref() != Some(""));
    }

    #[test]
    fn garbage_text_loads_defaults(raw in "[^{]{0,40}") {
        prop_assert_eq!(parse_stored(&raw), Settings::default());
    }

    #[test]
    fn legal_settings_survive_save_and_load(settings in arb_settings()) {
        let raw = serde_json::to_string(&settings.to_stored()).unwrap();
        prop_assert_eq!(parse_stored(&raw), settings);
    }
}
