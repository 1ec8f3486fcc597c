//! Property-based tests for the root class applier.
//!
//! Applying the same settings twice leaves the same classes, the class set
//! depends only on the settings (never on what was applied before), and the
//! applier only ever touches its own classes.

use std::collections::BTreeSet;

use accessibility_widget::services::style_applier::{
    StyleApplier, StyleApplierTrait, StyleTarget, RECOGNIZED_CLASSES,
};
use accessibility_widget::types::settings::{Level, Settings, SpeechRate};
use proptest::prelude::*;

#[derive(Default)]
struct RootClasses(BTreeSet<String>);

impl StyleTarget for RootClasses {
    fn add_root_class(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }
    fn remove_root_class(&mut self, class: &str) {
        self.0.remove(class);
    }
}

fn arb_settings() -> impl Strategy<Value = Settings> {
    (0..3u64, any::<bool>(), 0..3u64).prop_map(|(font, contrast, line)| Settings {
        font_size: Level::from_index(font).unwrap(),
        high_contrast: contrast,
        line_height: Level::from_index(line).unwrap(),
        speech_rate: SpeechRate::default(),
        voice_name: None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn apply_is_idempotent(settings in arb_settings()) {
        let mut applier = StyleApplier::new("accessibility-widget");
        let mut root = RootClasses::default();

        applier.apply(&settings, &mut root);
        let first = root.0.clone();
        applier.apply(&settings, &mut root);
        prop_assert_eq!(&root.0, &first);
    }

    #[test]
    fn classes_depend_only_on_current_settings(history in prop::collection::vec(arb_settings(), 0..6), last in arb_settings()) {
        let mut applier = StyleApplier::new("accessibility-widget");
        let mut root = RootClasses::default();
        root.0.insert("page-owned".to_string());

        for settings in &history {
            applier.apply(settings, &mut root);
        }
        applier.apply(&last, &mut root);

        let mut expected: BTreeSet<String> = StyleApplier::classes_for(&last)
            .iter()
            .map(|c| c.to_string())
            .collect();
        expected.insert("page-owned".to_string());
        prop_assert_eq!(root.0, expected);
    }

    #[test]
    fn at_most_one_class_per_dimension(settings in arb_settings()) {
        let classes = StyleApplier::classes_for(&settings);
        prop_assert!(classes.iter().all(|c| RECOGNIZED_CLASSES.contains(c)));
        prop_assert!(classes.iter().filter(|c| c.starts_with("font-size-")).count() <= 1);
        prop_assert!(classes.iter().filter(|c| c.starts_with("line-height-")).count() <= 1);
        prop_assert_eq!(classes.contains("high-contrast"), settings.high_contrast);
    }
}

#[test]
fn large_font_with_contrast_example() {
    let settings = Settings {
        font_size: Level::Large,
        high_contrast: true,
        ..Settings::default()
    };
    let mut applier = StyleApplier::new("accessibility-widget");
    let mut root = RootClasses::default();
    applier.apply(&settings, &mut root);

    let classes: Vec<&str> = root.0.iter().map(String::as_str).collect();
    assert_eq!(classes, vec!["font-size-larger", "high-contrast"]);
}
