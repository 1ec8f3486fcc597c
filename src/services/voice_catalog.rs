//! Voice Selection.
//!
//! Keeps the platform voices that match the target locale and the user's current
//! pick. The platform owns the voices; the catalog only keeps a snapshot and an
//! index into it.

use crate::types::speech::Voice;

/// Labels that mark low-quality voice variants.
const LOW_QUALITY_LABELS: [&str; 2] = ["compact", "standard"];

pub trait VoiceCatalogTrait {
    fn refresh(&mut self, voices: Vec<Voice>);
    fn select_best(&mut self) -> Option<&Voice>;
    fn cycle_next(&mut self) -> Option<&Voice>;
    fn select_by_name(&mut self, name: &str) -> Option<&Voice>;
    fn selected(&self) -> Option<&Voice>;
    fn voices(&self) -> &[Voice];
}

pub struct VoiceCatalog {
    /// Primary language subtag of the target locale, lowercase (`ro`).
    language: String,
    name_hints: Vec<String>,
    voices: Vec<Voice>,
    selected: Option<usize>,
}

impl VoiceCatalog {
    pub fn new(locale: &str, name_hints: &[String]) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Self {
            language,
            name_hints: name_hints.iter().map(|h| h.to_lowercase()).collect(),
            voices: Vec::new(),
            selected: None,
        }
    }

    /// True when the voice's language tag or name identifies the target locale.
    pub fn matches_locale(&self, voice: &Voice) -> bool {
        let lang = voice.lang.replace('_', "-").to_lowercase();
        let tag_matches = lang == self.language || lang.starts_with(&format!("{}-", self.language));
        let name = voice.name.to_lowercase();
        tag_matches || self.name_hints.iter().any(|hint| name.contains(hint.as_str()))
    }

    fn is_low_quality(voice: &Voice) -> bool {
        let name = voice.name.to_lowercase();
        LOW_QUALITY_LABELS.iter().any(|label| name.contains(label))
    }
}

impl VoiceCatalogTrait for VoiceCatalog {
    /// Replaces the snapshot with the matching subset of `voices`.
    ///
    /// The current pick survives when a voice with the same name is still offered.
    fn refresh(&mut self, voices: Vec<Voice>) {
        let previous = self.selected().map(|v| v.name.clone());
        let total = voices.len();
        self.voices = voices.into_iter().filter(|v| self.matches_locale(v)).collect();
        self.selected = None;
        log::info!(
            "voice catalog refreshed: {} of {} voices match '{}'",
            self.voices.len(),
            total,
            self.language
        );

        let kept = previous.and_then(|name| self.voices.iter().position(|v| v.name == name));
        match kept {
            Some(index) => self.selected = Some(index),
            None => {
                self.select_best();
            }
        }
    }

    /// Picks the first voice without a "compact"/"standard" label, else the first voice.
    fn select_best(&mut self) -> Option<&Voice> {
        self.selected = self
            .voices
            .iter()
            .position(|v| !Self::is_low_quality(v))
            .or(if self.voices.is_empty() { None } else { Some(0) });
        self.selected()
    }

    fn cycle_next(&mut self) -> Option<&Voice> {
        if self.voices.is_empty() {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % self.voices.len(),
            None => 0,
        });
        self.selected()
    }

    fn select_by_name(&mut self, name: &str) -> Option<&Voice> {
        let index = self.voices.iter().position(|v| v.name == name)?;
        self.selected = Some(index);
        self.selected()
    }

    fn selected(&self) -> Option<&Voice> {
        self.selected.and_then(|index| self.voices.get(index))
    }

    fn voices(&self) -> &[Voice] {
        &self.voices
    }
}
