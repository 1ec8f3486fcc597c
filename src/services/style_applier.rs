//! DOM Effect Applier: reflects settings onto the document root as global classes.
//!
//! The applier is the only writer of the classes in [`RECOGNIZED_CLASSES`]. Each
//! call clears all of them and adds exactly the ones implied by the settings, so
//! repeated calls with equal settings converge to the same class set. Only the
//! document root is touched; the widget panel styles itself inline.

use std::collections::BTreeSet;

use crate::types::settings::{Level, Settings};

pub const FONT_SIZE_LARGER: &str = "font-size-larger";
pub const FONT_SIZE_LARGEST: &str = "font-size-largest";
pub const HIGH_CONTRAST: &str = "high-contrast";
pub const LINE_HEIGHT_LARGER: &str = "line-height-larger";
pub const LINE_HEIGHT_LARGEST: &str = "line-height-largest";

/// Every class the applier owns.
pub const RECOGNIZED_CLASSES: [&str; 5] = [
    FONT_SIZE_LARGER,
    FONT_SIZE_LARGEST,
    HIGH_CONTRAST,
    LINE_HEIGHT_LARGER,
    LINE_HEIGHT_LARGEST,
];

/// The document root's class list, as seen by the applier.
pub trait StyleTarget {
    fn add_root_class(&mut self, class: &str);
    fn remove_root_class(&mut self, class: &str);
}

/// The set of accessibility classes currently applied.
pub type AppliedClasses = BTreeSet<&'static str>;

/// Trait defining the applier interface.
pub trait StyleApplierTrait {
    fn apply(&mut self, settings: &Settings, target: &mut dyn StyleTarget) -> &AppliedClasses;
    fn applied(&self) -> &AppliedClasses;
    fn stylesheet(&self) -> String;
}

pub struct StyleApplier {
    panel_id: String,
    applied: AppliedClasses,
}

impl StyleApplier {
    pub fn new(panel_id: &str) -> Self {
        Self {
            panel_id: panel_id.to_string(),
            applied: AppliedClasses::new(),
        }
    }

    /// Computes the classes implied by `settings`.
    pub fn classes_for(settings: &Settings) -> AppliedClasses {
        let mut classes = AppliedClasses::new();
        match settings.font_size {
            Level::Normal => {}
            Level::Large => {
                classes.insert(FONT_SIZE_LARGER);
            }
            Level::ExtraLarge => {
                classes.insert(FONT_SIZE_LARGEST);
            }
        }
        if settings.high_contrast {
            classes.insert(HIGH_CONTRAST);
        }
        match settings.line_height {
            Level::Normal => {}
            Level::Large => {
                classes.insert(LINE_HEIGHT_LARGER);
            }
            Level::ExtraLarge => {
                classes.insert(LINE_HEIGHT_LARGEST);
            }
        }
        classes
    }
}

impl StyleApplierTrait for StyleApplier {
    fn apply(&mut self, settings: &Settings, target: &mut dyn StyleTarget) -> &AppliedClasses {
        for class in RECOGNIZED_CLASSES {
            target.remove_root_class(class);
        }
        let classes = Self::classes_for(settings);
        for class in &classes {
            target.add_root_class(class);
        }
        self.applied = classes;
        &self.applied
    }

    fn applied(&self) -> &AppliedClasses {
        &self.applied
    }

    /// CSS for the global classes. Every rule skips the widget panel subtree.
    fn stylesheet(&self) -> String {
        let panel = &self.panel_id;
        format!(
            "html.{fs1} {{ font-size: 118.75%; }}\n\
             html.{fs2} {{ font-size: 137.5%; }}\n\
             html.{fs1} #{panel}, html.{fs2} #{panel} {{ font-size: 16px; }}\n\
             html.{lh1} body *:not(#{panel}):not(#{panel} *) {{ line-height: 1.8 !important; }}\n\
             html.{lh2} body *:not(#{panel}):not(#{panel} *) {{ line-height: 2.2 !important; }}\n\
             html.{hc} body, html.{hc} body *:not(#{panel}):not(#{panel} *) {{ background-color: #000 !important; color: #ff0 !important; }}\n\
             html.{hc} body a:not(#{panel} *) {{ color: #0ff !important; text-decoration: underline !important; }}\n",
            fs1 = FONT_SIZE_LARGER,
            fs2 = FONT_SIZE_LARGEST,
            lh1 = LINE_HEIGHT_LARGER,
            lh2 = LINE_HEIGHT_LARGEST,
            hc = HIGH_CONTRAST,
            panel = panel,
        )
    }
}
