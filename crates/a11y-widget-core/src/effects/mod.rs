//! Presentation effects derived from a settings record.
//!
//! [`derive_effects`] is a pure mapping from a [`SettingsRecord`] to an
//! ordered list of class and property writes. Every field is handled with a
//! clear-then-set discipline, so replaying the same record leaves the target
//! unchanged. The composite filter is always computed last because it reads
//! several fields at once.

mod filter;
mod target;

pub use filter::{
    compose_filter, filter_segments, magnifier_scale, HIGH_CONTRAST_SEGMENTS, NEUTRAL_SCALE,
    NO_FILTER,
};
pub use target::{InMemoryTarget, PresentationTarget};

use serde::Serialize;

use crate::models::{LineHeight, SettingsRecord, TextSize};
use crate::schema::SettingField;

/// Class names written to the presentation root.
pub mod class {
    pub const HIGH_CONTRAST: &str = "accessibility-widget-high-contrast";
    pub const REDUCE_MOTION: &str = "accessibility-widget-reduce-motion";
    pub const DYSLEXIA: &str = "accessibility-widget-dyslexia";
    pub const HIGHLIGHT_LINKS: &str = "accessibility-widget-highlight-links";
    pub const LARGE_TEXT: &str = "accessibility-widget-large-text";
    pub const TEXT_XL: &str = "accessibility-widget-text-xl";
    pub const LINE_HEIGHT_1_5: &str = "accessibility-widget-line-height-1-5";
    pub const LINE_HEIGHT_2: &str = "accessibility-widget-line-height-2";
    pub const MAGNIFIER_ACTIVE: &str = "accessibility-widget-magnifier-active";
    pub const FILTERED: &str = "accessibility-widget-filtered";
}

/// Custom properties written to the presentation root.
pub mod property {
    pub const FILTER: &str = "--aw-widget-filter";
    pub const MAGNIFIER_SCALE: &str = "--aw-magnifier-scale";
}

/// Every class the applier can set.
pub const ALL_CLASSES: [&str; 10] = [
    class::HIGH_CONTRAST,
    class::REDUCE_MOTION,
    class::DYSLEXIA,
    class::HIGHLIGHT_LINKS,
    class::LARGE_TEXT,
    class::TEXT_XL,
    class::LINE_HEIGHT_1_5,
    class::LINE_HEIGHT_2,
    class::MAGNIFIER_ACTIVE,
    class::FILTERED,
];

/// Every custom property the applier can set.
pub const ALL_PROPERTIES: [&str; 2] = [property::FILTER, property::MAGNIFIER_SCALE];

/// A single write against a presentation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Effect {
    AddClass { class: &'static str },
    RemoveClass { class: &'static str },
    SetProperty { name: &'static str, value: String },
    RemoveProperty { name: &'static str },
}

/// Ordered writes produced for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectSet {
    effects: Vec<Effect>,
}

impl EffectSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Final state of `class` after all writes, if any write touches it.
    pub fn class_state(&self, class: &str) -> Option<bool> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::AddClass { class: name } if *name == class => Some(true),
            Effect::RemoveClass { class: name } if *name == class => Some(false),
            _ => None,
        })
    }

    /// Final value of `name` after all writes: `Some(None)` when removed.
    pub fn property_state(&self, name: &str) -> Option<Option<&str>> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::SetProperty { name: key, value } if *key == name => Some(Some(value.as_str())),
            Effect::RemoveProperty { name: key } if *key == name => Some(None),
            _ => None,
        })
    }

    /// Replay every write, in order, against `target`.
    pub fn write_to(&self, target: &mut dyn PresentationTarget) {
        for effect in &self.effects {
            match effect {
                Effect::AddClass { class } => target.add_class(class),
                Effect::RemoveClass { class } => target.remove_class(class),
                Effect::SetProperty { name, value } => target.set_property(name, value),
                Effect::RemoveProperty { name } => target.remove_property(name),
            }
        }
    }

    fn toggle(&mut self, class: &'static str, enabled: bool) {
        self.effects.push(if enabled {
            Effect::AddClass { class }
        } else {
            Effect::RemoveClass { class }
        });
    }

    fn choose(&mut self, options: &[&'static str], selected: Option<&'static str>) {
        for &class in options {
            self.effects.push(Effect::RemoveClass { class });
        }
        if let Some(class) = selected {
            self.effects.push(Effect::AddClass { class });
        }
    }

    fn set_property(&mut self, name: &'static str, value: impl Into<String>) {
        self.effects.push(Effect::SetProperty {
            name,
            value: value.into(),
        });
    }

    fn remove_property(&mut self, name: &'static str) {
        self.effects.push(Effect::RemoveProperty { name });
    }
}

impl<'a> IntoIterator for &'a EffectSet {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type FieldEffect = fn(&SettingsRecord, &mut EffectSet);

/// Per-field presentation rules. Color filter and contrast adjustment have no
/// entry of their own; they only feed the composite filter.
const FIELD_EFFECTS: [(SettingField, FieldEffect); 7] = [
    (SettingField::HighContrast, apply_high_contrast),
    (SettingField::TextSize, apply_text_size),
    (SettingField::LineHeight, apply_line_height),
    (SettingField::ReduceMotion, apply_reduce_motion),
    (SettingField::Magnifier, apply_magnifier),
    (SettingField::DyslexiaFriendly, apply_dyslexia),
    (SettingField::HighlightLinks, apply_highlight_links),
];

fn apply_high_contrast(record: &SettingsRecord, effects: &mut EffectSet) {
    effects.toggle(class::HIGH_CONTRAST, record.high_contrast);
}

fn apply_text_size(record: &SettingsRecord, effects: &mut EffectSet) {
    let selected = match record.text_size {
        TextSize::Default => None,
        TextSize::Large => Some(class::LARGE_TEXT),
        TextSize::ExtraLarge => Some(class::TEXT_XL),
    };
    effects.choose(&[class::LARGE_TEXT, class::TEXT_XL], selected);
}

fn apply_line_height(record: &SettingsRecord, effects: &mut EffectSet) {
    let selected = match record.line_height {
        LineHeight::Default => None,
        LineHeight::Relaxed => Some(class::LINE_HEIGHT_1_5),
        LineHeight::Spacious => Some(class::LINE_HEIGHT_2),
    };
    effects.choose(&[class::LINE_HEIGHT_1_5, class::LINE_HEIGHT_2], selected);
}

fn apply_reduce_motion(record: &SettingsRecord, effects: &mut EffectSet) {
    effects.toggle(class::REDUCE_MOTION, record.reduce_motion);
}

fn apply_dyslexia(record: &SettingsRecord, effects: &mut EffectSet) {
    effects.toggle(class::DYSLEXIA, record.dyslexia_friendly);
}

fn apply_highlight_links(record: &SettingsRecord, effects: &mut EffectSet) {
    effects.toggle(class::HIGHLIGHT_LINKS, record.highlight_links);
}

// Scale 1 is represented by the property being absent.
fn apply_magnifier(record: &SettingsRecord, effects: &mut EffectSet) {
    let scale = magnifier_scale(record.magnifier);
    if scale == NEUTRAL_SCALE {
        effects.toggle(class::MAGNIFIER_ACTIVE, false);
        effects.remove_property(property::MAGNIFIER_SCALE);
    } else {
        effects.toggle(class::MAGNIFIER_ACTIVE, true);
        effects.set_property(property::MAGNIFIER_SCALE, scale);
    }
}

fn apply_filter(record: &SettingsRecord, effects: &mut EffectSet) {
    let filter = compose_filter(record);
    let filtered = filter != NO_FILTER;
    effects.set_property(property::FILTER, filter);
    effects.toggle(class::FILTERED, filtered);
}

/// Derive the writes that present `record`.
pub fn derive_effects(record: &SettingsRecord) -> EffectSet {
    let mut effects = EffectSet::default();
    for (field, field_effect) in &FIELD_EFFECTS {
        tracing::trace!(field = field.key(), "deriving field effects");
        field_effect(record, &mut effects);
    }
    apply_filter(record, &mut effects);
    effects
}

/// Present `record` on `target` and return the writes performed.
pub fn apply(record: &SettingsRecord, target: &mut dyn PresentationTarget) -> EffectSet {
    let effects = derive_effects(record);
    effects.write_to(target);
    tracing::trace!(writes = effects.len(), "applied accessibility settings");
    effects
}

/// Remove every class and property the applier may have set.
pub fn clear_effects(target: &mut dyn PresentationTarget) {
    for class in ALL_CLASSES {
        target.remove_class(class);
    }
    for name in ALL_PROPERTIES {
        target.remove_property(name);
    }
}
