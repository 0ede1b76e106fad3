//! Localized control descriptors for the settings panel.

use serde::Serialize;

use crate::locale::LocaleStrings;
use crate::schema::{Domain, SettingField};

/// Kind of input a field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Checkbox,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One panel control: its label, optional description, and the options of a
/// select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlDescriptor {
    pub key: &'static str,
    #[serde(skip)]
    pub field: SettingField,
    pub kind: ControlKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ControlOption>,
}

/// Panel order of the controls.
pub const PANEL_ORDER: [SettingField; 9] = [
    SettingField::HighContrast,
    SettingField::ContrastAdjust,
    SettingField::TextSize,
    SettingField::Magnifier,
    SettingField::LineHeight,
    SettingField::DyslexiaFriendly,
    SettingField::HighlightLinks,
    SettingField::ColorFilter,
    SettingField::ReduceMotion,
];

/// Build every control descriptor with `strings`.
pub fn controls(strings: &LocaleStrings) -> Vec<ControlDescriptor> {
    PANEL_ORDER
        .iter()
        .map(|&field| describe(field, strings))
        .collect()
}

fn describe(field: SettingField, strings: &LocaleStrings) -> ControlDescriptor {
    let domain = field.domain();
    let kind = match domain {
        Domain::Flag => ControlKind::Checkbox,
        Domain::Choice { .. } | Domain::LegacyChoice { .. } => ControlKind::Select,
    };
    let options = domain
        .variants()
        .into_iter()
        .map(|value| ControlOption {
            value,
            label: option_label(field, value, strings),
        })
        .collect();

    ControlDescriptor {
        key: field.key(),
        field,
        kind,
        label: label(field, strings),
        description: description(field, strings),
        options,
    }
}

const fn label(field: SettingField, strings: &LocaleStrings) -> &'static str {
    match field {
        SettingField::HighContrast => strings.high_contrast,
        SettingField::TextSize => strings.text_size,
        SettingField::LineHeight => strings.line_height,
        SettingField::ColorFilter => strings.color_filter,
        SettingField::ReduceMotion => strings.animations,
        SettingField::ContrastAdjust => strings.contrast_adjust,
        SettingField::Magnifier => strings.magnifier,
        SettingField::DyslexiaFriendly => strings.dyslexia,
        SettingField::HighlightLinks => strings.highlight_links,
    }
}

const fn description(field: SettingField, strings: &LocaleStrings) -> Option<&'static str> {
    match field {
        SettingField::HighContrast => Some(strings.high_contrast_description),
        SettingField::Magnifier => Some(strings.magnifier_description),
        SettingField::DyslexiaFriendly => Some(strings.dyslexia_description),
        SettingField::HighlightLinks => Some(strings.highlight_links_description),
        SettingField::ReduceMotion => Some(strings.animations_label),
        SettingField::TextSize
        | SettingField::LineHeight
        | SettingField::ColorFilter
        | SettingField::ContrastAdjust => None,
    }
}

/// Localized label of a select option; unknown values are shown verbatim.
pub fn option_label(field: SettingField, value: &'static str, strings: &LocaleStrings) -> &'static str {
    match (field, value) {
        (SettingField::TextSize, "default") => strings.text_size_default,
        (SettingField::TextSize, "large") => strings.text_size_large,
        (SettingField::TextSize, "xl") => strings.text_size_xl,
        (SettingField::LineHeight, "default") => strings.line_height_default,
        (SettingField::LineHeight, "1_5") => strings.line_height_relaxed,
        (SettingField::LineHeight, "2") => strings.line_height_spacious,
        (SettingField::ColorFilter, "none") => strings.filter_none,
        (SettingField::ColorFilter, "grayscale") => strings.filter_grayscale,
        (SettingField::ColorFilter, "sepia") => strings.filter_sepia,
        (SettingField::Magnifier, "default") => strings.magnifier_default,
        (SettingField::Magnifier, "125") => strings.magnifier_medium,
        (SettingField::Magnifier, "150") => strings.magnifier_large,
        (SettingField::ContrastAdjust, "default") => strings.contrast_default,
        (SettingField::ContrastAdjust, "125") => strings.contrast_medium,
        (SettingField::ContrastAdjust, "150") => strings.contrast_strong,
        _ => value,
    }
}
