//! Accessibility settings model

use serde::{Deserialize, Serialize};

use super::PartialSettingsPatch;
use crate::schema::{SettingField, SettingValue};

/// A closed set of string-valued options with a fixed wire representation.
pub trait Choice: Copy + Eq + Sized + 'static {
    /// Every variant, in display order.
    const VARIANTS: &'static [Self];

    /// Wire value as stored in the persisted blob.
    fn as_str(self) -> &'static str;

    /// Exact match against the wire values; anything else is rejected.
    fn from_wire(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }
}

/// Text size options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Default,
    Large,
    #[serde(rename = "xl")]
    ExtraLarge,
}

impl Choice for TextSize {
    const VARIANTS: &'static [Self] = &[Self::Default, Self::Large, Self::ExtraLarge];

    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Large => "large",
            Self::ExtraLarge => "xl",
        }
    }
}

/// Line spacing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineHeight {
    #[default]
    #[serde(rename = "default")]
    Default,
    /// 1.5x line spacing
    #[serde(rename = "1_5")]
    Relaxed,
    /// 2x line spacing
    #[serde(rename = "2")]
    Spacious,
}

impl Choice for LineHeight {
    const VARIANTS: &'static [Self] = &[Self::Default, Self::Relaxed, Self::Spacious];

    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Relaxed => "1_5",
            Self::Spacious => "2",
        }
    }
}

/// Whole-page color filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFilter {
    #[default]
    None,
    Grayscale,
    Sepia,
}

impl Choice for ColorFilter {
    const VARIANTS: &'static [Self] = &[Self::None, Self::Grayscale, Self::Sepia];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
        }
    }
}

/// Extra contrast on top of (and independent from) high contrast mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContrastLevel {
    #[default]
    #[serde(rename = "default")]
    Default,
    /// 125% contrast
    #[serde(rename = "125")]
    Medium,
    /// 150% contrast
    #[serde(rename = "150")]
    Strong,
}

impl Choice for ContrastLevel {
    const VARIANTS: &'static [Self] = &[Self::Default, Self::Medium, Self::Strong];

    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "125",
            Self::Strong => "150",
        }
    }
}

/// Page zoom options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MagnifierLevel {
    /// No zoom
    #[default]
    #[serde(rename = "default")]
    Off,
    /// 125% zoom
    #[serde(rename = "125")]
    Medium,
    /// 150% zoom
    #[serde(rename = "150")]
    Large,
}

impl Choice for MagnifierLevel {
    const VARIANTS: &'static [Self] = &[Self::Off, Self::Medium, Self::Large];

    fn as_str(self) -> &'static str {
        match self {
            Self::Off => "default",
            Self::Medium => "125",
            Self::Large => "150",
        }
    }
}

/// The complete set of accessibility preferences.
///
/// Every field always holds an in-domain value. Records are only ever built
/// by normalization or by merging a validated patch, and are replaced rather
/// than edited when settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub high_contrast: bool,
    pub text_size: TextSize,
    pub line_height: LineHeight,
    pub color_filter: ColorFilter,
    pub reduce_motion: bool,
    pub contrast_adjust: ContrastLevel,
    pub magnifier: MagnifierLevel,
    pub dyslexia_friendly: bool,
    pub highlight_links: bool,
}

impl SettingsRecord {
    /// Return a new record with every field present in `patch` overridden.
    #[must_use]
    pub fn merge(&self, patch: &PartialSettingsPatch) -> Self {
        Self {
            high_contrast: patch.high_contrast.unwrap_or(self.high_contrast),
            text_size: patch.text_size.unwrap_or(self.text_size),
            line_height: patch.line_height.unwrap_or(self.line_height),
            color_filter: patch.color_filter.unwrap_or(self.color_filter),
            reduce_motion: patch.reduce_motion.unwrap_or(self.reduce_motion),
            contrast_adjust: patch.contrast_adjust.unwrap_or(self.contrast_adjust),
            magnifier: patch.magnifier.unwrap_or(self.magnifier),
            dyslexia_friendly: patch.dyslexia_friendly.unwrap_or(self.dyslexia_friendly),
            highlight_links: patch.highlight_links.unwrap_or(self.highlight_links),
        }
    }

    /// Current value of a single field.
    pub fn value(&self, field: SettingField) -> SettingValue {
        match field {
            SettingField::HighContrast => SettingValue::Flag(self.high_contrast),
            SettingField::TextSize => SettingValue::Choice(self.text_size.as_str()),
            SettingField::LineHeight => SettingValue::Choice(self.line_height.as_str()),
            SettingField::ColorFilter => SettingValue::Choice(self.color_filter.as_str()),
            SettingField::ReduceMotion => SettingValue::Flag(self.reduce_motion),
            SettingField::ContrastAdjust => SettingValue::Choice(self.contrast_adjust.as_str()),
            SettingField::Magnifier => SettingValue::Choice(self.magnifier.as_str()),
            SettingField::DyslexiaFriendly => SettingValue::Flag(self.dyslexia_friendly),
            SettingField::HighlightLinks => SettingValue::Flag(self.highlight_links),
        }
    }

    /// Serialize to the persisted JSON blob shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
