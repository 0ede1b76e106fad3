//! Validated partial settings updates

use serde::Serialize;

use super::settings::{Choice, ColorFilter, ContrastLevel, LineHeight, MagnifierLevel, TextSize};
use crate::schema::{SettingField, SettingValue};

/// The subset of fields a caller supplied that passed validation.
///
/// An absent field means "leave unchanged"; a patch never carries a value
/// that was invalid in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_filter: Option<ColorFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_motion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_adjust: Option<ContrastLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnifier: Option<MagnifierLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dyslexia_friendly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_links: Option<bool>,
}

impl PartialSettingsPatch {
    /// True when no field is present; callers treat this as a no-op.
    pub const fn is_empty(&self) -> bool {
        self.high_contrast.is_none()
            && self.text_size.is_none()
            && self.line_height.is_none()
            && self.color_filter.is_none()
            && self.reduce_motion.is_none()
            && self.contrast_adjust.is_none()
            && self.magnifier.is_none()
            && self.dyslexia_friendly.is_none()
            && self.highlight_links.is_none()
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        SettingField::ALL
            .iter()
            .filter(|field| self.contains(**field))
            .count()
    }

    /// Whether `field` is present in the patch.
    pub const fn contains(&self, field: SettingField) -> bool {
        match field {
            SettingField::HighContrast => self.high_contrast.is_some(),
            SettingField::TextSize => self.text_size.is_some(),
            SettingField::LineHeight => self.line_height.is_some(),
            SettingField::ColorFilter => self.color_filter.is_some(),
            SettingField::ReduceMotion => self.reduce_motion.is_some(),
            SettingField::ContrastAdjust => self.contrast_adjust.is_some(),
            SettingField::Magnifier => self.magnifier.is_some(),
            SettingField::DyslexiaFriendly => self.dyslexia_friendly.is_some(),
            SettingField::HighlightLinks => self.highlight_links.is_some(),
        }
    }

    /// Store a validated value for `field`.
    ///
    /// A value whose shape does not fit the field (a flag for an enum field,
    /// an unknown wire string) is dropped and the field stays absent.
    pub fn assign(&mut self, field: SettingField, value: SettingValue) {
        match (field, value) {
            (SettingField::HighContrast, SettingValue::Flag(flag)) => {
                self.high_contrast = Some(flag);
            }
            (SettingField::ReduceMotion, SettingValue::Flag(flag)) => {
                self.reduce_motion = Some(flag);
            }
            (SettingField::DyslexiaFriendly, SettingValue::Flag(flag)) => {
                self.dyslexia_friendly = Some(flag);
            }
            (SettingField::HighlightLinks, SettingValue::Flag(flag)) => {
                self.highlight_links = Some(flag);
            }
            (SettingField::TextSize, SettingValue::Choice(wire)) => {
                self.text_size = TextSize::from_wire(wire);
            }
            (SettingField::LineHeight, SettingValue::Choice(wire)) => {
                self.line_height = LineHeight::from_wire(wire);
            }
            (SettingField::ColorFilter, SettingValue::Choice(wire)) => {
                self.color_filter = ColorFilter::from_wire(wire);
            }
            (SettingField::ContrastAdjust, SettingValue::Choice(wire)) => {
                self.contrast_adjust = ContrastLevel::from_wire(wire);
            }
            (SettingField::Magnifier, SettingValue::Choice(wire)) => {
                self.magnifier = MagnifierLevel::from_wire(wire);
            }
            (field, value) => {
                tracing::trace!(field = field.key(), ?value, "dropping mismatched setting value");
            }
        }
    }
}
