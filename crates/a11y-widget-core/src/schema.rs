//! Declarative settings schema.
//!
//! Each field is described by its wire key and value domain only. Defaults
//! come from [`SettingsRecord::default`](crate::SettingsRecord); how a field
//! looks on the page lives in [`effects`](crate::effects).

use serde_json::Value;

use crate::models::{Choice, ColorFilter, ContrastLevel, LineHeight, MagnifierLevel, TextSize};
use crate::util::is_truthy;

/// Every settings field, in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingField {
    HighContrast,
    TextSize,
    LineHeight,
    ColorFilter,
    ReduceMotion,
    ContrastAdjust,
    Magnifier,
    DyslexiaFriendly,
    HighlightLinks,
}

impl SettingField {
    pub const ALL: [Self; 9] = [
        Self::HighContrast,
        Self::TextSize,
        Self::LineHeight,
        Self::ColorFilter,
        Self::ReduceMotion,
        Self::ContrastAdjust,
        Self::Magnifier,
        Self::DyslexiaFriendly,
        Self::HighlightLinks,
    ];

    /// Key used in the persisted blob and in caller patches.
    pub const fn key(self) -> &'static str {
        match self {
            Self::HighContrast => "highContrast",
            Self::TextSize => "textSize",
            Self::LineHeight => "lineHeight",
            Self::ColorFilter => "colorFilter",
            Self::ReduceMotion => "reduceMotion",
            Self::ContrastAdjust => "contrastAdjust",
            Self::Magnifier => "magnifier",
            Self::DyslexiaFriendly => "dyslexiaFriendly",
            Self::HighlightLinks => "highlightLinks",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Domain this field validates against.
    pub fn domain(self) -> Domain {
        SCHEMA
            .iter()
            .find(|entry| entry.field == self)
            .map_or(Domain::Flag, |entry| entry.domain)
    }
}

/// A validated field value, either a flag or a canonical wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    Flag(bool),
    Choice(&'static str),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Choice(wire) => f.write_str(wire),
        }
    }
}

/// Value domain of a field.
#[derive(Debug, Clone, Copy)]
pub enum Domain {
    /// Any value, coerced by truthiness.
    Flag,
    /// One of a fixed set of strings, compared exactly.
    Choice {
        canonical: fn(&str) -> Option<&'static str>,
        variants: fn() -> Vec<&'static str>,
    },
    /// A string choice that also accepts older non-string values, which are
    /// coerced by truthiness to `truthy` or `falsy`.
    LegacyChoice {
        canonical: fn(&str) -> Option<&'static str>,
        variants: fn() -> Vec<&'static str>,
        truthy: &'static str,
        falsy: &'static str,
    },
}

impl Domain {
    /// Validate a raw value that was present in the input.
    ///
    /// `None` means the value is out of domain and must be treated as absent.
    pub fn validate(&self, raw: &Value) -> Option<SettingValue> {
        match self {
            Self::Flag => Some(SettingValue::Flag(is_truthy(raw))),
            Self::Choice { canonical, .. } => raw
                .as_str()
                .and_then(|text| canonical(text))
                .map(SettingValue::Choice),
            Self::LegacyChoice {
                canonical,
                truthy,
                falsy,
                ..
            } => match raw {
                Value::String(text) => canonical(text.as_str()).map(SettingValue::Choice),
                other => Some(SettingValue::Choice(if is_truthy(other) {
                    *truthy
                } else {
                    *falsy
                })),
            },
        }
    }

    /// Accepted wire strings; empty for flags.
    pub fn variants(&self) -> Vec<&'static str> {
        match self {
            Self::Flag => Vec::new(),
            Self::Choice { variants, .. } | Self::LegacyChoice { variants, .. } => variants(),
        }
    }
}

/// Schema entry for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: SettingField,
    pub domain: Domain,
}

/// The settings schema, in persisted order.
pub const SCHEMA: [FieldSpec; 9] = [
    FieldSpec {
        field: SettingField::HighContrast,
        domain: Domain::Flag,
    },
    FieldSpec {
        field: SettingField::TextSize,
        domain: choice::<TextSize>(),
    },
    FieldSpec {
        field: SettingField::LineHeight,
        domain: Domain::LegacyChoice {
            canonical: canonical::<LineHeight>,
            variants: variants::<LineHeight>,
            truthy: "1_5",
            falsy: "default",
        },
    },
    FieldSpec {
        field: SettingField::ColorFilter,
        domain: choice::<ColorFilter>(),
    },
    FieldSpec {
        field: SettingField::ReduceMotion,
        domain: Domain::Flag,
    },
    FieldSpec {
        field: SettingField::ContrastAdjust,
        domain: choice::<ContrastLevel>(),
    },
    FieldSpec {
        field: SettingField::Magnifier,
        domain: choice::<MagnifierLevel>(),
    },
    FieldSpec {
        field: SettingField::DyslexiaFriendly,
        domain: Domain::Flag,
    },
    FieldSpec {
        field: SettingField::HighlightLinks,
        domain: Domain::Flag,
    },
];

const fn choice<T: Choice>() -> Domain {
    Domain::Choice {
        canonical: canonical::<T>,
        variants: variants::<T>,
    }
}

fn canonical<T: Choice>(value: &str) -> Option<&'static str> {
    T::from_wire(value).map(T::as_str)
}

fn variants<T: Choice>() -> Vec<&'static str> {
    T::VARIANTS.iter().map(|variant| variant.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_covers_every_field_once() {
        let fields: Vec<SettingField> = SCHEMA.iter().map(|entry| entry.field).collect();
        assert_eq!(fields, SettingField::ALL.to_vec());
    }

    #[test]
    fn keys_round_trip() {
        for field in SettingField::ALL {
            assert_eq!(SettingField::from_key(field.key()), Some(field));
        }
        assert_eq!(SettingField::from_key("fontSize"), None);
    }

    #[test]
    fn choice_domain_rejects_non_strings_and_unknown_values() {
        let domain = SettingField::TextSize.domain();
        assert_eq!(domain.validate(&json!("large")), Some(SettingValue::Choice("large")));
        assert_eq!(domain.validate(&json!("huge")), None);
        assert_eq!(domain.validate(&json!(true)), None);
        assert_eq!(domain.validate(&json!(null)), None);
    }

    #[test]
    fn legacy_domain_coerces_non_strings() {
        let domain = SettingField::LineHeight.domain();
        assert_eq!(domain.validate(&json!(true)), Some(SettingValue::Choice("1_5")));
        assert_eq!(domain.validate(&json!(1)), Some(SettingValue::Choice("1_5")));
        assert_eq!(domain.validate(&json!(false)), Some(SettingValue::Choice("default")));
        assert_eq!(domain.validate(&json!(null)), Some(SettingValue::Choice("default")));
        assert_eq!(domain.validate(&json!("2")), Some(SettingValue::Choice("2")));
        assert_eq!(domain.validate(&json!("3")), None);
    }

    #[test]
    fn flag_domain_never_rejects() {
        let domain = SettingField::ReduceMotion.domain();
        assert_eq!(domain.validate(&json!("yes")), Some(SettingValue::Flag(true)));
        assert_eq!(domain.validate(&json!(0)), Some(SettingValue::Flag(false)));
        assert!(domain.variants().is_empty());
    }

    #[test]
    fn variants_list_wire_values_in_order() {
        assert_eq!(
            SettingField::Magnifier.domain().variants(),
            vec!["default", "125", "150"]
        );
    }
}
