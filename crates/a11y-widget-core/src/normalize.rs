//! Settings normalization.
//!
//! Turns an arbitrary JSON value (a stored blob, a caller patch) into either a
//! complete [`SettingsRecord`] or a [`PartialSettingsPatch`] holding only the
//! fields that were present and valid. Malformed input never fails: it falls
//! back to defaults (full mode) or is left out (partial mode).

use serde_json::Value;

use crate::models::{PartialSettingsPatch, SettingsRecord};
use crate::schema::SCHEMA;

/// Which shape of result the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Complete record; absent or invalid fields take their defaults.
    Full,
    /// Only fields that were present and valid.
    Partial,
}

/// Result of [`normalize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized {
    Full(SettingsRecord),
    Partial(PartialSettingsPatch),
}

/// Normalize `candidate` in the requested mode.
pub fn normalize_with(candidate: &Value, mode: NormalizeMode) -> Normalized {
    match mode {
        NormalizeMode::Full => Normalized::Full(normalize(candidate)),
        NormalizeMode::Partial => Normalized::Partial(normalize_patch(candidate)),
    }
}

/// Build a complete record from `candidate`.
///
/// Non-object input (including `null`) yields the all-defaults record.
pub fn normalize(candidate: &Value) -> SettingsRecord {
    SettingsRecord::default().merge(&normalize_patch(candidate))
}

/// Extract the present and valid fields of `candidate`.
///
/// Unknown keys are ignored. An empty patch means there is nothing to apply.
pub fn normalize_patch(candidate: &Value) -> PartialSettingsPatch {
    let mut patch = PartialSettingsPatch::default();
    let Some(object) = candidate.as_object() else {
        if !candidate.is_null() {
            tracing::debug!("ignoring non-object settings input");
        }
        return patch;
    };

    for entry in &SCHEMA {
        let key = entry.field.key();
        let Some(raw) = object.get(key) else {
            continue;
        };
        match entry.domain.validate(raw) {
            Some(value) => patch.assign(entry.field, value),
            None => tracing::debug!(field = key, "ignoring out-of-domain setting value"),
        }
    }

    patch
}
