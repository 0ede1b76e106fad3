use std::path::PathBuf;

use a11y_widget_core::schema::Domain;
use a11y_widget_core::widget::{option_label, PANEL_ORDER};
use a11y_widget_core::{
    FileStore, InMemoryHost, Locale, LocaleStrings, SettingField, SettingValue, SettingsRecord,
    WidgetHandle, WidgetOptions, WidgetRegistry,
};
use serde_json::{Map, Value};

use crate::error::CliError;

/// Where the settings live and which locale labels are printed in.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub state_path: PathBuf,
    pub locale: Locale,
}

/// A widget bound to the state file, plus the in-memory host it renders to.
pub struct Session {
    pub handle: WidgetHandle,
    pub host: InMemoryHost,
}

impl Session {
    pub fn strings(&self) -> &'static LocaleStrings {
        self.handle.strings()
    }
}

/// Start a widget over the state file.
///
/// Every session gets its own registry so a process can open several state
/// files one after another.
pub fn open_session(options: &SessionOptions) -> Result<Session, CliError> {
    let registry = WidgetRegistry::new();
    let host = InMemoryHost::new();
    let store = FileStore::new(options.state_path.clone());
    let widget_options = WidgetOptions::default().with_locale(options.locale.code());
    let handle = registry.init(&widget_options, host.clone(), store)?;
    tracing::debug!(path = %options.state_path.display(), "Opened widget session");
    Ok(Session { handle, host })
}

/// Split `key=value`. The value is read as JSON when it parses, otherwise it
/// is taken as a plain string, so `textSize=large` and `highContrast=true`
/// both work. Numbers given to select fields keep their literal text, since
/// `magnifier=125` names the `"125"` option.
pub fn parse_assignment(raw: &str) -> Result<(SettingField, Value), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidAssignment(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidAssignment(raw.to_string()));
    }
    let field =
        SettingField::from_key(key).ok_or_else(|| CliError::UnknownSetting(key.to_string()))?;

    let value = value.trim();
    let parsed = match serde_json::from_str::<Value>(value) {
        Ok(Value::Number(_)) if !matches!(field.domain(), Domain::Flag) => {
            Value::String(value.to_string())
        }
        Ok(parsed) => parsed,
        Err(_) => Value::String(value.to_string()),
    };
    Ok((field, parsed))
}

/// Build the candidate object handed to the normalizer.
pub fn build_candidate(assignments: &[String], patch: Option<&str>) -> Result<Value, CliError> {
    if let Some(raw) = patch {
        return Ok(serde_json::from_str(raw)?);
    }
    if assignments.is_empty() {
        return Err(CliError::EmptyPatch);
    }

    let mut object = Map::new();
    for assignment in assignments {
        let (field, value) = parse_assignment(assignment)?;
        object.insert(field.key().to_string(), value);
    }
    Ok(Value::Object(object))
}

pub fn format_value(field: SettingField, value: SettingValue, strings: &LocaleStrings) -> String {
    match value {
        SettingValue::Flag(true) => "on".to_string(),
        SettingValue::Flag(false) => "off".to_string(),
        SettingValue::Choice(choice) => {
            let label = option_label(field, choice, strings);
            if label == choice {
                choice.to_string()
            } else {
                format!("{choice} ({label})")
            }
        }
    }
}

/// One line per field in panel order: key, value, localized label.
pub fn format_state_lines(record: &SettingsRecord, strings: &LocaleStrings) -> Vec<String> {
    let controls = a11y_widget_core::widget::controls(strings);
    PANEL_ORDER
        .iter()
        .zip(controls)
        .map(|(&field, control)| {
            let value = format_value(field, record.value(field), strings);
            format!("{:<18} {:<24} {}", field.key(), value, control.label)
        })
        .collect()
}
