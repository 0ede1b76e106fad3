use a11y_widget_core::widget::{ControlDescriptor, ControlKind};
use a11y_widget_core::{SettingValue, SettingsRecord};

use crate::commands::common::{open_session, SessionOptions};
use crate::error::CliError;

pub fn run_options(options: &SessionOptions, as_json: bool) -> Result<(), CliError> {
    let session = open_session(options)?;
    let controls = session.handle.controls();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&controls)?);
    } else {
        let record = session.handle.get_state();
        for line in format_control_lines(&controls, &record) {
            println!("{line}");
        }
        println!();
        for line in session.strings().footer_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

/// Control listing with the current value marked by `*`.
pub fn format_control_lines(controls: &[ControlDescriptor], record: &SettingsRecord) -> Vec<String> {
    let mut lines = Vec::new();
    for control in controls {
        let current = record.value(control.field);
        lines.push(format!("{} ({})", control.label, control.key));
        if let Some(description) = control.description {
            lines.push(format!("    {description}"));
        }
        match control.kind {
            ControlKind::Checkbox => {
                let marker = if current == SettingValue::Flag(true) { "x" } else { " " };
                lines.push(format!("  [{marker}] true|false"));
            }
            ControlKind::Select => {
                for option in &control.options {
                    let marker = if current == SettingValue::Choice(option.value) {
                        '*'
                    } else {
                        ' '
                    };
                    lines.push(format!("  {marker} {:<10} {}", option.value, option.label));
                }
            }
        }
    }
    lines
}
