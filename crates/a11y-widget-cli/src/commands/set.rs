use a11y_widget_core::{SettingsRecord, Update};

use crate::commands::common::{build_candidate, format_state_lines, open_session, SessionOptions};
use crate::error::CliError;

/// Merge the valid fields of the assignments or patch into the stored state.
///
/// Returns the resulting record, or `None` when nothing valid was given. A
/// change that could not be written to the state file is an error.
pub fn apply_settings(
    options: &SessionOptions,
    assignments: &[String],
    patch: Option<&str>,
) -> Result<Option<SettingsRecord>, CliError> {
    let candidate = build_candidate(assignments, patch)?;
    let session = open_session(options)?;
    match session.handle.set_state(&candidate) {
        Update::Saved => Ok(Some(session.handle.get_state())),
        Update::Unsaved => Err(CliError::NotSaved(options.state_path.clone())),
        Update::Ignored => Ok(None),
    }
}

pub fn run_set(
    options: &SessionOptions,
    assignments: &[String],
    patch: Option<&str>,
) -> Result<(), CliError> {
    match apply_settings(options, assignments, patch)? {
        Some(record) => {
            let strings = options.locale.strings();
            for line in format_state_lines(&record, strings) {
                println!("{line}");
            }
        }
        None => println!("No changes"),
    }
    Ok(())
}
