use crate::commands::common::{open_session, SessionOptions};
use crate::error::CliError;

/// Restore the defaults and write them to the state file.
pub fn reset_settings(options: &SessionOptions) -> Result<(), CliError> {
    let session = open_session(options)?;
    if session.handle.reset().is_saved() {
        Ok(())
    } else {
        Err(CliError::NotSaved(options.state_path.clone()))
    }
}

pub fn run_reset(options: &SessionOptions) -> Result<(), CliError> {
    reset_settings(options)?;
    println!("{}", options.locale.strings().reset);
    println!("{}", options.state_path.display());
    Ok(())
}
