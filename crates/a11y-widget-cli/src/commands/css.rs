use a11y_widget_core::InMemoryTarget;

use crate::commands::common::{open_session, SessionOptions};
use crate::error::CliError;

/// Root presentation state after applying the stored settings.
pub fn root_presentation(options: &SessionOptions) -> Result<InMemoryTarget, CliError> {
    let session = open_session(options)?;
    Ok(session.host.root_state())
}

pub fn run_css(options: &SessionOptions, as_json: bool) -> Result<(), CliError> {
    let root = root_presentation(options)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        println!("{}", root.to_css());
    }
    Ok(())
}
