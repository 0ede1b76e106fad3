use crate::commands::common::{format_state_lines, open_session, SessionOptions};
use crate::error::CliError;

pub fn run_show(options: &SessionOptions, as_json: bool) -> Result<(), CliError> {
    let session = open_session(options)?;
    let record = session.handle.get_state();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", session.strings().panel_title);
        for line in format_state_lines(&record, session.strings()) {
            println!("{line}");
        }
        println!();
        for line in session.strings().footer_lines() {
            println!("{line}");
        }
    }

    Ok(())
}
