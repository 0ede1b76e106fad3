use std::path::PathBuf;

use a11y_widget_core::util::normalize_text_option;
use a11y_widget_core::Locale;

use crate::cli::ConfigCommands;
use crate::cli_config::{default_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(),
        ConfigCommands::Set {
            locale,
            state_path,
            clear_state_path,
        } => {
            let config = CliConfig::load().map_err(CliError::Config)?;
            let updated = update_config(config, locale.as_deref(), state_path, clear_state_path)?;
            let path = updated.save().map_err(CliError::Config)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_config_show() -> Result<(), CliError> {
    let path = default_config_path();
    let config = CliConfig::load_from_path(&path).map_err(CliError::Config)?;
    println!("Config file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Apply `config set` flags. Locale codes must be supported ones.
pub fn update_config(
    mut config: CliConfig,
    locale: Option<&str>,
    state_path: Option<PathBuf>,
    clear_state_path: bool,
) -> Result<CliConfig, CliError> {
    if let Some(code) = normalize_text_option(locale) {
        let resolved = Locale::from_code(&code.to_ascii_lowercase()).ok_or_else(|| {
            let supported = Locale::ALL
                .iter()
                .map(|locale| locale.code())
                .collect::<Vec<_>>()
                .join(", ");
            CliError::Config(format!(
                "Unsupported locale `{code}`, expected one of: {supported}"
            ))
        })?;
        config.locale = Some(resolved.code().to_string());
    }

    if clear_state_path {
        config.state_path = None;
    } else if let Some(path) = state_path {
        config.state_path = Some(path);
    }

    Ok(config)
}
