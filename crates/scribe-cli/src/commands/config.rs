use std::io::Write;
use std::path::Path;

use scribe_core::config::normalize_base_url;

use crate::cli::ConfigCommands;
use crate::config_file::{resolve_client_config, CliConfig, API_BASE_ENV};
use crate::error::CliError;

pub fn run_config(
    command: ConfigCommands,
    config_path: &Path,
    flag_api_base: Option<String>,
    output: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(config_path, flag_api_base, output),
        ConfigCommands::SetApiBase { url } => run_config_set_api_base(config_path, &url, output),
        ConfigCommands::UnsetApiBase => run_config_unset_api_base(config_path, output),
    }
}

pub fn run_config_show(
    config_path: &Path,
    flag_api_base: Option<String>,
    output: &mut impl Write,
) -> Result<(), CliError> {
    let config = CliConfig::load_from_path(config_path).map_err(CliError::Config)?;
    let (client_config, source) =
        resolve_client_config(flag_api_base, std::env::var(API_BASE_ENV).ok(), &config)?;

    writeln!(output, "api_base: {}", client_config.api_base)?;
    writeln!(output, "source:   {}", source.describe())?;
    writeln!(output, "config:   {}", config_path.display())?;
    Ok(())
}

pub fn run_config_set_api_base(
    config_path: &Path,
    url: &str,
    output: &mut impl Write,
) -> Result<(), CliError> {
    let api_base = normalize_base_url(url)?;

    let mut config = CliConfig::load_from_path(config_path).map_err(CliError::Config)?;
    config.api_base = Some(api_base.clone());
    config
        .save_to_path(config_path)
        .map_err(CliError::Config)?;

    tracing::info!("Saved API base {} to {}", api_base, config_path.display());
    writeln!(output, "{api_base}")?;
    Ok(())
}

pub fn run_config_unset_api_base(
    config_path: &Path,
    output: &mut impl Write,
) -> Result<(), CliError> {
    let mut config = CliConfig::load_from_path(config_path).map_err(CliError::Config)?;
    if config.api_base.take().is_none() {
        writeln!(output, "No API base configured")?;
        return Ok(());
    }

    config
        .save_to_path(config_path)
        .map_err(CliError::Config)?;
    writeln!(output, "Removed API base from {}", config_path.display())?;
    Ok(())
}
