//! Scribe CLI - terminal client for a notes HTTP API
//!
//! Runs an interactive shell by default; subcommands drive the same
//! create/search/edit/delete flow one action at a time.

mod cli;
mod commands;
mod config_file;
mod error;
mod shell;
mod terminal;


use std::io;

use clap::Parser;
use scribe_core::HttpNotesApi;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::{stdio_frontend, StdioApp};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::{run_list, run_search};
use crate::commands::show::run_show;
use crate::config_file::{resolve_client_config, resolve_config_path, CliConfig, API_BASE_ENV};
use crate::error::CliError;
use crate::shell::run_shell;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = resolve_config_path(cli.config.as_deref()).map_err(CliError::Config)?;
    let command = cli.command.unwrap_or(Commands::Shell);

    match command {
        Commands::Config { command } => {
            return run_config(command, &config_path, cli.api_base, &mut io::stdout());
        }
        Commands::Completions { shell, output } => {
            return run_completions(shell, output.as_deref(), &mut io::stdout());
        }
        _ => {}
    }

    let file_config = CliConfig::load_from_path(&config_path).map_err(CliError::Config)?;
    let (client_config, source) = resolve_client_config(
        cli.api_base,
        std::env::var(API_BASE_ENV).ok(),
        &file_config,
    )?;
    tracing::debug!(
        "Using notes API {} (from {})",
        client_config.api_base,
        source.describe()
    );

    let api = HttpNotesApi::from_config(&client_config)?;
    let assume_yes = matches!(command, Commands::Delete { yes: true, .. });
    let frontend = stdio_frontend(assume_yes, command.is_interactive());
    let mut app: StdioApp = StdioApp::new(api, frontend);

    let outcome = match command {
        Commands::Shell => run_shell(&mut app).await,
        Commands::List { json } => run_list(&mut app, json).await,
        Commands::Search { query, json } => run_search(&mut app, &query, json).await,
        Commands::Show { id, json } => run_show(&mut app, &id, json).await,
        Commands::Add(fields) => run_add(&mut app, fields).await,
        Commands::Edit { id, fields } => run_edit(&mut app, &id, fields).await,
        Commands::Delete { id, .. } => run_delete(&mut app, &id).await,
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    };
    outcome?;

    app.frontend_mut().finish()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "scribe_core=debug,scribe_cli=debug"
    } else {
        "scribe_core=warn,scribe_cli=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
