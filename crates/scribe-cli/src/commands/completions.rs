use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

const BIN_NAME: &str = "scribe";

/// Write the completion script to `output_path`, or to `out` when no path
/// is given. With a path, only the path is echoed to `out`.
pub fn run_completions(
    shell: CompletionShell,
    output_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let script = completion_script(shell);

    match output_path {
        Some(path) => {
            std::fs::write(path, &script)?;
            writeln!(out, "{}", path.display())?;
        }
        None => out.write_all(&script)?,
    }
    out.flush()?;
    Ok(())
}

/// Generated into memory first: clap_complete panics on writer errors.
pub fn completion_script(shell: CompletionShell) -> Vec<u8> {
    let mut script = Vec::new();
    generate(Shell::from(shell), &mut Cli::command(), BIN_NAME, &mut script);
    script
}
