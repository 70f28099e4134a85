use std::io::{self, IsTerminal, StdinLock, Stdout, Write};

use scribe_core::{App, HttpNotesApi};
use serde::Serialize;

use crate::error::CliError;
use crate::terminal::TerminalFrontend;

pub type StdioFrontend = TerminalFrontend<StdinLock<'static>, Stdout>;

pub type StdioApp = App<HttpNotesApi, StdioFrontend>;

/// Frontend on stdin/stdout. The screen is only cleared in interactive
/// sessions attached to a terminal.
pub fn stdio_frontend(assume_yes: bool, interactive: bool) -> StdioFrontend {
    let clear_on_scroll = interactive && io::stdout().is_terminal();
    TerminalFrontend::new(io::stdin().lock(), io::stdout())
        .assume_yes(assume_yes)
        .clear_on_scroll(clear_on_scroll)
}

pub fn write_json<T, R, W>(frontend: &mut TerminalFrontend<R, W>, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    R: io::BufRead,
    W: Write,
{
    frontend.write_line(serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}
