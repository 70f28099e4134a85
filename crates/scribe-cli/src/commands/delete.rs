use std::io::{BufRead, Write};

use scribe_core::{App, NoteId, NotesApi};

use crate::commands::common::normalize_note_identifier;
use crate::error::CliError;
use crate::terminal::TerminalFrontend;

pub async fn run_delete<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    id: &str,
) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    let id = NoteId::new(normalize_note_identifier(id)?);

    if !app.on_delete_click(&id).await? {
        app.frontend_mut().write_line("Delete cancelled.")?;
    }
    Ok(())
}
