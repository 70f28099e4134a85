use std::io::{BufRead, Write};

use scribe_core::{App, NoteCard, NoteId, NotesApi};

use crate::commands::common::{normalize_note_identifier, write_json};
use crate::error::CliError;
use crate::terminal::TerminalFrontend;

pub async fn run_show<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    id: &str,
    as_json: bool,
) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    let id = NoteId::new(normalize_note_identifier(id)?);
    let note = app.api().get_one(&id).await?;

    if as_json {
        return write_json(app.frontend_mut(), &note);
    }

    let card = NoteCard::from_note(&note);
    app.frontend_mut().write_line(card.to_string())?;
    Ok(())
}
