use std::io::{BufRead, Write};

use scribe_core::{App, NoteId, NotesApi};

use crate::cli::EditFields;
use crate::commands::common::normalize_note_identifier;
use crate::error::CliError;
use crate::terminal::TerminalFrontend;

/// Load the note into the form, apply the given fields, and submit.
pub async fn run_edit<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    id: &str,
    fields: EditFields,
) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    let id = NoteId::new(normalize_note_identifier(id)?);
    if fields.is_empty() {
        return Err(CliError::NothingToEdit);
    }

    app.on_edit_click(&id).await?;

    let form = app.form_mut();
    if let Some(title) = fields.title {
        form.set_title(title);
    }
    if let Some(content) = fields.content {
        form.set_content(content);
    }
    if let Some(tags) = fields.tags {
        form.set_tags(tags);
    }
    if fields.pinned {
        form.set_pinned(true);
    } else if fields.unpinned {
        form.set_pinned(false);
    }

    app.on_submit().await?;
    Ok(())
}
