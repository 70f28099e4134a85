use std::io::{BufRead, Write};

use scribe_core::{App, NotesApi};

use crate::cli::NoteFields;
use crate::error::CliError;
use crate::terminal::TerminalFrontend;

pub async fn run_add<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    fields: NoteFields,
) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    let form = app.form_mut();
    form.reset();
    form.set_title(fields.title);
    form.set_content(fields.content);
    form.set_tags(fields.tags);
    form.set_pinned(fields.pinned);

    app.on_submit().await?;
    Ok(())
}
