use std::io::{BufRead, Write};

use scribe_core::{App, NotesApi};

use crate::commands::common::{normalize_search_query, write_json};
use crate::error::CliError;
use crate::terminal::TerminalFrontend;

pub async fn run_list<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    as_json: bool,
) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    if as_json {
        let notes = app.api().list_or_search("").await?;
        return write_json(app.frontend_mut(), &notes);
    }

    app.on_clear().await?;
    Ok(())
}

pub async fn run_search<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    query: &str,
    as_json: bool,
) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    let normalized_query = normalize_search_query(query)?;

    if as_json {
        let notes = app.api().list_or_search(&normalized_query).await?;
        return write_json(app.frontend_mut(), &notes);
    }

    app.on_search(normalized_query).await?;
    Ok(())
}
