//! Interactive shell: a line-oriented stand-in for the form, search box and
//! list view.

use std::io::{BufRead, Write};

use scribe_core::{App, Frontend, NoteId, NotesApi};

use crate::error::CliError;
use crate::terminal::{render_form, TerminalFrontend};

const PROMPT: &str = "scribe> ";

const HELP: &str = "\
Form:
  title <text>     set the title
  content <text>   set the content
  tags <a, b>      set comma-separated tags
  pin | unpin      toggle the pinned flag
  submit           create, or update the note being edited
  reset            clear the form
  form             show the form
Search:
  search <text>    search notes
  clear            clear the search and reload
  list | reload    reload with the current search
Notes:
  edit <id>        load a note into the form
  delete <id>      delete a note (asks for confirmation)
Other:
  help             show this help
  quit | exit      leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Title(String),
    Content(String),
    Tags(String),
    Pin(bool),
    Submit,
    Reset,
    ShowForm,
    Search(String),
    Clear,
    Reload,
    Edit(NoteId),
    Delete(NoteId),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line; `Ok(None)` for blank input.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let command = match word.to_lowercase().as_str() {
            "title" => Self::Title(rest.to_string()),
            "content" => Self::Content(rest.to_string()),
            "tags" => Self::Tags(rest.to_string()),
            "pin" => Self::Pin(true),
            "unpin" => Self::Pin(false),
            "submit" | "save" => Self::Submit,
            "reset" => Self::Reset,
            "form" => Self::ShowForm,
            "search" => Self::Search(rest.to_string()),
            "clear" => Self::Clear,
            "list" | "reload" => Self::Reload,
            "edit" => Self::Edit(parse_note_id(rest)?),
            "delete" | "rm" => Self::Delete(parse_note_id(rest)?),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CliError::UnknownShellCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(NoteId::new(trimmed))
    }
}

/// Whether the shell should keep reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Apply one command to the app.
pub async fn execute<A, R, W>(
    app: &mut App<A, TerminalFrontend<R, W>>,
    command: ShellCommand,
) -> Result<Flow, CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    match command {
        ShellCommand::Title(title) => app.form_mut().set_title(title),
        ShellCommand::Content(content) => app.form_mut().set_content(content),
        ShellCommand::Tags(tags) => app.form_mut().set_tags(tags),
        ShellCommand::Pin(pinned) => app.form_mut().set_pinned(pinned),
        ShellCommand::Submit => app.on_submit().await?,
        ShellCommand::Reset => app.on_reset(),
        ShellCommand::ShowForm => {
            let rendered = render_form(app.form());
            app.frontend_mut().write_line(rendered)?;
        }
        ShellCommand::Search(text) => app.on_search(text).await?,
        ShellCommand::Clear => app.on_clear().await?,
        ShellCommand::Reload => app.on_load().await?,
        ShellCommand::Edit(id) => app.on_edit_click(&id).await?,
        ShellCommand::Delete(id) => {
            if !app.on_delete_click(&id).await? {
                app.frontend_mut().write_line("Delete cancelled.")?;
            }
        }
        ShellCommand::Help => app.frontend_mut().write_line(HELP)?,
        ShellCommand::Quit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Run the shell until `quit` or end of input.
///
/// Failures of individual commands are reported and the shell keeps going.
pub async fn run_shell<A, R, W>(app: &mut App<A, TerminalFrontend<R, W>>) -> Result<(), CliError>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    if let Err(error) = app.on_load().await {
        app.frontend_mut().write_line(format!("Error: {error}"))?;
    }
    let form = app.form().clone();
    app.frontend_mut().show_form(&form);

    loop {
        app.frontend_mut().finish()?;
        app.frontend_mut().prompt(PROMPT)?;
        let Some(line) = app.frontend_mut().read_line()? else {
            break;
        };

        let outcome = match ShellCommand::parse(&line) {
            Ok(Some(command)) => execute(app, command).await,
            Ok(None) => Ok(Flow::Continue),
            Err(error) => Err(error),
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(CliError::Io(error)) => return Err(CliError::Io(error)),
            Err(error) => app.frontend_mut().write_line(format!("Error: {error}"))?,
        }
    }

    app.frontend_mut().finish()?;
    Ok(())
}
