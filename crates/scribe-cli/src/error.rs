use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] scribe_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Nothing to change: pass at least one of --title, --content, --tags, --pinned, --unpinned")]
    NothingToEdit,
    #[error("Unknown command `{0}`; type `help` for a list of commands")]
    UnknownShellCommand(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
