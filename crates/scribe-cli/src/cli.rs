use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "scribe")]
#[command(about = "Create, search and edit notes on a notes API from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the notes API (overrides SCRIBE_API_BASE and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Optional path to the CLI config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log requests and state changes to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive shell (default)
    Shell,
    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search notes
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single note
    Show {
        /// Note ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add(NoteFields),
    /// Edit an existing note
    Edit {
        /// Note ID
        id: String,
        #[command(flatten)]
        fields: EditFields,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Inspect or change CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Whether the command runs the interactive shell.
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Shell)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct NoteFields {
    /// Note title
    #[arg(long, default_value = "")]
    pub title: String,
    /// Note body
    #[arg(long, default_value = "")]
    pub content: String,
    /// Comma-separated tags, e.g. "work, urgent"
    #[arg(long, default_value = "")]
    pub tags: String,
    /// Pin the note
    #[arg(long)]
    pub pinned: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EditFields {
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New body
    #[arg(long)]
    pub content: Option<String>,
    /// New comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// Pin the note
    #[arg(long, conflicts_with = "unpinned")]
    pub pinned: bool,
    /// Unpin the note
    #[arg(long)]
    pub unpinned: bool,
}

impl EditFields {
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && !self.pinned
            && !self.unpinned
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved API base and config file location
    Show,
    /// Persist an API base URL in the config file
    SetApiBase {
        /// Base URL, e.g. http://localhost:5000/api/notes
        url: String,
    },
    /// Remove the API base URL from the config file
    UnsetApiBase,
}
