//! Terminal binding for the orchestrator.

use std::io::{self, BufRead, Write};

use scribe_core::{FormState, Frontend, ListView};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Line-oriented frontend reading answers from `input` and drawing to `output`.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
    clear_on_scroll: bool,
    /// First write failure seen inside a `Frontend` callback
    deferred_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
            clear_on_scroll: false,
            deferred_error: None,
        }
    }

    /// Answer every confirmation with yes.
    #[must_use]
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Clear the screen when the form is brought into view.
    #[must_use]
    pub fn clear_on_scroll(mut self, clear_on_scroll: bool) -> Self {
        self.clear_on_scroll = clear_on_scroll;
        self
    }

    #[cfg(test)]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Read one line without its trailing newline; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn write_line(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    /// Flush output and surface any write failure swallowed by a callback.
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(error) = self.deferred_error.take() {
            return Err(error);
        }
        self.output.flush()
    }

    fn defer(&mut self, result: io::Result<()>) {
        if let Err(error) = result {
            tracing::warn!("Failed to write to terminal: {}", error);
            if self.deferred_error.is_none() {
                self.deferred_error = Some(error);
            }
        }
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        if let Err(error) = self.prompt(&format!("{prompt} [y/N] ")) {
            self.defer(Err(error));
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!("Failed to read confirmation: {}", error);
                false
            }
        }
    }

    fn show_form(&mut self, form: &FormState) {
        let result = self.write_line(render_form(form));
        self.defer(result);
    }

    fn show_list(&mut self, list: &ListView) {
        let result = self.write_line(list.to_string());
        self.defer(result);
    }

    fn scroll_to_top(&mut self) {
        if self.clear_on_scroll {
            let result = write!(self.output, "{CLEAR_SCREEN}");
            self.defer(result);
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Text rendering of the form inputs and labels.
pub fn render_form(form: &FormState) -> String {
    let mode = form.mode();
    let pinned = if form.pinned { "[x]" } else { "[ ]" };
    let mut lines = vec![
        format!("== {} ==", mode.heading()),
        format!("Title:   {}", form.title),
        format!("Content: {}", form.content),
        format!("Tags:    {}", form.tags),
        format!("Pinned:  {pinned}"),
    ];
    if let Some(id) = &form.editing_id {
        lines.push(format!("Editing: {id}"));
    }
    lines.push(format!("[{}] [Reset]", mode.submit_label()));
    lines.join("\n")
}
