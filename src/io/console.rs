//! Terminal capability used by the round engine.
//!
//! The engine never touches stdin/stdout directly. It asks a `Console` for
//! a line of input and tells it what to display, so sessions can be driven
//! by a real terminal or by a script.

use std::io::{self, BufRead};

use dialoguer::console::Term;
use dialoguer::Input;

/// Blocking line input plus display.
pub trait Console {
    /// Show `prompt` and block until a line is entered. The trailing newline is
    /// stripped; nothing else is. End of input is an `UnexpectedEof` error.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Display one line of text.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Wipe the screen, hiding everything shown so far.
    fn clear(&mut self) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        (**self).show(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }
}

/// Console on the process terminal.
///
/// Uses `dialoguer` prompts when a user is attached; falls back to plain
/// line reads from stdin when input is piped.
#[derive(Debug)]
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    #[must_use]
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }

    fn read_piped(&mut self, prompt: &str) -> io::Result<String> {
        self.term.write_str(&format!("{prompt}: "))?;
        self.term.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if !self.term.features().is_attended() {
            return self.read_piped(prompt);
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.term.features().is_attended() {
            self.term.clear_screen()
        } else {
            // Nothing to wipe on a pipe; push the secret out of view instead.
            self.term.write_str(&"\n".repeat(40))
        }
    }
}
