//! Scripted console for deterministic sessions.

use std::collections::VecDeque;
use std::io;

use super::console::Console;

/// One thing that happened on a `ScriptedConsole`, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    Prompt(String),
    Line(String),
    Clear,
}

/// Console that answers prompts from a fixed script and records everything.
///
/// ```
/// use just_one::io::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["Ada"]);
/// assert_eq!(console.read_line("Player 1 name").unwrap(), "Ada");
/// assert!(console.read_line("Player 2 name").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    events: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// Every prompt asked, in order.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ConsoleEvent::Prompt(p) => Some(p.as_str()),
            _ => None,
        })
    }

    /// Every displayed line, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ConsoleEvent::Line(l) => Some(l.as_str()),
            _ => None,
        })
    }

    /// Whether any displayed line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.lines().any(|l| l.contains(needle))
    }

    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.events.push(ConsoleEvent::Prompt(prompt.to_string()));
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.events.push(ConsoleEvent::Line(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(ConsoleEvent::Clear);
        Ok(())
    }
}
