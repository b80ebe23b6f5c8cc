//! Terminal and log capabilities injected into a session.
//!
//! - `Console`: blocking prompts and display (`TerminalConsole`, `ScriptedConsole`)
//! - `ProposalSink`: append-only proposal log (`FileProposalLog`, `MemoryProposalLog`)

pub mod console;
pub mod log;
pub mod scripted;

pub use console::{Console, TerminalConsole};
pub use log::{FileProposalLog, MemoryProposalLog, ProposalSink, DEFAULT_LOG_PATH};
pub use scripted::{ConsoleEvent, ScriptedConsole};
