//! Proposal log.
//!
//! Every collected proposal is written the moment it is entered, one line
//! each, so an interrupted round can still be reconstructed from the log.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GameError;
use crate::rules::Proposal;

/// Default log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "logs/propositions.log";

/// Append-only destination for proposals.
pub trait ProposalSink {
    fn record(&mut self, proposal: &Proposal) -> io::Result<()>;
}

impl<S: ProposalSink + ?Sized> ProposalSink for &mut S {
    fn record(&mut self, proposal: &Proposal) -> io::Result<()> {
        (**self).record(proposal)
    }
}

/// Line-oriented log file, truncated when opened.
#[derive(Debug)]
pub struct FileProposalLog {
    path: PathBuf,
    file: File,
}

impl FileProposalLog {
    /// Create or truncate the log at `path`, creating parent directories.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, GameError> {
        let path = path.into();
        match Self::open_truncated(&path) {
            Ok(file) => Ok(Self { path, file }),
            Err(source) => Err(GameError::ProposalLog { path, source }),
        }
    }

    fn open_truncated(path: &Path) -> io::Result<File> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        OpenOptions::new().append(true).open(path)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProposalSink for FileProposalLog {
    fn record(&mut self, proposal: &Proposal) -> io::Result<()> {
        writeln!(self.file, "{proposal}")?;
        self.file.flush()?;
        debug!(round = proposal.round, player = %proposal.player_name, "logged proposal");
        Ok(())
    }
}

/// In-memory sink, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryProposalLog {
    entries: Vec<Proposal>,
}

impl MemoryProposalLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[Proposal] {
        &self.entries
    }

    /// Entries rendered exactly as the file log writes them.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl ProposalSink for MemoryProposalLog {
    fn record(&mut self, proposal: &Proposal) -> io::Result<()> {
        self.entries.push(proposal.clone());
        Ok(())
    }
}
