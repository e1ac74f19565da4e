//! Rename executor.
//!
//! Applies a [`RenamePlan`] one entry at a time. Each rename is independent:
//! a failure is recorded for that entry and the batch carries on. There is
//! no rollback, so a partially applied plan is a valid end state.

use crate::error::Error;
use crate::planner::{PlanEntry, RenamePlan};
use crate::report::{Event, Reporter};
use std::io;
use std::path::PathBuf;

/// The caller's decision at the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Proceed
        } else {
            Self::Declined
        }
    }
}

/// What happened to one plan entry.
#[derive(Debug)]
pub enum RenameStatus {
    Renamed,
    /// The file already had its planned name.
    Unchanged,
    Failed(Error),
}

#[derive(Debug)]
pub struct RenameOutcome {
    pub old_filename: String,
    pub new_filename: String,
    pub status: RenameStatus,
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, RenameStatus::Failed(_))
    }
}

/// Result of running the executor.
#[derive(Debug)]
pub enum ExecutionReport {
    /// Confirmation was declined; nothing was touched.
    Declined,
    Completed { outcomes: Vec<RenameOutcome> },
}

impl ExecutionReport {
    pub fn outcomes(&self) -> &[RenameOutcome] {
        match self {
            Self::Declined => &[],
            Self::Completed { outcomes } => outcomes,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes().iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes().iter().filter(|o| !o.is_success()).count()
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }
}

/// Renames files inside one folder.
pub struct Executor<'a> {
    folder: PathBuf,
    reporter: &'a dyn Reporter,
}

impl<'a> Executor<'a> {
    pub fn new(folder: impl Into<PathBuf>, reporter: &'a dyn Reporter) -> Self {
        Self {
            folder: folder.into(),
            reporter,
        }
    }

    /// Apply `plan` if `confirmation` allows it.
    pub fn execute(&self, plan: &RenamePlan, confirmation: Confirmation) -> ExecutionReport {
        if confirmation == Confirmation::Declined {
            tracing::info!("File renaming cancelled");
            return ExecutionReport::Declined;
        }

        let outcomes = plan
            .entries()
            .iter()
            .map(|entry| self.apply(entry))
            .collect();

        ExecutionReport::Completed { outcomes }
    }

    fn apply(&self, entry: &PlanEntry) -> RenameOutcome {
        let old = entry.old_filename.as_str();
        let new = entry.new_filename.as_str();

        let status = if old == new {
            self.reporter.report(&Event::Unchanged { filename: old });
            RenameStatus::Unchanged
        } else {
            match self.rename(old, new) {
                Ok(()) => {
                    self.reporter.report(&Event::Renamed { old, new });
                    RenameStatus::Renamed
                }
                Err(source) => {
                    let err = Error::RenameFailure {
                        old: old.to_string(),
                        new: new.to_string(),
                        source,
                    };
                    self.reporter.report(&Event::Failure(&err));
                    RenameStatus::Failed(err)
                }
            }
        };

        RenameOutcome {
            old_filename: entry.old_filename.clone(),
            new_filename: entry.new_filename.clone(),
            status,
        }
    }

    fn rename(&self, old: &str, new: &str) -> io::Result<()> {
        let old_path = self.folder.join(old);
        let new_path = self.folder.join(new);

        // rename(2) silently replaces an existing target on Unix
        if new_path.symlink_metadata().is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", new_path.display()),
            ));
        }

        std::fs::rename(&old_path, &new_path)
    }
}
