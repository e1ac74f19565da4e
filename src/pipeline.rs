//! One end-to-end renaming run.
//!
//! [`Pipeline`] wires config, scanner, planner and executor together. The
//! confirmation decision stays with the caller: [`Pipeline::plan`] produces
//! the preview and [`Pipeline::execute`] applies it once the caller has
//! made up its mind.

use crate::config::Config;
use crate::error::Result;
use crate::executor::{Confirmation, ExecutionReport, Executor};
use crate::planner::{Planner, RenamePlan};
use crate::report::Reporter;
use crate::scanner::{DirectoryLister, Scanner};
use crate::types::FileRecord;
use clipseq_av::DurationProbe;

pub struct Pipeline<'a> {
    config: &'a Config,
    lister: &'a dyn DirectoryLister,
    probe: &'a dyn DurationProbe,
    reporter: &'a dyn Reporter,
    date_tag: Option<String>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        lister: &'a dyn DirectoryLister,
        probe: &'a dyn DurationProbe,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            lister,
            probe,
            reporter,
            date_tag: None,
        }
    }

    /// Stamp records with a fixed date instead of today's.
    pub fn with_date_tag(mut self, date_tag: impl Into<String>) -> Self {
        self.date_tag = Some(date_tag.into());
        self
    }

    pub fn scan(&self) -> Vec<FileRecord> {
        let mut scanner = Scanner::new(
            self.lister,
            self.probe,
            self.reporter,
            self.config.large_file_marker,
        );
        if let Some(tag) = &self.date_tag {
            scanner = scanner.with_date_tag(tag.clone());
        }
        scanner.scan(&self.config.folder_path)
    }

    /// Scan the configured folder and plan its renames.
    pub fn plan(&self) -> Result<RenamePlan> {
        let records = self.scan();
        Planner::from_config(self.config, self.reporter).plan(records)
    }

    pub fn execute(&self, plan: &RenamePlan, confirmation: Confirmation) -> ExecutionReport {
        Executor::new(&self.config.folder_path, self.reporter).execute(plan, confirmation)
    }
}
