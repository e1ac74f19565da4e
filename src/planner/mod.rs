//! Renaming planner.
//!
//! Turns scanned records into an ordered list of `old -> new` filename
//! mappings. Records sharing an ordinal are dropped entirely, survivors are
//! renumbered in ordinal order, and the result is rejected outright if two
//! entries would land on the same name.

mod naming;

pub use naming::FilenameFormatter;

use crate::config::{Config, NumberingConfig, NumberingPolicy};
use crate::error::{Error, Result};
use crate::report::{Event, Reporter};
use crate::sequence::SequenceReport;
use crate::types::FileRecord;
use serde::Serialize;
use std::collections::HashMap;

/// One proposed rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub record: FileRecord,
    pub old_filename: String,
    pub new_filename: String,
    /// Number substituted into `{number}`.
    pub new_ordinal: u64,
}

/// Ordered renames plus the sequence report they were planned against.
///
/// Entry order is ascending original ordinal, which is also the preview
/// order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenamePlan {
    entries: Vec<PlanEntry>,
    report: SequenceReport,
    excluded: usize,
}

impl RenamePlan {
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn report(&self) -> &SequenceReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scanned records left out because their ordinal is duplicated.
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

/// Builds [`RenamePlan`]s.
pub struct Planner<'a> {
    formatter: FilenameFormatter,
    numbering: NumberingConfig,
    reporter: &'a dyn Reporter,
}

impl<'a> Planner<'a> {
    pub fn new(
        formatter: FilenameFormatter,
        numbering: NumberingConfig,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            formatter,
            numbering,
            reporter,
        }
    }

    pub fn from_config(config: &Config, reporter: &'a dyn Reporter) -> Self {
        Self::new(
            FilenameFormatter::new(config.filename_template.clone()),
            config.numbering.clone(),
            reporter,
        )
    }

    /// Plan renames for one scan's records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InternalInvariantViolation`] when two entries would
    /// receive the same new filename. No partial plan is returned.
    pub fn plan(&self, records: Vec<FileRecord>) -> Result<RenamePlan> {
        let ordinals: Vec<u64> = records.iter().map(|r| r.ordinal).collect();
        let report = SequenceReport::analyze(&ordinals);

        for &ordinal in &report.duplicate_ordinals {
            let filenames = records
                .iter()
                .filter(|r| r.ordinal == ordinal)
                .map(|r| r.filename.as_str())
                .collect();
            self.reporter
                .report(&Event::DuplicateOrdinal { ordinal, filenames });
        }

        if report.has_gaps() {
            self.reporter.report(&Event::MissingOrdinals {
                missing: report.missing_ranges(),
            });
        }

        let total = records.len();
        let mut survivors: Vec<FileRecord> = records
            .into_iter()
            .filter(|r| !report.is_duplicate(r.ordinal))
            .collect();
        survivors.sort_by_key(|r| r.ordinal);
        let excluded = total - survivors.len();

        let numbers = self.assign_numbers(&survivors);

        let entries: Vec<PlanEntry> = survivors
            .into_iter()
            .zip(numbers)
            .map(|(record, new_ordinal)| PlanEntry {
                old_filename: record.filename.clone(),
                new_filename: self.formatter.format(&record, new_ordinal),
                new_ordinal,
                record,
            })
            .collect();

        self.check_collisions(&entries)?;

        Ok(RenamePlan {
            entries,
            report,
            excluded,
        })
    }

    fn assign_numbers(&self, sorted: &[FileRecord]) -> Vec<u64> {
        match self.numbering.policy {
            NumberingPolicy::Dense => (1..=sorted.len() as u64).collect(),
            NumberingPolicy::Preserve => {
                let shift = match sorted.first() {
                    Some(first) if self.numbering.shift_zero_based && first.ordinal == 0 => 1,
                    _ => 0,
                };
                sorted
                    .iter()
                    .map(|r| r.ordinal.saturating_add(shift))
                    .collect()
            }
        }
    }

    fn check_collisions(&self, entries: &[PlanEntry]) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());

        for entry in entries {
            if let Some(first) = seen.insert(&entry.new_filename, &entry.old_filename) {
                let err = Error::InternalInvariantViolation {
                    target: entry.new_filename.clone(),
                    first: first.to_string(),
                    second: entry.old_filename.clone(),
                };
                self.reporter.report(&Event::Failure(&err));
                return Err(err);
            }
        }
        Ok(())
    }
}
