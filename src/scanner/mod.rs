//! Clip scanner.
//!
//! Lists a folder through a [`DirectoryLister`], keeps regular `.mp4` files
//! whose names end in an ordinal, and probes each one for its duration.

pub mod lister;
pub mod ordinal;

pub use lister::{DirectoryLister, FsLister, ListedEntry};
pub use ordinal::parse_ordinal;

use crate::error::Error;
use crate::report::{Event, Reporter};
use crate::types::{FileRecord, SizeClass, VIDEO_SUFFIX};
use clipseq_av::DurationProbe;
use std::path::Path;

/// Produces [`FileRecord`]s for one folder.
pub struct Scanner<'a> {
    lister: &'a dyn DirectoryLister,
    probe: &'a dyn DurationProbe,
    reporter: &'a dyn Reporter,
    large_file_marker: i64,
    date_tag: Option<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(
        lister: &'a dyn DirectoryLister,
        probe: &'a dyn DurationProbe,
        reporter: &'a dyn Reporter,
        large_file_marker: i64,
    ) -> Self {
        Self {
            lister,
            probe,
            reporter,
            large_file_marker,
            date_tag: None,
        }
    }

    /// Use a fixed date tag instead of today's date.
    pub fn with_date_tag(mut self, date_tag: impl Into<String>) -> Self {
        self.date_tag = Some(date_tag.into());
        self
    }

    /// Scan `folder` for clips.
    ///
    /// A listing failure is reported and yields no records. A probe failure
    /// is reported and the clip is kept with a duration of 0.
    pub fn scan(&self, folder: &Path) -> Vec<FileRecord> {
        self.reporter.report(&Event::ScanStarted { folder });

        let entries = match self.lister.list(folder, VIDEO_SUFFIX) {
            Ok(entries) => entries,
            Err(source) => {
                let err = Error::DirectoryList {
                    path: folder.to_path_buf(),
                    source,
                };
                self.reporter.report(&Event::Failure(&err));
                return Vec::new();
            }
        };

        let date_tag = self
            .date_tag
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y%m%d").to_string());

        let mut records = Vec::new();
        for entry in entries {
            if !entry.is_file || !entry.file_name.ends_with(VIDEO_SUFFIX) {
                continue;
            }

            let Some(ordinal) = parse_ordinal(&entry.file_name) else {
                self.reporter.report(&Event::FileSkipped {
                    filename: &entry.file_name,
                });
                continue;
            };

            let duration_seconds = self.probe_duration(folder, &entry.file_name);

            let record = FileRecord {
                ordinal,
                duration_seconds,
                size_class: SizeClass::classify(duration_seconds, self.large_file_marker),
                date_tag: date_tag.clone(),
                filename: entry.file_name,
            };
            self.reporter.report(&Event::FileScanned { record: &record });
            records.push(record);
        }

        self.reporter.report(&Event::ScanFinished {
            folder,
            matched: records.len(),
        });
        records
    }

    fn probe_duration(&self, folder: &Path, filename: &str) -> u64 {
        match self.probe.duration_secs(&folder.join(filename)) {
            Ok(secs) => secs,
            Err(source) => {
                let err = Error::ProbeFailure {
                    filename: filename.to_string(),
                    source,
                };
                self.reporter.report(&Event::Failure(&err));
                0
            }
        }
    }
}
