//! Event reporting for the renaming pipeline.
//!
//! Components never log through global state. Each one borrows a
//! [`Reporter`] owned by the caller and emits [`Event`]s into it. The binary
//! uses [`TracingReporter`]; tests use [`RecordingReporter`] to assert on
//! what was reported.

use crate::error::{Error, ErrorKind};
use crate::types::FileRecord;
use std::cell::RefCell;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;

/// Severity attached to an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Something worth telling the operator about.
#[derive(Debug)]
pub enum Event<'a> {
    ConfigLoaded { path: &'a Path },
    ScanStarted { folder: &'a Path },
    FileSkipped { filename: &'a str },
    FileScanned { record: &'a FileRecord },
    ScanFinished { folder: &'a Path, matched: usize },
    DuplicateOrdinal { ordinal: u64, filenames: Vec<&'a str> },
    MissingOrdinals { missing: &'a [RangeInclusive<u64>] },
    Renamed { old: &'a str, new: &'a str },
    Unchanged { filename: &'a str },
    Failure(&'a Error),
}

impl Event<'_> {
    /// Severity of the event.
    pub fn severity(&self) -> Severity {
        match self {
            Event::FileSkipped { .. } | Event::FileScanned { .. } => Severity::Debug,
            Event::DuplicateOrdinal { .. } => Severity::Warn,
            Event::Failure(err) if err.is_recoverable() => Severity::Warn,
            Event::Failure(_) => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Error kind, for failure events.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Event::Failure(err) => Some(err.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ConfigLoaded { path } => write!(f, "Loaded configuration from {}", path.display()),
            Event::ScanStarted { folder } => write!(f, "Scanning directory: {}", folder.display()),
            Event::FileSkipped { filename } => {
                write!(f, "Skipping {}: no ordinal before suffix", filename)
            }
            Event::FileScanned { record } => write!(
                f,
                "Scanned {} (ordinal {}, {}s, {})",
                record.filename, record.ordinal, record.duration_seconds, record.size_class
            ),
            Event::ScanFinished { folder, matched } => write!(
                f,
                "Scan complete: {} matching files in {}",
                matched,
                folder.display()
            ),
            Event::DuplicateOrdinal { ordinal, filenames } => write!(
                f,
                "Duplicate number detected for {}. Ignoring files: {}",
                ordinal,
                filenames.join(", ")
            ),
            Event::MissingOrdinals { missing } => {
                write!(f, "Missing numbers detected: {}", format_ranges(missing))
            }
            Event::Renamed { old, new } => write!(f, "Renamed {} to {}", old, new),
            Event::Unchanged { filename } => write!(f, "{} already has its planned name", filename),
            Event::Failure(err) => write!(f, "{}", err),
        }
    }
}

/// Sink for pipeline events.
pub trait Reporter {
    fn report(&self, event: &Event<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &Event<'_>) {
        (**self).report(event)
    }
}

/// Forwards events to `tracing` at their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &Event<'_>) {
        match (event.severity(), event.error_kind()) {
            (Severity::Debug, _) => tracing::debug!("{}", event),
            (Severity::Info, _) => tracing::info!("{}", event),
            (Severity::Warn, Some(kind)) => tracing::warn!(?kind, "{}", event),
            (Severity::Warn, None) => tracing::warn!("{}", event),
            (Severity::Error, kind) => tracing::error!(?kind, "{}", event),
        }
    }
}

/// A reported event captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub severity: Severity,
    pub kind: Option<ErrorKind>,
    pub message: String,
}

/// Collects events in memory so headless callers can inspect them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<RecordedEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events reported so far, in order.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Number of failure events of the given kind.
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.kind == Some(kind))
            .count()
    }

    /// Whether any event message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.events.borrow().iter().any(|e| e.message.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &Event<'_>) {
        self.events.borrow_mut().push(RecordedEvent {
            severity: event.severity(),
            kind: event.error_kind(),
            message: event.to_string(),
        });
    }
}

/// Render inclusive ranges compactly, e.g. `2-4, 7`.
pub fn format_ranges(ranges: &[RangeInclusive<u64>]) -> String {
    ranges
        .iter()
        .map(|range| {
            if range.start() == range.end() {
                range.start().to_string()
            } else {
                format!("{}-{}", range.start(), range.end())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceReport;
    use std::io;

    #[test]
    fn test_format_ranges() {
        assert_eq!(format_ranges(&[]), "");
        assert_eq!(format_ranges(&[2..=2]), "2");
        assert_eq!(format_ranges(&[2..=4, 7..=7]), "2-4, 7");
        assert_eq!(format_ranges(&[1..=u64::MAX - 1]), format!("1-{}", u64::MAX - 1));
    }

    #[test]
    fn test_format_ranges_from_sequence_report() {
        let report = SequenceReport::analyze(&[1, 5, 6, 10, 10]);
        assert_eq!(format_ranges(report.missing_ranges()), "2-4, 7-9");

        let event = Event::MissingOrdinals {
            missing: report.missing_ranges(),
        };
        assert_eq!(event.to_string(), "Missing numbers detected: 2-4, 7-9");
    }

    #[test]
    fn test_gaps_are_informational_duplicates_warn() {
        let gaps = [2..=2];
        let missing = Event::MissingOrdinals { missing: &gaps };
        assert_eq!(missing.severity(), Severity::Info);
        assert_eq!(missing.error_kind(), None);

        let duplicate = Event::DuplicateOrdinal {
            ordinal: 1,
            filenames: vec!["a_1.mp4", "b_1.mp4"],
        };
        assert_eq!(duplicate.severity(), Severity::Warn);
    }

    #[test]
    fn test_recording_reporter_captures_failures() {
        let reporter = RecordingReporter::new();
        let err = Error::RenameFailure {
            old: "a_001.mp4".into(),
            new: "b.mp4".into(),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        reporter.report(&Event::Failure(&err));
        reporter.report(&Event::Renamed {
            old: "c_003.mp4",
            new: "d.mp4",
        });

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].severity, Severity::Warn);
        assert_eq!(events[0].kind, Some(ErrorKind::RenameFailure));
        assert_eq!(reporter.count_kind(ErrorKind::RenameFailure), 1);
        assert!(reporter.contains("Renamed c_003.mp4 to d.mp4"));
    }

    #[test]
    fn test_invariant_violation_is_error_severity() {
        let err = Error::InternalInvariantViolation {
            target: "x.mp4".into(),
            first: "a".into(),
            second: "b".into(),
        };
        assert_eq!(Event::Failure(&err).severity(), Severity::Error);
    }

    #[test]
    fn test_duplicate_message() {
        let event = Event::DuplicateOrdinal {
            ordinal: 1,
            filenames: vec!["a_1.mp4", "b_1.mp4"],
        };
        assert_eq!(
            event.to_string(),
            "Duplicate number detected for 1. Ignoring files: a_1.mp4, b_1.mp4"
        );
        assert_eq!(event.severity(), Severity::Warn);
    }
}
