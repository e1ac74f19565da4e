//! Clipseq - sequence-numbered clip renamer
//!
//! Scans a folder of `.mp4` clips whose names end in a number, checks the
//! numbers for duplicates and gaps, and renames the clips onto a dense,
//! template-formatted sequence.
//!
//! This library crate exposes the pipeline for the binary and for
//! integration testing.

pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod planner;
pub mod report;
pub mod scanner;
pub mod sequence;
pub mod types;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use executor::{Confirmation, ExecutionReport, Executor, RenameOutcome, RenameStatus};
pub use pipeline::Pipeline;
pub use planner::{PlanEntry, Planner, RenamePlan};
pub use report::{Event, RecordingReporter, Reporter, TracingReporter};
pub use scanner::{DirectoryLister, FsLister, Scanner};
pub use sequence::SequenceReport;
pub use types::{FileRecord, SizeClass};
