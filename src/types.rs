//! Core record types shared by the scanner, planner and executor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix every candidate clip must carry; also appended to planned names.
pub const VIDEO_SUFFIX: &str = ".mp4";

/// Large/Small tag derived from a clip's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Large,
    Small,
}

impl SizeClass {
    /// Classify a duration against the large-file threshold.
    ///
    /// Strictly greater than the threshold is `Large`. The threshold is
    /// signed, so a negative value makes every clip `Large`.
    pub fn classify(duration_seconds: u64, large_file_marker: i64) -> Self {
        if i128::from(duration_seconds) > i128::from(large_file_marker) {
            Self::Large
        } else {
            Self::Small
        }
    }

    /// Single-letter marker used in filenames.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Large => "L",
            Self::Small => "S",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// One matched clip, produced once per scan and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Original filename, unique within a scan.
    pub filename: String,
    /// Number parsed from the digits right before the suffix.
    pub ordinal: u64,
    /// Probed play length; 0 when probing failed.
    pub duration_seconds: u64,
    pub size_class: SizeClass,
    /// `YYYYMMDD` stamp shared by every record of one scan.
    pub date_tag: String,
}
