//! Error taxonomy for the renaming pipeline.
//!
//! Every failure the pipeline can observe maps onto one [`Error`] variant.
//! Each variant carries the file, ordinal or path it concerns, so callers
//! branch on [`Error::kind`] instead of message text.

use serde::Serialize;
use std::path::PathBuf;

/// Result type alias using the pipeline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while loading config, scanning, planning or renaming.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration was missing, unreadable, malformed or invalid.
    #[error("configuration unavailable ({}): {reason}", path.display())]
    ConfigUnavailable {
        /// The config file that was attempted.
        path: PathBuf,
        /// Why it could not be used.
        reason: String,
    },

    /// The media folder could not be listed.
    #[error("failed to list directory {}: {source}", path.display())]
    DirectoryList {
        /// The folder being scanned.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A clip's duration could not be probed.
    #[error("failed to probe duration of {filename}: {source}")]
    ProbeFailure {
        /// The clip that failed to probe.
        filename: String,
        /// The underlying probe error.
        #[source]
        source: clipseq_av::Error,
    },

    /// Two plan entries would produce the same target filename.
    #[error("planned name {target} is produced by both {first} and {second}")]
    InternalInvariantViolation {
        /// The colliding target filename.
        target: String,
        /// Source of the first entry producing `target`.
        first: String,
        /// Source of the second entry producing `target`.
        second: String,
    },

    /// A single rename did not complete.
    #[error("failed to rename {old} to {new}: {source}")]
    RenameFailure {
        /// The original filename.
        old: String,
        /// The planned filename.
        new: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Discriminant of [`Error`], for branching without matching on fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfigUnavailable,
    DirectoryList,
    ProbeFailure,
    InternalInvariantViolation,
    RenameFailure,
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigUnavailable { .. } => ErrorKind::ConfigUnavailable,
            Self::DirectoryList { .. } => ErrorKind::DirectoryList,
            Self::ProbeFailure { .. } => ErrorKind::ProbeFailure,
            Self::InternalInvariantViolation { .. } => ErrorKind::InternalInvariantViolation,
            Self::RenameFailure { .. } => ErrorKind::RenameFailure,
        }
    }

    /// Whether processing continues after this error.
    ///
    /// Only a planner collision stops the run; everything else degrades to
    /// defaults, an empty scan, a zero duration or a single failed entry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalInvariantViolation { .. })
    }

    /// Create a config unavailable error.
    pub fn config_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = Error::config_unavailable("/etc/clipseq.toml", "missing field");
        assert_eq!(
            err.to_string(),
            "configuration unavailable (/etc/clipseq.toml): missing field"
        );

        let err = Error::InternalInvariantViolation {
            target: "x.mp4".into(),
            first: "a_001.mp4".into(),
            second: "b_002.mp4".into(),
        };
        assert_eq!(
            err.to_string(),
            "planned name x.mp4 is produced by both a_001.mp4 and b_002.mp4"
        );

        let err = Error::RenameFailure {
            old: "a_001.mp4".into(),
            new: "b.mp4".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to rename a_001.mp4 to b.mp4: denied");
    }

    #[test]
    fn test_kind_and_recoverability() {
        let err = Error::DirectoryList {
            path: "/clips".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), ErrorKind::DirectoryList);
        assert!(err.is_recoverable());

        let err = Error::ProbeFailure {
            filename: "a_001.mp4".into(),
            source: clipseq_av::Error::tool_not_found("ffprobe"),
        };
        assert_eq!(err.kind(), ErrorKind::ProbeFailure);
        assert!(err.is_recoverable());

        let err = Error::InternalInvariantViolation {
            target: "x.mp4".into(),
            first: "a".into(),
            second: "b".into(),
        };
        assert_eq!(err.kind(), ErrorKind::InternalInvariantViolation);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = Error::ProbeFailure {
            filename: "a_001.mp4".into(),
            source: clipseq_av::Error::tool_not_found("ffprobe"),
        };
        let source = err.source().expect("probe failure has a source");
        assert_eq!(source.to_string(), "tool not found: ffprobe");
    }
}
