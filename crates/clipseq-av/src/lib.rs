//! # clipseq-av
//!
//! Media helpers for clipseq.
//!
//! This crate provides functionality for:
//! - Probing a media file for its play length in whole seconds
//! - Detecting ffprobe and mediainfo, the tools the probes shell out to
//! - Substituting `{var}` placeholders in filename templates
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use clipseq_av::{CliProbe, DurationProbe};
//! use std::path::Path;
//!
//! let probe = CliProbe::default();
//! let secs = probe.duration_secs(Path::new("/clips/take_001.mp4"))?;
//! println!("Length: {}s", secs);
//! # Ok::<(), clipseq_av::Error>(())
//! ```

mod error;
pub mod probe;
pub mod template;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use probe::{CliProbe, DurationProbe};
pub use template::TemplateContext;
pub use tools::{check_tools, ProbeTool, ToolStatus};

use serde::{Deserialize, Serialize};

/// Backend to use for probing media files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeBackend {
    /// Try mediainfo, then ffprobe
    #[default]
    Auto,
    /// Use ffprobe CLI (parses JSON output)
    Ffprobe,
    /// Use mediainfo CLI (parses JSON output)
    #[serde(rename = "mediainfo")]
    MediaInfo,
}

impl std::str::FromStr for ProbeBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "ffprobe" => Ok(Self::Ffprobe),
            "mediainfo" => Ok(Self::MediaInfo),
            other => Err(Error::parse_error(
                "backend",
                format!("unknown probe backend '{}'", other),
            )),
        }
    }
}
