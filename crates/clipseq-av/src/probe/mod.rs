//! Media duration probing.
//!
//! The scanner only needs a clip's play length, so probing is reduced to a
//! single [`DurationProbe`] seam with CLI-backed implementations:
//!
//! - **mediainfo**: reads the `General` track duration
//! - **ffprobe**: reads `format.duration`

mod ffprobe;
mod mediainfo;

pub use ffprobe::probe_duration_with_ffprobe;
pub use mediainfo::probe_duration_with_mediainfo;

use crate::{Error, ProbeBackend, ProbeTool, Result};
use std::path::Path;

/// Something that can report a media file's play length.
pub trait DurationProbe {
    /// Duration of the file at `path` in whole seconds.
    fn duration_secs(&self, path: &Path) -> Result<u64>;
}

impl<F> DurationProbe for F
where
    F: Fn(&Path) -> Result<u64>,
{
    fn duration_secs(&self, path: &Path) -> Result<u64> {
        self(path)
    }
}

/// Duration probe backed by the ffprobe / mediainfo command-line tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliProbe {
    backend: ProbeBackend,
}

impl CliProbe {
    /// Create a probe that uses a specific backend.
    pub fn new(backend: ProbeBackend) -> Self {
        Self { backend }
    }

    /// The configured backend.
    pub fn backend(&self) -> ProbeBackend {
        self.backend
    }
}

impl DurationProbe for CliProbe {
    fn duration_secs(&self, path: &Path) -> Result<u64> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let secs = match self.backend {
            ProbeBackend::Auto => {
                // mediainfo is preferred when installed, ffprobe otherwise
                match ProbeTool::MediaInfo.locate() {
                    Ok(_) => probe_duration_with_mediainfo(path)
                        .or_else(|_| probe_duration_with_ffprobe(path))?,
                    Err(_) => probe_duration_with_ffprobe(path)?,
                }
            }
            ProbeBackend::Ffprobe => probe_duration_with_ffprobe(path)?,
            ProbeBackend::MediaInfo => probe_duration_with_mediainfo(path)?,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!("Probed {:?}: {:.3}s", path, secs);

        whole_seconds(secs).ok_or_else(|| {
            Error::parse_error("duration", format!("invalid duration value {}", secs))
        })
    }
}

/// Round fractional seconds to whole seconds, ties to even.
///
/// Returns `None` for negative or non-finite input.
pub fn whole_seconds(secs: f64) -> Option<u64> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(secs.round_ties_even() as u64)
}
