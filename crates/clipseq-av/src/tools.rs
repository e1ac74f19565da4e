//! Detection of the command-line tools the duration probes shell out to.

use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// A command-line tool that can report a clip's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTool {
    Ffprobe,
    MediaInfo,
}

impl ProbeTool {
    /// Every supported tool, in the order `check-tools` reports them.
    pub const ALL: [ProbeTool; 2] = [ProbeTool::Ffprobe, ProbeTool::MediaInfo];

    /// Executable name looked up on `PATH`.
    pub fn binary(self) -> &'static str {
        match self {
            ProbeTool::Ffprobe => "ffprobe",
            ProbeTool::MediaInfo => "mediainfo",
        }
    }

    // ffprobe only understands the single-dash form
    fn version_arg(self) -> &'static str {
        match self {
            ProbeTool::Ffprobe => "-version",
            ProbeTool::MediaInfo => "--version",
        }
    }

    /// Path of the executable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] when the tool is not on `PATH`.
    pub fn locate(self) -> Result<PathBuf> {
        which::which(self.binary()).map_err(|_| Error::tool_not_found(self.binary()))
    }

    /// Locate the tool and read its version banner.
    pub fn status(self) -> ToolStatus {
        let path = self.locate().ok();
        let version = path.as_ref().and_then(|path| {
            let output = Command::new(path).arg(self.version_arg()).output().ok()?;
            if !output.status.success() {
                return None;
            }
            first_line(&String::from_utf8_lossy(&output.stdout))
        });

        ToolStatus {
            tool: self,
            path,
            version,
        }
    }
}

impl fmt::Display for ProbeTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Availability of one [`ProbeTool`].
#[derive(Debug, Clone)]
pub struct ToolStatus {
    pub tool: ProbeTool,
    /// Resolved executable, `None` when not installed.
    pub path: Option<PathBuf>,
    /// First non-empty line of the version output.
    pub version: Option<String>,
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }
}

/// Status of every supported probe tool.
pub fn check_tools() -> Vec<ToolStatus> {
    ProbeTool::ALL.into_iter().map(ProbeTool::status).collect()
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
