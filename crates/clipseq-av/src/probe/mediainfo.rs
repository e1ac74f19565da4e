//! MediaInfo-based duration probing.

use crate::{Error, ProbeTool, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct MediaInfoOutput {
    media: MediaInfoMedia,
}

#[derive(Debug, Deserialize)]
struct MediaInfoMedia {
    track: Vec<MediaInfoTrack>,
}

#[derive(Debug, Deserialize)]
struct MediaInfoTrack {
    #[serde(rename = "@type")]
    track_type: String,
    #[serde(rename = "Duration")]
    duration: Option<String>,
}

/// Probe a media file's duration in fractional seconds using mediainfo.
pub fn probe_duration_with_mediainfo(path: &Path) -> Result<f64> {
    let output = Command::new(ProbeTool::MediaInfo.binary())
        .args(["--Output=JSON"])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(ProbeTool::MediaInfo.binary())
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("mediainfo", stderr.to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("mediainfo", format!("Invalid UTF-8: {}", e)))?;

    parse_mediainfo_duration(path, &json_str)
}

fn parse_mediainfo_duration(path: &Path, json_str: &str) -> Result<f64> {
    let mi_output: MediaInfoOutput = serde_json::from_str(json_str)?;

    // General track first; fall back to the first video track
    let duration = mi_output
        .media
        .track
        .iter()
        .find(|t| t.track_type == "General")
        .and_then(|t| t.duration.as_deref())
        .or_else(|| {
            mi_output
                .media
                .track
                .iter()
                .find(|t| t.track_type == "Video")
                .and_then(|t| t.duration.as_deref())
        })
        .ok_or_else(|| Error::no_duration("mediainfo", path))?;

    duration
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::parse_error("mediainfo", format!("bad duration '{}': {}", duration, e)))
}
