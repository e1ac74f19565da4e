//! FFprobe-based duration probing.

use crate::{Error, ProbeTool, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// Probe a media file's duration in fractional seconds using ffprobe.
pub fn probe_duration_with_ffprobe(path: &Path) -> Result<f64> {
    let output = Command::new(ProbeTool::Ffprobe.binary())
        .args(["-v", "quiet", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(ProbeTool::Ffprobe.binary())
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", stderr.to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

    parse_ffprobe_duration(path, &json_str)
}

fn parse_ffprobe_duration(path: &Path, json_str: &str) -> Result<f64> {
    let ff_output: FfprobeOutput = serde_json::from_str(json_str)?;

    let raw = ff_output
        .format
        .duration
        .ok_or_else(|| Error::no_duration("ffprobe", path))?;

    raw.trim()
        .parse::<f64>()
        .map_err(|e| Error::parse_error("ffprobe", format!("bad duration '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        let json = r#"{"format": {"filename": "a_001.mp4", "format_name": "mov,mp4,m4a,3gp,3g2,mj2", "duration": "400.480000"}}"#;
        let secs = parse_ffprobe_duration(Path::new("a_001.mp4"), json).unwrap();
        assert!((secs - 400.48).abs() < 1e-9);
    }

    #[test]
    fn test_parse_missing_duration() {
        let json = r#"{"format": {"filename": "a_001.mp4"}}"#;
        let err = parse_ffprobe_duration(Path::new("a_001.mp4"), json).unwrap_err();
        assert!(matches!(err, Error::NoDuration { .. }));
    }

    #[test]
    fn test_parse_garbage_duration() {
        let json = r#"{"format": {"duration": "N/A"}}"#;
        let err = parse_ffprobe_duration(Path::new("a_001.mp4"), json).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_ffprobe_duration(Path::new("a_001.mp4"), "not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
