//! Shared fixtures for integration tests.
//!
//! [`ClipDir`] creates a throwaway folder of empty clip files, and
//! [`DurationTable`] stands in for ffprobe/mediainfo so tests never depend
//! on installed tools.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clipseq::Config;
use clipseq_av::DurationProbe;
use tempfile::TempDir;

/// Date stamp used by every test pipeline.
pub const TEST_DATE: &str = "20240501";

/// Temporary folder populated with empty files.
pub struct ClipDir {
    dir: TempDir,
}

impl ClipDir {
    pub fn new(files: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for name in files {
            fs::write(dir.path().join(name), b"").expect("failed to create clip");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Sorted names of every entry in the folder.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("failed to read temp dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Config pointing at this folder with the given threshold.
    pub fn config(&self, large_file_marker: i64) -> Config {
        Config {
            folder_path: self.path().to_path_buf(),
            large_file_marker,
            ..Config::default()
        }
    }
}

/// Probe answering from a filename -> seconds table; unknown files fail.
#[derive(Default)]
pub struct DurationTable {
    durations: HashMap<String, u64>,
}

impl DurationTable {
    pub fn new(entries: &[(&str, u64)]) -> Self {
        Self {
            durations: entries
                .iter()
                .map(|(name, secs)| (name.to_string(), *secs))
                .collect(),
        }
    }
}

impl DurationProbe for DurationTable {
    fn duration_secs(&self, path: &Path) -> clipseq_av::Result<u64> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.durations
            .get(&name)
            .copied()
            .ok_or_else(|| clipseq_av::Error::tool_failed("fake", format!("no duration for {name}")))
    }
}
