//! Directory enumeration for the scanner.

use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// A directory entry whose name passed the suffix filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub file_name: String,
    /// True for regular files, including symlinks that resolve to one.
    pub is_file: bool,
}

/// Lists the entries of a directory that match a suffix filter.
pub trait DirectoryLister {
    /// Entries of `dir` whose names end with `suffix`, sorted by name.
    fn list(&self, dir: &Path, suffix: &str) -> io::Result<Vec<ListedEntry>>;
}

/// Non-recursive lister over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path, suffix: &str) -> io::Result<Vec<ListedEntry>> {
        if !std::fs::metadata(dir)?.is_dir() {
            return Err(io::Error::other(format!("{} is not a directory", dir.display())));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, err);
                    continue;
                }
            };

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::debug!("Skipping non-UTF-8 filename {:?}", entry.file_name());
                continue;
            };

            if !file_name.ends_with(suffix) {
                continue;
            }

            entries.push(ListedEntry {
                file_name: file_name.to_string(),
                is_file: entry.path().is_file(),
            });
        }

        Ok(entries)
    }
}
