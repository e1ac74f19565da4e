use clipseq_av::ProbeBackend;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Default filename template.
pub const DEFAULT_FILENAME_TEMPLATE: &str = "{date}_{size_marker}_{number}_{length_seconds}";

/// Placeholders a filename template may use.
pub const TEMPLATE_VARIABLES: &[&str] = &["date", "size_marker", "number", "length_seconds"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Folder holding the clips to rename.
    #[serde(default)]
    pub folder_path: PathBuf,

    /// Clips longer than this many seconds are marked `L`, others `S`.
    #[serde(default)]
    pub large_file_marker: i64,

    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    #[serde(default)]
    pub numbering: NumberingConfig,

    #[serde(default)]
    pub probe: ProbeConfig,
}

fn default_filename_template() -> String {
    DEFAULT_FILENAME_TEMPLATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder_path: PathBuf::new(),
            large_file_marker: 0,
            filename_template: default_filename_template(),
            numbering: NumberingConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NumberingConfig {
    #[serde(default)]
    pub policy: NumberingPolicy,

    /// With `preserve`, add 1 to every number when the lowest is 0.
    #[serde(default)]
    pub shift_zero_based: bool,
}

/// How planned numbers relate to the original ordinals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingPolicy {
    /// Renumber 1..=k in ordinal order, closing every gap.
    #[default]
    Dense,
    /// Keep each clip's original ordinal.
    Preserve,
}

impl FromStr for NumberingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(Self::Dense),
            "preserve" => Ok(Self::Preserve),
            other => Err(format!(
                "unknown numbering policy '{}' (expected dense or preserve)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub backend: ProbeBackend,
}
