use clap::{Args, Parser, Subcommand};
use clipseq::config::{self, Config, NumberingPolicy};
use clipseq_av::ProbeBackend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipseq")]
#[command(author, version, about = "Validate and renumber sequence-numbered media clips")]
pub struct Cli {
    /// Path to config file (TOML, or JSON with a .json extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides applied on top of the loaded config.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Folder holding the clips (overrides folder_path)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Seconds above which a clip is marked large (overrides large_file_marker)
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Filename template (overrides filename_template)
    #[arg(long)]
    pub template: Option<String>,

    /// Numbering policy: dense or preserve
    #[arg(long)]
    pub policy: Option<NumberingPolicy>,
}

impl PlanArgs {
    /// Apply the overrides, validating any template given on the command line.
    pub fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(folder) = &self.folder {
            config.folder_path = folder.clone();
        }
        if let Some(threshold) = self.threshold {
            config.large_file_marker = threshold;
        }
        if let Some(template) = &self.template {
            config::validate_template(template).map_err(anyhow::Error::msg)?;
            config.filename_template = template.clone();
        }
        if let Some(policy) = self.policy {
            config.numbering.policy = policy;
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan, preview and rename the clips in a folder
    Rename {
        #[command(flatten)]
        plan: PlanArgs,

        /// Rename without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Show what would be done without renaming
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the rename plan and sequence report without renaming
    Plan {
        #[command(flatten)]
        plan: PlanArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe a media file and display its duration
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Probe backend: auto, ffprobe or mediainfo
        #[arg(long)]
        backend: Option<ProbeBackend>,
    },

    /// Check that the probing tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
