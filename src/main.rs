mod cli;
mod confirm;

use clipseq::config::{self, Config};
use clipseq::report::format_ranges;
use clipseq::{
    Confirmation, FsLister, Pipeline, RenamePlan, RenameStatus, Reporter, TracingReporter,
};
use clipseq_av::{CliProbe, DurationProbe};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PlanArgs};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "clipseq=trace,clipseq_av=debug".to_string()
        } else {
            "clipseq=info,clipseq_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let reporter = TracingReporter;

    match cli.command {
        Commands::Rename { plan, yes, dry_run } => {
            let config = resolve_config(cli.config.as_deref(), &plan, &reporter)?;
            rename_files(&config, &reporter, yes, dry_run)
        }
        Commands::Plan { plan, json } => {
            let config = resolve_config(cli.config.as_deref(), &plan, &reporter)?;
            show_plan(&config, &reporter, json)
        }
        Commands::Probe { file, backend } => {
            let config = config::load_config_or_default(cli.config.as_deref(), &reporter);
            probe_file(&file, backend.unwrap_or(config.probe.backend))
        }
        Commands::CheckTools => check_tools(),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("clipseq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn resolve_config(
    config_path: Option<&Path>,
    overrides: &PlanArgs,
    reporter: &dyn Reporter,
) -> Result<Config> {
    let mut config = config::load_config_or_default(config_path, reporter);
    overrides.apply(&mut config)?;
    tracing::info!("Using folder_path: {:?}", config.folder_path);
    Ok(config)
}

fn build_plan(pipeline: &Pipeline<'_>) -> Result<RenamePlan> {
    pipeline
        .plan()
        .context("Refusing to rename: the plan is inconsistent")
}

fn rename_files(config: &Config, reporter: &dyn Reporter, yes: bool, dry_run: bool) -> Result<()> {
    let probe = CliProbe::new(config.probe.backend);
    let pipeline = Pipeline::new(config, &FsLister, &probe, reporter);
    let plan = build_plan(&pipeline)?;

    if plan.is_empty() {
        println!("No files to rename in {}", config.folder_path.display());
        return Ok(());
    }

    print_preview(&plan);

    if dry_run {
        println!("\n[DRY RUN] Would rename {} files", plan.len());
        return Ok(());
    }

    let confirmation = if yes {
        Confirmation::Proceed
    } else {
        Confirmation::from(confirm::ask_stdin("\nDo you want to rename the files?")?)
    };

    let report = pipeline.execute(&plan, confirmation);

    if report.is_declined() {
        println!("File renaming cancelled.");
        return Ok(());
    }

    for outcome in report.outcomes() {
        match &outcome.status {
            RenameStatus::Renamed => {
                println!("✓ {} -> {}", outcome.old_filename, outcome.new_filename)
            }
            RenameStatus::Unchanged => println!("= {} (unchanged)", outcome.old_filename),
            RenameStatus::Failed(err) => println!("✗ {}", err),
        }
    }

    println!(
        "\nFile renaming completed: {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );

    if report.failed() > 0 {
        anyhow::bail!("{} of {} renames failed", report.failed(), plan.len());
    }

    Ok(())
}

fn show_plan(config: &Config, reporter: &dyn Reporter, json: bool) -> Result<()> {
    let probe = CliProbe::new(config.probe.backend);
    let pipeline = Pipeline::new(config, &FsLister, &probe, reporter);
    let plan = build_plan(&pipeline)?;

    if json {
        let json_str = serde_json::to_string_pretty(&plan)?;
        println!("{}", json_str);
        return Ok(());
    }

    if plan.is_empty() {
        println!("No files to rename in {}", config.folder_path.display());
    } else {
        print_preview(&plan);
    }

    let report = plan.report();
    println!();
    if report.duplicate_ordinals.is_empty() {
        println!("Duplicates: none");
    } else {
        let dups: Vec<String> = report
            .duplicate_ordinals
            .iter()
            .map(|o| o.to_string())
            .collect();
        println!(
            "Duplicates: {} ({} files excluded)",
            dups.join(", "),
            plan.excluded()
        );
    }
    if report.has_gaps() {
        println!(
            "Missing: {} ({} numbers)",
            format_ranges(report.missing_ranges()),
            report.missing_count()
        );
    } else {
        println!("Missing: none");
    }

    Ok(())
}

fn print_preview(plan: &RenamePlan) {
    println!("Proposed file renames (excluding duplicates):");
    for entry in plan.entries() {
        println!("  {} -> {}", entry.old_filename, entry.new_filename);
    }
}

fn probe_file(file: &Path, backend: clipseq_av::ProbeBackend) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let probe = CliProbe::new(backend);
    let secs = probe
        .duration_secs(file)
        .with_context(|| format!("Failed to probe {:?}", file))?;

    println!("File: {}", file.display());
    println!("Backend: {:?}", probe.backend());
    println!("Duration: {}s", secs);
    Ok(())
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = clipseq_av::check_tools();
    let mut any_ok = false;

    for status in &tools {
        let mark = if status.is_available() {
            any_ok = true;
            "✓"
        } else {
            "✗"
        };

        print!("{} {}", mark, status.tool);

        if let Some(ref version) = status.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = status.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if any_ok {
        println!("Duration probing is available.");
    } else {
        println!("No probe tools found. Install ffprobe or mediainfo; durations will be recorded as 0.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Folder: {}", config.folder_path.display());
            println!("  Large file marker: {}s", config.large_file_marker);
            println!("  Template: {}", config.filename_template);
            println!("  Numbering: {:?}", config.numbering.policy);
            println!("  Probe backend: {:?}", config.probe.backend);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            println!("Default config:");
            println!("  Template: {}", config.filename_template);
            println!("  Large file marker: {}s", config.large_file_marker);
        }
    }

    Ok(())
}
