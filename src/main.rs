use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;

use phototidy::cleaner::trash;
use phototidy::cli::args::{Cli, Commands, OutputFormat};
use phototidy::cli::output;
use phototidy::common::config::{ensure_dirs_exist, FilterRawConfig, FlattenConfig};
use phototidy::common::logging;
use phototidy::flatten::{self, FlattenOptions};
use phototidy::raw::{self, FilterOptions};
use phototidy::scanner::{ExtensionSet, PrefixSet};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::FilterRaw { ref config, dry_run } => cmd_filter_raw(&cli, config, dry_run),

        Commands::Flatten { ref config, dry_run } => cmd_flatten(&cli, config, dry_run),

        Commands::Completions { ref shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                phototidy::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                phototidy::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                phototidy::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "phototidy", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn show_progress(cli: &Cli) -> bool {
    !cli.quiet && !cli.verbose && matches!(cli.format, OutputFormat::Human)
}

// ─── Filter RAW ───────────────────────────────────────────────────────────────

fn cmd_filter_raw(cli: &Cli, config_path: &Path, dry_run: bool) -> Result<()> {
    let config = FilterRawConfig::load(config_path)?;
    let _guard = logging::init(cli.verbose, cli.quiet, config.log_file.as_deref())?;

    ensure_dirs_exist(&config.required_dirs())?;

    info!("Gathering JPEG names from {}", config.jpg_dir.display());
    let (names, counters) = raw::collect_names(
        &config.jpg_dir,
        &PrefixSet::new(&config.camera_prefixes),
        &ExtensionSet::new(&config.jpg_exts),
    )
    .with_context(|| format!("Failed to scan JPEG tree: {}", config.jpg_dir.display()))?;
    info!(
        "JPEG counts: total {}, camera {}, unique camera {}",
        counters.total_matched, counters.prefix_matched, counters.unique_names
    );

    let trasher = trash::from_config(config.trash_dir.as_deref());
    let options = FilterOptions {
        dry_run,
        exclude: config.trash_dir.clone(),
        show_progress: show_progress(cli),
    };

    info!("Filtering RAW files in {}", config.raw_dir.display());
    let report = raw::filter_raw(
        &config.raw_dir,
        &ExtensionSet::new(&config.raw_exts),
        &names,
        trasher.as_ref(),
        &options,
    )
    .with_context(|| format!("Failed to scan RAW tree: {}", config.raw_dir.display()))?;
    info!(
        "RAW counts: kept {}, deleted {}, failed to delete {}",
        report.kept, report.deleted, report.failed
    );

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                output::print_filter_raw_report(&counters, &report);
            }
        }
        OutputFormat::Json => output::print_filter_raw_json(&counters, &report),
        OutputFormat::Quiet => output::print_filter_raw_quiet(&counters, &report),
    }

    Ok(())
}

// ─── Flatten ──────────────────────────────────────────────────────────────────

fn cmd_flatten(cli: &Cli, config_path: &Path, dry_run: bool) -> Result<()> {
    let config = FlattenConfig::load(config_path)?;
    let _guard = logging::init(cli.verbose, cli.quiet, config.log_file.as_deref())?;

    ensure_dirs_exist(&config.required_dirs())?;

    let options = FlattenOptions {
        pad_width: config.number_of_digits,
        dry_run,
        show_progress: show_progress(cli),
    };

    info!(
        "Flattening {} into {}",
        config.input_dir.display(),
        config.output_dir.display()
    );
    let report = flatten::flatten(
        &config.input_dir,
        &config.output_dir,
        &ExtensionSet::new(&config.jpg_exts),
        &options,
    )
    .with_context(|| format!("Failed to scan input tree: {}", config.input_dir.display()))?;
    info!(
        "Flatten counts: matched {}, moved {}, failed {}",
        report.matched, report.moved, report.failed
    );

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                output::print_flatten_report(&report, dry_run);
            }
        }
        OutputFormat::Json => output::print_flatten_json(&report),
        OutputFormat::Quiet => output::print_flatten_quiet(&report),
    }

    Ok(())
}
