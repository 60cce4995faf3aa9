use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::common::config::{DEFAULT_FILTER_RAW_CONFIG, DEFAULT_FLATTEN_CONFIG};

/// phototidy: photo library housekeeping
#[derive(Parser, Debug)]
#[command(
    name = "phototidy",
    version,
    about = "Photo library housekeeping for RAW+JPEG shooters",
    long_about = "phototidy prunes RAW files whose JPEG was deleted during culling,\n\
                  and flattens nested JPEG folders into one directory with\n\
                  collision-free sequential names.",
    after_help = "EXAMPLES:\n  \
        phototidy filter-raw --config config/filter_raw.toml            Trash orphaned RAW files\n  \
        phototidy filter-raw --config config/filter_raw.toml --dry-run  Preview what would be trashed\n  \
        phototidy flatten --config config/flatten.toml                  Flatten a JPEG tree\n  \
        phototidy flatten --format json                                 Machine-readable report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (per-file log lines on stderr)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trash RAW files that have no JPEG with the same base name
    FilterRaw {
        /// TOML config file
        #[arg(long, short, default_value = DEFAULT_FILTER_RAW_CONFIG, value_name = "PATH")]
        config: PathBuf,

        /// Show what would be trashed without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Move a nested JPEG tree into one directory with sequential names
    Flatten {
        /// TOML config file
        #[arg(long, short, default_value = DEFAULT_FLATTEN_CONFIG, value_name = "PATH")]
        config: PathBuf,

        /// Show the planned names without moving anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
