use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::namer::PrefixCounterTable;
use crate::cleaner::transfer;
use crate::common::errors::{PhotoError, Result};
use crate::common::progress;
use crate::scanner::{ensure_root, ExtensionSet, FileWalker};

/// Knobs for a flatten run
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Zero-padding width of the sequence number
    pub pad_width: usize,
    /// Compute names without moving anything
    pub dry_run: bool,
    pub show_progress: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            pad_width: 2,
            dry_run: false,
            show_progress: false,
        }
    }
}

/// A file and the flat name it was given
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of one flatten run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlattenReport {
    /// Files whose extension matched
    pub matched: usize,
    /// Files moved (or that would be moved, in a dry run)
    pub moved: usize,
    /// Files left in place because their move failed
    pub failed: usize,
    pub dry_run: bool,
    pub moves: Vec<PlannedMove>,
    pub errors: Vec<String>,
}

/// Move every matching file under `input_dir` into `output_dir` with a
/// path-derived sequential name.
///
/// All files are enumerated before the first move, and an `output_dir`
/// nested inside `input_dir` is left out of the walk. An existing file at a
/// destination is never replaced: that file counts as failed and keeps its
/// place, but its sequence number is still used up.
pub fn flatten(
    input_dir: &Path,
    output_dir: &Path,
    extensions: &ExtensionSet,
    options: &FlattenOptions,
) -> Result<FlattenReport> {
    ensure_root(input_dir)?;
    ensure_root(output_dir)?;

    let mut walker = FileWalker::new(input_dir);
    if output_dir != input_dir && output_dir.starts_with(input_dir) {
        walker = walker.exclude(output_dir);
    }
    let files = walker.collect_matching(extensions)?;

    let mut report = FlattenReport {
        matched: files.len(),
        dry_run: options.dry_run,
        ..FlattenReport::default()
    };
    let mut counters = PrefixCounterTable::new();

    let pb = progress::make_progress(options.show_progress, files.len() as u64, "Flattening...");

    for record in &files {
        let new_name = counters.name_for(input_dir, &record.dir, &record.file_name, options.pad_width)?;
        let dest = output_dir.join(&new_name);

        let outcome = if options.dry_run {
            if dest.exists() {
                Err(PhotoError::DestinationExists { path: dest.clone() })
            } else {
                Ok(())
            }
        } else {
            transfer::move_file(&record.path, &dest)
        };

        match outcome {
            Ok(()) => {
                report.moved += 1;
                if options.dry_run {
                    info!("Would move: {} -> {}", record.path.display(), dest.display());
                } else {
                    info!("Moved: {} -> {}", record.path.display(), dest.display());
                }
                report.moves.push(PlannedMove {
                    from: record.path.clone(),
                    to: dest,
                });
            }
            Err(e) => {
                report.failed += 1;
                error!("Failed to move {} to {}: {}", record.path.display(), dest.display(), e);
                report.errors.push(e.to_string());
            }
        }

        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    progress::finish(pb);
    Ok(report)
}
