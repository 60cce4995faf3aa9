use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::collector::NameSet;
use crate::cleaner::Trasher;
use crate::common::errors::Result;
use crate::common::progress;
use crate::scanner::{ensure_root, ExtensionSet, FileWalker};

/// Knobs for a RAW filtering run
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Report what would be trashed without touching anything
    pub dry_run: bool,
    /// Subtree to leave out of the walk (e.g. a trash dir inside the RAW tree)
    pub exclude: Option<PathBuf>,
    pub show_progress: bool,
}

/// Outcome of one RAW filtering run.
///
/// `kept + deleted + failed` equals the number of files whose extension was
/// in the RAW set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawFilterReport {
    pub kept: usize,
    pub deleted: usize,
    pub failed: usize,
    pub dry_run: bool,
    pub errors: Vec<String>,
}

impl RawFilterReport {
    pub fn total(&self) -> usize {
        self.kept + self.deleted + self.failed
    }
}

/// Trash every RAW file under `root` whose base name is not in `keep_names`.
///
/// The whole tree is enumerated before the first file is touched, so a
/// traversal error aborts the run with nothing trashed. Trash failures are
/// per file: counted, logged, and the file stays where it was.
pub fn filter_raw(
    root: &Path,
    raw_extensions: &ExtensionSet,
    keep_names: &NameSet,
    trasher: &dyn Trasher,
    options: &FilterOptions,
) -> Result<RawFilterReport> {
    ensure_root(root)?;

    let mut walker = FileWalker::new(root);
    if let Some(ref skip) = options.exclude {
        walker = walker.exclude(skip);
    }
    let raw_files = walker.collect_matching(raw_extensions)?;
    if keep_names.is_empty() && !raw_files.is_empty() {
        warn!("No JPEG names collected, every RAW file under {} will be trashed", root.display());
    }

    let mut report = RawFilterReport {
        dry_run: options.dry_run,
        ..RawFilterReport::default()
    };

    let pb = progress::make_progress(options.show_progress, raw_files.len() as u64, "Filtering RAW files...");

    for record in &raw_files {
        if keep_names.contains(&record.base_name) {
            report.kept += 1;
            info!("Keeping RAW file {}, name found in JPEG set", record.path.display());
        } else if options.dry_run {
            report.deleted += 1;
            info!("Would trash RAW file {}", record.path.display());
        } else {
            match trasher.send_to_trash(&record.path) {
                Ok(()) => {
                    report.deleted += 1;
                    info!(
                        "Moved RAW file {} to {}, name not found in JPEG set",
                        record.path.display(),
                        trasher.describe()
                    );
                }
                Err(e) => {
                    report.failed += 1;
                    error!("Failed to trash RAW file {}: {}", record.path.display(), e);
                    report.errors.push(e.to_string());
                }
            }
        }

        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    progress::finish(pb);
    Ok(report)
}
