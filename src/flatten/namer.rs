use std::collections::HashMap;
use std::path::{Component, Path};

use crate::common::errors::{PhotoError, Result};

/// Hyphen-joined path of `dir` relative to `root`; empty when they are equal
pub fn prefix_for(root: &Path, dir: &Path) -> Result<String> {
    let rel = dir.strip_prefix(root).map_err(|_| PhotoError::OutsideRoot {
        root: root.to_path_buf(),
        dir: dir.to_path_buf(),
    })?;

    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(parts.join("-"))
}

/// Per-prefix sequence counters for one flatten run.
///
/// A counter starts at 0 and grows by exactly one for each name handed out
/// under its prefix, so the sequence numbers of a prefix are `1..=k`.
#[derive(Debug, Clone, Default)]
pub struct PrefixCounterTable {
    counters: HashMap<String, usize>,
}

impl PrefixCounterTable {
    pub fn new() -> Self {
        PrefixCounterTable::default()
    }

    /// Claim the next sequence number for `prefix`
    pub fn next_seq(&mut self, prefix: &str) -> usize {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Flat name for `file_name` living in `file_dir` under `root`.
    ///
    /// `DIR-SUB-007.jpg` for nested files, `007.jpg` for files directly in
    /// the root. The extension is lower-cased; a file without one gets none.
    pub fn name_for(&mut self, root: &Path, file_dir: &Path, file_name: &str, pad_width: usize) -> Result<String> {
        let prefix = prefix_for(root, file_dir)?;
        let seq = self.next_seq(&prefix);
        let ext = Path::new(file_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        Ok(if prefix.is_empty() {
            format!("{:0width$}{}", seq, ext, width = pad_width)
        } else {
            format!("{}-{:0width$}{}", prefix, seq, ext, width = pad_width)
        })
    }
}
