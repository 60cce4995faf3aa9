use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::common::errors::Result;
use crate::scanner::{ensure_root, ExtensionSet, FileWalker, PrefixSet};

/// Base names (no extension, original case) gathered from a JPEG tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameSet(BTreeSet<String>);

impl NameSet {
    pub fn new() -> Self {
        NameSet::default()
    }

    /// Returns false when the name was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Exact, case-sensitive lookup
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NameSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Counters from one name-collection pass.
///
/// Always `unique_names <= prefix_matched <= total_matched`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounters {
    /// Files whose extension matched
    pub total_matched: usize,
    /// Of those, files whose base name starts with a camera prefix
    pub prefix_matched: usize,
    /// Distinct base names among the prefix matches
    pub unique_names: usize,
}

/// Walk `root` and gather the base names of camera JPEGs.
///
/// Files with other extensions are skipped and not counted. Base names are
/// compared against `prefixes` case-insensitively but stored in their
/// original case. A traversal error aborts the scan.
pub fn collect_names(
    root: &Path,
    prefixes: &PrefixSet,
    extensions: &ExtensionSet,
) -> Result<(NameSet, ScanCounters)> {
    ensure_root(root)?;

    let mut names = NameSet::new();
    let mut counters = ScanCounters::default();

    for record in FileWalker::new(root).files() {
        let record = record?;
        if !extensions.matches(&record) {
            continue;
        }
        counters.total_matched += 1;

        if prefixes.matches(&record.base_name) {
            counters.prefix_matched += 1;
            debug!("Found JPEG {}, name added to the set", record.base_name);
            names.insert(record.base_name);
        }
    }

    counters.unique_names = names.len();
    Ok((names, counters))
}
