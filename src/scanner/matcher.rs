use std::collections::BTreeSet;

use super::walker::FileRecord;
use crate::common::config::normalize_extensions;

/// Case-insensitive set of file extensions (stored as ".ext")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new<S: AsRef<str>>(exts: &[S]) -> Self {
        let owned: Vec<String> = exts.iter().map(|e| e.as_ref().to_string()).collect();
        ExtensionSet {
            exts: normalize_extensions(&owned).into_iter().collect(),
        }
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.exts.contains(&ext.to_lowercase())
    }

    pub fn matches(&self, record: &FileRecord) -> bool {
        record
            .extension
            .as_deref()
            .is_some_and(|ext| self.contains(ext))
    }
}

/// Case-insensitive "starts with any" matcher for base names.
///
/// An empty set applies no filter and accepts every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: Vec<String>,
}

impl PrefixSet {
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Self {
        let mut prefixes: Vec<String> = prefixes.iter().map(|p| p.as_ref().to_lowercase()).collect();
        prefixes.sort();
        prefixes.dedup();
        PrefixSet { prefixes }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn matches(&self, base_name: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let lowered = base_name.to_lowercase();
        self.prefixes.iter().any(|p| lowered.starts_with(p.as_str()))
    }
}
