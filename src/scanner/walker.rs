use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::matcher::ExtensionSet;
use crate::common::errors::{PhotoError, Result};

/// A regular file seen during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path to the file
    pub path: PathBuf,
    /// Directory containing the file
    pub dir: PathBuf,
    /// File name including extension
    pub file_name: String,
    /// Lower-cased extension with its leading dot, if any
    pub extension: Option<String>,
    /// File name without its extension, original case
    pub base_name: String,
}

impl FileRecord {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()));

        FileRecord {
            path: path.to_path_buf(),
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            file_name,
            extension,
            base_name,
        }
    }
}

/// Recursive, sorted walk over the regular files under a root.
///
/// Entries are visited in file-name order within each directory, so two walks
/// over an unchanged tree yield the same sequence.
#[derive(Debug, Clone)]
pub struct FileWalker {
    root: PathBuf,
    exclude: Option<PathBuf>,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        FileWalker {
            root: root.to_path_buf(),
            exclude: None,
        }
    }

    /// Skip a subtree (and everything below it)
    pub fn exclude(mut self, dir: &Path) -> Self {
        self.exclude = Some(dir.to_path_buf());
        self
    }

    /// Iterate over every regular file, including symlinks that point at one.
    /// Symlinked directories are not descended into. Traversal errors are
    /// yielded, not skipped.
    pub fn files(&self) -> impl Iterator<Item = Result<FileRecord>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| match self.exclude {
                Some(ref skip) => e.depth() == 0 || e.path() != skip.as_path(),
                None => true,
            })
            .filter_map(move |entry| match entry {
                Ok(entry) if is_file_entry(&entry) => Some(Ok(FileRecord::from_path(entry.path()))),
                Ok(_) => None,
                Err(source) => Some(Err(PhotoError::Walk {
                    root: self.root.clone(),
                    source,
                })),
            })
    }

    /// Collect every file whose extension is in `extensions`.
    ///
    /// Fails on the first traversal error; nothing is returned in that case.
    pub fn collect_matching(&self, extensions: &ExtensionSet) -> Result<Vec<FileRecord>> {
        let mut matched = Vec::new();
        for record in self.files() {
            let record = record?;
            if extensions.matches(&record) {
                matched.push(record);
            }
        }
        Ok(matched)
    }
}

fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    // Dangling links fail the metadata call and are skipped
    entry.path_is_symlink()
        && std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false)
}

/// Fail unless `root` is an existing directory
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(PhotoError::MissingDirectory {
            path: root.to_path_buf(),
        })
    }
}
