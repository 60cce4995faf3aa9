use std::path::{Path, PathBuf};

use super::transfer;
use crate::common::errors::{PhotoError, Result};

/// Something that can take a file out of the tree in a recoverable way
pub trait Trasher {
    fn send_to_trash(&self, path: &Path) -> Result<()>;

    /// Short label used in logs and reports
    fn describe(&self) -> String;
}

/// The platform recycle bin / trash can
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTrash;

impl Trasher for SystemTrash {
    fn send_to_trash(&self, path: &Path) -> Result<()> {
        trash::delete(path).map_err(|e| PhotoError::Trash {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        "system trash".to_string()
    }
}

/// A plain directory used as the holding area.
///
/// Useful on machines without a trash backend (headless Linux, network
/// shares). Name clashes get a numeric suffix, so nothing inside is replaced.
#[derive(Debug, Clone)]
pub struct DirectoryTrash {
    dir: PathBuf,
}

impl DirectoryTrash {
    pub fn new(dir: &Path) -> Self {
        DirectoryTrash {
            dir: dir.to_path_buf(),
        }
    }

    /// First free path in the holding directory for `file_name`
    fn free_slot(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut candidate = self.dir.join(format!("{}{}", stem, ext));
        let mut n = 1usize;
        while candidate.exists() {
            candidate = self.dir.join(format!("{}_{}{}", stem, n, ext));
            n += 1;
        }
        candidate
    }
}

impl Trasher for DirectoryTrash {
    fn send_to_trash(&self, path: &Path) -> Result<()> {
        if !self.dir.is_dir() {
            return Err(PhotoError::MissingDirectory {
                path: self.dir.clone(),
            });
        }
        let dest = self.free_slot(path);
        transfer::move_file(path, &dest)
    }

    fn describe(&self) -> String {
        format!("trash dir {}", self.dir.display())
    }
}

/// Pick the trash backend from config: a directory when given, else the system trash
pub fn from_config(trash_dir: Option<&Path>) -> Box<dyn Trasher> {
    match trash_dir {
        Some(dir) => Box::new(DirectoryTrash::new(dir)),
        None => Box::new(SystemTrash),
    }
}
