use std::path::Path;

use crate::common::errors::{PhotoError, Result};

/// Move a single file to `dest`, refusing to replace an existing file.
///
/// Tries a rename first (same filesystem). Across filesystems it falls back
/// to copy then remove; if the remove fails the copy is rolled back so the
/// file never ends up in both places.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(PhotoError::io(
            src,
            std::io::Error::new(std::io::ErrorKind::NotFound, "source file does not exist"),
        ));
    }

    // Don't overwrite if something already exists at the destination
    if dest.exists() {
        return Err(PhotoError::DestinationExists {
            path: dest.to_path_buf(),
        });
    }

    if std::fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    // Fallback: copy then delete (cross-filesystem)
    std::fs::copy(src, dest).map_err(|e| PhotoError::io(dest, e))?;
    if let Err(e) = std::fs::remove_file(src) {
        let _ = std::fs::remove_file(dest);
        return Err(PhotoError::io(src, e));
    }

    Ok(())
}
