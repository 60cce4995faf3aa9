use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::PhotoError;

/// Default config file for the `filter-raw` command
pub const DEFAULT_FILTER_RAW_CONFIG: &str = "config/filter_raw.toml";

/// Default config file for the `flatten` command
pub const DEFAULT_FLATTEN_CONFIG: &str = "config/flatten.toml";

/// Settings for pruning RAW files that have no JPEG sibling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRawConfig {
    /// Tree holding the JPEGs whose names are kept
    #[serde(alias = "jpg_dir_abs_path")]
    pub jpg_dir: PathBuf,

    /// Tree holding the RAW files to prune
    #[serde(alias = "raw_dir_abs_path")]
    pub raw_dir: PathBuf,

    #[serde(default = "default_jpg_exts")]
    pub jpg_exts: Vec<String>,

    #[serde(default = "default_raw_exts")]
    pub raw_exts: Vec<String>,

    /// Base-name prefixes written by the camera (e.g. "DSC_", "IMG_").
    /// Empty means every JPEG counts.
    #[serde(default)]
    pub camera_prefixes: Vec<String>,

    /// Move pruned files here instead of the platform trash
    #[serde(default)]
    pub trash_dir: Option<PathBuf>,

    #[serde(default, alias = "log_file_abs_path")]
    pub log_file: Option<PathBuf>,
}

/// Settings for flattening a nested JPEG tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenConfig {
    #[serde(alias = "input_jpg_dir_abs_path")]
    pub input_dir: PathBuf,

    #[serde(alias = "output_jpg_dir_abs_path")]
    pub output_dir: PathBuf,

    #[serde(default = "default_jpg_exts")]
    pub jpg_exts: Vec<String>,

    /// Zero-padding width of the sequence number
    #[serde(default = "default_number_of_digits")]
    pub number_of_digits: usize,

    #[serde(default, alias = "log_file_abs_path")]
    pub log_file: Option<PathBuf>,
}

fn default_jpg_exts() -> Vec<String> {
    vec![".jpg".to_string(), ".jpeg".to_string()]
}
fn default_raw_exts() -> Vec<String> {
    [".cr2", ".cr3", ".nef", ".arw", ".dng", ".raf", ".orf", ".rw2"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_number_of_digits() -> usize {
    2
}

impl FilterRawConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: FilterRawConfig = read_toml(path)?;
        config.jpg_dir = expand_home(&config.jpg_dir);
        config.raw_dir = expand_home(&config.raw_dir);
        config.trash_dir = config.trash_dir.as_deref().map(expand_home);
        config.log_file = config.log_file.as_deref().map(expand_home);
        config.jpg_exts = normalize_extensions(&config.jpg_exts);
        config.raw_exts = normalize_extensions(&config.raw_exts);
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), PhotoError> {
        require_non_empty("jpg_exts", &self.jpg_exts)?;
        require_non_empty("raw_exts", &self.raw_exts)?;
        if let Some(ref trash_dir) = self.trash_dir {
            // The walk only skips a trash dir strictly below raw_dir
            if trash_dir == &self.raw_dir {
                return Err(PhotoError::Config {
                    message: format!("trash_dir must differ from raw_dir ({})", trash_dir.display()),
                });
            }
            if trash_dir.starts_with(&self.jpg_dir) {
                return Err(PhotoError::Config {
                    message: format!(
                        "trash_dir must not be inside jpg_dir ({})",
                        trash_dir.display()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Directories that must exist before anything is touched
    pub fn required_dirs(&self) -> Vec<&Path> {
        let mut dirs = vec![self.jpg_dir.as_path(), self.raw_dir.as_path()];
        if let Some(ref trash_dir) = self.trash_dir {
            dirs.push(trash_dir.as_path());
        }
        dirs
    }
}

impl FlattenConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: FlattenConfig = read_toml(path)?;
        config.input_dir = expand_home(&config.input_dir);
        config.output_dir = expand_home(&config.output_dir);
        config.log_file = config.log_file.as_deref().map(expand_home);
        config.jpg_exts = normalize_extensions(&config.jpg_exts);
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), PhotoError> {
        require_non_empty("jpg_exts", &self.jpg_exts)?;
        if self.number_of_digits == 0 {
            return Err(PhotoError::Config {
                message: "number_of_digits must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Directories that must exist before anything is touched
    pub fn required_dirs(&self) -> Vec<&Path> {
        vec![self.input_dir.as_path(), self.output_dir.as_path()]
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found: {}", path.display());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn require_non_empty(key: &str, values: &[String]) -> std::result::Result<(), PhotoError> {
    if values.is_empty() {
        return Err(PhotoError::Config {
            message: format!("{} must list at least one extension", key),
        });
    }
    Ok(())
}

/// Lower-case extensions and make sure each carries its leading dot
pub fn normalize_extensions(exts: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = exts
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty() && e != ".")
        .map(|e| if e.starts_with('.') { e } else { format!(".{}", e) })
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Fail with the first configured directory that does not exist
pub fn ensure_dirs_exist(dirs: &[&Path]) -> std::result::Result<(), PhotoError> {
    for dir in dirs {
        if !dir.is_dir() {
            tracing::error!("Path does not exist: {}", dir.display());
            return Err(PhotoError::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extensions() {
        let exts = vec![
            "JPG".to_string(),
            ".jpeg".to_string(),
            " .Jpg ".to_string(),
            "".to_string(),
        ];
        assert_eq!(normalize_extensions(&exts), vec![".jpeg", ".jpg"]);
    }

    #[test]
    fn test_filter_raw_defaults() {
        let config: FilterRawConfig = toml::from_str(
            r#"
            jpg_dir = "/photos/jpg"
            raw_dir = "/photos/raw"
            "#,
        )
        .unwrap();
        assert_eq!(config.jpg_exts, vec![".jpg", ".jpeg"]);
        assert!(config.raw_exts.contains(&".cr2".to_string()));
        assert!(config.camera_prefixes.is_empty());
        assert!(config.trash_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_key_aliases() {
        let config: FlattenConfig = toml::from_str(
            r#"
            input_jpg_dir_abs_path = "/in"
            output_jpg_dir_abs_path = "/out"
            number_of_digits = 3
            log_file_abs_path = "/tmp/flatten.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/in"));
        assert_eq!(config.output_dir, PathBuf::from("/out"));
        assert_eq!(config.number_of_digits, 3);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/flatten.log")));
    }

    #[test]
    fn test_zero_digits_rejected() {
        let config: FlattenConfig = toml::from_str(
            r#"
            input_dir = "/in"
            output_dir = "/out"
            number_of_digits = 0
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_raw_exts_rejected() {
        let config: FilterRawConfig = toml::from_str(
            r#"
            jpg_dir = "/a"
            raw_dir = "/b"
            raw_exts = []
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    fn filter_config_with_trash(trash_dir: &str) -> FilterRawConfig {
        toml::from_str(&format!(
            r#"
            jpg_dir = "/photos/jpg"
            raw_dir = "/photos/raw"
            trash_dir = "{}"
            "#,
            trash_dir
        ))
        .unwrap()
    }

    #[test]
    fn test_trash_dir_same_as_raw_dir_rejected() {
        let err = filter_config_with_trash("/photos/raw").validate().unwrap_err();
        assert!(matches!(err, PhotoError::Config { .. }));
        assert!(err.to_string().contains("raw_dir"));
    }

    #[test]
    fn test_trash_dir_inside_jpg_dir_rejected() {
        for trash_dir in ["/photos/jpg", "/photos/jpg/.trash"] {
            let err = filter_config_with_trash(trash_dir).validate().unwrap_err();
            assert!(matches!(err, PhotoError::Config { .. }), "{}", trash_dir);
        }
    }

    #[test]
    fn test_trash_dir_accepted_elsewhere() {
        assert!(filter_config_with_trash("/photos/raw/.trash").validate().is_ok());
        assert!(filter_config_with_trash("/photos/trash").validate().is_ok());
        // Sibling with a shared name prefix is not inside jpg_dir
        assert!(filter_config_with_trash("/photos/jpg_trash").validate().is_ok());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/Pictures")), home.join("Pictures"));
        }
    }

    #[test]
    fn test_ensure_dirs_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(ensure_dirs_exist(&[dir.path()]).is_ok());

        let missing = dir.path().join("missing");
        let err = ensure_dirs_exist(&[dir.path(), &missing]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
