use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn phototidy() -> Command {
    Command::cargo_bin("phototidy").unwrap()
}

fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"data").unwrap();
    path
}

fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Lay out jpg/, raw/ and bin/ under `root` and return a filter-raw config
fn filter_raw_fixture(root: &Path) -> PathBuf {
    touch(root, "jpg/day1/DSC_0001.jpg");
    touch(root, "jpg/day1/DSC_0002.JPG");
    touch(root, "jpg/day1/edit_0003.jpg");
    touch(root, "raw/day1/DSC_0001.NEF");
    touch(root, "raw/day1/DSC_0004.nef");
    touch(root, "raw/day1/edit_0003.nef");
    std::fs::create_dir_all(root.join("bin")).unwrap();

    write_config(
        root,
        "filter_raw.toml",
        &format!(
            "jpg_dir = '{}'\nraw_dir = '{}'\njpg_exts = ['.jpg']\nraw_exts = ['NEF']\n\
             camera_prefixes = ['dsc_']\ntrash_dir = '{}'\nlog_file = '{}'\n",
            root.join("jpg").display(),
            root.join("raw").display(),
            root.join("bin").display(),
            root.join("logs/filter_raw.log").display(),
        ),
    )
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    phototidy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("filter-raw"))
        .stdout(predicate::str::contains("flatten"));
}

#[test]
fn test_version_flag() {
    phototidy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("phototidy"));
}

#[test]
fn test_completions_bash() {
    phototidy()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phototidy"));
}

// ─── filter-raw ──────────────────────────────────────────────────────────────

#[test]
fn test_filter_raw_quiet_summary() {
    let dir = TempDir::new().unwrap();
    let config = filter_raw_fixture(dir.path());

    phototidy()
        .args(["filter-raw", "--format", "quiet", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("3  2  2  1  2  0"));

    assert!(dir.path().join("raw/day1/DSC_0001.NEF").exists());
    assert!(!dir.path().join("raw/day1/DSC_0004.nef").exists());
    assert!(!dir.path().join("raw/day1/edit_0003.nef").exists());
    assert!(dir.path().join("bin/DSC_0004.nef").exists());

    let log = std::fs::read_to_string(dir.path().join("logs/filter_raw.log")).unwrap();
    assert!(log.contains("DSC_0004"), "Per-file lines should reach the log file");
}

#[test]
fn test_filter_raw_json_dry_run() {
    let dir = TempDir::new().unwrap();
    let config = filter_raw_fixture(dir.path());

    phototidy()
        .args(["filter-raw", "--dry-run", "--format", "json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unique_names\": 2"))
        .stdout(predicate::str::contains("\"deleted\": 2"))
        .stdout(predicate::str::contains("\"dry_run\": true"));

    assert!(dir.path().join("raw/day1/DSC_0004.nef").exists());
}

#[test]
fn test_filter_raw_missing_config() {
    let dir = TempDir::new().unwrap();
    phototidy()
        .args(["filter-raw", "--config"])
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_filter_raw_missing_dir_aborts() {
    let dir = TempDir::new().unwrap();
    let orphan = touch(dir.path(), "raw/orphan.cr2");
    let config = write_config(
        dir.path(),
        "filter_raw.toml",
        &format!(
            "jpg_dir = '{}'\nraw_dir = '{}'\ntrash_dir = '{}'\n",
            dir.path().join("no_jpgs_here").display(),
            dir.path().join("raw").display(),
            dir.path().display(),
        ),
    );

    phototidy()
        .args(["filter-raw", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(orphan.exists(), "Nothing is trashed when setup fails");
}

#[test]
fn test_filter_raw_rejects_trash_dir_equal_to_raw_dir() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "jpg/keep.jpg");
    let orphan = touch(dir.path(), "raw/orphan.cr2");
    let config = write_config(
        dir.path(),
        "filter_raw.toml",
        &format!(
            "jpg_dir = '{}'\nraw_dir = '{}'\ntrash_dir = '{}'\n",
            dir.path().join("jpg").display(),
            dir.path().join("raw").display(),
            dir.path().join("raw").display(),
        ),
    );

    phototidy()
        .args(["filter-raw", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("trash_dir must differ from raw_dir"));

    assert!(orphan.exists());
    assert_eq!(std::fs::read_dir(dir.path().join("raw")).unwrap().count(), 1);
}

// ─── flatten ─────────────────────────────────────────────────────────────────

#[test]
fn test_flatten_moves_and_reports() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "in/X/1.jpg");
    touch(dir.path(), "in/X/2.jpg");
    touch(dir.path(), "in/Y/3.jpg");
    std::fs::create_dir_all(dir.path().join("out")).unwrap();
    let config = write_config(
        dir.path(),
        "flatten.toml",
        &format!(
            "input_jpg_dir_abs_path = '{}'\noutput_jpg_dir_abs_path = '{}'\nnumber_of_digits = 2\n",
            dir.path().join("in").display(),
            dir.path().join("out").display(),
        ),
    );

    phototidy()
        .args(["flatten", "--format", "quiet", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("3  3  0"));

    for name in ["X-01.jpg", "X-02.jpg", "Y-01.jpg"] {
        assert!(dir.path().join("out").join(name).exists(), "missing {}", name);
    }
}

#[test]
fn test_flatten_invalid_digits() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "flatten.toml",
        &format!(
            "input_dir = '{}'\noutput_dir = '{}'\nnumber_of_digits = 0\n",
            dir.path().display(),
            dir.path().display(),
        ),
    );

    phototidy()
        .args(["flatten", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("number_of_digits"));
}
