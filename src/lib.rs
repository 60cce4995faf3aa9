//! # phototidy
//!
//! Housekeeping for photo libraries shot in RAW+JPEG.
//!
//! - **RAW pruning**: after culling the JPEGs, trash every RAW file whose
//!   JPEG sibling is gone. Matching is by base name, restricted to camera
//!   file-name prefixes.
//! - **Flattening**: move a nested JPEG tree into one directory, naming each
//!   file after its folder path plus a per-folder sequence number
//!   (`2024-Paris-03.jpg`).
//! - **Safety-first**: trash instead of delete, dry-run previews, and no
//!   silent overwrites.

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod flatten;
pub mod raw;
pub mod scanner;
