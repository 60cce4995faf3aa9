//! Pruning RAW files that lost their JPEG.
//!
//! First pass: [`collect_names`] gathers the base names of camera JPEGs.
//! Second pass: [`filter_raw`] keeps RAW files carrying one of those names
//! and sends the rest to trash.

pub mod collector;
pub mod filter;

pub use collector::{collect_names, NameSet, ScanCounters};
pub use filter::{filter_raw, FilterOptions, RawFilterReport};
