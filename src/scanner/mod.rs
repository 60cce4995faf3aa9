pub mod matcher;
pub mod walker;

pub use matcher::{ExtensionSet, PrefixSet};
pub use walker::{ensure_root, FileRecord, FileWalker};
