pub mod config;
pub mod errors;
pub mod format;
pub mod logging;
pub mod progress;

pub use errors::{PhotoError, Result};
