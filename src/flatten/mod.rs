pub mod mover;
pub mod namer;

pub use mover::{flatten, FlattenOptions, FlattenReport, PlannedMove};
pub use namer::{prefix_for, PrefixCounterTable};
