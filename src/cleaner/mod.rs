pub mod transfer;
pub mod trash;

pub use transfer::move_file;
pub use trash::{DirectoryTrash, SystemTrash, Trasher};
