// Fri Oct 16 2026 - Alex

pub mod file;
pub mod pairs;
pub mod walker;

pub use file::SourceFile;
pub use pairs::{find_interface_pairs, find_translation_unit_pairs, FilePair, PairKind};
pub use walker::{list_files, FileKind};
