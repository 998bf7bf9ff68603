// Fri Oct 16 2026 - Alex

pub mod cursor;
pub mod directive;

pub use cursor::ScanCursor;
pub use directive::{next_directive, DirectiveScanner, DirectiveToken, LineClass, ScannedLine};
