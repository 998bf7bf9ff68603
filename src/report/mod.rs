// Fri Oct 16 2026 - Alex

pub mod summary;
pub mod violation;

pub use summary::{Report, ScanStats};
pub use violation::{Severity, Violation, ViolationKind};
