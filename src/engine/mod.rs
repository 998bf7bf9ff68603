// Fri Oct 16 2026 - Alex

pub mod context;
pub mod pair_check;
pub mod runner;

pub use context::{CheckMode, RunContext};
pub use pair_check::PairChecker;
pub use runner::Runner;
