// Fri Oct 16 2026 - Alex

pub mod category;
pub mod checker;
pub mod equivalence;

pub use category::{Category, CategoryPositions, Classifier};
pub use checker::{OrderBreach, OrderChecker, OrderConstraint};
pub use equivalence::{compare_sequences, stable_unique, SequenceDiff};
