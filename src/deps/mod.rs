// Fri Oct 16 2026 - Alex

pub mod extract;
pub mod name;
pub mod normalize;

pub use extract::{extract_imports, extract_module_name, guarded_includes, restrict_to, HeaderExtractor, Restricted};
pub use name::DependencyName;
pub use normalize::Normalizer;
