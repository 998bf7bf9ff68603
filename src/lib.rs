// Fri Oct 16 2026 - Alex

pub mod config;
pub mod deps;
pub mod engine;
pub mod error;
pub mod guard;
pub mod order;
pub mod report;
pub mod scanner;
pub mod source;
pub mod ui;

pub use config::{Config, ExtraIncludePolicy, NamingPolicy};
pub use deps::DependencyName;
pub use engine::{CheckMode, RunContext, Runner};
pub use error::{CheckError, CheckResult};
pub use guard::GuardOrderValidator;
pub use order::OrderChecker;
pub use report::{Report, Violation, ViolationKind};
pub use scanner::{next_directive, DirectiveScanner, DirectiveToken};
pub use source::SourceFile;
