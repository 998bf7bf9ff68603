// Fri Oct 16 2026 - Alex

pub mod validator;

pub use validator::{find_sentinel, GuardOrderValidator, GuardOutcome};
