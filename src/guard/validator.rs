// Fri Oct 16 2026 - Alex

use crate::report::Violation;
use crate::scanner::{next_directive, DirectiveToken};
use crate::source::SourceFile;
use once_cell::sync::Lazy;
use regex::Regex;

static PRAGMA_ONCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#\s*pragma\s+once\b").expect("pragma pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No `#pragma once`; the rule does not apply.
    NoSentinel,
    /// Nothing follows the sentinel.
    NoDirective,
    Guarded,
    Unguarded(DirectiveToken),
}

/// Index of the first `#pragma once` line.
pub fn find_sentinel(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| PRAGMA_ONCE.is_match(line))
}

/// After `#pragma once` the first directive must be the re-inclusion guard.
pub struct GuardOrderValidator {
    expected: &'static str,
}

impl GuardOrderValidator {
    pub fn new() -> Self {
        Self { expected: "ifndef" }
    }

    pub fn inspect(&self, lines: &[&str]) -> GuardOutcome {
        let Some(sentinel) = find_sentinel(lines) else {
            return GuardOutcome::NoSentinel;
        };

        match next_directive(lines, sentinel) {
            None => GuardOutcome::NoDirective,
            Some(token) if token.is(self.expected) => GuardOutcome::Guarded,
            Some(token) => GuardOutcome::Unguarded(token),
        }
    }

    pub fn check(&self, file: &SourceFile) -> Option<Violation> {
        let lines = file.lines();
        let token = match self.inspect(&lines) {
            GuardOutcome::Unguarded(token) => token,
            _ => return None,
        };

        let message = if token.is("include") {
            "`#include` appears immediately after `#pragma once` (expected `#ifndef ...`)".to_string()
        } else {
            format!("unexpected `#{}` after `#pragma once` (expected `#ifndef ...`)", token.keyword)
        };

        log::debug!("{}:{}: first directive is #{}", file.path().display(), token.line + 1, token.keyword);
        Some(Violation::guard_order(file.path(), token.line + 1, message))
    }
}

impl Default for GuardOrderValidator {
    fn default() -> Self {
        Self::new()
    }
}
