// Fri Oct 16 2026 - Alex

use super::name::DependencyName;
use super::normalize::Normalizer;
use crate::scanner::DirectiveScanner;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static IMPORT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:export\s+)?import\s+([^;\s]+)\s*;\s*$").expect("import pattern"));

static MODULE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*export\s+module\s+([^;\s]+)\s*;\s*$").expect("module pattern"));

static INCLUDE_TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[<"]([^>"]+)[>"]"#).expect("include pattern"));

/// Ordered `import` targets of a `.cppm` or `.module.cpp` file.
///
/// Repeats are kept; comparison de-duplicates later. `import module;` is not a
/// dependency and is skipped.
pub fn extract_imports(text: &str) -> Vec<DependencyName> {
    let imports: Vec<DependencyName> = text
        .lines()
        .filter_map(|line| IMPORT_LINE.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| name != "module")
        .map(DependencyName::new)
        .collect();

    log::debug!("imports: {:?}", imports);
    imports
}

/// Name from the first `export module <name>;` line.
pub fn extract_module_name(text: &str) -> Option<String> {
    MODULE_NAME.captures(text).map(|caps| caps[1].trim().to_string())
}

/// Raw include targets inside the first `#ifndef <module_macro>` region.
///
/// Nested conditionals keep the region open until the matching `#endif`.
/// Commented-out directives are not seen. No guard means no includes.
pub fn guarded_includes(lines: &[&str], module_macro: &str) -> Vec<String> {
    let mut directives = DirectiveScanner::new(lines).directives();

    let opened = directives
        .by_ref()
        .any(|token| token.is("ifndef") && token.argument() == Some(module_macro));
    if !opened {
        return Vec::new();
    }

    let mut depth = 1usize;
    let mut includes = Vec::new();

    for token in directives {
        if token.opens_conditional() {
            depth += 1;
        } else if token.is("endif") {
            depth -= 1;
            if depth == 0 {
                break;
            }
        } else if token.is("include") {
            if let Some(caps) = INCLUDE_TARGET.captures(&token.rest) {
                includes.push(caps[1].trim().to_string());
            }
        }
    }

    includes
}

/// Header-side extraction: guarded includes, normalized.
pub struct HeaderExtractor<'a> {
    normalizer: Normalizer<'a>,
    module_macro: &'a str,
}

impl<'a> HeaderExtractor<'a> {
    pub fn new(normalizer: Normalizer<'a>, module_macro: &'a str) -> Self {
        Self {
            normalizer,
            module_macro,
        }
    }

    pub fn extract(&self, lines: &[&str]) -> Vec<DependencyName> {
        let names: Vec<DependencyName> = guarded_includes(lines, self.module_macro)
            .iter()
            .filter_map(|include| self.normalizer.normalize(include))
            .collect();

        log::debug!("includes from guard: {:?}", names);
        names
    }
}

/// Result of filtering a header list down to the names the module side declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restricted {
    pub kept: Vec<DependencyName>,
    pub dropped: Vec<DependencyName>,
}

pub fn restrict_to(names: Vec<DependencyName>, allowed: &[DependencyName]) -> Restricted {
    let allowed: HashSet<&DependencyName> = allowed.iter().collect();
    let (kept, dropped): (Vec<_>, Vec<_>) = names.into_iter().partition(|name| allowed.contains(name));
    Restricted { kept, dropped }
}
