// Fri Oct 16 2026 - Alex

use super::name::DependencyName;
use crate::config::NamingPolicy;

/// Maps `#include` targets onto the names `import` statements use.
///
/// `"uwvm2/utils/container/impl.h"` becomes `uwvm2.utils.container`,
/// `"fast_io.h"` becomes `fast_io` and a bare `"def.h"` becomes `:def`.
/// Macro helpers, system headers and non-aggregator tree headers map to nothing.
pub struct Normalizer<'a> {
    naming: &'a NamingPolicy,
    base_module: Option<&'a str>,
}

impl<'a> Normalizer<'a> {
    pub fn new(naming: &'a NamingPolicy) -> Self {
        Self {
            naming,
            base_module: None,
        }
    }

    /// Relative aggregator includes are resolved against `module`, the name the
    /// enclosing aggregate module declares. An empty name is ignored.
    pub fn with_base_module(mut self, module: &'a str) -> Self {
        self.base_module = Some(module).filter(|m| !m.is_empty());
        self
    }

    pub fn normalize(&self, include: &str) -> Option<DependencyName> {
        let naming = self.naming;
        let suffix = naming.header_suffix.as_str();
        let has_dir = include.contains('/');

        if naming.is_ignored(include) {
            return None;
        }

        if !has_dir && !include.ends_with(suffix) {
            return None;
        }

        if self.is_umbrella(include) {
            return Some(DependencyName::new(naming.umbrella.as_str()));
        }

        let aggregator_suffix = format!("/{}", naming.aggregator);
        if let Some(dir) = include.strip_suffix(aggregator_suffix.as_str()) {
            if let Some(base) = self.base_module {
                if !include.starts_with(&naming.path_prefix()) {
                    return Some(DependencyName::new(format!("{}.{}", base, dir.replace('/', "."))));
                }
            }
            return Some(DependencyName::from_path(dir));
        }

        if !has_dir {
            if let Some(stem) = include.strip_suffix(suffix) {
                return Some(DependencyName::partition(stem));
            }
        }

        None
    }

    fn is_umbrella(&self, include: &str) -> bool {
        let umbrella = self.naming.umbrella.as_str();
        match include.strip_prefix(umbrella) {
            Some(tail) => tail == self.naming.header_suffix || tail.starts_with('/'),
            None => false,
        }
    }
}
