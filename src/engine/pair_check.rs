// Fri Oct 16 2026 - Alex

use crate::config::{Config, ExtraIncludePolicy};
use crate::deps::{extract_imports, extract_module_name, restrict_to, DependencyName, HeaderExtractor, Normalizer};
use crate::error::CheckResult;
use crate::order::{compare_sequences, OrderChecker};
use crate::report::{Severity, Violation};
use crate::source::{FilePair, PairKind, SourceFile};

/// Compares one module/header pair.
pub struct PairChecker<'a> {
    config: &'a Config,
    order: OrderChecker<'a>,
}

impl<'a> PairChecker<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            order: OrderChecker::new(&config.naming),
        }
    }

    pub fn check_pair(&self, pair: &FilePair) -> CheckResult<Vec<Violation>> {
        let module = SourceFile::load(&pair.module)?;
        let header = SourceFile::load(&pair.header)?;
        Ok(self.check_sources(pair.kind, &module, &header))
    }

    /// Header dependencies for `kind`, plus whatever the aggregate restriction removed.
    fn header_dependencies(
        &self,
        kind: PairKind,
        module: &SourceFile,
        imports: &[DependencyName],
        header: &SourceFile,
    ) -> (Vec<DependencyName>, Vec<DependencyName>) {
        let naming = &self.config.naming;
        let lines = header.lines();

        if kind != PairKind::ImplAggregate {
            let extractor = HeaderExtractor::new(Normalizer::new(naming), &naming.module_macro);
            return (extractor.extract(&lines), Vec::new());
        }

        let base_module = extract_module_name(module.text()).unwrap_or_default();
        let normalizer = Normalizer::new(naming).with_base_module(&base_module);
        let extracted = HeaderExtractor::new(normalizer, &naming.module_macro).extract(&lines);
        let restricted = restrict_to(extracted, imports);
        (restricted.kept, restricted.dropped)
    }

    pub fn check_sources(&self, kind: PairKind, module: &SourceFile, header: &SourceFile) -> Vec<Violation> {
        let imports = extract_imports(module.text());
        let (includes, dropped) = self.header_dependencies(kind, module, &imports, header);

        let mut violations: Vec<Violation> = self
            .order
            .check(&includes)
            .iter()
            .map(|breach| Violation::order(header.path(), breach))
            .collect();

        if let Some(diff) = compare_sequences(&imports, &includes) {
            violations.push(Violation::mismatch(module.path(), header.path(), &diff));
        }

        if !dropped.is_empty() {
            let severity = match self.config.extra_includes {
                ExtraIncludePolicy::Drop => None,
                ExtraIncludePolicy::Advise => Some(Severity::Advisory),
                ExtraIncludePolicy::Reject => Some(Severity::Error),
            };
            if let Some(severity) = severity {
                violations.push(Violation::extra_include(module.path(), header.path(), &dropped, severity));
            }
        }

        violations
    }
}
