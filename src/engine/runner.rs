// Fri Oct 16 2026 - Alex

use super::context::{CheckMode, RunContext};
use super::pair_check::PairChecker;
use crate::error::CheckResult;
use crate::guard::GuardOrderValidator;
use crate::report::{Report, Violation};
use crate::source::{find_interface_pairs, find_translation_unit_pairs, list_files, FileKind, SourceFile};
use rayon::prelude::*;
use rayon::ThreadPool;
use std::path::PathBuf;

/// Drives both checks over one source tree.
///
/// Files are independent, so work fans out over a private rayon pool when the
/// config allows it. Results come back in discovery order either way, and the
/// first read error aborts the run.
pub struct Runner {
    context: RunContext,
    pool: Option<ThreadPool>,
}

impl Runner {
    pub fn new(context: RunContext) -> CheckResult<Self> {
        let config = context.config();
        let pool = if config.parallel && config.max_threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.max_threads)
                    .thread_name(|i| format!("modcheck-{}", i))
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self { context, pool })
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn run(&self, mode: CheckMode) -> CheckResult<Report> {
        let root = self.context.root();
        log::info!("scanning {}", root.display());

        let files = list_files(root)?;
        let mut report = Report::new();
        report.stats.files_listed = files.len();

        if mode.includes_module() {
            report.merge(self.check_pairs(&files)?);
        }
        if mode.includes_guard() {
            report.merge(self.check_guards(&files)?);
        }

        log::info!(
            "{} violations in {} pairs and {} headers",
            report.violations.len(),
            report.stats.pairs_checked,
            report.stats.headers_checked
        );
        Ok(report)
    }

    pub fn check_pairs(&self, files: &[PathBuf]) -> CheckResult<Report> {
        let mut pairs = find_interface_pairs(files, self.context.aggregate_stem()?);
        pairs.extend(find_translation_unit_pairs(files));
        log::info!("checking {} file pairs", pairs.len());

        let checker = PairChecker::new(self.context.config());
        let mut report = Report::new();
        report.stats.pairs_checked = pairs.len();
        report.extend(self.execute(&pairs, |pair| checker.check_pair(pair))?);
        Ok(report)
    }

    pub fn check_guards(&self, files: &[PathBuf]) -> CheckResult<Report> {
        let headers: Vec<&PathBuf> = files
            .iter()
            .filter(|p| FileKind::of(p) == FileKind::Header)
            .collect();
        log::info!("checking {} headers", headers.len());

        let validator = GuardOrderValidator::new();
        let mut report = Report::new();
        report.stats.headers_checked = headers.len();
        report.extend(self.execute(&headers, |path| {
            let file = SourceFile::load(path)?;
            Ok(validator.check(&file).into_iter().collect())
        })?);
        Ok(report)
    }

    fn execute<T, F>(&self, items: &[T], check: F) -> CheckResult<Vec<Violation>>
    where
        T: Sync,
        F: Fn(&T) -> CheckResult<Vec<Violation>> + Sync + Send,
    {
        let per_item: Vec<Vec<Violation>> = match &self.pool {
            Some(pool) => pool.install(|| items.par_iter().map(&check).collect::<CheckResult<_>>())?,
            None => items.iter().map(&check).collect::<CheckResult<_>>()?,
        };
        Ok(per_item.into_iter().flatten().collect())
    }
}
