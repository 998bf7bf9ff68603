// Fri Oct 16 2026 - Alex

use crate::report::{Report, Violation, ViolationKind};
use colored::*;

pub struct DisplayRenderer {
    use_color: bool,
    show_summary: bool,
}

impl DisplayRenderer {
    pub fn new() -> Self {
        Self {
            use_color: true,
            show_summary: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    pub fn render(&self, report: &Report) -> String {
        if !self.use_color {
            let mut output = report.format_text();
            if self.show_summary {
                output.push_str(&self.summary(report));
            }
            return output;
        }

        let mut output = String::new();

        if report.is_clean() {
            output.push_str(&format!("{}\n", "No violations found.".green()));
        } else {
            output.push_str(&format!("{}\n", "Found issues:".red().bold()));
            for v in report.errors() {
                output.push_str(&self.render_violation(v));
            }
        }

        let advisories: Vec<_> = report.advisories().collect();
        if !advisories.is_empty() {
            output.push_str(&format!("{}\n", "Advisories:".yellow().bold()));
            for v in advisories {
                output.push_str(&self.render_violation(v));
            }
        }

        if self.show_summary {
            output.push_str(&self.summary(report).dimmed().to_string());
        }
        output
    }

    fn render_violation(&self, v: &Violation) -> String {
        let tag = match (v.is_error(), v.kind) {
            (false, _) => v.kind.tag().yellow(),
            (true, ViolationKind::Mismatch) => v.kind.tag().magenta(),
            (true, _) => v.kind.tag().red(),
        };

        let mut line = format!("{} {}\n", tag.bold(), v.headline());
        for detail in &v.details {
            line.push_str(&format!("  {}\n", detail.dimmed()));
        }
        line
    }

    fn summary(&self, report: &Report) -> String {
        let stats = &report.stats;
        let advisories = report.advisories().count();
        let mut text = format!(
            "{} files, {} pairs, {} headers checked: {} violations",
            stats.files_listed,
            stats.pairs_checked,
            stats.headers_checked,
            report.error_count()
        );
        if advisories > 0 {
            text.push_str(&format!(", {} advisories", advisories));
        }
        text.push('\n');
        text
    }
}

impl Default for DisplayRenderer {
    fn default() -> Self {
        Self::new()
    }
}
