// Fri Oct 16 2026 - Alex

use super::cursor::ScanCursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveToken {
    pub line: usize,
    /// First word after `#`, lower-cased; `#` itself when no word follows.
    pub keyword: String,
    /// Raw remainder of the line after the keyword, trimmed.
    pub rest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Comment,
    InBlockComment,
    Text,
    Directive(DirectiveToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub index: usize,
    pub class: LineClass,
}

impl DirectiveToken {
    pub(crate) fn parse(line: usize, after_marker: &str) -> Self {
        let body = after_marker.trim_start();
        let word_len: usize = body
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .map(char::len_utf8)
            .sum();

        if word_len == 0 {
            return Self {
                line,
                keyword: "#".to_string(),
                rest: body.trim().to_string(),
            };
        }

        Self {
            line,
            keyword: body[..word_len].to_lowercase(),
            rest: body[word_len..].trim().to_string(),
        }
    }

    pub fn is(&self, keyword: &str) -> bool {
        self.keyword == keyword
    }

    /// First identifier of the remainder, e.g. the macro of `#ifndef FOO // x`.
    pub fn argument(&self) -> Option<&str> {
        let end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());
        if end == 0 {
            None
        } else {
            Some(&self.rest[..end])
        }
    }

    /// Opens a conditional block (`#if`, `#ifdef`, `#ifndef`).
    pub fn opens_conditional(&self) -> bool {
        matches!(self.keyword.as_str(), "if" | "ifdef" | "ifndef")
    }
}

/// Line-by-line classifier over a file's lines.
pub struct DirectiveScanner<'a> {
    lines: &'a [&'a str],
    cursor: ScanCursor,
}

impl<'a> DirectiveScanner<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            cursor: ScanCursor::new(0),
        }
    }

    /// Starts scanning at `line` with no open comment.
    pub fn starting_at(lines: &'a [&'a str], line: usize) -> Self {
        Self {
            lines,
            cursor: ScanCursor::new(line),
        }
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    pub fn directives(self) -> impl Iterator<Item = DirectiveToken> + 'a {
        self.filter_map(|scanned| match scanned.class {
            LineClass::Directive(token) => Some(token),
            _ => None,
        })
    }
}

impl<'a> Iterator for DirectiveScanner<'a> {
    type Item = ScannedLine;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.line;
        let text = self.lines.get(index)?;
        let class = self.cursor.classify(text);
        Some(ScannedLine { index, class })
    }
}

/// First directive strictly after line `start`, skipping blanks, comments and
/// plain text lines.
pub fn next_directive(lines: &[&str], start: usize) -> Option<DirectiveToken> {
    DirectiveScanner::starting_at(lines, start + 1).directives().next()
}
