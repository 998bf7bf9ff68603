// Fri Oct 16 2026 - Alex

use super::directive::{DirectiveToken, LineClass};

/// Lexical state carried from one line to the next.
///
/// `in_block_comment` is set only while a `/* ... */` span is open. An
/// unterminated comment leaves it set at end of file; callers just stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCursor {
    pub line: usize,
    pub in_block_comment: bool,
}

impl ScanCursor {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            in_block_comment: false,
        }
    }

    /// Classifies the line at `self.line` and advances to the next one.
    pub fn classify(&mut self, text: &str) -> LineClass {
        let index = self.line;
        self.line += 1;

        let started_in_block = self.in_block_comment;
        let mut saw_comment = false;
        let mut p = 0;

        loop {
            if self.in_block_comment {
                match text[p..].find("*/") {
                    Some(end) => {
                        self.in_block_comment = false;
                        saw_comment = true;
                        p += end + 2;
                        continue;
                    }
                    None if started_in_block && !saw_comment => return LineClass::InBlockComment,
                    None => return LineClass::Comment,
                }
            }

            let rest = &text[p..];
            let trimmed = rest.trim_start();
            p += rest.len() - trimmed.len();

            if trimmed.is_empty() {
                return if saw_comment { LineClass::Comment } else { LineClass::Blank };
            }
            if trimmed.starts_with("//") {
                return LineClass::Comment;
            }
            if trimmed.starts_with("/*") {
                self.in_block_comment = true;
                saw_comment = true;
                p += 2;
                continue;
            }
            if let Some(after_marker) = trimmed.strip_prefix('#') {
                let token = DirectiveToken::parse(index, after_marker);
                self.skip_code(&token.rest);
                return LineClass::Directive(token);
            }

            self.skip_code(trimmed);
            return LineClass::Text;
        }
    }

    /// Walks the code tail of a line so a `/*` opened after code is not missed.
    /// String and character literals are stepped over; they end at end of line.
    fn skip_code(&mut self, code: &str) {
        let bytes = code.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            if self.in_block_comment {
                match code[i..].find("*/") {
                    Some(end) => {
                        self.in_block_comment = false;
                        i += end + 2;
                    }
                    None => return,
                }
                continue;
            }

            match bytes[i] {
                b'/' if bytes.get(i + 1) == Some(&b'/') => return,
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    self.in_block_comment = true;
                    i += 2;
                }
                b'"' => i = skip_literal(bytes, i, b'"'),
                // digit separator, as in 1'000'000
                b'\'' if i > 0 && bytes[i - 1].is_ascii_alphanumeric() => i += 1,
                b'\'' => i = skip_literal(bytes, i, b'\''),
                _ => i += 1,
            }
        }
    }
}

fn skip_literal(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(lines: &[&str]) -> Vec<LineClass> {
        let mut cursor = ScanCursor::new(0);
        lines.iter().map(|l| cursor.classify(l)).collect()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let classes = classify_all(&["", "   ", "// note", "/* a */", "  /* a */ // b"]);
        assert_eq!(
            classes,
            vec![
                LineClass::Blank,
                LineClass::Blank,
                LineClass::Comment,
                LineClass::Comment,
                LineClass::Comment,
            ]
        );
    }

    #[test]
    fn test_multiline_block_comment() {
        let classes = classify_all(&["/* start", " * middle #include <x>", " end */", "int x;"]);
        assert_eq!(classes[0], LineClass::Comment);
        assert_eq!(classes[1], LineClass::InBlockComment);
        assert_eq!(classes[2], LineClass::Comment);
        assert_eq!(classes[3], LineClass::Text);
    }

    #[test]
    fn test_comment_opened_after_code() {
        let mut cursor = ScanCursor::new(0);
        assert_eq!(cursor.classify("int x; /* trailing"), LineClass::Text);
        assert!(cursor.in_block_comment);
        assert_eq!(cursor.classify("#include <hidden.h>"), LineClass::InBlockComment);
        assert_eq!(cursor.classify("*/"), LineClass::Comment);
        assert!(!cursor.in_block_comment);
    }

    #[test]
    fn test_comment_marker_inside_string_literal() {
        let mut cursor = ScanCursor::new(0);
        assert_eq!(cursor.classify(r#"auto s = "/* not a comment";"#), LineClass::Text);
        assert!(!cursor.in_block_comment);

        assert_eq!(cursor.classify(r#"auto e = "\" /*";"#), LineClass::Text);
        assert!(!cursor.in_block_comment);
    }

    #[test]
    fn test_digit_separator_is_not_a_literal() {
        let mut cursor = ScanCursor::new(0);
        assert_eq!(cursor.classify("int n = 1'000; /* open"), LineClass::Text);
        assert!(cursor.in_block_comment);
    }

    #[test]
    fn test_reopened_comment_on_one_line() {
        let mut cursor = ScanCursor::new(0);
        assert_eq!(cursor.classify("/* a */ /* b */ /* c"), LineClass::Comment);
        assert!(cursor.in_block_comment);
    }

    #[test]
    fn test_cursor_advances_line() {
        let mut cursor = ScanCursor::new(4);
        cursor.classify("");
        cursor.classify("");
        assert_eq!(cursor.line, 6);
    }
}
