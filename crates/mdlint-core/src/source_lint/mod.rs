//! Source Linter (HP rules): a sibling class of checks that run over plain
//! source files rather than Markdown, carried over from the original
//! `python_checker.py` companion to the Markdown checker.
//!
//! HP001 flags Cyrillic characters leaking into source comments/strings;
//! HP002 flags old-style docstring section headings (`Args:` etc.)
//! immediately followed by indented content instead of a blank line plus a
//! bulleted list. Both respect `# ignore:`/`# file-ignore:` directives.

pub mod ignore;

use std::sync::LazyLock;

use regex::Regex;

use crate::tables::DOCSTRING_SECTION_HEADINGS;

static CYRILLIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[а-яёА-ЯЁ]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDiagnostic {
    pub code: &'static str,
    pub message: String,
    pub line: usize,
}

impl SourceDiagnostic {
    fn new(code: &'static str, message: impl Into<String>, line: usize) -> Self {
        SourceDiagnostic {
            code,
            message: message.into(),
            line,
        }
    }

    /// Unlike [`crate::diagnostic::Diagnostic::format`], HP-rule messages get
    /// a trailing ignore hint; this asymmetry is the original's own
    /// convention, not an oversight.
    pub fn format(&self, rel_path: &str) -> String {
        format!(
            "{rel_path}:{}: {} {} [to ignore: # ignore: {}]",
            self.line, self.code, self.message, self.code
        )
    }
}

fn is_docstring_boundary(line: &str) -> bool {
    let count = line.matches("\"\"\"").count() + line.matches("'''").count();
    count % 2 == 1
}

fn matches_section_heading(trimmed: &str) -> bool {
    DOCSTRING_SECTION_HEADINGS.iter().any(|h| trimmed == *h)
}

/// Run HP001 and HP002 over `lines`, applying per-line and file-wide ignore
/// directives.
pub fn check_source_lines(lines: &[String]) -> Vec<SourceDiagnostic> {
    let file_ignored = ignore::file_ignored_codes(lines);
    let mut out = Vec::new();
    let mut in_docstring = false;

    for (i, line) in lines.iter().enumerate() {
        let line_ignored = ignore::line_ignored_codes(line);
        let ignored = |code: &str| file_ignored.contains(code) || line_ignored.contains(code);

        if is_docstring_boundary(line) {
            in_docstring = !in_docstring;
        }

        if !ignored("HP001") && CYRILLIC.is_match(line) {
            out.push(SourceDiagnostic::new("HP001", "Cyrillic character found in source line", i + 1));
        }

        if in_docstring && !ignored("HP002") {
            let trimmed = line.trim();
            if matches_section_heading(trimmed) {
                if let Some(next) = lines.get(i + 1) {
                    let next_trimmed = next.trim_start();
                    let is_blank = next.trim().is_empty();
                    let is_bullet = next_trimmed.starts_with('-');
                    let is_indented = next.starts_with(' ') || next.starts_with('\t');
                    if !is_blank && !is_bullet && is_indented {
                        out.push(SourceDiagnostic::new(
                            "HP002",
                            format!("Old-style docstring section heading \"{trimmed}\" not followed by a blank line and bulleted list"),
                            i + 1,
                        ));
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn cyrillic_character_is_flagged() {
        let src = lines("let x = 1; // комментарий\n");
        let diags = check_source_lines(&src);
        assert!(diags.iter().any(|d| d.code == "HP001"));
    }

    #[test]
    fn ascii_only_line_is_silent() {
        let src = lines("let x = 1; // comment\n");
        assert!(check_source_lines(&src).is_empty());
    }

    #[test]
    fn old_style_docstring_heading_is_flagged() {
        let src = lines("\"\"\"\nArgs:\n    x: the value\n\"\"\"\n");
        let diags = check_source_lines(&src);
        assert!(diags.iter().any(|d| d.code == "HP002"));
    }

    #[test]
    fn heading_outside_docstring_is_silent() {
        let src = lines("Args:\n    x: the value\n");
        assert!(check_source_lines(&src).is_empty());
    }

    #[test]
    fn heading_followed_by_blank_line_is_silent() {
        let src = lines("\"\"\"\nArgs:\n\n    - x: the value\n\"\"\"\n");
        assert!(check_source_lines(&src).iter().all(|d| d.code != "HP002"));
    }

    #[test]
    fn heading_followed_by_bullet_is_silent() {
        let src = lines("\"\"\"\nArgs:\n- x: the value\n\"\"\"\n");
        assert!(check_source_lines(&src).iter().all(|d| d.code != "HP002"));
    }

    #[test]
    fn line_ignore_directive_suppresses_hp001() {
        let src = lines("let x = 1; // комментарий  # ignore: HP001\n");
        assert!(check_source_lines(&src).is_empty());
    }

    #[test]
    fn file_ignore_directive_suppresses_for_whole_file() {
        let src = lines("# file-ignore: HP001\nlet x = 1; // комментарий\n");
        assert!(check_source_lines(&src).is_empty());
    }

    #[test]
    fn format_appends_ignore_hint() {
        let d = SourceDiagnostic::new("HP001", "Cyrillic character found in source line", 3);
        assert_eq!(
            d.format("foo.rs"),
            "foo.rs:3: HP001 Cyrillic character found in source line [to ignore: # ignore: HP001]"
        );
    }
}
