//! Rule Engine: an explicit registry of `(code, title, function)` triples.
//! Each function is a pure `(&Document) -> Vec<Diagnostic>`; the engine
//! (not the rule) applies activation filtering and the final sort. This
//! replaces the original's dynamic "callable-as-method" dispatch with a
//! static list, per spec.md's Design Notes.

mod code_fence;
mod colon;
mod dash;
mod ellipsis;
mod filename;
mod html;
mod images;
mod line_level;
mod paragraphs;
mod punctuation;
mod quotes;
mod sentence;
mod words;
mod yaml_rules;

use crate::diagnostic::Diagnostic;
use crate::document::Document;

pub type RuleFn = fn(&Document) -> Vec<Diagnostic>;

/// Declaration order here is "rule-declaration order" for spec.md section 5;
/// the engine's final `(line, column, code)` sort makes this order
/// observable only for same-position diagnostics from different rules.
pub const RULES: &[(&str, &str, RuleFn)] = &[
    ("H001", "Presence of a space in the Markdown file name", filename::check_h001),
    ("H002", "Presence of a space in the path to the Markdown file", filename::check_h002),
    ("H003", "YAML is missing", yaml_rules::check_h003),
    ("H004", "The lang field is missing in YAML", yaml_rules::check_h004),
    ("H005", "In YAML, lang is not set to en or ru", yaml_rules::check_h005),
    ("H006", "Incorrect word form used", words::check_h006),
    ("H007", "Incorrect code block language identifier", code_fence::check_h007),
    ("H008", "Trailing whitespace at end of line", line_level::check_h008),
    ("H009", "Double spaces in line", line_level::check_h009),
    ("H010", "Tab character found", line_level::check_h010),
    ("H011", "No empty line at end of file", line_level::check_h011),
    ("H012", "Two consecutive empty lines", line_level::check_h012),
    ("H013", "Missing colon before code block", colon::check_h013),
    ("H014", "Missing colon before image", colon::check_h014),
    ("H015", "Space before punctuation mark", punctuation::check_h015),
    ("H016", "Incorrect dash/hyphen usage", dash::check_h016),
    ("H017", "Three dots instead of ellipsis character", ellipsis::check_h017),
    ("H018", "Curly/straight quotes instead of angle quotes", quotes::check_h018),
    ("H019", "HTML tags in markdown content", html::check_h019),
    ("H020", "Image caption starts with lowercase letter", images::check_h020),
    ("H021", "Lowercase letter after sentence-ending punctuation", sentence::check_h021),
    ("H022", "Non-breaking space character found", line_level::check_h022),
    ("H023", "No empty line between paragraphs", paragraphs::check_h023),
    (
        "H024",
        "Capitalized Russian polite pronoun (use lowercase when addressing reader)",
        sentence::check_h024,
    ),
    ("H025", "Latin x or Cyrillic x used instead of multiplication sign \u{d7}", punctuation::check_h025),
    ("H026", "Image markdown ![ found not at start of line", images::check_h026),
    ("H028", "Horizontal bar \u{2015} (dialogue dash) should not be used", dash::check_h028),
    ("H029", "Space required after \u{2116}", punctuation::check_h029),
    ("H030", "Question mark followed by period (?.)", punctuation::check_h030),
];

pub fn known_codes() -> Vec<&'static str> {
    RULES.iter().map(|(code, _, _)| *code).collect()
}

/// Run every rule whose code is in `active`, in declaration order, and
/// return the concatenated (not yet sorted) diagnostics.
pub fn run_active_rules(doc: &Document, active: &std::collections::BTreeSet<&str>) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (code, _title, rule_fn) in RULES {
        if active.contains(code) {
            out.extend(rule_fn(doc));
        }
    }
    out
}

// --- Shared helpers used by several rule modules -------------------------

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// First byte offset of `needle` in `haystack` such that neither
/// neighboring character is a word character (so "css" doesn't match inside
/// "access", but "e-mail" matches standalone). `haystack` should already
/// have inline code (and, for H006, URLs/tags) blanked out.
pub(crate) fn find_word_boundary(haystack: &str, needle: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(rel) = haystack[start..].find(needle) {
        let abs = start + rel;
        let before_ok = haystack[..abs]
            .chars()
            .next_back()
            .map(|c| !is_word_char(c))
            .unwrap_or(true);
        let after = abs + needle.len();
        let after_ok = haystack[after..]
            .chars()
            .next()
            .map(|c| !is_word_char(c))
            .unwrap_or(true);
        if before_ok && after_ok {
            return Some(abs);
        }
        start = abs + needle.len().max(1);
        if start > haystack.len() {
            break;
        }
    }
    None
}
