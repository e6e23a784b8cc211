//! H006: a known-incorrect word form appears in prose. Searches a line with
//! inline code, link targets, and HTML tags all blanked out, so a match can
//! never be reported at a column that falls inside a code span (spec.md
//! testable property 3) — the original implementation searched the raw line
//! and could report a column inside a code span when the incorrect word also
//! occurred, coincidentally, inside backticks earlier on the same line.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Diagnostic;
use crate::document::{blank_regex_matches, char_col, Document};
use crate::rules::find_word_boundary;
use crate::tables::INCORRECT_WORDS;

static LINK_TARGET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\]\([^)]*\)").unwrap());
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub fn check_h006(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        let masked = doc.masked(i);
        let masked = blank_regex_matches(&masked, &LINK_TARGET);
        let masked = blank_regex_matches(&masked, &HTML_TAG);

        for (incorrect, correct) in INCORRECT_WORDS {
            if let Some(byte_pos) = find_word_boundary(&masked, incorrect) {
                let col = char_col(&masked, byte_pos);
                out.push(
                    Diagnostic::new(
                        "H006",
                        format!("Incorrect word form used: \"{incorrect}\" should be \"{correct}\""),
                    )
                    .at(doc.abs_line(i), col),
                );
            }
        }
    }
    out
}
