//! H018: straight `"`, curly `" "`, and incorrectly-spaced guillemets
//! (`« `, ` »`) instead of tight angle quotes.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

const PATTERNS: &[(&str, &str)] = &[
    ("\"", "straight double quote \""),
    ("\u{201c}", "curly quote \u{201c}"),
    ("\u{201d}", "curly quote \u{201d}"),
    ("\u{ab} ", "space after \u{ab}"),
    (" \u{bb}", "space before \u{bb}"),
];

pub fn check_h018(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        let masked = doc.masked(i);
        for (pattern, description) in PATTERNS {
            if let Some(byte_pos) = masked.find(pattern) {
                let col = masked[..byte_pos].chars().count() + 1;
                out.push(
                    Diagnostic::new(
                        "H018",
                        format!("Curly/straight quotes instead of angle quotes: found {description}"),
                    )
                    .at(doc.abs_line(i), col),
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn doc(text: &str) -> Document {
        Document::from_text(PathBuf::from("foo.md"), text.to_string())
    }

    #[test]
    fn straight_quote_is_flagged() {
        let d = doc("---\nlang: en\n---\n\nHe said \"hi\".\n");
        assert!(check_h018(&d).iter().any(|d| d.message.contains("straight double quote")));
    }

    #[test]
    fn guillemets_with_inner_space_flagged() {
        let d = doc("---\nlang: en\n---\n\n\u{ab} word \u{bb}\n");
        let diags = check_h018(&d);
        assert!(diags.iter().any(|d| d.message.contains("space after")));
        assert!(diags.iter().any(|d| d.message.contains("space before")));
    }

    #[test]
    fn tight_guillemets_are_silent() {
        let d = doc("---\nlang: en\n---\n\n\u{ab}word\u{bb}\n");
        assert!(check_h018(&d).is_empty());
    }
}
