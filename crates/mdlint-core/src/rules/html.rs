//! H019: a forbidden HTML-tag fragment appears in prose, case-insensitive.
//! `<details>`/`<summary>` (open or close) are allowed. Matches inside
//! inline code are not excluded here (open question in spec.md: the source
//! does not distinguish code spans consistently for this rule).

use crate::diagnostic::Diagnostic;
use crate::document::Document;
use crate::tables::FORBIDDEN_HTML_TAGS;

const ALLOWED_PREFIXES: &[&str] = &["<details", "<details>", "</details>", "<summary", "<summary>", "</summary>"];

pub fn check_h019(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let lower = line.to_lowercase();
        for tag in FORBIDDEN_HTML_TAGS {
            let tag_lower = tag.to_lowercase();
            if let Some(byte_pos) = lower.find(&tag_lower) {
                let rest = &lower[byte_pos..];
                if ALLOWED_PREFIXES.iter().any(|p| rest.starts_with(p)) {
                    continue;
                }
                let col = lower[..byte_pos].chars().count() + 1;
                out.push(
                    Diagnostic::new("H019", format!("HTML tags in markdown content: found \"{tag}\""))
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
    fn forbidden_tag_is_flagged() {
        let d = doc("---\nlang: en\n---\n\nUse <strong>bold</strong> text.\n");
        assert!(!check_h019(&d).is_empty());
    }

    #[test]
    fn details_summary_are_allowed() {
        let d = doc("---\nlang: en\n---\n\n<details>\n<summary>More</summary>\ncontent\n</details>\n");
        assert!(check_h019(&d).is_empty());
    }

    #[test]
    fn matched_case_insensitively() {
        let d = doc("---\nlang: en\n---\n\nUse <STRONG>bold</STRONG>.\n");
        assert!(!check_h019(&d).is_empty());
    }
}
