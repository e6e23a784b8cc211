//! H017: three ASCII dots should be the ellipsis character, and an ellipsis
//! at the end of a line is flagged too.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

pub fn check_h017(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        let masked = doc.masked(i);

        if let Some(byte_pos) = masked.find("...") {
            let col = masked[..byte_pos].chars().count() + 1;
            out.push(Diagnostic::new("H017", "Three dots instead of ellipsis character: \"...\" should be \"\u{2026}\"").at(
                doc.abs_line(i),
                col,
            ));
        }

        let trimmed = masked.trim_end();
        if trimmed.ends_with('\u{2026}') {
            let col = trimmed.chars().count();
            out.push(Diagnostic::new("H017", "Three dots instead of ellipsis character: ellipsis \"\u{2026}\" at end of line").at(
                doc.abs_line(i),
                col,
            ));
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
    fn three_dots_flagged() {
        let d = doc("---\nlang: en\n---\n\nWait...\n");
        let diags = check_h017(&d);
        assert!(diags.iter().any(|d| d.message.contains("\"...\" should be")));
    }

    #[test]
    fn ellipsis_at_end_flagged() {
        let d = doc("---\nlang: en\n---\n\nAnd then\u{2026}\n");
        let diags = check_h017(&d);
        assert!(diags.iter().any(|d| d.message.contains("at end of line")));
    }

    #[test]
    fn proper_ellipsis_mid_sentence_is_silent() {
        let d = doc("---\nlang: en\n---\n\nWait\u{2026} really?\n");
        assert!(check_h017(&d).is_empty());
    }
}
