//! H020 (image caption must not start lowercase) and H026 (`![` must be at
//! the first non-whitespace column).

use crate::diagnostic::Diagnostic;
use crate::document::Document;

pub fn check_h020(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with("![") {
            continue;
        }
        let Some(close) = trimmed.find(']') else { continue };
        let caption = &trimmed[2..close];
        let Some(first) = caption.chars().next() else { continue };
        if first.is_alphabetic() && first.is_lowercase() {
            out.push(
                Diagnostic::new(
                    "H020",
                    format!("Image caption starts with lowercase letter: caption starts with \"{first}\""),
                )
                .at(doc.abs_line(i), 3),
            );
        }
    }
    out
}

pub fn check_h026(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let trimmed = line.trim();
        if !trimmed.contains("![") || trimmed.find("![") == Some(0) {
            continue;
        }
        if let Some(byte_pos) = line.find("![") {
            let col = line[..byte_pos].chars().count() + 1;
            out.push(Diagnostic::new("H026", "Image markdown ![ found not at start of line").at(doc.abs_line(i), col));
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
    fn lowercase_caption_flagged_at_col_three() {
        let d = doc("---\nlang: en\n---\n\n![diagram](img.png)\n");
        let diags = check_h020(&d);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].column, 3);
    }

    #[test]
    fn uppercase_caption_is_silent() {
        let d = doc("---\nlang: en\n---\n\n![Diagram](img.png)\n");
        assert!(check_h020(&d).is_empty());
    }

    #[test]
    fn image_not_at_line_start_is_flagged() {
        let d = doc("---\nlang: en\n---\n\nSee this: ![alt](img.png)\n");
        assert_eq!(check_h026(&d).len(), 1);
    }

    #[test]
    fn image_at_line_start_is_silent() {
        let d = doc("---\nlang: en\n---\n\n![alt](img.png)\n");
        assert!(check_h026(&d).is_empty());
    }
}
