//! H001 / H002: file-system rules. Column omitted, per spec.md 4.2.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

pub fn check_h001(doc: &Document) -> Vec<Diagnostic> {
    let name = doc.path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.contains(' ') {
        vec![Diagnostic::new("H001", "Presence of a space in the Markdown file name")]
    } else {
        Vec::new()
    }
}

pub fn check_h002(doc: &Document) -> Vec<Diagnostic> {
    if doc.path.to_string_lossy().contains(' ') {
        vec![Diagnostic::new(
            "H002",
            "Presence of a space in the path to the Markdown file",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn doc(path: &str) -> Document {
        Document::from_text(PathBuf::from(path), "# ok\n".to_string())
    }

    #[test]
    fn flags_space_in_filename() {
        assert_eq!(check_h001(&doc("my notes/foo bar.md")).len(), 1);
    }

    #[test]
    fn clean_filename_is_silent() {
        assert!(check_h001(&doc("notes/foo-bar.md")).is_empty());
    }

    #[test]
    fn flags_space_anywhere_in_path() {
        assert_eq!(check_h002(&doc("my notes/foo.md")).len(), 1);
        assert!(check_h002(&doc("notes/foo.md")).is_empty());
    }
}
