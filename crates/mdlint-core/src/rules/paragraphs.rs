//! H023: two consecutive non-empty prose lines that should be separated by
//! a blank line, with a list of exceptions (lists, tables, quotes, math
//! fences, `<details>` blocks, images) carried over from the original
//! checker's `_is_paragraph_pair_requiring_empty_line`.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

fn starts_list_item(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("* ") || t.starts_with("- ")
}

fn first_non_ws(line: &str) -> Option<char> {
    line.trim_start().chars().next()
}

fn is_details_tag(line: &str) -> bool {
    let t = line.trim();
    t.eq_ignore_ascii_case("<details>")
        || t.eq_ignore_ascii_case("</details>")
        || t.to_lowercase().starts_with("<summary")
        || t.to_lowercase().starts_with("</summary>")
}

fn is_paragraph_pair_requiring_empty_line(line: &str, next: &str) -> bool {
    if line.trim().is_empty() || next.trim().is_empty() {
        return false;
    }
    if line.trim_start().starts_with("$$") || next.trim_start().starts_with("$$") {
        return false;
    }
    if starts_list_item(line) || starts_list_item(next) {
        return false;
    }
    if is_details_tag(line) || is_details_tag(next) {
        return false;
    }
    let next_trimmed = next.trim_start();
    if next_trimmed.starts_with("![") || next_trimmed.starts_with('$') {
        return false;
    }
    match first_non_ws(line) {
        Some(c) if c == '|' || c == '*' || c == '>' || c.is_ascii_digit() => return false,
        _ => {}
    }
    true
}

pub fn check_h023(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let mut details_depth: i32 = 0;

    for i in 0..doc.content.len().saturating_sub(1) {
        let line = &doc.content[i];
        let next = &doc.content[i + 1];

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("<details>") {
            details_depth += 1;
        } else if trimmed.eq_ignore_ascii_case("</details>") {
            details_depth = (details_depth - 1).max(0);
        }

        if doc.code_mask[i] || doc.code_mask[i + 1] {
            continue;
        }
        if details_depth > 0 {
            continue;
        }
        if is_paragraph_pair_requiring_empty_line(line, next) {
            let col = line.trim_end().chars().count() + 1;
            out.push(
                Diagnostic::new("H023", "No empty line between paragraphs: missing blank line before next paragraph")
                    .at(doc.abs_line(i), col),
            );
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
    fn adjacent_paragraphs_without_blank_line_flagged() {
        let d = doc("---\nlang: en\n---\n\nFirst paragraph.\nSecond paragraph.\n");
        assert_eq!(check_h023(&d).len(), 1);
    }

    #[test]
    fn blank_line_between_paragraphs_is_silent() {
        let d = doc("---\nlang: en\n---\n\nFirst paragraph.\n\nSecond paragraph.\n");
        assert!(check_h023(&d).is_empty());
    }

    #[test]
    fn list_items_are_exempt() {
        let d = doc("---\nlang: en\n---\n\n- item one\n- item two\n");
        assert!(check_h023(&d).is_empty());
    }

    #[test]
    fn table_rows_are_exempt() {
        let d = doc("---\nlang: en\n---\n\n| a | b |\n| - | - |\n");
        assert!(check_h023(&d).is_empty());
    }

    #[test]
    fn inside_details_block_is_exempt() {
        let d = doc("---\nlang: en\n---\n\n<details>\nLine one.\nLine two.\n</details>\n");
        assert!(check_h023(&d).is_empty());
    }

    #[test]
    fn image_on_next_line_is_exempt() {
        let d = doc("---\nlang: en\n---\n\nCaption text.\n![alt](img.png)\n");
        assert!(check_h023(&d).is_empty());
    }

    #[test]
    fn math_fence_line_is_exempt() {
        let d = doc("---\nlang: en\n---\n\n$$\nE = mc^2\n$$\n");
        assert!(check_h023(&d).is_empty());
    }
}
