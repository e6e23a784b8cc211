//! H016 (incorrect dash/hyphen usage, four independent sub-checks) and
//! H028 (horizontal bar U+2015).

use crate::diagnostic::Diagnostic;
use crate::document::Document;

fn is_table_cell_only_dash(line: &str, byte_pos: usize) -> bool {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return false;
    }
    let mut start = 0;
    for part in parts {
        let end = start + part.len();
        if start <= byte_pos && byte_pos < end {
            return part.trim() == "-";
        }
        start = end + 1; // +1 for the '|' separator
    }
    false
}

fn hyphen_to_em_dash(doc: &Document, i: usize, out: &mut Vec<Diagnostic>) {
    let line = &doc.content[i];
    let mut offset_chars = 0usize;
    let mut byte_offset = 0usize;
    for seg in &doc.inline_segments[i] {
        if !seg.in_code {
            if let Some(rel) = seg.text.find(" - ") {
                if !seg.text.trim_start().starts_with('-') {
                    let byte_pos = byte_offset + rel;
                    if !(line.contains('|') && is_table_cell_only_dash(line, byte_pos)) {
                        let col = offset_chars + seg.text[..rel].chars().count() + 1;
                        out.push(
                            Diagnostic::new("H016", "Incorrect dash/hyphen usage: \" - \" should be \" \u{2014} \" (em dash)")
                                .at(doc.abs_line(i), col),
                        );
                        return;
                    }
                }
            }
        }
        offset_chars += seg.text.chars().count();
        byte_offset += seg.text.len();
    }
}

fn double_hyphen_or_minus(doc: &Document, i: usize, out: &mut Vec<Diagnostic>) {
    let mut offset_chars = 0usize;
    for seg in &doc.inline_segments[i] {
        if !seg.in_code {
            if let Some(rel) = seg.text.find(" \u{2212} ") {
                let col = offset_chars + seg.text[..rel].chars().count() + 1;
                out.push(
                    Diagnostic::new(
                        "H016",
                        "Incorrect dash/hyphen usage: \" \u{2212} \" (minus) should be \" \u{2014} \" (em dash)",
                    )
                    .at(doc.abs_line(i), col),
                );
                return;
            }
            if let Some(rel) = seg.text.find(" -- ") {
                let col = offset_chars + seg.text[..rel].chars().count() + 1;
                out.push(
                    Diagnostic::new("H016", "Incorrect dash/hyphen usage: \" -- \" should be \" \u{2014} \" (em dash)")
                        .at(doc.abs_line(i), col),
                );
                return;
            }
        }
        offset_chars += seg.text.chars().count();
    }
}

fn en_dash_between_digits(doc: &Document, i: usize, out: &mut Vec<Diagnostic>) {
    let masked = doc.masked(i);
    let chars: Vec<char> = masked.chars().collect();
    for (pos, &c) in chars.iter().enumerate() {
        if c != '\u{2013}' {
            continue;
        }
        let before = if pos > 0 { chars[pos - 1] } else { ' ' };
        let after = chars.get(pos + 1).copied().unwrap_or(' ');
        if !(before.is_ascii_digit() && after.is_ascii_digit()) {
            out.push(
                Diagnostic::new(
                    "H016",
                    "Incorrect dash/hyphen usage: en dash \"\u{2013}\" should only be between digits",
                )
                .at(doc.abs_line(i), pos + 1),
            );
        }
    }
}

fn em_dash_needs_spaces(doc: &Document, i: usize, out: &mut Vec<Diagnostic>) {
    let masked = doc.masked(i);
    let chars: Vec<char> = masked.chars().collect();
    for (pos, &c) in chars.iter().enumerate() {
        if c != '\u{2014}' {
            continue;
        }
        let after = chars.get(pos + 1).copied().unwrap_or(' ');
        if pos == 0 {
            if after != ' ' {
                out.push(
                    Diagnostic::new(
                        "H016",
                        "Incorrect dash/hyphen usage: em dash \"\u{2014}\" at start should be followed by space",
                    )
                    .at(doc.abs_line(i), pos + 1),
                );
            }
            continue;
        }
        let before = chars[pos - 1];
        if !(before == ' ' && after == ' ') {
            out.push(
                Diagnostic::new(
                    "H016",
                    "Incorrect dash/hyphen usage: em dash \"\u{2014}\" should have spaces around it",
                )
                .at(doc.abs_line(i), pos + 1),
            );
        }
    }
}

pub fn check_h016(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        hyphen_to_em_dash(doc, i, &mut out);
        double_hyphen_or_minus(doc, i, &mut out);
        en_dash_between_digits(doc, i, &mut out);
        em_dash_needs_spaces(doc, i, &mut out);
    }
    out
}

pub fn check_h028(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        let masked = doc.masked(i);
        if let Some(byte_pos) = masked.find('\u{2015}') {
            let col = masked[..byte_pos].chars().count() + 1;
            out.push(Diagnostic::new("H028", "Horizontal bar \u{2015} (dialogue dash) should not be used").at(
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
    fn hyphen_flanked_by_spaces_wants_em_dash() {
        let d = doc("---\nlang: en\n---\n\nThis - is wrong.\n");
        let diags = check_h016(&d);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 5);
        assert_eq!(diags[0].column, 5);
        assert!(diags[0].message.contains("should be \" \u{2014} \""));
    }

    #[test]
    fn table_cell_with_only_dash_is_exempt() {
        let d = doc("---\nlang: en\n---\n\n| a | - |\n");
        assert!(check_h016(&d).is_empty());
    }

    #[test]
    fn en_dash_between_digits_is_ok() {
        let d = doc("---\nlang: en\n---\n\npages 10\u{2013}20.\n");
        assert!(check_h016(&d).is_empty());
    }

    #[test]
    fn en_dash_not_between_digits_is_flagged() {
        let d = doc("---\nlang: en\n---\n\nsee a\u{2013}b.\n");
        assert_eq!(check_h016(&d).len(), 1);
    }

    #[test]
    fn em_dash_with_spaces_is_ok() {
        let d = doc("---\nlang: en\n---\n\nA pause \u{2014} then more.\n");
        assert!(check_h016(&d).is_empty());
    }

    #[test]
    fn leading_em_dash_only_needs_trailing_space() {
        let d = doc("---\nlang: en\n---\n\n\u{2014} said nobody.\n");
        assert!(check_h016(&d).is_empty());
    }

    #[test]
    fn horizontal_bar_is_flagged() {
        let d = doc("---\nlang: en\n---\n\nWait\u{2015}what?\n");
        assert_eq!(check_h028(&d).len(), 1);
    }
}
