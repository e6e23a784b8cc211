//! H013 / H014: a paragraph line immediately before a blank line followed by
//! a fenced code block (H013) or an image (H014) must end with `:`.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

const ADMONITION_MARKERS: &[&str] = &[
    "[!DETAILS]",
    "[!WARNING]",
    "[!IMPORTANT]",
    "[!NOTE]",
    "<!-- !details -->",
    "<!-- !note -->",
    "<!-- !important -->",
    "<!-- !warning -->",
];

fn should_check_paragraph_end(line: &str) -> bool {
    let t = line.trim();
    if t.is_empty() {
        return false;
    }
    if t.starts_with('#') || t.starts_with("```") || t.starts_with('<') || t.starts_with('>') || t.starts_with('|') {
        return false;
    }
    if t.starts_with("- ") || t.starts_with("* ") || is_numbered_list_item(t) {
        return false;
    }
    true
}

fn is_numbered_list_item(t: &str) -> bool {
    let digits: String = t.chars().take_while(|c| c.is_ascii_digit()).collect();
    !digits.is_empty() && t[digits.len()..].starts_with(". ")
}

fn is_italic_caption(stripped: &str) -> bool {
    stripped.len() >= 2 && stripped.starts_with('_') && stripped.ends_with('_')
}

fn has_admonition_marker(line: &str) -> bool {
    ADMONITION_MARKERS.iter().any(|m| line.contains(m))
}

pub fn check_h013(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let n = doc.content.len();
    for i in 0..n {
        if i + 2 >= n || doc.code_mask[i] {
            continue;
        }
        let line = &doc.content[i];
        if !should_check_paragraph_end(line) {
            continue;
        }
        if !doc.content[i + 1].trim().is_empty() {
            continue;
        }
        if !doc.content[i + 2].trim().starts_with("```") {
            continue;
        }
        if has_admonition_marker(line) || is_italic_caption(line.trim()) {
            continue;
        }
        let trimmed = line.trim_end();
        let last_char = trimmed.chars().last();
        if last_char != Some(':') {
            let shown = last_char.map(|c| c.to_string()).unwrap_or_default();
            out.push(
                Diagnostic::new(
                    "H013",
                    format!("Missing colon before code block: last char is \"{shown}\""),
                )
                .at(doc.abs_line(i), trimmed.chars().count()),
            );
        }
    }
    out
}

pub fn check_h014(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let n = doc.content.len();
    for i in 0..n {
        if i + 2 >= n || doc.code_mask[i] {
            continue;
        }
        let line = &doc.content[i];
        if !should_check_paragraph_end(line) {
            continue;
        }
        if !doc.content[i + 1].trim().is_empty() {
            continue;
        }
        if !doc.content[i + 2].trim().starts_with("![") {
            continue;
        }
        if has_admonition_marker(line) {
            continue;
        }
        let stripped = line.trim();
        if is_italic_caption(stripped) {
            continue;
        }
        if stripped.starts_with("- ") {
            continue;
        }
        let trimmed = line.trim_end();
        let last_char = trimmed.chars().last();
        if last_char != Some(':') {
            let shown = last_char.map(|c| c.to_string()).unwrap_or_default();
            out.push(
                Diagnostic::new(
                    "H014",
                    format!("Missing colon before image: last char is \"{shown}\""),
                )
                .at(doc.abs_line(i), trimmed.chars().count()),
            );
        }
    }
    out
}
