//! Rules that scan physical lines directly: H008 (trailing whitespace),
//! H009 (double spaces), H010 (tabs), H011 (missing final newline), H012
//! (two consecutive blank lines), H022 (non-breaking space).
//!
//! H008/H010/H022 apply to every content line, including fenced code (per
//! spec.md's testable property 2 exception list); H009/H012 are prose-only.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

pub fn check_h008(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        let trimmed = line.trim_end();
        if trimmed.len() != line.len() {
            let col = trimmed.chars().count() + 1;
            out.push(Diagnostic::new("H008", "Trailing whitespace at end of line").at(doc.abs_line(i), col));
        }
    }
    out
}

pub fn check_h010(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if let Some(byte_pos) = line.find('\t') {
            let col = line[..byte_pos].chars().count() + 1;
            out.push(Diagnostic::new("H010", "Tab character found").at(doc.abs_line(i), col));
        }
    }
    out
}

pub fn check_h022(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if let Some(byte_pos) = line.find('\u{a0}') {
            let col = line[..byte_pos].chars().count() + 1;
            out.push(Diagnostic::new("H022", "Non-breaking space character found").at(doc.abs_line(i), col));
        }
    }
    out
}

pub fn check_h011(doc: &Document) -> Vec<Diagnostic> {
    if !doc.lines.is_empty() && !doc.text.ends_with('\n') {
        vec![Diagnostic::new("H011", "No empty line at end of file").at_line(doc.lines.len())]
    } else {
        Vec::new()
    }
}

pub fn check_h012(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let n = doc.content.len();
    if n < 2 {
        return out;
    }
    for i in 0..n - 1 {
        if i == 0 || i + 1 >= n - 1 {
            continue; // skip the first and last blank-pair boundary
        }
        if doc.code_mask[i] || doc.code_mask[i + 1] {
            continue;
        }
        if doc.content[i].trim().is_empty() && doc.content[i + 1].trim().is_empty() {
            out.push(Diagnostic::new("H012", "Two consecutive empty lines").at_line(doc.abs_line(i)));
        }
    }
    out
}

pub fn check_h009(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        if !line.contains("  ") {
            continue;
        }
        if line.starts_with("  ") {
            continue;
        }
        if i > 0 {
            let prev = doc.content[i - 1].trim();
            if prev.starts_with('*') || prev.starts_with('-') {
                continue;
            }
        }
        if line.trim_start().starts_with('|') {
            continue;
        }
        let byte_pos = line.find("  ").unwrap();
        let col = line[..byte_pos].chars().count() + 1;
        out.push(Diagnostic::new("H009", "Double spaces in line").at(doc.abs_line(i), col));
    }
    out
}
