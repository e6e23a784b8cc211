//! H015 (space before punctuation), H025 (x/х as multiplication), H029
//! (№ needs a following space), H030 (`?.` sequence).

use crate::diagnostic::Diagnostic;
use crate::document::{Document, Segment};

const SPACE_BEFORE: &[(&str, &str)] = &[(" .", " ."), (" ,", " ,"), (" ;", " ;"), (" :", " :"), (" ?", " ?")];

const BANG_EXCEPTIONS: &[&str] = &[" !details", " !note", " !important", " !warning"];

/// Per-char mask of `segments`, `true` where the char belongs to an inline
/// code span. Used to search the *unmasked* line text while still rejecting
/// matches that overlap code, so that the backtick fences themselves (which
/// `Document::masked` turns into spaces) can never fabricate a match such as
/// " :" out of a closing fence immediately followed by punctuation.
fn char_code_mask(segments: &[Segment]) -> Vec<bool> {
    let mut mask = Vec::new();
    for seg in segments {
        let n = seg.text.chars().count();
        mask.extend(std::iter::repeat_n(seg.in_code, n));
    }
    mask
}

/// First char index in `chars` where `pattern` occurs with every matched
/// char outside an inline-code span, or `None`.
fn find_prose_match(chars: &[char], mask: &[bool], pattern: &str) -> Option<usize> {
    let pat: Vec<char> = pattern.chars().collect();
    if chars.len() < pat.len() {
        return None;
    }
    (0..=chars.len() - pat.len())
        .find(|&start| chars[start..start + pat.len()] == pat[..] && mask[start..start + pat.len()].iter().all(|&c| !c))
}

pub fn check_h015(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        let mask = char_code_mask(&doc.inline_segments[i]);
        for (pattern, display) in SPACE_BEFORE {
            if let Some(start) = find_prose_match(&chars, &mask, pattern) {
                out.push(
                    Diagnostic::new("H015", format!("Space before punctuation mark: found \"{display}\""))
                        .at(doc.abs_line(i), start + 1),
                );
            }
        }
        if let Some(start) = find_prose_match(&chars, &mask, " !") {
            let rest: String = chars[start..].iter().collect();
            let exempted = BANG_EXCEPTIONS.iter().any(|e| rest.starts_with(e)) || line.trim_start().starts_with('!');
            if !exempted {
                out.push(
                    Diagnostic::new("H015", "Space before punctuation mark: found \" !\"").at(doc.abs_line(i), start + 1),
                );
            }
        }
    }
    out
}

pub fn check_h025(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    'lines: for (i, segments) in doc.inline_segments.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let mut col_offset = 0usize;
        for seg in segments {
            if seg.in_code {
                col_offset += seg.text.chars().count();
                continue;
            }
            let chars: Vec<char> = seg.text.chars().collect();
            for pos in 0..chars.len() {
                let c = chars[pos];
                if c != 'x' && c != '\u{445}' {
                    continue;
                }
                if pos == 0 || pos >= chars.len() - 1 {
                    continue;
                }
                let before = chars[pos - 1];
                let after = chars[pos + 1];
                let before_ok = before == ' ' || before == '\t' || before.is_ascii_digit();
                let after_ok = after == ' ' || after == '\t' || after.is_ascii_digit();
                if !before_ok || !after_ok {
                    continue;
                }
                let message = if c == 'x' {
                    if before == ' ' && pos + 3 <= chars.len() {
                        let part: String = chars[pos..pos + 3].iter().collect();
                        if part == "x86" || part == "x64" {
                            continue;
                        }
                    }
                    if before.is_ascii_digit() && (after == ' ' || after == '\t') {
                        continue;
                    }
                    "\"x\" should be \"\u{d7}\""
                } else {
                    "\"\u{445}\" should be \"\u{d7}\""
                };
                let col = col_offset + pos + 1;
                out.push(
                    Diagnostic::new(
                        "H025",
                        format!("Latin x or Cyrillic x used instead of multiplication sign \u{d7}: {message}"),
                    )
                    .at(doc.abs_line(i), col),
                );
                continue 'lines;
            }
            col_offset += chars.len();
        }
    }
    out
}

pub fn check_h029(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for (pos, &c) in chars.iter().enumerate() {
            if c != '\u{2116}' {
                continue;
            }
            if pos + 1 < chars.len() && chars[pos + 1] != ' ' {
                out.push(Diagnostic::new("H029", "Space required after \u{2116}").at(doc.abs_line(i), pos + 1));
            }
        }
    }
    out
}

pub fn check_h030(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, segments) in doc.inline_segments.iter().enumerate() {
        if doc.code_mask[i] {
            continue;
        }
        let mut col_offset = 0usize;
        for seg in segments {
            if seg.in_code {
                col_offset += seg.text.chars().count();
                continue;
            }
            if let Some(byte_pos) = seg.text.find("?.") {
                let col = col_offset + seg.text[..byte_pos].chars().count() + 1;
                out.push(Diagnostic::new("H030", "Question mark followed by period (?.)").at(doc.abs_line(i), col));
                break;
            }
            col_offset += seg.text.chars().count();
        }
    }
    out
}
