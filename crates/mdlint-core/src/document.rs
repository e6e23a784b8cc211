//! Document segmentation: splitting a file into YAML front matter, fenced
//! code regions, and prose, and further splitting prose lines into inline
//! code spans vs. prose spans.
//!
//! Columns and positions are tracked in Unicode scalar values (chars), never
//! bytes, since the checker's own rule set exists to police typographic
//! conventions in Cyrillic text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CheckError;

/// One piece of a prose line: either a run of prose text or an inline code
/// span (backtick fences included in `text`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub in_code: bool,
}

/// A parsed markdown file, partitioned per the segmentation rules in
/// spec.md section 4.1.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    pub lines: Vec<String>,
    pub yaml_present: bool,
    /// 1-based line number of the closing `---`, or 1 if no YAML block.
    pub yaml_end_line: usize,
    pub yaml_text: String,
    pub lang: String,
    pub yaml_error: Option<String>,
    /// 1-based line number of the first content line.
    pub content_start_line: usize,
    pub content: Vec<String>,
    pub code_mask: Vec<bool>,
    pub inline_segments: Vec<Vec<Segment>>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Document, CheckError> {
        let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Document::from_text(path.to_path_buf(), text))
    }

    pub fn from_text(path: PathBuf, text: String) -> Document {
        let lines = split_lines(&text);

        let (yaml_present, yaml_end_line, yaml_text, yaml_body) = detect_yaml(&lines);
        let (lang, yaml_error) = if yaml_present {
            parse_lang(&yaml_body)
        } else {
            (String::new(), None)
        };

        let content_start_line = if yaml_present { yaml_end_line + 1 } else { 1 };
        let content: Vec<String> = lines
            .get(content_start_line - 1..)
            .map(|s| s.to_vec())
            .unwrap_or_default();

        let code_mask = classify_code_mask(&content);
        let inline_segments: Vec<Vec<Segment>> = content
            .iter()
            .zip(code_mask.iter())
            .map(|(line, &is_code)| {
                if is_code {
                    vec![Segment {
                        text: line.clone(),
                        in_code: true,
                    }]
                } else {
                    segment_inline_code(line)
                }
            })
            .collect();

        Document {
            path,
            text,
            lines,
            yaml_present,
            yaml_end_line,
            yaml_text,
            lang,
            yaml_error,
            content_start_line,
            content,
            code_mask,
            inline_segments,
        }
    }

    /// Absolute 1-based line number for a 0-based index into `content`.
    pub fn abs_line(&self, content_idx: usize) -> usize {
        self.content_start_line + content_idx
    }

    /// The content line at `idx` with inline code spans blanked out
    /// (replaced by spaces, one space per code character) so that byte
    /// offsets of matches against the returned string convert to the same
    /// char columns as the original line.
    pub fn masked(&self, idx: usize) -> String {
        mask_ranges(&self.content[idx], &code_char_ranges(&self.inline_segments[idx]))
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().map(|l| l.to_string()).collect()
}

/// Returns `(present, yaml_end_line, yaml_text, body_lines)`.
fn detect_yaml(lines: &[String]) -> (bool, usize, String, Vec<String>) {
    if lines.first().map(|l| l.trim()) != Some("---") {
        return (false, 1, String::new(), Vec::new());
    }
    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.trim() == "---" {
            let end_line = i + 1;
            let yaml_text = lines[0..=i].join("\n");
            let body = lines[1..i].to_vec();
            return (true, end_line, yaml_text, body);
        }
    }
    (false, 1, String::new(), Vec::new())
}

fn parse_lang(body_lines: &[String]) -> (String, Option<String>) {
    let body = body_lines.join("\n");
    if body.trim().is_empty() {
        return (String::new(), None);
    }
    match serde_yaml::from_str::<serde_yaml::Value>(&body) {
        Ok(value) => {
            let lang = value
                .as_mapping()
                .and_then(|m| m.get(serde_yaml::Value::String("lang".to_string())))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            (lang, None)
        }
        Err(e) => (String::new(), Some(e.to_string())),
    }
}

fn leading_backtick_run(trimmed: &str) -> usize {
    trimmed.chars().take_while(|&c| c == '`').count()
}

/// Per spec.md 4.1: walk content lines, tracking the current fence length.
fn classify_code_mask(content: &[String]) -> Vec<bool> {
    let mut mask = Vec::with_capacity(content.len());
    let mut current_fence: Option<usize> = None;
    for line in content {
        let trimmed = line.trim();
        let run = leading_backtick_run(trimmed);
        if run >= 3 {
            match current_fence {
                None => {
                    current_fence = Some(run);
                    mask.push(true);
                }
                Some(n) if n == run => {
                    current_fence = None;
                    mask.push(true);
                }
                Some(_) => mask.push(current_fence.is_some()),
            }
        } else {
            mask.push(current_fence.is_some());
        }
    }
    mask
}

/// Partition a single prose line into inline-code vs. prose segments.
/// Concatenating the returned segments reproduces `line` exactly.
fn segment_inline_code(line: &str) -> Vec<Segment> {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::new();
    let mut i = 0;
    let mut prose_start = 0;

    while i < chars.len() {
        if chars[i] != '`' {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut run_len = 0;
        while i < chars.len() && chars[i] == '`' {
            run_len += 1;
            i += 1;
        }

        let mut j = i;
        let mut close: Option<usize> = None;
        while j < chars.len() {
            if chars[j] == '`' {
                let mut close_len = 0;
                while j < chars.len() && chars[j] == '`' {
                    close_len += 1;
                    j += 1;
                }
                if close_len == run_len {
                    close = Some(j);
                    break;
                }
            } else {
                j += 1;
            }
        }

        match close {
            Some(close_end) => {
                if run_start > prose_start {
                    segments.push(Segment {
                        text: chars[prose_start..run_start].iter().collect(),
                        in_code: false,
                    });
                }
                segments.push(Segment {
                    text: chars[run_start..close_end].iter().collect(),
                    in_code: true,
                });
                prose_start = close_end;
                i = close_end;
            }
            None => {
                // Unmatched open: the remainder of the line stays prose.
                i = chars.len();
            }
        }
    }

    if prose_start < chars.len() {
        segments.push(Segment {
            text: chars[prose_start..].iter().collect(),
            in_code: false,
        });
    }

    segments
}

/// Char-index ranges (half-open) of the `in_code` segments.
fn code_char_ranges(segments: &[Segment]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut pos = 0;
    for seg in segments {
        let len = seg.text.chars().count();
        if seg.in_code {
            ranges.push((pos, pos + len));
        }
        pos += len;
    }
    ranges
}

/// Replace the characters in each `[start, end)` range with spaces,
/// preserving the line's char count (and thus column alignment).
fn mask_ranges(line: &str, ranges: &[(usize, usize)]) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    for &(start, end) in ranges {
        let end = end.min(chars.len());
        for c in chars.iter_mut().take(end).skip(start) {
            *c = ' ';
        }
    }
    chars.into_iter().collect()
}

/// Replace every match of `re` with spaces of the same char count, so that
/// subsequent char-column math stays valid.
pub(crate) fn blank_regex_matches(s: &str, re: &regex::Regex) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in re.find_iter(s) {
        out.push_str(&s[last..m.start()]);
        let n = m.as_str().chars().count();
        out.extend(std::iter::repeat_n(' ', n));
        last = m.end();
    }
    out.push_str(&s[last..]);
    out
}

/// Convert a byte offset into `s` to a 1-based char column.
pub(crate) fn char_col(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count() + 1
}
