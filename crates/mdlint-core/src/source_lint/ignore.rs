//! Ignore-directive parsing for the source linter: `# ignore: CODES` (line
//! scoped) and `# file-ignore: CODES` (file scoped, unioned across every
//! matching line), per spec.md section 6.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static LINE_IGNORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)#\s*ignore:\s*([A-Z0-9,\s]+)").unwrap());
static FILE_IGNORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)#\s*file-ignore:\s*([A-Z0-9,\s]+)").unwrap());

fn split_codes(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Codes ignored for one specific line (matches on that line only).
pub fn line_ignored_codes(line: &str) -> BTreeSet<String> {
    LINE_IGNORE
        .captures(line)
        .map(|caps| split_codes(&caps[1]))
        .unwrap_or_default()
}

/// Codes ignored for the whole file: the union of every `# file-ignore:`
/// directive found on any line.
pub fn file_ignored_codes(lines: &[String]) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();
    for line in lines {
        if let Some(caps) = FILE_IGNORE.captures(line) {
            codes.extend(split_codes(&caps[1]));
        }
    }
    codes
}
