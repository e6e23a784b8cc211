//! H003 / H004 / H005: YAML front matter presence and `lang` validity.
//! `H000` (missing/unparseable YAML as an exception) is handled centrally
//! by `Checker`, not here, since it isn't a selectable rule.

use crate::diagnostic::Diagnostic;
use crate::document::Document;

pub fn check_h003(doc: &Document) -> Vec<Diagnostic> {
    if !doc.yaml_present {
        vec![Diagnostic::new("H003", "YAML is missing").at_line(1)]
    } else {
        Vec::new()
    }
}

pub fn check_h004(doc: &Document) -> Vec<Diagnostic> {
    if doc.yaml_present && doc.lang.is_empty() {
        vec![Diagnostic::new("H004", "The lang field is missing in YAML").at_line(doc.yaml_end_line)]
    } else {
        Vec::new()
    }
}

pub fn check_h005(doc: &Document) -> Vec<Diagnostic> {
    if !doc.yaml_present || doc.lang.is_empty() || doc.lang == "en" || doc.lang == "ru" {
        return Vec::new();
    }
    let line_num = find_yaml_field_line(doc, "lang").unwrap_or(2);
    let col = find_yaml_field_column(doc, line_num, "lang").unwrap_or(1);
    vec![Diagnostic::new("H005", "In YAML, lang is not set to en or ru").at(line_num, col)]
}

fn find_yaml_field_line(doc: &Document, field: &str) -> Option<usize> {
    let prefix = format!("{field}:");
    // body lines lie strictly between the opening and closing `---` fences.
    for i in 1..doc.yaml_end_line.saturating_sub(1) {
        if doc.lines[i].trim().starts_with(&prefix) {
            return Some(i + 1);
        }
    }
    None
}

fn find_yaml_field_column(doc: &Document, line_num: usize, field: &str) -> Option<usize> {
    let line = doc.lines.get(line_num - 1)?;
    let prefix = format!("{field}:");
    let start = line.find(&prefix)? + prefix.len();
    let value_offset = line[start..].len() - line[start..].trim_start().len();
    let byte_pos = start + value_offset;
    Some(line[..byte_pos].chars().count() + 1)
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
    fn missing_yaml_fires_h003_at_line_one() {
        let d = doc("# Just content without YAML\n");
        let diags = check_h003(&d);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[0].column, 0);
    }

    #[test]
    fn empty_yaml_body_fires_h004_not_h003() {
        let d = doc("---\n---\n\n");
        assert!(check_h003(&d).is_empty());
        let diags = check_h004(&d);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 2);
    }

    #[test]
    fn invalid_lang_reports_field_line_and_column() {
        let d = doc("---\nlang: fr\n---\n# Content\n");
        let diags = check_h005(&d);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 2);
        assert_eq!(diags[0].column, 7);
    }

    #[test]
    fn valid_lang_is_silent() {
        let d = doc("---\nlang: en\n---\n# Content\n");
        assert!(check_h004(&d).is_empty());
        assert!(check_h005(&d).is_empty());
    }
}
