//! H007: fenced code block language identifier is in the incorrect-language
//! table (e.g. `console` should be `shell`).

use crate::diagnostic::Diagnostic;
use crate::document::Document;
use crate::tables::INCORRECT_LANGUAGES;

pub fn check_h007(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, line) in doc.content.iter().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("```") {
            continue;
        }
        let backticks = trimmed.chars().take_while(|&c| c == '`').count();
        let after = &trimmed[backticks..];
        let lang: String = after.chars().take_while(|c| c.is_alphanumeric() || *c == '_').collect();
        if lang.is_empty() {
            continue;
        }
        if let Some((_, correct)) = INCORRECT_LANGUAGES.iter().find(|(bad, _)| *bad == lang) {
            let indent = line.len() - trimmed.len();
            let col = line[..indent + backticks].chars().count() + 1;
            out.push(
                Diagnostic::new(
                    "H007",
                    format!("Incorrect code block language identifier: \"{lang}\" should be \"{correct}\""),
                )
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
    fn flags_console_language() {
        let d = doc("---\nlang: en\n---\n\n```console\necho hi\n```\n");
        let diags = check_h007(&d);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("\"console\" should be \"shell\""));
        assert_eq!(diags[0].line, 5);
        assert_eq!(diags[0].column, 4);
    }

    #[test]
    fn correct_language_is_silent() {
        let d = doc("---\nlang: en\n---\n\n```shell\necho hi\n```\n");
        assert!(check_h007(&d).is_empty());
    }

    #[test]
    fn bare_fence_with_no_language_is_silent() {
        let d = doc("---\nlang: en\n---\n\n```\ncode\n```\n");
        assert!(check_h007(&d).is_empty());
    }
}
