//! H021 (lowercase letter right after sentence-ending punctuation) and
//! H024 (capitalized Russian polite pronoun mid-sentence, `lang == "ru"`
//! only).

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Diagnostic;
use crate::document::Document;
use crate::rules::find_word_boundary;
use crate::tables::RUSSIAN_POLITE_PRONOUNS_CAPITALIZED;

static LOWERCASE_AFTER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+([a-zа-яё])").unwrap());

const SENTENCE_EXCEPTIONS: &[&str] = &["e.g.", "i.e.", "т. е", "т. д", "т. ч", "т. п"];

pub fn check_h021(doc: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        let masked = doc.masked(i);
        if let Some(caps) = LOWERCASE_AFTER_PUNCT.captures(&masked) {
            let whole = caps.get(0).unwrap();
            let letter = caps.get(1).unwrap();
            let context_start = whole.start().saturating_sub(4);
            let context = &masked[context_start..whole.start() + 1];
            if SENTENCE_EXCEPTIONS.iter().any(|exc| context.contains(exc)) {
                continue;
            }
            let letter_char = letter.as_str();
            let col = masked[..letter.start()].chars().count() + 1;
            out.push(
                Diagnostic::new(
                    "H021",
                    format!("Lowercase letter after sentence-ending punctuation: found lowercase \"{letter_char}\" after punctuation"),
                )
                .at(doc.abs_line(i), col),
            );
        }
    }
    out
}

fn at_sentence_start(text_before: &str) -> bool {
    let trimmed_end = text_before.trim_end();
    if trimmed_end.is_empty() {
        return true;
    }
    trimmed_end.ends_with(['.', '!', '?'])
}

pub fn check_h024(doc: &Document) -> Vec<Diagnostic> {
    if doc.lang != "ru" {
        return Vec::new();
    }
    let mut out = Vec::new();
    for i in 0..doc.content.len() {
        if doc.code_mask[i] {
            continue;
        }
        let masked = doc.masked(i);
        if let Some(diag) = find_first_pronoun(doc, i, &masked) {
            out.push(diag);
        }
    }
    out
}

fn find_first_pronoun(doc: &Document, i: usize, masked: &str) -> Option<Diagnostic> {
    for word in RUSSIAN_POLITE_PRONOUNS_CAPITALIZED {
        let mut search_from = 0;
        while let Some(rel) = find_word_boundary(&masked[search_from..], word) {
            let abs = search_from + rel;
            if !at_sentence_start(&masked[..abs]) {
                let col = masked[..abs].chars().count() + 1;
                return Some(
                    Diagnostic::new(
                        "H024",
                        format!(
                            "Capitalized Russian polite pronoun (use lowercase when addressing reader): use lowercase \"{}\" when addressing reader",
                            word.to_lowercase()
                        ),
                    )
                    .at(doc.abs_line(i), col),
                );
            }
            search_from = abs + word.len().max(1);
            if search_from > masked.len() {
                break;
            }
        }
    }
    None
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
    fn lowercase_after_period_is_flagged() {
        let d = doc("---\nlang: en\n---\n\nDone. ok then.\n");
        assert_eq!(check_h021(&d).len(), 1);
    }

    #[test]
    fn eg_abbreviation_is_exempt() {
        let d = doc("---\nlang: en\n---\n\nUse tools, e.g. rustfmt.\n");
        assert!(check_h021(&d).is_empty());
    }

    #[test]
    fn pronoun_mid_sentence_is_flagged_when_ru() {
        let d = doc("---\nlang: ru\n---\n\nЯ напишу Вам письмо.\n");
        let diags = check_h024(&d);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn pronoun_at_sentence_start_is_exempt() {
        let d = doc("---\nlang: ru\n---\n\nВы хорошо справились.\n");
        assert!(check_h024(&d).is_empty());
    }

    #[test]
    fn pronoun_ignored_when_lang_is_not_ru() {
        let d = doc("---\nlang: en\n---\n\nI wrote Вам a letter.\n");
        assert!(check_h024(&d).is_empty());
    }

    #[test]
    fn at_most_one_pronoun_diagnostic_per_line() {
        let d = doc("---\nlang: ru\n---\n\nЯ дал Вам и Вашему другу.\n");
        assert_eq!(check_h024(&d).len(), 1);
    }
}
