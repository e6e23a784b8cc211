//! Public API: `check`, `check_directory`, `find_markdown_files`. Per
//! spec.md section 7, I/O and YAML failures never propagate out of these
//! functions — they are folded into a single `H000` diagnostic and the
//! check call still returns normally.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::activation::resolve_active_rules;
use crate::diagnostic::{sort_diagnostics, Diagnostic};
use crate::document::Document;
use crate::rules::{known_codes, run_active_rules};
use crate::walker;

/// Check a single file and return formatted `<rel-path>:<line>:<col>: CODE
/// message` strings, relative to the project root discovered by walking up
/// from `path` looking for `.git`, falling back to the current directory.
pub fn check(path: &Path, select: Option<&[&str]>, exclude: Option<&[&str]>) -> Vec<String> {
    let root = find_project_root(path);
    let diagnostics = check_diagnostics(path, select, exclude);
    let rel = relative_display_path(path, &root);
    diagnostics.iter().map(|d| d.format(&rel)).collect()
}

/// Same as [`check`] but returns structured [`Diagnostic`]s instead of
/// formatted strings, with `H000` substituted for any I/O or YAML failure.
pub fn check_diagnostics(path: &Path, select: Option<&[&str]>, exclude: Option<&[&str]>) -> Vec<Diagnostic> {
    let known: Vec<&str> = known_codes();
    let active = resolve_active_rules(&known, select, exclude);
    log::debug!("resolved {} active rule(s) for {}", active.len(), path.display());

    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("{} unreadable: {e}", path.display());
            return vec![Diagnostic::new("H000", format!("Exception error: {e}"))];
        }
    };

    let mut diagnostics = run_active_rules(&doc, &active);
    if let Some(reason) = &doc.yaml_error {
        log::warn!("{} has invalid YAML front matter: {reason}", path.display());
        diagnostics.push(Diagnostic::new("H000", format!("YAML parsing error: {reason}")));
    }
    sort_diagnostics(&mut diagnostics);
    diagnostics
}

/// Walk `dir` for eligible Markdown files and check each one, keyed by its
/// path relative to the discovered project root.
pub fn check_directory(
    dir: &Path,
    select: Option<&[&str]>,
    exclude: Option<&[&str]>,
    extra_ignore: &[String],
) -> BTreeMap<String, Vec<String>> {
    let root = find_project_root(dir);
    let files = walker::find_markdown_files(dir, extra_ignore).unwrap_or_default();

    let mut out = BTreeMap::new();
    for file in files {
        let diagnostics = check_diagnostics(&file, select, exclude);
        let rel = relative_display_path(&file, &root);
        out.insert(rel.clone(), diagnostics.iter().map(|d| d.format(&rel)).collect());
    }
    out
}

/// Re-exported for convenience; identical to [`walker::find_markdown_files`].
pub fn find_markdown_files(dir: &Path, extra_ignore: &[String]) -> Vec<PathBuf> {
    walker::find_markdown_files(dir, extra_ignore).unwrap_or_default()
}

/// The nearest ancestor of `path` that carries a `.git` entry, falling back
/// to the current working directory.
fn find_project_root(path: &Path) -> PathBuf {
    let start = if path.is_dir() { path } else { path.parent().unwrap_or(path) };
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
        current = dir.parent();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Render `path` relative to `root` with forward slashes regardless of
/// platform, via `relative-path`, matching the teacher's convention of
/// storing note paths as platform-independent `RelativePath`s.
fn relative_display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative_path::RelativePathBuf::from_path(relative)
        .map(|p| p.to_string())
        .unwrap_or_else(|_| relative.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn clean_file_yields_no_diagnostics() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.md");
        std::fs::write(&file, "---\nlang: en\n---\n\n# Title\n\nClean paragraph.\n").unwrap();

        let diagnostics = check(&file, None, None);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
    }

    #[test]
    fn missing_yaml_is_reported() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.md");
        std::fs::write(&file, "# Title\n\nBody text.\n").unwrap();

        let diagnostics = check(&file, None, None);
        assert!(diagnostics.iter().any(|d| d.contains("H003")));
    }

    #[test]
    fn unreadable_file_yields_single_h000() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("missing.md");

        let diagnostics = check(&file, None, None);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("H000"));
        assert!(diagnostics[0].contains("Exception error"));
    }

    #[test]
    fn select_filters_to_requested_codes() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.md");
        std::fs::write(&file, "# Title\n\nBody text.\n").unwrap();

        let diagnostics = check(&file, Some(&["H008"]), None);
        assert!(diagnostics.iter().all(|d| d.contains("H008") || d.contains("H000")));
    }

    #[test]
    fn check_directory_covers_every_markdown_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.md"), "---\nlang: en\n---\n\n# A\n").unwrap();
        let sub = tmp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("b.md"), "---\nlang: en\n---\n\n# B\n").unwrap();

        let results = check_directory(tmp.path(), None, None, &[]);
        assert_eq!(results.len(), 2);
    }
}
