//! Directory Walker: recurse a directory, yielding eligible Markdown files
//! in deterministic lexicographic order, skipping hidden entries and a
//! fixed ignore list (plus any caller-supplied extra names).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CheckError;

const BASE_IGNORE: &[&str] = &[
    "__pycache__",
    ".cache",
    ".DS_Store",
    ".git",
    ".idea",
    ".npm",
    ".pytest_cache",
    ".venv",
    ".vs",
    ".vscode",
    "build",
    "config",
    "dist",
    "node_modules",
    "tests",
    "Thumbs.db",
    "venv",
];

fn is_markdown_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

fn is_ignored_dir(name: &str, extra_ignore: &[String]) -> bool {
    if name.starts_with('.') {
        return true;
    }
    BASE_IGNORE.contains(&name) || extra_ignore.iter().any(|e| e == name)
}

/// Recursively find every eligible Markdown file under `dir`, in
/// deterministic lexicographic enumeration order.
pub fn find_markdown_files(dir: &Path, extra_ignore: &[String]) -> Result<Vec<PathBuf>, CheckError> {
    let mut files = Vec::new();
    walk(dir, extra_ignore, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, extra_ignore: &[String], out: &mut Vec<PathBuf>) -> Result<(), CheckError> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|source| CheckError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CheckError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            if !is_ignored_dir(&name, extra_ignore) {
                walk(&path, extra_ignore, out)?;
            }
        } else if !name.starts_with('.') && is_markdown_file(&name) {
            out.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn finds_md_and_markdown_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.md", "# A");
        write(tmp.path(), "b.MARKDOWN", "# B");
        write(tmp.path(), "c.txt", "not markdown");

        let files = find_markdown_files(tmp.path(), &[]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn recurses_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "root.md", "# root");
        write(tmp.path(), "notes/nested.md", "# nested");

        let files = find_markdown_files(tmp.path(), &[]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn skips_hidden_entries_and_base_ignore_list() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".hidden.md", "# hidden file");
        write(tmp.path(), ".git/config.md", "# inside git dir");
        write(tmp.path(), "node_modules/pkg.md", "# inside node_modules");
        write(tmp.path(), "visible.md", "# visible");

        let files = find_markdown_files(tmp.path(), &[]).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "visible.md");
    }

    #[test]
    fn extra_ignore_list_skips_named_directories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "drafts/draft.md", "# draft");
        write(tmp.path(), "kept.md", "# kept");

        let files = find_markdown_files(tmp.path(), &["drafts".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "kept.md");
    }

    #[test]
    fn enumeration_order_is_lexicographic() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.md", "# b");
        write(tmp.path(), "a.md", "# a");

        let files = find_markdown_files(tmp.path(), &[]).unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }
}
