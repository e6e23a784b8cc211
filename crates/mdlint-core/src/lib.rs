//! Core segmentation and rule engine for the markdown style checker:
//! `Document` segmentation, the rule registry, diagnostic formatting,
//! activation policy, the directory walker, and the source linter for
//! non-Markdown companion files.

pub mod activation;
pub mod checker;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod rules;
pub mod source_lint;
pub mod tables;
pub mod walker;

pub use checker::{check, check_diagnostics, check_directory, find_markdown_files};
pub use diagnostic::Diagnostic;
pub use document::Document;
pub use error::CheckError;
