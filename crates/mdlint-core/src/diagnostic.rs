//! Diagnostic value type and rendering, per spec.md section 4.3.

/// A single rule violation: a code, a human-readable message, and an
/// optional 1-based `(line, column)` location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl Diagnostic {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line: 0,
            column: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// `<rel-path>[:line[:col]]: CODE message`
    pub fn format(&self, rel_path: &str) -> String {
        let mut location = rel_path.to_string();
        if self.line > 0 {
            location.push(':');
            location.push_str(&self.line.to_string());
            if self.column > 0 {
                location.push(':');
                location.push_str(&self.column.to_string());
            }
        }
        format!("{location}: {} {}", self.code, self.message)
    }

    pub(crate) fn sort_key(&self) -> (usize, usize, &'static str) {
        (self.line, self.column, self.code)
    }
}

/// Sort diagnostics by `(line, column, code)`, stable on ties.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(Diagnostic::sort_key);
}
