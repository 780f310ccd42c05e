use std::fmt::{Display, Formatter};

pub mod pretty;

pub use pretty::pretty_point_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged; scanning carries on.
    Warning,
    /// Logged; the run halts with whatever output it produced so far.
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("found more than one decimal point in number")]
    MalformedNumber,

    #[error("#define is missing a variable name")]
    MissingName,

    #[error("#define {name} is missing a value")]
    MissingValue { name: String },

    #[error("expected a word literal instead got `{found}`")]
    ExpectedName { found: String },

    #[error("expected a value or a variable instead got `{found}`")]
    ExpectedValue { found: String },

    #[error("variable table full ({capacity} variables)")]
    VariableTableFull { capacity: usize },
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::MalformedNumber
            | DiagnosticKind::MissingName
            | DiagnosticKind::MissingValue { .. } => Severity::Warning,

            DiagnosticKind::ExpectedName { .. }
            | DiagnosticKind::ExpectedValue { .. }
            | DiagnosticKind::VariableTableFull { .. } => Severity::Fatal,
        }
    }
}

/// A (message, line) pair, optionally pointing at the byte span that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub span: Option<(usize, usize)>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: u32) -> Self {
        Diagnostic {
            kind,
            line,
            span: None,
        }
    }

    pub fn with_span(mut self, start_index: usize, end_index: usize) -> Self {
        self.span = Some((start_index, end_index));
        self
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ERROR: {}:{}", self.line, self.kind)
    }
}

/// Collects diagnostics in the order they were raised.
///
/// A loud collector logs warnings as they arrive. Fatal diagnostics are only stored; whoever
/// holds the source renders them once with a pointer. A quiet collector logs nothing;
/// lookahead scans use one so a token that is lexed twice is only ever logged once.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    quiet: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Diagnostics {
            entries: Vec::new(),
            quiet: true,
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        if !self.quiet && logged_on_report(&diagnostic) {
            log::warn!("{diagnostic}");
        }

        self.entries.push(diagnostic);
    }

    /// Moves every entry of `other` into this collector, as if each were reported here.
    pub fn absorb(&mut self, other: Diagnostics) {
        for diagnostic in other.entries {
            self.report(diagnostic);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_fatal(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_fatal)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

fn logged_on_report(diagnostic: &Diagnostic) -> bool {
    diagnostic.severity() == Severity::Warning
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_matches_console_form() {
        let diagnostic = Diagnostic::new(DiagnosticKind::VariableTableFull { capacity: 256 }, 12);

        assert_eq!(diagnostic.to_string(), "ERROR: 12:variable table full (256 variables)");
    }

    #[test]
    fn severity_split() {
        assert!(!Diagnostic::new(DiagnosticKind::MalformedNumber, 1).is_fatal());
        assert!(!Diagnostic::new(DiagnosticKind::MissingName, 1).is_fatal());
        assert!(Diagnostic::new(
            DiagnosticKind::ExpectedValue {
                found: "{".to_string()
            },
            1
        )
        .is_fatal());
    }

    #[test]
    fn only_warnings_are_logged_on_report() {
        assert!(logged_on_report(&Diagnostic::new(DiagnosticKind::MalformedNumber, 1)));
        assert!(logged_on_report(&Diagnostic::new(
            DiagnosticKind::MissingValue {
                name: "X".to_string()
            },
            1
        )));
        assert!(!logged_on_report(&Diagnostic::new(
            DiagnosticKind::VariableTableFull { capacity: 1 },
            1
        )));
    }

    #[test]
    fn absorb_keeps_order() {
        let mut quiet = Diagnostics::quiet();
        quiet.report(Diagnostic::new(DiagnosticKind::MalformedNumber, 3));

        let mut loud = Diagnostics::new();
        loud.report(Diagnostic::new(DiagnosticKind::MissingName, 1));
        loud.absorb(quiet);

        let lines = loud.iter().map(|d| d.line).collect::<Vec<_>>();
        assert_eq!(lines, vec![1, 3]);
        assert!(!loud.has_fatal());
    }
}
