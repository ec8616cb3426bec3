use serde::{Deserialize, Serialize};

/// Severity classes reported by the external avatar-description compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The compiler itself failed; the source may not have been inspected.
    CompilerError,
    /// The source text could not be parsed.
    SyntaxError,
    /// The source parsed but violates the avatar description rules.
    SemanticError,
    /// Informational notice attached to an otherwise successful compile.
    SemanticInfo,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::CompilerError => write!(f, "compiler error"),
            Severity::SyntaxError => write!(f, "syntax error"),
            Severity::SemanticError => write!(f, "semantic error"),
            Severity::SemanticInfo => write!(f, "info"),
        }
    }
}

/// One message produced by the avatar-description compiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Whether this diagnostic makes the compile a failure.
    pub fn is_error(&self) -> bool {
        self.severity != Severity::SemanticInfo
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(Severity::SyntaxError, "unexpected token ')'");
        assert_eq!(diag.to_string(), "syntax error: unexpected token ')'");
        assert!(diag.is_error());
    }

    #[test]
    fn test_info_is_not_error() {
        let diag = Diagnostic::new(Severity::SemanticInfo, "unused parameter");
        assert!(!diag.is_error());
    }
}
