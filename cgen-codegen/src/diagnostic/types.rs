//! Diagnostic types.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A failure that was recovered from locally (e.g. a formatter exited non-zero).
    Error,
    /// A correction the operator should know about (e.g. a renamed identifier).
    Warning,
    /// Informational message about the generation run.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A name that was replaced because it could not be used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    /// The name before correction.
    pub original: String,
    /// The name that replaced it.
    pub renamed: String,
}

/// A diagnostic message.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The stage that produced this diagnostic (e.g. "naming", "post-process").
    pub phase: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location (e.g. the name category or a file path).
    pub location: Option<String>,
    /// Set when the diagnostic reports a corrective rename.
    pub rename: Option<Rename>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    /// Create a new info diagnostic.
    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Create a warning for a corrective rename.
    ///
    /// `reason` explains why the original could not be used, `usage` names
    /// what it was meant for (e.g. "model name").
    pub fn renamed(
        original: impl Into<String>,
        renamed: impl Into<String>,
        reason: &str,
        usage: &str,
    ) -> Self {
        let original = original.into();
        let renamed = renamed.into();
        let message = format!(
            "{} ({}) cannot be used as {}. Renamed to {}",
            original, reason, usage, renamed
        );
        Self {
            rename: Some(Rename { original, renamed }),
            ..Self::warning("naming", message).at(usage)
        }
    }

    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
            rename: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("post-process", "formatter exited with 1");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "post-process");
        assert!(diag.rename.is_none());
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::info("post-process", "formatted").at("model/pet.c");
        assert_eq!(diag.location.as_deref(), Some("model/pet.c"));
    }

    #[test]
    fn test_renamed_diagnostic() {
        let diag = Diagnostic::renamed("return", "model_return", "reserved word", "model name");

        assert!(diag.severity.is_warning());
        assert_eq!(diag.phase, "naming");
        assert_eq!(
            diag.message,
            "return (reserved word) cannot be used as model name. Renamed to model_return"
        );
        assert_eq!(diag.location.as_deref(), Some("model name"));
        assert_eq!(
            diag.rename,
            Some(Rename {
                original: "return".into(),
                renamed: "model_return".into(),
            })
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn test_display_includes_location() {
        let diag = Diagnostic::warning("naming", "renamed").at("operation id");
        assert_eq!(diag.to_string(), "warning: renamed (at operation id)");
    }
}
