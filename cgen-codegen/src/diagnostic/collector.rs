//! Shared diagnostics collector.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Diagnostic, Rename, Severity};

/// Collects diagnostics from resolvers and hooks.
///
/// Emission takes `&self`, so one collector can be shared (usually behind an
/// `Arc`) by every component of a generation run, across threads.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a diagnostic and mirror it to `tracing`.
    pub fn push(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => tracing::error!(phase = %diagnostic.phase, "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(phase = %diagnostic.phase, "{}", diagnostic.message),
            Severity::Info => tracing::info!(phase = %diagnostic.phase, "{}", diagnostic.message),
        }
        self.entries().push(diagnostic);
    }

    /// Record an error diagnostic.
    pub fn error(&self, phase: &str, message: impl Into<String>) {
        self.push(Diagnostic::error(phase, message));
    }

    /// Record a warning diagnostic.
    pub fn warning(&self, phase: &str, message: impl Into<String>) {
        self.push(Diagnostic::warning(phase, message));
    }

    /// Record an info diagnostic.
    pub fn info(&self, phase: &str, message: impl Into<String>) {
        self.push(Diagnostic::info(phase, message));
    }

    /// Record a corrective rename. Every call records one warning.
    pub fn renamed(&self, original: &str, renamed: &str, reason: &str, usage: &str) {
        self.push(Diagnostic::renamed(original, renamed, reason, usage));
    }

    /// Copy out every diagnostic recorded so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries().clone()
    }

    /// Drain every diagnostic recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries())
    }

    /// Every warning recorded so far.
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.entries()
            .iter()
            .filter(|d| d.severity.is_warning())
            .cloned()
            .collect()
    }

    /// Every error recorded so far.
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.entries()
            .iter()
            .filter(|d| d.severity.is_error())
            .cloned()
            .collect()
    }

    /// Every rename recorded so far, in emission order.
    pub fn renames(&self) -> Vec<Rename> {
        self.entries()
            .iter()
            .filter_map(|d| d.rename.clone())
            .collect()
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.entries().iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_collects_by_severity() {
        let diagnostics = Diagnostics::new();

        diagnostics.error("post-process", "exit code 2");
        diagnostics.warning("naming", "renamed");
        diagnostics.info("post-process", "formatted");

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);
    }

    #[test]
    fn test_renames_only_lists_renames() {
        let diagnostics = Diagnostics::new();

        diagnostics.warning("naming", "plain warning");
        diagnostics.renamed("1st", "_1st", "starting with a number", "variable name");

        assert_eq!(
            diagnostics.renames(),
            [Rename {
                original: "1st".into(),
                renamed: "_1st".into(),
            }]
        );
    }

    #[test]
    fn test_every_rename_warns() {
        let diagnostics = Diagnostics::new();

        diagnostics.renamed("return", "model_return", "reserved word", "model name");
        diagnostics.renamed("return", "model_return", "reserved word", "model name");
        diagnostics.renamed("return", "_return", "reserved word", "variable name");

        assert_eq!(diagnostics.renames().len(), 3);
        assert_eq!(diagnostics.warnings().len(), 3);
        assert!(diagnostics.errors().is_empty());
    }

    #[test]
    fn test_take_drains() {
        let diagnostics = Diagnostics::new();
        diagnostics.info("naming", "one");

        assert_eq!(diagnostics.take().len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let diagnostics = Arc::new(Diagnostics::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let diagnostics = Arc::clone(&diagnostics);
                thread::spawn(move || diagnostics.warning("naming", format!("warning {i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.warning_count(), 4);
    }
}
