//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    io,
    path::Path,
    sync::{Mutex, PoisonError},
};

use eyre::Result;
use serde_json::Value;

use crate::{generation::CommandRunner, language::TemplateRenderer};

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Exit(i32),
    Unspawnable,
}

/// A [`CommandRunner`] that records every invocation instead of spawning.
#[derive(Debug)]
pub struct RecordingRunner {
    behavior: Behavior,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    /// Every invocation exits with status 0.
    pub fn succeeding() -> Self {
        Self::exiting(0)
    }

    /// Every invocation exits with `code`.
    pub fn exiting(code: i32) -> Self {
        Self {
            behavior: Behavior::Exit(code),
            calls: Mutex::default(),
        }
    }

    /// Every invocation fails to spawn.
    pub fn unspawnable() -> Self {
        Self {
            behavior: Behavior::Unspawnable,
            calls: Mutex::default(),
        }
    }

    /// Every recorded `(program, args)` pair, in call order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((program.to_string(), args.to_vec()));
        match self.behavior {
            Behavior::Exit(code) => Ok(Some(code)),
            Behavior::Unspawnable => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: not found"),
            )),
        }
    }
}

/// A [`TemplateRenderer`] that dumps the template name and its context.
///
/// Lets generator tests assert on exactly what a real template would receive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextRenderer;

impl TemplateRenderer for ContextRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        Ok(format!(
            "// {template}\n{}\n",
            serde_json::to_string_pretty(context)?
        ))
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_recording_runner_records_calls() {
        let runner = RecordingRunner::exiting(3);
        let result = runner.run("fmt", &["a.c".to_string()]).unwrap();

        assert_eq!(result, Some(3));
        assert_eq!(runner.call_count(), 1);
        assert_eq!(runner.calls()[0].1, ["a.c"]);
    }

    #[test]
    fn test_context_renderer() {
        let out = ContextRenderer
            .render("model-header.mustache", &json!({ "classname": "pet" }))
            .unwrap();
        assert_content_eq(
            "// model-header.mustache\n{\n  \"classname\": \"pet\"\n}\n",
            &out,
        );
    }
}
