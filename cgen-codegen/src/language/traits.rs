//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use cgen_core::FileType;
use eyre::Result;
use serde_json::Value;

use crate::Diagnostic;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating client code in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "c")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "c")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and write all files into the specified output directory,
    /// post-processing each one after it is written
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// The template engine that turns resolved names into file contents.
///
/// The template language itself is not part of cgen; generators hand a
/// template name and a JSON context to whatever engine is plugged in.
pub trait TemplateRenderer {
    /// Render the named template with the given context.
    fn render(&self, template: &str, context: &Value) -> Result<String>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, as joined output paths
    pub written: Vec<PathBuf>,
    /// Files the post-generation hook processed successfully
    pub post_processed: Vec<PathBuf>,
    /// Diagnostics recorded during the run
    pub diagnostics: Vec<Diagnostic>,
}

/// A rendered file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// Kind of file
    pub file_type: FileType,
    /// File content
    pub content: String,
}
