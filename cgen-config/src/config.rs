//! Generator configuration types for cgen.toml files.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

/// Root configuration for cgen.toml
///
/// Every section is optional; an empty file yields [`GeneratorConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Output and naming options
    #[serde(default)]
    pub generator: GeneratorOptions,

    /// Explicit replacements for reserved words, used verbatim
    #[serde(default)]
    pub reserved_word_mappings: IndexMap<String, String>,

    /// Model names whose include should point at a different header
    #[serde(default)]
    pub import_mappings: IndexMap<String, String>,

    /// Overrides merged into the C type map
    #[serde(default)]
    pub type_mappings: IndexMap<String, String>,
}

/// The `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Root output directory
    pub output: PathBuf,
    /// Root of API include paths
    pub api_package: String,
    pub model_name_prefix: Option<String>,
    pub model_name_suffix: Option<String>,
    pub hide_generation_timestamp: bool,
    /// Project name used by the README and CMake supporting files
    pub project_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("generated-code/c"),
            api_package: "api".to_string(),
            model_name_prefix: None,
            model_name_suffix: None,
            hide_generation_timestamp: true,
            project_name: "openapi-client".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// The model name prefix, if a non-empty one is configured.
    pub fn model_name_prefix(&self) -> Option<&str> {
        self.model_name_prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// The model name suffix, if a non-empty one is configured.
    pub fn model_name_suffix(&self) -> Option<&str> {
        self.model_name_suffix.as_deref().filter(|s| !s.is_empty())
    }
}
