//! Model include collection.

use indexmap::IndexSet;

use crate::language::NamingRules;

/// Tracks the models a generated file depends on and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use cgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("Pet");
/// imports.add("Category");
/// imports.add("Pet");
///
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    models: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw schema name. Adding a model twice is a no-op.
    pub fn add(&mut self, model: &str) {
        if !self.models.contains(model) {
            self.models.insert(model.to_string());
        }
    }

    /// Iterate over collected models in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    /// Render every collected model as an include statement.
    pub fn render(&self, naming: &dyn NamingRules) -> Vec<String> {
        self.iter().map(|model| naming.model_import(model)).collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Get the number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }
}
