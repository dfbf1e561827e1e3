//! The API description root.

use std::path::Path;

use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{HttpMethod, Operation, PathItem, Schema};

/// Root of an API description document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(default)]
    pub openapi: String,
    #[serde(default)]
    pub info: Info,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    #[serde(default)]
    pub components: Components,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reusable components. Only named schemas are read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

impl ApiSpec {
    /// Parse a JSON API description.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).wrap_err("invalid API description")
    }

    /// Read and parse a JSON API description file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Self::from_json(&content).wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }

    /// Look up a named component schema.
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.components.schemas.get(name)
    }

    /// Follow a `$ref` to the named component schema.
    ///
    /// Returns `None` for inline schemas and dangling references.
    pub fn referenced_schema(&self, schema: &Schema) -> Option<&Schema> {
        schema.ref_name().and_then(|name| self.schema(name))
    }

    /// Iterate every operation as `(method, path, operation)` in document order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &str, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| (method, path.as_str(), op))
        })
    }
}
