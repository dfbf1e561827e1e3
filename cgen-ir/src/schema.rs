//! Schema nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of local references to named component schemas.
pub const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// A schema node as it appears in the API description.
///
/// Only the keywords the generator reads are modelled; everything else is
/// ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Local reference (`#/components/schemas/Pet`).
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// The `type` keyword.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// The `enum` keyword.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub nullable: bool,
}

/// The `additionalProperties` keyword: either a flag or a value schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
}

impl Schema {
    /// Create a schema with the given `type` keyword.
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::of_type("string")
    }

    pub fn integer() -> Self {
        Self::of_type("integer")
    }

    pub fn number() -> Self {
        Self::of_type("number")
    }

    pub fn boolean() -> Self {
        Self::of_type("boolean")
    }

    pub fn object() -> Self {
        Self::of_type("object")
    }

    /// Create an array schema with the given item schema.
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_type("array")
        }
    }

    /// Create a map schema (`object` with `additionalProperties`).
    pub fn map(values: Schema) -> Self {
        Self {
            additional_properties: Some(AdditionalProperties::Schema(Box::new(values))),
            ..Self::object()
        }
    }

    /// Create a reference to a named component schema.
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("{COMPONENT_SCHEMA_PREFIX}{name}")),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The simple name a `$ref` points at (`#/components/schemas/Pet` -> `Pet`).
    ///
    /// Returns `None` for inline schemas and for references without a name.
    pub fn ref_name(&self) -> Option<&str> {
        let reference = self.reference.as_deref()?;
        let name = reference
            .strip_prefix(COMPONENT_SCHEMA_PREFIX)
            .unwrap_or_else(|| reference.rsplit('/').next().unwrap_or(reference));
        (!name.is_empty()).then_some(name)
    }

    pub fn is_ref(&self) -> bool {
        self.reference.is_some()
    }

    /// Check whether the schema declares an enumerated value set.
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    pub fn is_array(&self) -> bool {
        self.schema_type.as_deref() == Some("array")
    }

    /// Check whether the schema is a map: an object with `additionalProperties`
    /// set to a schema or `true`.
    pub fn is_map(&self) -> bool {
        matches!(
            self.additional_properties,
            Some(AdditionalProperties::Bool(true)) | Some(AdditionalProperties::Schema(_))
        )
    }

    pub fn is_string(&self) -> bool {
        self.schema_type.as_deref() == Some("string")
    }

    pub fn is_integer(&self) -> bool {
        self.schema_type.as_deref() == Some("integer")
    }

    pub fn is_number(&self) -> bool {
        self.schema_type.as_deref() == Some("number")
    }

    pub fn is_boolean(&self) -> bool {
        self.schema_type.as_deref() == Some("boolean")
    }

    /// The value schema of a map, if it declares one.
    pub fn map_values(&self) -> Option<&Schema> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(values)) => Some(values),
            _ => None,
        }
    }

    /// Check whether a property is listed under `required`.
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}
