//! Property descriptors and base extraction.

use cgen_ir::Schema;
use serde::Serialize;
use serde_json::Value;

use crate::language::{NamingRules, TypeRules};

/// One member of an enumerated value set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumVar {
    /// Identifier of the member.
    pub name: String,
    /// Rendered value of the member.
    pub value: String,
}

/// A schema property enriched with resolved names and types.
///
/// Built once per property while generating and handed to templates as-is.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// The property name as written in the schema.
    pub base_name: String,
    /// Variable name.
    pub name: String,
    /// Declared type; `None` when no type could be resolved.
    pub data_type: Option<String>,
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    /// Set for inline enums, and for references to enum schemas once a
    /// language adapter has repaired the flag.
    pub is_enum: bool,
    pub is_array: bool,
    pub is_map: bool,
    pub is_container: bool,
    pub is_primitive_type: bool,
    /// Model referenced by the property or by its items/values.
    pub complex_type: Option<String>,
    /// Declared type of array items or map values.
    pub items_type: Option<String>,
    /// Datatype handed to enum member naming: `Integer`, `Float` or `String`.
    pub enum_data_type: String,
    pub enum_name: Option<String>,
    pub enum_vars: Vec<EnumVar>,
}

/// The datatype enum members of a schema are named with.
pub fn enum_data_type(schema: &Schema) -> &'static str {
    if schema.is_integer() {
        "Integer"
    } else if schema.is_number() {
        "Float"
    } else {
        "String"
    }
}

/// Literal text of an enum value (`"sold"` -> `sold`, `-1.5` -> `-1.5`).
pub fn enum_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract a property descriptor from a schema node.
///
/// This is the language-agnostic base: names and types come from the given
/// rules, `is_enum` reflects inline enums only.
pub fn from_property(
    naming: &dyn NamingRules,
    types: &dyn TypeRules,
    name: &str,
    schema: &Schema,
    required: bool,
) -> PropertyDescriptor {
    let data_type = types.type_declaration(schema);
    let inner = schema
        .items
        .as_deref()
        .or_else(|| schema.map_values());
    let enum_data_type = enum_data_type(schema);

    let mut property = PropertyDescriptor {
        base_name: name.to_string(),
        name: naming.var_name(name),
        is_primitive_type: data_type
            .as_deref()
            .is_some_and(|t| types.is_primitive_type(t)),
        data_type,
        default_value: types.default_value(schema),
        description: schema.description.as_deref().map(|d| naming.escape_text(d)),
        required,
        is_enum: schema.is_enum(),
        is_array: schema.is_array(),
        is_map: schema.is_map(),
        is_container: schema.is_array() || schema.is_map(),
        complex_type: inner
            .unwrap_or(schema)
            .ref_name()
            .map(|model| naming.model_name(model)),
        items_type: inner.and_then(|inner| types.type_declaration(inner)),
        enum_data_type: enum_data_type.to_string(),
        ..PropertyDescriptor::default()
    };

    if schema.is_enum() {
        property.enum_name = Some(naming.enum_name(name));
        property.enum_vars = enum_vars(naming, schema);
    }

    property
}

/// Named members of an enum schema, in declaration order.
pub fn enum_vars(naming: &dyn NamingRules, schema: &Schema) -> Vec<EnumVar> {
    let datatype = enum_data_type(schema);
    schema
        .enum_values
        .iter()
        .flatten()
        .map(|value| {
            let literal = enum_literal(value);
            EnumVar {
                name: naming.enum_var_name(&literal, datatype),
                value: naming.enum_value(&literal, datatype),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_enum_data_type() {
        assert_eq!(enum_data_type(&Schema::integer()), "Integer");
        assert_eq!(enum_data_type(&Schema::number()), "Float");
        assert_eq!(enum_data_type(&Schema::string()), "String");
        assert_eq!(enum_data_type(&Schema::boolean()), "String");
    }

    #[test]
    fn test_enum_literal() {
        assert_eq!(enum_literal(&json!("sold")), "sold");
        assert_eq!(enum_literal(&json!(-1.5)), "-1.5");
        assert_eq!(enum_literal(&json!(3)), "3");
        assert_eq!(enum_literal(&json!(true)), "true");
    }
}
