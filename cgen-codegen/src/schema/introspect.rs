//! The upstream schema-introspection seam.

use cgen_ir::{ApiSpec, Schema};

/// Supplies abstract type keys and dereferenced schemas.
///
/// Resolvers never walk the API description themselves; everything they need
/// to know about a schema node beyond its own keywords comes through here.
pub trait SchemaIntrospector {
    /// The abstract type key of a schema (`string`, `DateTime`, `array`, `map`,
    /// a referenced model name, ...).
    ///
    /// Returns `None` when no type can be named, e.g. for a reference without
    /// a target name.
    fn abstract_type(&self, schema: &Schema) -> Option<String>;

    /// Follow a reference to its target schema.
    fn referenced_schema<'a>(&'a self, schema: &Schema) -> Option<&'a Schema>;
}

impl SchemaIntrospector for ApiSpec {
    fn abstract_type(&self, schema: &Schema) -> Option<String> {
        if schema.is_ref() {
            return schema.ref_name().map(str::to_string);
        }

        let format = schema.format.as_deref();
        let key = match schema.schema_type.as_deref() {
            Some("string") => match format {
                Some("date") => "date",
                Some("date-time") => "DateTime",
                Some("byte") => "ByteArray",
                Some("binary") => "binary",
                Some("uuid") => "UUID",
                Some("uri") => "URI",
                _ => "string",
            },
            Some("integer") if format == Some("int64") => "long",
            Some("integer") => "integer",
            Some("number") => match format {
                Some("float") => "float",
                Some("double") => "double",
                _ => "number",
            },
            Some("object") | None if schema.is_map() => "map",
            Some("object") | None => "object",
            Some(other) => other,
        };
        Some(key.to_string())
    }

    fn referenced_schema<'a>(&'a self, schema: &Schema) -> Option<&'a Schema> {
        ApiSpec::referenced_schema(self, schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(schema: Schema) -> Option<String> {
        ApiSpec::default().abstract_type(&schema)
    }

    #[test]
    fn test_string_formats() {
        assert_eq!(key(Schema::string()).as_deref(), Some("string"));
        assert_eq!(key(Schema::string().with_format("date")).as_deref(), Some("date"));
        assert_eq!(
            key(Schema::string().with_format("date-time")).as_deref(),
            Some("DateTime")
        );
        assert_eq!(
            key(Schema::string().with_format("byte")).as_deref(),
            Some("ByteArray")
        );
        assert_eq!(
            key(Schema::string().with_format("binary")).as_deref(),
            Some("binary")
        );
        assert_eq!(key(Schema::string().with_format("uuid")).as_deref(), Some("UUID"));
        assert_eq!(key(Schema::string().with_format("email")).as_deref(), Some("string"));
    }

    #[test]
    fn test_numeric_formats() {
        assert_eq!(key(Schema::integer()).as_deref(), Some("integer"));
        assert_eq!(key(Schema::integer().with_format("int64")).as_deref(), Some("long"));
        assert_eq!(key(Schema::number()).as_deref(), Some("number"));
        assert_eq!(key(Schema::number().with_format("float")).as_deref(), Some("float"));
        assert_eq!(key(Schema::number().with_format("double")).as_deref(), Some("double"));
    }

    #[test]
    fn test_containers_and_objects() {
        assert_eq!(key(Schema::array(Schema::string())).as_deref(), Some("array"));
        assert_eq!(key(Schema::map(Schema::string())).as_deref(), Some("map"));
        assert_eq!(key(Schema::object()).as_deref(), Some("object"));
        assert_eq!(key(Schema::default()).as_deref(), Some("object"));
        assert_eq!(key(Schema::boolean()).as_deref(), Some("boolean"));
    }

    #[test]
    fn test_references() {
        assert_eq!(key(Schema::reference("Pet")).as_deref(), Some("Pet"));

        let nameless = Schema {
            reference: Some("#/components/schemas/".to_string()),
            ..Schema::default()
        };
        assert_eq!(key(nameless), None);
    }
}
