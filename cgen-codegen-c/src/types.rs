//! C type resolution.

use cgen_codegen::{NamingRules, SchemaIntrospector, TypeMapper, TypeRules, schema::enum_literal};
use cgen_ir::Schema;

use crate::{CNaming, CTypeMapper};

/// Resolves schema nodes to C type names and default initializers.
///
/// Borrows the run's naming rules, type map and schema layer; holds no state
/// of its own.
#[derive(Clone, Copy)]
pub struct CTypes<'a> {
    naming: &'a CNaming,
    mapper: &'a CTypeMapper,
    schemas: &'a dyn SchemaIntrospector,
}

impl<'a> CTypes<'a> {
    pub fn new(
        naming: &'a CNaming,
        mapper: &'a CTypeMapper,
        schemas: &'a dyn SchemaIntrospector,
    ) -> Self {
        Self {
            naming,
            mapper,
            schemas,
        }
    }

    pub fn naming(&self) -> &'a CNaming {
        self.naming
    }

    pub fn schemas(&self) -> &'a dyn SchemaIntrospector {
        self.schemas
    }
}

impl TypeRules for CTypes<'_> {
    fn resolve_type(&self, schema: &Schema) -> Option<String> {
        let key = self.schemas.abstract_type(schema)?;
        let pending = match self.mapper.map_type(&key) {
            Some(mapped) if self.mapper.is_primitive(mapped) => return Some(mapped.to_string()),
            Some(mapped) => mapped.to_string(),
            None => key,
        };
        Some(self.naming.model_name(&pending))
    }

    fn default_value(&self, schema: &Schema) -> Option<String> {
        let default = schema.default.as_ref()?;
        if schema.is_integer() || schema.is_number() || schema.is_boolean() {
            Some(enum_literal(default))
        } else if schema.is_string() {
            Some(format!("'{}'", self.naming.escape_text(&enum_literal(default))))
        } else {
            None
        }
    }

    fn is_primitive_type(&self, type_name: &str) -> bool {
        self.mapper.is_primitive(type_name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cgen_codegen::Diagnostics;
    use cgen_ir::ApiSpec;
    use indexmap::indexmap;

    use super::*;

    struct Fixture {
        naming: CNaming,
        mapper: CTypeMapper,
        spec: ApiSpec,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                naming: CNaming::new(Arc::new(Diagnostics::new())),
                mapper: CTypeMapper::new(),
                spec: ApiSpec::default(),
            }
        }

        fn types(&self) -> CTypes<'_> {
            CTypes::new(&self.naming, &self.mapper, &self.spec)
        }
    }

    #[test]
    fn test_primitive_types_are_terminal() {
        let f = Fixture::new();
        let types = f.types();

        assert_eq!(types.resolve_type(&Schema::string()).as_deref(), Some("char"));
        assert_eq!(types.resolve_type(&Schema::integer()).as_deref(), Some("int"));
        assert_eq!(
            types.resolve_type(&Schema::integer().with_format("int64")).as_deref(),
            Some("long")
        );
        assert_eq!(types.resolve_type(&Schema::boolean()).as_deref(), Some("int"));
        assert_eq!(
            types.resolve_type(&Schema::number().with_format("float")).as_deref(),
            Some("double")
        );
        assert_eq!(
            types.resolve_type(&Schema::string().with_format("binary")).as_deref(),
            Some("binary_t*")
        );
    }

    #[test]
    fn test_map_and_array() {
        let f = Fixture::new();
        let types = f.types();

        let map = types.resolve_type(&Schema::map(Schema::string()));
        let array = types.resolve_type(&Schema::array(Schema::string()));
        assert_eq!(map.as_deref(), Some("list_t*"));
        assert_eq!(array.as_deref(), Some("list"));
        assert_ne!(map, array);
    }

    #[test]
    fn test_unmapped_keys_become_model_names() {
        let f = Fixture::new();
        let types = f.types();

        assert_eq!(
            types.resolve_type(&Schema::reference("PhoneNumber")).as_deref(),
            Some("phone_number")
        );
        assert_eq!(
            types.resolve_type(&Schema::reference("return")).as_deref(),
            Some("model_return")
        );
        assert_eq!(types.resolve_type(&Schema::object()).as_deref(), Some("object"));
        assert_eq!(f.naming.diagnostics().renames().len(), 1);
    }

    #[test]
    fn test_non_primitive_mapping_goes_through_model_naming() {
        let config = cgen_config::GeneratorConfig {
            type_mappings: indexmap! { "UUID".to_string() => "UuidValue".to_string() },
            ..Default::default()
        };
        let naming = CNaming::from_config(&config, Arc::new(Diagnostics::new()));
        let mapper = CTypeMapper::with_overrides(&config.type_mappings);
        let spec = ApiSpec::default();
        let types = CTypes::new(&naming, &mapper, &spec);

        assert_eq!(
            types.resolve_type(&Schema::string().with_format("uuid")).as_deref(),
            Some("uuid_value")
        );
    }

    #[test]
    fn test_nameless_reference_has_no_type() {
        let f = Fixture::new();
        let nameless = Schema {
            reference: Some("#/components/schemas/".to_string()),
            ..Schema::default()
        };
        assert_eq!(f.types().resolve_type(&nameless), None);
    }

    #[test]
    fn test_default_values() {
        let f = Fixture::new();
        let types = f.types();

        assert_eq!(
            types.default_value(&Schema::integer().with_default(42)).as_deref(),
            Some("42")
        );
        assert_eq!(
            types.default_value(&Schema::number().with_default(1.5)).as_deref(),
            Some("1.5")
        );
        assert_eq!(
            types.default_value(&Schema::boolean().with_default(true)).as_deref(),
            Some("true")
        );
        assert_eq!(
            types.default_value(&Schema::string().with_default("O'Brien")).as_deref(),
            Some("'OBrien'")
        );
        assert_eq!(
            types
                .default_value(&Schema::string().with_default("say \"hi\""))
                .as_deref(),
            Some("'say \\\"hi\\\"'")
        );
    }

    #[test]
    fn test_no_default_value() {
        let f = Fixture::new();
        let types = f.types();

        assert_eq!(types.default_value(&Schema::string()), None);
        assert_eq!(types.default_value(&Schema::integer()), None);
        assert_eq!(
            types.default_value(&Schema::array(Schema::string()).with_default(serde_json::json!([]))),
            None
        );
        assert_eq!(
            types.default_value(&Schema::object().with_default(serde_json::json!({}))),
            None
        );
    }
}
