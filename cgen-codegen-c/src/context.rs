//! Template contexts for models and API groups.

use cgen_codegen::{
    EnumVar, NamingRules, PropertyDescriptor, TypeRules,
    generation::ImportCollector,
    schema::{enum_data_type, enum_vars},
};
use cgen_ir::{HttpMethod, Operation, Parameter, ParameterLocation, Schema};
use serde::Serialize;

use crate::{CTypes, adapt_property};

/// Everything the model templates see for one named schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelContext {
    /// Schema name as written in the API description.
    pub name: String,
    pub classname: String,
    pub class_filename: String,
    pub test_filename: String,
    pub doc_filename: String,
    pub description: Option<String>,
    /// Set when the schema itself is an enumeration.
    pub is_enum: bool,
    pub enum_data_type: String,
    pub enum_vars: Vec<EnumVar>,
    pub vars: Vec<PropertyDescriptor>,
    /// Include directives for the models this one refers to.
    pub imports: Vec<String>,
}

impl ModelContext {
    pub fn build(types: &CTypes<'_>, name: &str, schema: &Schema) -> Self {
        let naming = types.naming();
        let classname = naming.model_name(name);

        let vars: Vec<PropertyDescriptor> = schema
            .properties
            .iter()
            .map(|(prop, prop_schema)| {
                adapt_property(types, prop, prop_schema, schema.is_required(prop))
            })
            .collect();

        let mut imports = ImportCollector::new();
        for model in schema.properties.values().filter_map(referenced_model) {
            if model != name {
                imports.add(model);
            }
        }

        Self {
            name: name.to_string(),
            class_filename: naming.model_filename(name),
            test_filename: naming.model_test_filename(name),
            doc_filename: naming.model_doc_filename(name),
            description: schema.description.as_deref().map(|d| naming.escape_text(d)),
            is_enum: schema.is_enum(),
            enum_data_type: enum_data_type(schema).to_string(),
            enum_vars: enum_vars(naming, schema),
            vars,
            imports: imports.render(naming),
            classname,
        }
    }
}

/// One operation parameter as the API templates see it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamContext {
    pub base_name: String,
    pub param_name: String,
    pub data_type: Option<String>,
    /// `path`, `query`, `header`, `cookie` or `body`.
    pub location: &'static str,
    pub required: bool,
    pub is_primitive_type: bool,
    pub description: Option<String>,
}

/// One operation as the API templates see it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationContext {
    /// Method name of the operation.
    pub nickname: String,
    pub operation_id_original: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub notes: Option<String>,
    pub all_params: Vec<ParamContext>,
    pub return_type: Option<String>,
    pub return_is_primitive: bool,
}

/// Everything the API templates see for one group of operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContext {
    /// Group (tag) name as written in the API description.
    pub base_name: String,
    pub classname: String,
    pub class_filename: String,
    pub test_filename: String,
    pub doc_filename: String,
    pub api_import: String,
    pub operations: Vec<OperationContext>,
    /// Include directives for the models the operations refer to.
    pub imports: Vec<String>,
}

impl ApiContext {
    pub fn build<'s>(
        types: &CTypes<'_>,
        group: &str,
        operations: impl IntoIterator<Item = (HttpMethod, &'s str, &'s [Parameter], &'s Operation)>,
    ) -> Self {
        let naming = types.naming();
        let mut imports = ImportCollector::new();

        let operations = operations
            .into_iter()
            .map(|(method, path, shared, op)| {
                let ctx = OperationContext::build(types, method, path, shared, op);
                for schema in op.referenced_schemas(shared) {
                    if let Some(model) = referenced_model(schema) {
                        imports.add(model);
                    }
                }
                ctx
            })
            .collect();

        Self {
            base_name: group.to_string(),
            classname: naming.api_name(group),
            class_filename: naming.api_filename(group),
            test_filename: naming.api_test_filename(group),
            doc_filename: naming.api_doc_filename(group),
            api_import: naming.api_import(group),
            operations,
            imports: imports.render(naming),
        }
    }
}

/// The model a schema refers to directly or through its items or values.
fn referenced_model(schema: &Schema) -> Option<&str> {
    schema
        .items
        .as_deref()
        .or_else(|| schema.map_values())
        .unwrap_or(schema)
        .ref_name()
}

impl OperationContext {
    fn build(
        types: &CTypes<'_>,
        method: HttpMethod,
        path: &str,
        shared: &[Parameter],
        op: &Operation,
    ) -> Self {
        let naming = types.naming();
        let raw_id = op
            .operation_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| fallback_operation_id(method, path), str::to_string);

        let mut all_params: Vec<ParamContext> = op
            .effective_parameters(shared)
            .map(|param| {
                let data_type = param
                    .schema
                    .as_ref()
                    .and_then(|s| types.type_declaration(s));
                ParamContext {
                    base_name: param.name.clone(),
                    param_name: naming.param_name(&param.name),
                    is_primitive_type: data_type
                        .as_deref()
                        .is_some_and(|t| types.is_primitive_type(t)),
                    data_type,
                    location: location_label(param.location),
                    required: param.required,
                    description: param.description.as_deref().map(|d| naming.escape_text(d)),
                }
            })
            .collect();

        if let Some(body) = op.body_schema() {
            let data_type = types.type_declaration(body);
            all_params.push(ParamContext {
                base_name: "body".to_string(),
                param_name: naming.param_name(
                    &body
                        .ref_name()
                        .map_or_else(|| "body".to_string(), |model| naming.model_name(model)),
                ),
                is_primitive_type: data_type
                    .as_deref()
                    .is_some_and(|t| types.is_primitive_type(t)),
                data_type,
                location: "body",
                required: op.request_body.as_ref().is_some_and(|b| b.required),
                description: None,
            });
        }

        let return_type = op.success_schema().and_then(|s| types.type_declaration(s));

        Self {
            nickname: naming.operation_id(&raw_id),
            operation_id_original: raw_id,
            http_method: method,
            path: path.to_string(),
            summary: op.summary.as_deref().map(|s| naming.escape_text(s)),
            notes: op.description.as_deref().map(|d| naming.escape_text(d)),
            all_params,
            return_is_primitive: return_type
                .as_deref()
                .is_some_and(|t| types.is_primitive_type(t)),
            return_type,
        }
    }
}

/// Operation id for operations that do not declare one (`GET /pet/{petId}` -> `pet_petId_get`).
fn fallback_operation_id(method: HttpMethod, path: &str) -> String {
    let mut parts: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_start_matches('{').trim_end_matches('}').to_string())
        .collect();
    parts.push(method.as_str().to_lowercase());
    parts.join("_")
}

fn location_label(location: ParameterLocation) -> &'static str {
    match location {
        ParameterLocation::Path => "path",
        ParameterLocation::Query => "query",
        ParameterLocation::Header => "header",
        ParameterLocation::Cookie => "cookie",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cgen_codegen::Diagnostics;
    use cgen_ir::ApiSpec;

    use super::*;
    use crate::{CNaming, CTypeMapper};

    #[test]
    fn test_fallback_operation_id() {
        assert_eq!(
            fallback_operation_id(HttpMethod::Get, "/pet/{petId}"),
            "pet_petId_get"
        );
        assert_eq!(fallback_operation_id(HttpMethod::Post, "/"), "post");
    }

    #[test]
    fn test_blank_operation_id_falls_back_to_path() {
        let naming = CNaming::new(Arc::new(Diagnostics::new()));
        let mapper = CTypeMapper::new();
        let spec = ApiSpec::default();
        let types = CTypes::new(&naming, &mapper, &spec);
        let op = Operation {
            operation_id: Some("  ".to_string()),
            ..Operation::default()
        };

        let ctx = OperationContext::build(&types, HttpMethod::Get, "/store/inventory", &[], &op);
        assert_eq!(ctx.operation_id_original, "store_inventory_get");
        assert_eq!(ctx.nickname, "storeInventoryGet");
    }

    #[test]
    fn test_referenced_model() {
        assert_eq!(referenced_model(&Schema::reference("Pet")), Some("Pet"));
        assert_eq!(
            referenced_model(&Schema::array(Schema::reference("Tag"))),
            Some("Tag")
        );
        assert_eq!(
            referenced_model(&Schema::map(Schema::reference("Order"))),
            Some("Order")
        );
        assert_eq!(referenced_model(&Schema::string()), None);
    }
}
