//! Inspect operation - resolve a whole API description.

use cgen_codegen_c::Client;
use cgen_config::GeneratorConfig;
use cgen_ir::ApiSpec;
use eyre::Result;
use indexmap::IndexSet;

use crate::reports::{ApiInfo, FileInfo, InspectReport, ModelInfo, OperationInfo, PropertyInfo};

/// Execute the inspect operation.
///
/// Resolves every model, API and output file without rendering anything.
pub fn inspect(spec: &ApiSpec, config: &GeneratorConfig) -> Result<InspectReport> {
    let client = Client::new(spec, config);

    let models = client
        .models()
        .into_iter()
        .map(|model| ModelInfo {
            name: model.name,
            type_name: model.classname,
            is_enum: model.is_enum,
            enum_members: model
                .enum_vars
                .into_iter()
                .map(|v| format!("{} = {}", v.name, v.value))
                .collect(),
            properties: model
                .vars
                .into_iter()
                .map(|v| PropertyInfo {
                    name: v.name,
                    base_name: v.base_name,
                    data_type: v.data_type,
                    required: v.required,
                    is_enum: v.is_enum,
                    default_value: v.default_value,
                })
                .collect(),
        })
        .collect();

    let apis = client
        .apis()
        .into_iter()
        .map(|api| ApiInfo {
            group: api.base_name,
            name: api.classname,
            operations: api
                .operations
                .into_iter()
                .map(|op| OperationInfo {
                    method: op.http_method.to_string(),
                    path: op.path,
                    name: op.nickname,
                    params: op
                        .all_params
                        .into_iter()
                        .map(|p| {
                            format!("{}: {}", p.param_name, p.data_type.as_deref().unwrap_or("?"))
                        })
                        .collect(),
                    return_type: op.return_type,
                })
                .collect(),
        })
        .collect();

    let files = client
        .files()?
        .into_iter()
        .map(|planned| FileInfo {
            path: planned.file.path,
            template: planned.file.template.to_string(),
            file_type: planned.file.file_type.to_string(),
        })
        .collect();

    // Models are resolved for both the model list and the file plan.
    let renames: IndexSet<String> = client
        .diagnostics()
        .renames()
        .into_iter()
        .map(|r| format!("{} -> {}", r.original, r.renamed))
        .collect();

    Ok(InspectReport {
        title: spec.info.title.clone(),
        version: spec.info.version.clone(),
        output: config.generator.output.display().to_string(),
        models,
        apis,
        files,
        renames: renames.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r##"{
        "openapi": "3.0.0",
        "info": { "title": "Petstore", "version": "1.0.0" },
        "paths": {
            "/pet/{petId}": {
                "get": {
                    "operationId": "getPetById",
                    "tags": ["pet"],
                    "parameters": [ { "name": "petId", "in": "path", "required": true, "schema": { "type": "integer", "format": "int64" } } ],
                    "responses": { "200": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } } } }
                }
            }
        },
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string" },
                        "default": { "type": "boolean" }
                    }
                }
            }
        }
    }"##;

    #[test]
    fn test_inspect_petstore() {
        let spec = ApiSpec::from_json(SPEC).unwrap();
        let report = inspect(&spec, &GeneratorConfig::default()).unwrap();

        assert_eq!(report.output, "generated-code/c");
        assert_eq!(report.models[0].type_name, "pet");
        assert_eq!(report.models[0].properties[0].data_type.as_deref(), Some("char"));
        assert!(report.models[0].properties[0].required);
        assert_eq!(report.models[0].properties[1].name, "_default");

        let op = &report.apis[0].operations[0];
        assert_eq!(report.apis[0].name, "PetAPI");
        assert_eq!(op.name, "getPetById");
        assert_eq!(op.params, ["petId: long"]);
        assert_eq!(op.return_type.as_deref(), Some("pet"));

        assert!(report.files.iter().any(|f| f.path == "api/PetAPI.c" && f.file_type == "api"));
        assert_eq!(report.renames, ["default -> _default"]);
    }
}
