//! A fully resolved C client, before any template is rendered.

use std::sync::Arc;

use cgen_codegen::Diagnostics;
use cgen_config::GeneratorConfig;
use cgen_ir::{ApiSpec, HttpMethod, Operation, Parameter};
use eyre::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::{
    CNaming, CTypeMapper, CTypes,
    context::{ApiContext, ModelContext},
    layout::{TemplateFile, api_files, model_files, supporting_files},
};

/// Group for operations without a tag.
pub const DEFAULT_GROUP: &str = "default";

type GroupedOperation<'s> = (HttpMethod, &'s str, &'s [Parameter], &'s Operation);

/// One file to render: where it goes, from which template, with what context.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub file: TemplateFile,
    pub context: Value,
}

/// Resolves every name and type of an API description for the C target.
///
/// Owns the run's naming rules, type map and diagnostics.
pub struct Client<'a> {
    spec: &'a ApiSpec,
    config: &'a GeneratorConfig,
    naming: CNaming,
    mapper: CTypeMapper,
    diagnostics: Arc<Diagnostics>,
}

impl<'a> Client<'a> {
    pub fn new(spec: &'a ApiSpec, config: &'a GeneratorConfig) -> Self {
        let diagnostics = Arc::new(Diagnostics::new());
        Self {
            spec,
            config,
            naming: CNaming::from_config(config, Arc::clone(&diagnostics)),
            mapper: CTypeMapper::with_overrides(&config.type_mappings),
            diagnostics,
        }
    }

    pub fn spec(&self) -> &'a ApiSpec {
        self.spec
    }

    pub fn naming(&self) -> &CNaming {
        &self.naming
    }

    pub fn mapper(&self) -> &CTypeMapper {
        &self.mapper
    }

    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    pub fn types(&self) -> CTypes<'_> {
        CTypes::new(&self.naming, &self.mapper, self.spec)
    }

    /// Contexts for every named schema, in document order.
    pub fn models(&self) -> Vec<ModelContext> {
        let types = self.types();
        self.spec
            .components
            .schemas
            .iter()
            .map(|(name, schema)| ModelContext::build(&types, name, schema))
            .collect()
    }

    /// Operations grouped by their first tag, in document order.
    fn operation_groups(&self) -> IndexMap<&'a str, Vec<GroupedOperation<'a>>> {
        let spec = self.spec;
        let mut groups: IndexMap<&str, Vec<GroupedOperation<'_>>> = IndexMap::new();
        for (path, item) in &spec.paths {
            for (method, op) in item.operations() {
                let group = op.tags.first().map_or(DEFAULT_GROUP, String::as_str);
                groups.entry(group).or_default().push((
                    method,
                    path.as_str(),
                    item.parameters.as_slice(),
                    op,
                ));
            }
        }
        groups
    }

    /// Contexts for every API group.
    pub fn apis(&self) -> Vec<ApiContext> {
        let types = self.types();
        self.operation_groups()
            .into_iter()
            .map(|(group, ops)| ApiContext::build(&types, group, ops))
            .collect()
    }

    /// Values every template sees.
    pub fn globals(&self) -> Map<String, Value> {
        let options = &self.config.generator;
        let info = &self.spec.info;
        let mut globals = Map::new();
        globals.insert("projectName".into(), json!(options.project_name));
        globals.insert("appName".into(), json!(info.title));
        globals.insert("appVersion".into(), json!(info.version));
        globals.insert("appDescription".into(), json!(info.description));
        globals.insert("apiPackage".into(), json!(self.naming.api_package()));
        globals.insert(
            "hideGenerationTimestamp".into(),
            json!(options.hide_generation_timestamp),
        );
        globals
    }

    fn plan(&self, file: TemplateFile, context: &impl Serialize) -> Result<PlannedFile> {
        let mut context = serde_json::to_value(context)?;
        if let Value::Object(map) = &mut context {
            for (key, global) in self.globals() {
                map.entry(key).or_insert(global);
            }
        }
        Ok(PlannedFile { file, context })
    }

    /// Every file of the client with its template context, in output order.
    pub fn files(&self) -> Result<Vec<PlannedFile>> {
        let models = self.models();
        let apis = self.apis();
        let mut files = Vec::new();

        let summary = json!({
            "models": models
                .iter()
                .map(|m| json!({ "classname": m.classname, "classFilename": m.class_filename }))
                .collect::<Vec<_>>(),
            "apis": apis
                .iter()
                .map(|a| json!({ "classname": a.classname, "classFilename": a.class_filename }))
                .collect::<Vec<_>>(),
        });
        for file in supporting_files() {
            files.push(self.plan(file, &summary)?);
        }

        for model in &models {
            for file in model_files(&self.naming, &model.name) {
                files.push(self.plan(file, model)?);
            }
        }

        for api in &apis {
            for file in api_files(&self.naming, &api.base_name) {
                files.push(self.plan(file, api)?);
            }
        }

        tracing::debug!(
            files = files.len(),
            models = models.len(),
            apis = apis.len(),
            "planned client"
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r##"{
        "openapi": "3.0.0",
        "info": { "title": "Store", "version": "2.0.0" },
        "paths": {
            "/ping": { "get": { "operationId": "ping" } },
            "/order": { "post": { "operationId": "placeOrder", "tags": ["store"] } }
        },
        "components": { "schemas": { "Order": { "type": "object" } } }
    }"##;

    #[test]
    fn test_untagged_operations_use_default_group() {
        let spec = ApiSpec::from_json(SPEC).unwrap();
        let config = GeneratorConfig::default();
        let client = Client::new(&spec, &config);

        let groups: Vec<_> = client
            .apis()
            .into_iter()
            .map(|api| (api.base_name, api.classname))
            .collect();
        assert_eq!(
            groups,
            [
                ("default".to_string(), "DefaultAPI".to_string()),
                ("store".to_string(), "StoreAPI".to_string())
            ]
        );
    }

    #[test]
    fn test_globals_merged_into_context() {
        let spec = ApiSpec::from_json(SPEC).unwrap();
        let config = GeneratorConfig::default();
        let client = Client::new(&spec, &config);

        let files = client.files().unwrap();
        let order = files
            .iter()
            .find(|f| f.file.path == "model/order.h")
            .unwrap();
        assert_eq!(order.context["projectName"], "openapi-client");
        assert_eq!(order.context["appVersion"], "2.0.0");
        assert_eq!(order.context["classname"], "order");
    }

    #[test]
    fn test_context_keys_win_over_globals() {
        let spec = ApiSpec::from_json(SPEC).unwrap();
        let config = GeneratorConfig::default();
        let client = Client::new(&spec, &config);

        let planned = client
            .plan(supporting_files().remove(0), &json!({ "projectName": "own" }))
            .unwrap();
        assert_eq!(planned.context["projectName"], "own");
        assert_eq!(planned.context["hideGenerationTimestamp"], true);
    }

    #[test]
    fn test_supporting_context_lists_models_and_apis() {
        let spec = ApiSpec::from_json(SPEC).unwrap();
        let config = GeneratorConfig::default();
        let client = Client::new(&spec, &config);

        let files = client.files().unwrap();
        let readme = &files[0];
        assert_eq!(readme.file.path, "README.md");
        assert_eq!(readme.context["models"][0]["classname"], "order");
        assert_eq!(readme.context["apis"][1]["classFilename"], "StoreAPI");
    }
}
