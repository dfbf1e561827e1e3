//! Inspect command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Everything resolved from one API description.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub title: String,
    pub version: String,
    /// Root directory the files are generated under.
    pub output: String,
    pub models: Vec<ModelInfo>,
    pub apis: Vec<ApiInfo>,
    /// Output files relative to `output`, in generation order.
    pub files: Vec<FileInfo>,
    /// Corrective renames, as `original -> renamed`.
    pub renames: Vec<String>,
}

/// A resolved model.
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    /// Schema name.
    pub name: String,
    /// C type name.
    pub type_name: String,
    pub is_enum: bool,
    /// Members of a top-level enum, as `NAME = value`.
    pub enum_members: Vec<String>,
    pub properties: Vec<PropertyInfo>,
}

/// A resolved model property.
#[derive(Debug, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    pub base_name: String,
    pub data_type: Option<String>,
    pub required: bool,
    pub is_enum: bool,
    pub default_value: Option<String>,
}

/// A resolved API group.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    /// Tag the operations are grouped under.
    pub group: String,
    pub name: String,
    pub operations: Vec<OperationInfo>,
}

/// A resolved operation.
#[derive(Debug, Serialize)]
pub struct OperationInfo {
    pub method: String,
    pub path: String,
    /// Method name.
    pub name: String,
    /// Parameters, as `name: type`.
    pub params: Vec<String>,
    pub return_type: Option<String>,
}

/// A planned output file.
#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub path: String,
    pub template: String,
    pub file_type: String,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} v{}", self.title, self.version));
        out.key_value("Output", &self.output);
        out.newline();

        out.section(&format!("Models ({})", self.models.len()));
        for model in &self.models {
            let kind = if model.is_enum { " (enum)" } else { "" };
            out.list_item(&format!("{} -> {}{}", model.name, model.type_name, kind));
            for member in &model.enum_members {
                out.nested_item(member);
            }
            for prop in &model.properties {
                let mut line = format!(
                    "{} {}",
                    prop.data_type.as_deref().unwrap_or("?"),
                    prop.name
                );
                if prop.required {
                    line.push_str(" (required)");
                }
                if prop.is_enum {
                    line.push_str(" (enum)");
                }
                if let Some(default) = &prop.default_value {
                    line.push_str(&format!(" = {}", default));
                }
                out.nested_item(&line);
            }
        }
        out.newline();

        out.section(&format!("APIs ({})", self.apis.len()));
        for api in &self.apis {
            out.list_item(&format!("{} -> {}", api.group, api.name));
            for op in &api.operations {
                out.nested_item(&format!(
                    "{} {} {}({}) -> {}",
                    op.method,
                    op.path,
                    op.name,
                    op.params.join(", "),
                    op.return_type.as_deref().unwrap_or("void")
                ));
            }
        }
        out.newline();

        out.section(&format!("Files ({})", self.files.len()));
        for file in &self.files {
            out.list_item(&format!("{} [{}]", file.path, file.file_type));
        }

        if !self.renames.is_empty() {
            out.newline();
            out.section("Renamed");
            for rename in &self.renames {
                out.list_item(rename);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = InspectReport {
            title: "Petstore".into(),
            version: "1.0.0".into(),
            output: "generated-code/c".into(),
            models: vec![ModelInfo {
                name: "Pet".into(),
                type_name: "pet".into(),
                is_enum: false,
                enum_members: Vec::new(),
                properties: vec![PropertyInfo {
                    name: "name".into(),
                    base_name: "name".into(),
                    data_type: Some("char".into()),
                    required: true,
                    is_enum: false,
                    default_value: Some("'rex'".into()),
                }],
            }],
            apis: vec![ApiInfo {
                group: "pet".into(),
                name: "PetAPI".into(),
                operations: vec![OperationInfo {
                    method: "GET".into(),
                    path: "/pet/{petId}".into(),
                    name: "getPetById".into(),
                    params: vec!["petId: long".into()],
                    return_type: Some("pet".into()),
                }],
            }],
            files: vec![FileInfo {
                path: "model/pet.h".into(),
                template: "model-header.mustache".into(),
                file_type: "model".into(),
            }],
            renames: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Petstore v1.0.0",
                "Output: generated-code/c",
                "",
                "Models (1):",
                "  - Pet -> pet",
                "      char name (required) = 'rex'",
                "",
                "APIs (1):",
                "  - pet -> PetAPI",
                "      GET /pet/{petId} getPetById(petId: long) -> pet",
                "",
                "Files (1):",
                "  - model/pet.h [model]",
            ]
        );
    }
}
