//! Output layout of a generated C client.

use cgen_codegen::NamingRules;
use cgen_core::FileType;

use crate::CNaming;

/// API sources and headers.
pub const API_FOLDER: &str = "api";
/// Model sources and headers.
pub const MODEL_FOLDER: &str = "model";
/// API and model unit tests.
pub const TEST_FOLDER: &str = "unit-test";
/// Markdown pages for APIs and models.
pub const DOC_FOLDER: &str = "docs";

/// One file rendered from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub template: &'static str,
    /// Path relative to the output directory
    pub path: String,
    pub file_type: FileType,
}

impl TemplateFile {
    fn new(template: &'static str, path: String, file_type: FileType) -> Self {
        Self {
            template,
            path,
            file_type,
        }
    }
}

/// Runtime and build files emitted once per client, as `(template, path)`.
pub const SUPPORTING_FILES: &[(&str, &str)] = &[
    ("README.mustache", "README.md"),
    ("CMakeLists.txt.mustache", "CMakeLists.txt"),
    ("apiClient.h.mustache", "include/apiClient.h"),
    ("list.h.mustache", "include/list.h"),
    ("keyValuePair.h.mustache", "include/keyValuePair.h"),
    ("binary.h.mustache", "include/binary.h"),
    ("apiClient.c.mustache", "src/apiClient.c"),
    ("list.c.mustache", "src/list.c"),
    ("apiKey.c.mustache", "src/apiKey.c"),
    ("binary.c.mustache", "src/binary.c"),
];

pub fn supporting_files() -> Vec<TemplateFile> {
    SUPPORTING_FILES
        .iter()
        .map(|(template, path)| {
            TemplateFile::new(template, path.to_string(), FileType::SupportingFile)
        })
        .collect()
}

/// Files generated for one model schema.
pub fn model_files(naming: &CNaming, name: &str) -> Vec<TemplateFile> {
    let file = naming.model_filename(name);
    vec![
        TemplateFile::new(
            "model-header.mustache",
            format!("{MODEL_FOLDER}/{file}.h"),
            FileType::Model,
        ),
        TemplateFile::new(
            "model-body.mustache",
            format!("{MODEL_FOLDER}/{file}.c"),
            FileType::Model,
        ),
        TemplateFile::new(
            "unit-test-model.mustache",
            format!("{TEST_FOLDER}/{}.c", naming.model_test_filename(name)),
            FileType::ModelTest,
        ),
        TemplateFile::new(
            "model_doc.mustache",
            format!("{DOC_FOLDER}/{}.md", naming.model_doc_filename(name)),
            FileType::ModelDoc,
        ),
    ]
}

/// Files generated for one API group.
pub fn api_files(naming: &CNaming, group: &str) -> Vec<TemplateFile> {
    let file = naming.api_filename(group);
    vec![
        TemplateFile::new(
            "api-header.mustache",
            format!("{API_FOLDER}/{file}.h"),
            FileType::Api,
        ),
        TemplateFile::new(
            "api-body.mustache",
            format!("{API_FOLDER}/{file}.c"),
            FileType::Api,
        ),
        TemplateFile::new(
            "unit-test-api.mustache",
            format!("{TEST_FOLDER}/{}.c", naming.api_test_filename(group)),
            FileType::ApiTest,
        ),
        TemplateFile::new(
            "api_doc.mustache",
            format!("{DOC_FOLDER}/{}.md", naming.api_doc_filename(group)),
            FileType::ApiDoc,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cgen_codegen::Diagnostics;

    use super::*;

    fn paths(files: &[TemplateFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_model_files() {
        let naming = CNaming::new(Arc::new(Diagnostics::new()));
        let files = model_files(&naming, "PhoneNumber");

        assert_eq!(
            paths(&files),
            [
                "model/phone_number.h",
                "model/phone_number.c",
                "unit-test/test-phone-number.c",
                "docs/phone_number.md"
            ]
        );
        assert_eq!(files[2].file_type, FileType::ModelTest);
        assert_eq!(files[3].file_type, FileType::ModelDoc);
    }

    #[test]
    fn test_api_files() {
        let naming = CNaming::new(Arc::new(Diagnostics::new()));
        let files = api_files(&naming, "pet");

        assert_eq!(
            paths(&files),
            [
                "api/PetAPI.h",
                "api/PetAPI.c",
                "unit-test/test-PetAPI.c",
                "docs/PetAPI.md"
            ]
        );
        assert_eq!(files[0].file_type, FileType::Api);
        assert_eq!(files[2].file_type, FileType::ApiTest);
    }

    #[test]
    fn test_supporting_files() {
        let files = supporting_files();

        assert_eq!(files.len(), SUPPORTING_FILES.len());
        assert!(files.iter().all(|f| f.file_type == FileType::SupportingFile));
        assert!(paths(&files).contains(&"include/keyValuePair.h"));
    }
}
