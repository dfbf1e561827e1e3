//! Core type definitions.

use std::fmt;

use serde::Serialize;

/// Kind of file produced by a generator run.
///
/// The labels match the file-type strings template drivers report to
/// post-processing hooks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum FileType {
    /// A supporting file rendered from a template (README, build files, runtime sources).
    SupportingFile,
    /// A model source or header.
    Model,
    /// A model unit test.
    ModelTest,
    /// A model documentation page.
    ModelDoc,
    /// An API source or header.
    Api,
    /// An API unit test.
    ApiTest,
    /// An API documentation page.
    ApiDoc,
    /// Any other label, kept verbatim.
    Other(String),
}

impl FileType {
    /// Get the file-type label.
    pub fn as_str(&self) -> &str {
        match self {
            FileType::SupportingFile => "supporting-mustache",
            FileType::Model => "model",
            FileType::ModelTest => "model-test",
            FileType::ModelDoc => "model-doc",
            FileType::Api => "api",
            FileType::ApiTest => "api-test",
            FileType::ApiDoc => "api-doc",
            FileType::Other(label) => label,
        }
    }
}

impl From<&str> for FileType {
    fn from(label: &str) -> Self {
        match label {
            "supporting-mustache" => FileType::SupportingFile,
            "model" => FileType::Model,
            "model-test" => FileType::ModelTest,
            "model-doc" => FileType::ModelDoc,
            "api" => FileType::Api,
            "api-test" => FileType::ApiTest,
            "api-doc" => FileType::ApiDoc,
            other => FileType::Other(other.to_string()),
        }
    }
}

impl From<FileType> for String {
    fn from(file_type: FileType) -> Self {
        file_type.as_str().to_string()
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
