//! Usage categories for resolved identifiers.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// What a resolved name is going to be used as.
///
/// Each category has its own transformation pipeline in a
/// [`NamingRules`](super::NamingRules) implementation; all of them share the
/// sanitizing and reserved-word stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameCategory {
    Variable,
    Parameter,
    ModelType,
    ModelFile,
    ApiName,
    ApiFile,
    ApiTestFile,
    ModelTestFile,
    EnumValue,
    EnumVarName,
    EnumTypeName,
    OperationId,
    /// Model include directive.
    Import,
}

impl NameCategory {
    /// Every category, in declaration order.
    pub const ALL: [NameCategory; 13] = [
        NameCategory::Variable,
        NameCategory::Parameter,
        NameCategory::ModelType,
        NameCategory::ModelFile,
        NameCategory::ApiName,
        NameCategory::ApiFile,
        NameCategory::ApiTestFile,
        NameCategory::ModelTestFile,
        NameCategory::EnumValue,
        NameCategory::EnumVarName,
        NameCategory::EnumTypeName,
        NameCategory::OperationId,
        NameCategory::Import,
    ];

    /// Get the kebab-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameCategory::Variable => "variable",
            NameCategory::Parameter => "parameter",
            NameCategory::ModelType => "model-type",
            NameCategory::ModelFile => "model-file",
            NameCategory::ApiName => "api-name",
            NameCategory::ApiFile => "api-file",
            NameCategory::ApiTestFile => "api-test-file",
            NameCategory::ModelTestFile => "model-test-file",
            NameCategory::EnumValue => "enum-value",
            NameCategory::EnumVarName => "enum-var-name",
            NameCategory::EnumTypeName => "enum-type-name",
            NameCategory::OperationId => "operation-id",
            NameCategory::Import => "import",
        }
    }

    /// Human-readable usage, as used in rename diagnostics.
    pub fn usage(&self) -> &'static str {
        match self {
            NameCategory::Variable => "variable name",
            NameCategory::Parameter => "parameter name",
            NameCategory::ModelType => "model name",
            NameCategory::ModelFile => "model file name",
            NameCategory::ApiName => "api name",
            NameCategory::ApiFile => "api file name",
            NameCategory::ApiTestFile => "api test file name",
            NameCategory::ModelTestFile => "model test file name",
            NameCategory::EnumValue => "enum value",
            NameCategory::EnumVarName => "enum variable name",
            NameCategory::EnumTypeName => "enum type name",
            NameCategory::OperationId => "method name",
            NameCategory::Import => "include",
        }
    }

    /// Whether the category takes an enum datatype (`Integer`, `Float`, ...).
    pub fn takes_datatype(&self) -> bool {
        matches!(self, NameCategory::EnumValue | NameCategory::EnumVarName)
    }
}

impl fmt::Display for NameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|c| c.as_str()).collect();
                format!(
                    "unknown name category '{}', valid categories are: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for category in NameCategory::ALL {
            assert_eq!(category.as_str().parse::<NameCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "model".parse::<NameCategory>().unwrap_err();
        assert!(err.starts_with("unknown name category 'model'"));
        assert!(err.contains("model-type"));
    }

    #[test]
    fn test_takes_datatype() {
        assert!(NameCategory::EnumValue.takes_datatype());
        assert!(NameCategory::EnumVarName.takes_datatype());
        assert!(!NameCategory::EnumTypeName.takes_datatype());
    }
}
