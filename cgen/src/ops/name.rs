//! Name operation - resolve one raw name.

use std::sync::Arc;

use cgen_codegen::{Diagnostics, NameCategory, NamingRules};
use cgen_codegen_c::CNaming;
use cgen_config::GeneratorConfig;

use crate::reports::NameReport;

/// Resolve `raw` in `category` with the configured naming rules.
pub fn name(
    config: &GeneratorConfig,
    category: NameCategory,
    raw: &str,
    datatype: &str,
) -> NameReport {
    let diagnostics = Arc::new(Diagnostics::new());
    let naming = CNaming::from_config(config, Arc::clone(&diagnostics));
    let resolved = naming.resolve_typed(category, raw, datatype);

    NameReport {
        resolved,
        renames: diagnostics
            .renames()
            .into_iter()
            .map(|r| format!("{} -> {}", r.original, r.renamed))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_model_name() {
        let report = name(
            &GeneratorConfig::default(),
            NameCategory::ModelType,
            "return",
            "String",
        );
        assert_eq!(report.resolved, "model_return");
        assert_eq!(report.renames, ["return -> model_return"]);
    }

    #[test]
    fn test_numeric_enum_var_name() {
        let report = name(
            &GeneratorConfig::default(),
            NameCategory::EnumVarName,
            "-1",
            "Integer",
        );
        assert_eq!(report.resolved, "MINUS_1");
        assert!(report.renames.is_empty());
    }

    #[test]
    fn test_config_mapping_applies() {
        let config: GeneratorConfig = "[reserved_word_mappings]\nauto = \"auto_var\""
            .parse()
            .unwrap();
        let report = name(&config, NameCategory::Variable, "auto", "String");
        assert_eq!(report.resolved, "auto_var");
    }
}
