//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, GeneratorConfig, Result, validate::ParseContext};

/// Default filename used in error reports.
pub const CONFIG_FILE_NAME: &str = "cgen.toml";

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl GeneratorConfig {
    /// Parse a cgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a cgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<GeneratorConfig> {
    let ctx = ParseContext::new(content, filename);
    let config: GeneratorConfig = toml::from_str(content).map_err(|e| Error::parse(e, &ctx))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

/// Validate the configuration after parsing.
fn validate_config(config: &GeneratorConfig, ctx: &ParseContext<'_>) -> Result<()> {
    let options = &config.generator;

    if let Some(prefix) = options.model_name_prefix() {
        ctx.validate_identifier(prefix, "model name prefix")?;
    }
    if let Some(suffix) = options.model_name_suffix() {
        ctx.validate_identifier(suffix, "model name suffix")?;
    }
    if options.api_package.trim().is_empty() {
        return Err(ctx.validation_error("api_package cannot be empty", "api_package"));
    }

    for replacement in config.reserved_word_mappings.values() {
        ctx.validate_replacement(replacement, "reserved word mapping")?;
    }

    for (model, header) in &config.import_mappings {
        if header.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("import mapping for '{model}' cannot be empty"),
                model,
            ));
        }
    }

    for (key, target) in &config.type_mappings {
        if target.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("type mapping for '{key}' cannot be empty"),
                key,
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GeneratorConfig = "".parse().unwrap();

        assert_eq!(config.generator.output, PathBuf::from("generated-code/c"));
        assert_eq!(config.generator.api_package, "api");
        assert!(config.generator.hide_generation_timestamp);
        assert_eq!(config.generator.project_name, "openapi-client");
        assert!(config.generator.model_name_prefix().is_none());
        assert!(config.reserved_word_mappings.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: GeneratorConfig = r#"
[generator]
output = "out"
api_package = "client/api"
model_name_prefix = "oa"
model_name_suffix = ""
hide_generation_timestamp = false
project_name = "petstore"

[reserved_word_mappings]
default = "default_value"

[import_mappings]
Pet = "pet_t"

[type_mappings]
UUID = "uuid_t"
"#
        .parse()
        .unwrap();

        assert_eq!(config.generator.output, PathBuf::from("out"));
        assert_eq!(config.generator.api_package, "client/api");
        assert_eq!(config.generator.model_name_prefix(), Some("oa"));
        assert_eq!(config.generator.model_name_suffix(), None);
        assert!(!config.generator.hide_generation_timestamp);
        assert_eq!(config.reserved_word_mappings["default"], "default_value");
        assert_eq!(config.import_mappings["Pet"], "pet_t");
        assert_eq!(config.type_mappings["UUID"], "uuid_t");
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "[generator]\noutput_dir = \"x\"".parse::<GeneratorConfig>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_prefix() {
        let err = "[generator]\nmodel_name_prefix = \"my-prefix\""
            .parse::<GeneratorConfig>()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_reserved_replacement() {
        let err = "[reserved_word_mappings]\nauto = \"int\""
            .parse::<GeneratorConfig>()
            .unwrap_err();
        assert!(matches!(*err, Error::ReservedWord { ref name, .. } if name == "int"));
    }

    #[test]
    fn test_empty_import_mapping() {
        let err = "[import_mappings]\nPet = \"\""
            .parse::<GeneratorConfig>()
            .unwrap_err();
        assert_eq!(err.to_string(), "import mapping for 'Pet' cannot be empty");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cgen.toml");
        std::fs::write(&path, "[generator]\nproject_name = \"petstore\"\n").unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.generator.project_name, "petstore");
    }

    #[test]
    fn test_from_missing_file() {
        let err = GeneratorConfig::from_file("/nonexistent/cgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
