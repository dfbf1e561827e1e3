use std::path::PathBuf;

use cgen_codegen::NameCategory;
use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NameCommand {
    /// What the name is used as (variable, model-type, api-file, enum-var-name, ...)
    pub category: NameCategory,

    /// The name as written in the API description
    #[arg(allow_hyphen_values = true)]
    pub raw: String,

    /// Enum datatype for enum-value and enum-var-name (String, Integer, Float)
    #[arg(short, long, default_value = "String")]
    pub datatype: String,

    /// Path to cgen.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref());
        let report = ops::name(&config, self.category, &self.raw, &self.datatype);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
