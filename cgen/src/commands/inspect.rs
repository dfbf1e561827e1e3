use std::path::PathBuf;

use cgen_ir::ApiSpec;
use clap::Args;
use eyre::{Context, Result};

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Path to the OpenAPI description (JSON)
    pub spec: PathBuf,

    /// Path to cgen.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref());
        let spec = ApiSpec::from_file(&self.spec)?;
        tracing::debug!(
            path = %self.spec.display(),
            paths = spec.paths.len(),
            schemas = spec.components.schemas.len(),
            "loaded API description"
        );
        let report = ops::inspect(&spec, &config).wrap_err("Failed to resolve API description")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
