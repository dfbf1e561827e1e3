use std::{path::PathBuf, sync::Arc};

use cgen_codegen::Diagnostics;
use cgen_codegen_c::CPostProcessor;
use cgen_core::FileType;
use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PostProcessCommand {
    /// The generated file to process
    pub file: PathBuf,

    /// Kind of file (supporting-mustache, model, model-test, api, api-test, ...)
    #[arg(short = 't', long, default_value = "supporting-mustache")]
    pub file_type: String,
}

impl PostProcessCommand {
    pub fn run(&self) -> Result<()> {
        let diagnostics = Arc::new(Diagnostics::new());
        let hook = CPostProcessor::from_env(Arc::clone(&diagnostics));
        let file_type = FileType::from(self.file_type.as_str());

        let report = ops::post_process(&hook, &diagnostics, &self.file, &file_type);
        report.render(&mut TerminalOutput::new());

        if report.failed() {
            eyre::bail!("post-processing {} failed", self.file.display());
        }
        Ok(())
    }
}
