//! Post-process command report.

use std::path::PathBuf;

use cgen_codegen::generation::PostProcessOutcome;
use cgen_core::FileType;

use super::output::{Output, Report};

/// What happened to one file handed to the post-generation hook.
#[derive(Debug)]
pub struct PostProcessReport {
    pub file: PathBuf,
    pub file_type: FileType,
    /// The configured command line, if any.
    pub command: Option<String>,
    pub outcome: PostProcessOutcome,
    pub errors: Vec<String>,
}

impl PostProcessReport {
    pub fn failed(&self) -> bool {
        self.outcome == PostProcessOutcome::Failed
    }
}

impl Report for PostProcessReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("File", &self.file.display().to_string());
        out.key_value_indented("Type", self.file_type.as_str());
        out.key_value_indented(
            "Command",
            self.command.as_deref().unwrap_or("(C_POST_PROCESS_FILE not set)"),
        );
        let outcome = match self.outcome {
            PostProcessOutcome::Skipped => "skipped",
            PostProcessOutcome::Succeeded => "processed",
            PostProcessOutcome::Failed => "failed",
        };
        out.key_value_indented("Outcome", outcome);
        for error in &self.errors {
            out.key_value_indented("Error", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_skipped_without_command() {
        let report = PostProcessReport {
            file: PathBuf::from("README.md"),
            file_type: FileType::SupportingFile,
            command: None,
            outcome: PostProcessOutcome::Skipped,
            errors: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "File: README.md",
                "  Type: supporting-mustache",
                "  Command: (C_POST_PROCESS_FILE not set)",
                "  Outcome: skipped"
            ]
        );
    }
}
