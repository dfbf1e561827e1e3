//! Post-process operation - run the hook on one file.

use std::path::Path;

use cgen_codegen::{
    Diagnostics,
    generation::{PostProcess, PostProcessOutcome},
};
use cgen_codegen_c::CPostProcessor;
use cgen_core::FileType;

use crate::reports::PostProcessReport;

/// Hand one file to the post-generation hook.
pub fn post_process(
    hook: &CPostProcessor,
    diagnostics: &Diagnostics,
    file: &Path,
    file_type: &FileType,
) -> PostProcessReport {
    let outcome = hook.after_file_written(file, file_type);

    PostProcessReport {
        file: file.to_path_buf(),
        file_type: file_type.clone(),
        command: hook.command().map(ToString::to_string),
        outcome,
        errors: diagnostics
            .errors()
            .into_iter()
            .map(|d| d.message)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cgen_codegen::{generation::PostProcessCommand, testing::RecordingRunner};

    use super::*;

    #[test]
    fn test_failed_command_is_reported() {
        let diagnostics = Arc::new(Diagnostics::new());
        let hook = CPostProcessor::new(
            PostProcessCommand::parse("clang-format -i"),
            Box::new(RecordingRunner::exiting(1)),
            Arc::clone(&diagnostics),
        );

        let report = post_process(&hook, &diagnostics, Path::new("model/pet.c"), &FileType::Model);

        assert_eq!(report.outcome, PostProcessOutcome::Failed);
        assert!(report.failed());
        assert_eq!(report.errors, ["`clang-format -i` failed with exit code 1"]);
    }

    #[test]
    fn test_without_command_is_skipped() {
        let diagnostics = Arc::new(Diagnostics::new());
        let hook = CPostProcessor::disabled(Arc::clone(&diagnostics));

        let report = post_process(&hook, &diagnostics, Path::new("model/pet.c"), &FileType::Model);

        assert_eq!(report.outcome, PostProcessOutcome::Skipped);
        assert!(report.command.is_none());
        assert!(!report.failed());
    }
}
