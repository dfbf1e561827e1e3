//! The C post-generation hook.

use std::{path::Path, sync::Arc};

use cgen_codegen::{
    Diagnostics,
    generation::{CommandRunner, PostProcess, PostProcessCommand, PostProcessOutcome, SystemRunner},
};
use cgen_core::FileType;

/// Environment variable holding the external formatter command line.
pub const POST_PROCESS_ENV: &str = "C_POST_PROCESS_FILE";

/// File kinds the formatter is run on.
fn is_formatted(file_type: &FileType) -> bool {
    matches!(
        file_type,
        FileType::SupportingFile
            | FileType::Model
            | FileType::ModelTest
            | FileType::Api
            | FileType::ApiTest
    )
}

/// Extensions the formatter is run on.
const EXTENSIONS: &[&str] = &["c", "h"];

/// Runs an external formatter on generated C sources and headers.
///
/// Without a command every call is a no-op. The command is resolved once,
/// usually from [`POST_PROCESS_ENV`], and injected.
pub struct CPostProcessor {
    command: Option<PostProcessCommand>,
    runner: Box<dyn CommandRunner>,
    diagnostics: Arc<Diagnostics>,
}

impl CPostProcessor {
    pub fn new(
        command: Option<PostProcessCommand>,
        runner: Box<dyn CommandRunner>,
        diagnostics: Arc<Diagnostics>,
    ) -> Self {
        Self {
            command,
            runner,
            diagnostics,
        }
    }

    /// Create a hook that spawns the command configured in [`POST_PROCESS_ENV`].
    pub fn from_env(diagnostics: Arc<Diagnostics>) -> Self {
        let command = PostProcessCommand::from_env(POST_PROCESS_ENV);
        match &command {
            Some(command) => tracing::debug!(%command, "post-processing generated files"),
            None => tracing::debug!("{} not set, skipping post-processing", POST_PROCESS_ENV),
        }
        Self::new(command, Box::new(SystemRunner), diagnostics)
    }

    /// A hook that never runs anything.
    pub fn disabled(diagnostics: Arc<Diagnostics>) -> Self {
        Self::new(None, Box::new(SystemRunner), diagnostics)
    }

    pub fn command(&self) -> Option<&PostProcessCommand> {
        self.command.as_ref()
    }

    /// Check whether a file of this kind and path is handed to the formatter.
    pub fn accepts(path: &Path, file_type: &FileType) -> bool {
        is_formatted(file_type)
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.contains(&ext))
    }
}

impl PostProcess for CPostProcessor {
    fn after_file_written(&self, path: &Path, file_type: &FileType) -> PostProcessOutcome {
        let Some(command) = &self.command else {
            return PostProcessOutcome::Skipped;
        };
        if !Self::accepts(path, file_type) {
            return PostProcessOutcome::Skipped;
        }
        command.run(self.runner.as_ref(), path, &self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_accepts() {
        assert!(CPostProcessor::accepts(Path::new("model/pet.h"), &FileType::Model));
        assert!(CPostProcessor::accepts(Path::new("api/PetAPI.c"), &FileType::Api));
        assert!(CPostProcessor::accepts(
            Path::new("unit-test/test-pet.c"),
            &FileType::ModelTest
        ));
        assert!(CPostProcessor::accepts(
            Path::new("src/list.c"),
            &FileType::SupportingFile
        ));

        assert!(!CPostProcessor::accepts(Path::new("README.md"), &FileType::SupportingFile));
        assert!(!CPostProcessor::accepts(Path::new("docs/pet.h"), &FileType::ModelDoc));
        assert!(!CPostProcessor::accepts(
            Path::new("model/pet.h"),
            &FileType::Other("unsupported".into())
        ));
        assert!(!CPostProcessor::accepts(Path::new("model/pet"), &FileType::Model));
    }

    #[test]
    fn test_disabled_hook_is_noop() {
        let hook = CPostProcessor::disabled(Arc::new(Diagnostics::new()));
        let outcome = hook.after_file_written(&PathBuf::from("model/pet.c"), &FileType::Model);
        assert_eq!(outcome, PostProcessOutcome::Skipped);
    }
}
