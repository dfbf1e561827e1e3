//! Post-generation hook plumbing.
//!
//! A language generator decides *which* files to hand to an external command;
//! this module owns how that command is parsed, spawned and reported.

use std::{io, path::Path, process::Command};

use cgen_core::FileType;

use crate::{Diagnostic, Diagnostics};

/// Spawns a program and waits for it to exit.
///
/// Abstracted so tests can count invocations without touching the system.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// Returns the exit code, or `None` if the process was terminated by a
    /// signal.
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        Command::new(program)
            .args(args)
            .status()
            .map(|status| status.code())
    }
}

/// What happened to one file after it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcessOutcome {
    /// No command is configured, or the file is not eligible.
    Skipped,
    /// The command ran and exited with status 0.
    Succeeded,
    /// The command could not be spawned or exited unsuccessfully.
    Failed,
}

/// The post-generation hook a generator calls after each file it writes.
pub trait PostProcess {
    /// Process one freshly written file.
    ///
    /// Failures are recorded as diagnostics and never abort generation.
    fn after_file_written(&self, path: &Path, file_type: &FileType) -> PostProcessOutcome;
}

/// An external command line, split on whitespace.
///
/// The file to process is appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PostProcessCommand {
    /// Parse a command line. Returns `None` for a blank one.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Read and parse a command line from an environment variable.
    ///
    /// An unset, non-unicode or blank variable yields `None`.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().as_deref().and_then(Self::parse)
    }

    /// Arguments for processing `file`.
    pub fn args_for(&self, file: &Path) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(file.display().to_string());
        args
    }

    /// Run the command against `file` and record the result.
    ///
    /// Runs synchronously; the call returns once the command has exited.
    pub fn run(
        &self,
        runner: &dyn CommandRunner,
        file: &Path,
        diagnostics: &Diagnostics,
    ) -> PostProcessOutcome {
        let location = file.display().to_string();
        match runner.run(&self.program, &self.args_for(file)) {
            Ok(Some(0)) => {
                tracing::info!(file = %location, command = %self, "post-processed file");
                PostProcessOutcome::Succeeded
            }
            Ok(code) => {
                let status = match code {
                    Some(code) => format!("exit code {code}"),
                    None => "a signal".to_string(),
                };
                diagnostics.push(
                    Diagnostic::error(
                        "post-process",
                        format!("`{self}` failed with {status}"),
                    )
                    .at(location),
                );
                PostProcessOutcome::Failed
            }
            Err(err) => {
                diagnostics.push(
                    Diagnostic::error(
                        "post-process",
                        format!("could not run `{}`: {err}", self.program),
                    )
                    .at(location),
                );
                PostProcessOutcome::Failed
            }
        }
    }
}

impl std::fmt::Display for PostProcessCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_parse_splits_on_whitespace() {
        let cmd = PostProcessCommand::parse("  clang-format  -i\t--style=file ").unwrap();
        assert_eq!(cmd.program, "clang-format");
        assert_eq!(cmd.args, ["-i", "--style=file"]);
        assert_eq!(cmd.to_string(), "clang-format -i --style=file");
    }

    #[test]
    fn test_parse_blank() {
        assert!(PostProcessCommand::parse("").is_none());
        assert!(PostProcessCommand::parse(" \t ").is_none());
    }

    #[test]
    fn test_file_is_last_argument() {
        let cmd = PostProcessCommand::parse("clang-format -i").unwrap();
        assert_eq!(
            cmd.args_for(Path::new("out/model/pet.c")),
            ["-i", "out/model/pet.c"]
        );
    }

    #[test]
    fn test_run_success() {
        let runner = RecordingRunner::succeeding();
        let diagnostics = Diagnostics::new();
        let cmd = PostProcessCommand::parse("indent").unwrap();

        let outcome = cmd.run(&runner, &PathBuf::from("api/PetAPI.c"), &diagnostics);

        assert_eq!(outcome, PostProcessOutcome::Succeeded);
        assert_eq!(
            runner.calls(),
            [("indent".to_string(), vec!["api/PetAPI.c".to_string()])]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_run_nonzero_exit_is_error_diagnostic() {
        let runner = RecordingRunner::exiting(2);
        let diagnostics = Diagnostics::new();
        let cmd = PostProcessCommand::parse("indent").unwrap();

        let outcome = cmd.run(&runner, Path::new("model/pet.h"), &diagnostics);

        assert_eq!(outcome, PostProcessOutcome::Failed);
        let recorded = diagnostics.snapshot();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].severity.is_error());
        assert_eq!(recorded[0].message, "`indent` failed with exit code 2");
        assert_eq!(recorded[0].location.as_deref(), Some("model/pet.h"));
    }

    #[test]
    fn test_run_spawn_failure_is_error_diagnostic() {
        let runner = RecordingRunner::unspawnable();
        let diagnostics = Diagnostics::new();
        let cmd = PostProcessCommand::parse("missing-formatter -i").unwrap();

        let outcome = cmd.run(&runner, Path::new("model/pet.c"), &diagnostics);

        assert_eq!(outcome, PostProcessOutcome::Failed);
        assert_eq!(runner.call_count(), 1);
        assert!(diagnostics.snapshot()[0]
            .message
            .starts_with("could not run `missing-formatter`"));
    }
}
