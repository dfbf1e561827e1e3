mod completions;
mod inspect;
mod name;
mod post_process;

use std::path::Path;

use cgen_config::GeneratorConfig;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use inspect::InspectCommand;
use name::NameCommand;
use post_process::PostProcessCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cgen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `cgen.toml` if given, otherwise use the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> GeneratorConfig {
    match path {
        Some(path) => GeneratorConfig::from_file(path).unwrap_or_exit(),
        None => GeneratorConfig::default(),
    }
}

#[derive(Parser)]
#[command(name = "cgen")]
#[command(version)]
#[command(about = "Resolve OpenAPI schemas into C client names, types and files")]
pub(crate) struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Name(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::PostProcess(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a raw name as a C identifier, file name or include
    Name(NameCommand),

    /// Show the models, APIs and files resolved from an API description
    Inspect(InspectCommand),

    /// Run the C_POST_PROCESS_FILE command on one generated file
    PostProcess(PostProcessCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_name_command() {
        let cli = Cli::try_parse_from([
            "cgen",
            "--verbose",
            "name",
            "enum-var-name",
            "-1",
            "--datatype",
            "Integer",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Name(_)));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["cgen", "name", "struct-field", "x"]).is_err());
    }
}
