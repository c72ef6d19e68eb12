//! Environments command implementation.
//!
//! The `skiff environments` command lists the environment names defined in
//! a deployment file, in source file order.

use console::style;

use crate::cli::args::EnvironmentsArgs;
use crate::config::load_deployment_config;
use crate::error::{Result, SkiffError};

use super::dispatcher::{Command, CommandResult};

/// The environments command implementation.
pub struct EnvironmentsCommand {
    args: EnvironmentsArgs,
    quiet: bool,
}

impl EnvironmentsCommand {
    /// Create a new environments command.
    pub fn new(args: EnvironmentsArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }
}

impl Command for EnvironmentsCommand {
    fn execute(&self) -> Result<CommandResult> {
        let config = match load_deployment_config(&self.args.file) {
            Ok(c) => c,
            Err(SkiffError::ConfigNotFound { path }) => {
                eprintln!(
                    "{} deployment file not found: {}",
                    style("error:").red().bold(),
                    path.display()
                );
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if !self.quiet {
            println!("{}", style(format!("# {}", self.args.file.display())).dim());
        }
        for name in config.environment_names() {
            println!("{name}");
        }

        Ok(CommandResult::success())
    }
}
