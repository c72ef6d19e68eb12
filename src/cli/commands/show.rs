//! Show command implementation.
//!
//! The `skiff show` command prints one fully resolved environment.

use console::style;

use crate::cli::args::ShowArgs;
use crate::config::load_deployment_config;
use crate::error::{Result, SkiffError};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }
}

impl Command for ShowCommand {
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
        let environment = config.environment(&self.args.environment)?;

        if self.args.yaml {
            let yaml =
                serde_yaml::to_string(environment).map_err(|e| SkiffError::Other(e.into()))?;
            print!("{yaml}");
        } else {
            let json = serde_json::to_string_pretty(environment)
                .map_err(|e| SkiffError::Other(e.into()))?;
            println!("{json}");
        }

        Ok(CommandResult::success())
    }
}
