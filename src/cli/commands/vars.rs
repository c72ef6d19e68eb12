//! Vars command implementation.
//!
//! The `skiff vars` command lists the environment variables a deployment
//! file references, without resolving anything. With `--missing` it only
//! lists variables currently unset in the process environment, which makes
//! it usable as a pre-deploy check.

use console::style;

use crate::cli::args::VarsArgs;
use crate::config::{load_config_value, referenced_variables, VarContext};
use crate::error::{Result, SkiffError};

use super::dispatcher::{Command, CommandResult};

/// The vars command implementation.
pub struct VarsCommand {
    args: VarsArgs,
}

impl VarsCommand {
    /// Create a new vars command.
    pub fn new(args: VarsArgs) -> Self {
        Self { args }
    }
}

impl Command for VarsCommand {
    fn execute(&self) -> Result<CommandResult> {
        let tree = match load_config_value(&self.args.file) {
            Ok(t) => t,
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
        let vars = VarContext::from_process_env();

        let mut missing_any = false;
        for name in referenced_variables(&tree) {
            let is_set = vars.get(&name).is_some();
            if self.args.missing {
                if !is_set {
                    missing_any = true;
                    println!("{name}");
                }
            } else {
                println!("{name}");
            }
        }

        if self.args.missing && missing_any {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
