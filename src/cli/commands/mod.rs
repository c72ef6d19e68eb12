//! Command implementations.

pub mod completions;
pub mod dispatcher;
pub mod environments;
pub mod show;
pub mod vars;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
