mod core;
mod registry;

pub use self::core::{match_command, CommandDescriptor};
pub use registry::{CommandRegistry, RunError};
