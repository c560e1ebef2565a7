mod core;
mod schema;

pub use self::core::{CommandLine, ParsingOptions};
pub use schema::{OptionDescriptor, PositionalDescriptor, Schema};
