mod base;
mod binder;

pub use base::{ConfigError, ParseError, ParseErrorKind};
pub(crate) use binder::Binding;
