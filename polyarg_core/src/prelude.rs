//! Traits which, typically, may be imported without concern: `use polyarg::prelude::*`.

use crate::api::Schema;
use crate::convert::{Argument, ConvertError};
use crate::model::Arity;
use crate::parser::ParseError;
use crate::tokens::OptionKey;

/// A type that can be bound from a command line.
///
/// The schema is a plain data description: it may be written by hand, generated at build time, or assembled at runtime.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::prelude::*;
/// use polyarg::{Argument, ConvertError, OptionDescriptor, ParseError, Schema};
///
/// #[derive(Default)]
/// struct Greet {
///     name: String,
///     loud: bool,
/// }
///
/// impl CommandObject for Greet {
///     type Builder = Greet;
///
///     fn schema() -> Schema {
///         Schema::named("greet")
///             .option(OptionDescriptor::new::<String>("Name").short('n'))
///             .option(OptionDescriptor::new::<bool>("Loud"))
///     }
///
///     fn builder() -> Self::Builder {
///         Greet::default()
///     }
/// }
///
/// impl ObjectBuilder for Greet {
///     type Output = Greet;
///
///     fn assign(&mut self, property: &str, argument: &Argument<'_>) -> Result<(), ConvertError> {
///         match property {
///             "Name" => self.name = argument.convert()?,
///             "Loud" => self.loud = argument.convert()?,
///             _ => {}
///         }
///         Ok(())
///     }
///
///     fn commit(self) -> Result<Greet, ParseError> {
///         Ok(self)
///     }
/// }
/// ```
pub trait CommandObject: Sized {
    /// The construction strategy for this type.
    type Builder: ObjectBuilder<Output = Self>;

    /// The options, positionals and command name of this type.
    fn schema() -> Schema;

    /// Begin building an instance.
    fn builder() -> Self::Builder;
}

/// The construction capability used by binding.
///
/// Mutable targets write fields directly in `assign`; immutable targets buffer the values and construct in `commit`.
pub trait ObjectBuilder {
    /// The type under construction.
    type Output;

    /// Assign the argument bound to `property`.
    /// Called once per declared property, absent arguments included, in schema order (options first).
    fn assign(&mut self, property: &str, argument: &Argument<'_>) -> Result<(), ConvertError>;

    /// Finish construction.
    fn commit(self) -> Result<Self::Output, ParseError>;
}

/// Schema lookahead for the tokenizers: how many values the option `key` takes.
///
/// `None` means the option is unknown; tokenizers treat unknown options as taking a single value.
pub trait OptionLookup {
    /// The arity of the option, if it is known.
    fn arity(&self, key: OptionKey<'_>) -> Option<Arity>;
}

/// A lookup that knows no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl OptionLookup for NoLookup {
    fn arity(&self, _key: OptionKey<'_>) -> Option<Arity> {
        None
    }
}
