use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;

use crate::api::CommandLine;
use crate::matcher::core::{match_command, CommandDescriptor};
use crate::parser::{ConfigError, ParseError};
use crate::prelude::CommandObject;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A failure to dispatch a command line to its handler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    /// No registered command matches, and there is no default command.
    #[error("No command registered for {0:?}.")]
    NoHandler(Option<String>),

    /// The matched command failed to bind.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

type Handler<R> = Box<dyn Fn(&CommandLine) -> Result<R, ParseError> + Send + Sync>;

struct Registration<R> {
    command: CommandDescriptor,
    handler: Handler<R>,
}

/// Typed handlers for a set of commands, selected by command name.
///
/// Registration takes `&self` and may happen from any number of threads.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::prelude::*;
/// use polyarg::{Argument, CommandLine, CommandRegistry, ConvertError, ParseError, ParsingOptions, PositionalDescriptor, Schema};
///
/// #[derive(Default)]
/// struct Echo {
///     words: Vec<String>,
/// }
///
/// impl CommandObject for Echo {
///     type Builder = Echo;
///
///     fn schema() -> Schema {
///         Schema::named("echo").positional(PositionalDescriptor::new::<Vec<String>>("Words", 0))
///     }
///
///     fn builder() -> Self::Builder {
///         Echo::default()
///     }
/// }
///
/// impl ObjectBuilder for Echo {
///     type Output = Echo;
///
///     fn assign(&mut self, property: &str, argument: &Argument<'_>) -> Result<(), ConvertError> {
///         if property == "Words" {
///             self.words = argument.convert()?;
///         }
///         Ok(())
///     }
///
///     fn commit(self) -> Result<Echo, ParseError> {
///         Ok(self)
///     }
/// }
///
/// let registry: CommandRegistry<String> = CommandRegistry::new();
/// registry.register(|echo: Echo| echo.words.join(" ")).unwrap();
///
/// let command_line = CommandLine::parse(["echo", "hello", "world"], ParsingOptions::gnu()).unwrap();
/// assert_eq!(registry.run(&command_line).unwrap(), "hello world");
/// ```
pub struct CommandRegistry<R> {
    registrations: DashMap<String, Arc<Registration<R>>>,
}

impl<R> std::fmt::Debug for CommandRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands())
            .finish()
    }
}

impl<R> Default for CommandRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CommandRegistry<R> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            registrations: DashMap::new(),
        }
    }

    /// Register `handler` for `T`'s command.
    ///
    /// Fails if `T`'s schema is invalid, or if a command with the same name (compared case-insensitively) is already registered.
    pub fn register<T, F>(&self, handler: F) -> Result<(), ConfigError>
    where
        T: CommandObject + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
        R: 'static,
    {
        let schema = T::schema();
        schema.validate()?;
        let command = schema.command().clone();
        let name = command.name();

        match self.registrations.entry(name.to_lowercase()) {
            Entry::Occupied(_) => Err(ConfigError(format!(
                "Cannot duplicate the command '{name}'."
            ))),
            Entry::Vacant(vacant) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Registering the command '{name}'.");
                }

                vacant.insert(Arc::new(Registration {
                    command,
                    handler: Box::new(move |command_line: &CommandLine| {
                        command_line.bind_schema::<T>(&schema).map(&handler)
                    }),
                }));
                Ok(())
            }
        }
    }

    /// The registered command names.
    pub fn commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .registrations
            .iter()
            .map(|registration| registration.command.name())
            .collect();
        names.sort();
        names
    }

    /// Bind `command_line` to the matching command and invoke its handler.
    pub fn run(&self, command_line: &CommandLine) -> Result<R, RunError> {
        // Snapshot, so that no shard lock is held while the handler runs.
        let registrations: Vec<Arc<Registration<R>>> = self
            .registrations
            .iter()
            .map(|registration| Arc::clone(registration.value()))
            .collect();
        let matched = match_command(
            command_line.token_set().leading_positionals(),
            registrations.iter().map(|registration| &registration.command),
            command_line.is_case_sensitive(),
        );

        match matched {
            Some(command) => {
                let registration = registrations
                    .iter()
                    .find(|registration| std::ptr::eq(&registration.command, command))
                    .unwrap_or_else(|| {
                        unreachable!("internal error - matched command must be registered")
                    });
                Ok((registration.handler)(command_line)?)
            }
            None => Err(RunError::NoHandler(
                command_line
                    .token_set()
                    .guessed_command_name()
                    .map(String::from),
            )),
        }
    }
}
