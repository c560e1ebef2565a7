//! `polyarg` is a command line parser for Rust that speaks several command line dialects.
//!
//! Programs are often driven from more than one place: a Unix shell, a Windows console, a PowerShell script, or a custom URL scheme handler.
//! Each of these comes with its own conventions for naming options and attaching their values.
//! `polyarg` tokenizes a command line in any one of these dialects, and binds the result onto the same typed object.
//! Specifically, `polyarg` attempts to prioritize the following design concerns:
//! * *Dialect fidelity*:
//! Each dialect accepts precisely the forms its users expect, and rejects the others with a precise error.
//! * *Type safe binding*:
//! The user declares the type of every property; conversion and its failures are handled by `polyarg`.
//! * *Absent vs. empty*:
//! An option that was not supplied is distinguished from one supplied without a value, so that defaults, flags and required properties behave predictably.
//! * *Explicit schemas*:
//! The shape of a bindable type is plain data ([`Schema`]), supplied through [`prelude::CommandObject`].
//! It may be written by hand, generated, or assembled at runtime.
//!
//! # Dialects
//! The dialect is chosen via [`ParsingOptions`].
//!
//! | Style | Long options | Short options | Values |
//! |---|---|---|---|
//! | [`ParsingStyle::Gnu`] | `--name` | `-n`, `-abc` | `--name=v`, `--name:v`, `--name v`, `-nv`, `-n v` |
//! | [`ParsingStyle::Posix`] | - | `-n`, `-abc` (boolean only) | `-n v` |
//! | [`ParsingStyle::DotNet`] | `--name`, `-name`, `/name` | `-n` | `-name:v`, `-name=v`, `-name v` |
//! | [`ParsingStyle::PowerShell`] | `-Name`, `/Name` | `-n` | `-Name v`, `-Name a,b` |
//! | [`ParsingStyle::Flexible`] | `--name`, `-name`, `/name` | `-n` | `-name:v`, `-name=v`, `-name v`, `-flag false` |
//!
//! A single `scheme://host/path?name=value#fragment` argument is parsed as a URL when the scheme is registered with [`ParsingOptions::url_scheme`].
//!
//! In every dialect (except URL) a literal `--` turns all the remaining arguments into positionals.
//! GNU and POSIX compare names case-sensitively; the other dialects do not, unless configured otherwise.
//!
//! # Usage
//! ```
//! use polyarg::prelude::*;
//! use polyarg::{Argument, CommandLine, ConvertError, OptionDescriptor, ParseError, ParsingOptions, PositionalDescriptor, Schema};
//!
//! #[derive(Debug, Default)]
//! struct CopyFiles {
//!     recursive: bool,
//!     sources: Vec<String>,
//!     target: String,
//! }
//!
//! impl CommandObject for CopyFiles {
//!     type Builder = CopyFiles;
//!
//!     fn schema() -> Schema {
//!         Schema::new()
//!             .option(OptionDescriptor::new::<bool>("Recursive").short('r'))
//!             .option(OptionDescriptor::new::<Vec<String>>("Source").short('s'))
//!             .positional(PositionalDescriptor::new::<String>("Target", 0).required())
//!     }
//!
//!     fn builder() -> Self::Builder {
//!         CopyFiles::default()
//!     }
//! }
//!
//! impl ObjectBuilder for CopyFiles {
//!     type Output = CopyFiles;
//!
//!     fn assign(&mut self, property: &str, argument: &Argument<'_>) -> Result<(), ConvertError> {
//!         match property {
//!             "Recursive" => self.recursive = argument.convert()?,
//!             "Source" => self.sources = argument.convert()?,
//!             "Target" => self.target = argument.convert()?,
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//!
//!     fn commit(self) -> Result<CopyFiles, ParseError> {
//!         Ok(self)
//!     }
//! }
//!
//! let gnu: CopyFiles = CommandLine::parse(["-r", "-s", "a", "--source=b", "out"], ParsingOptions::gnu())
//!     .unwrap()
//!     .bind()
//!     .unwrap();
//! let dotnet: CopyFiles = CommandLine::parse(["/recursive", "-source:a", "/Source:b", "out"], ParsingOptions::dotnet())
//!     .unwrap()
//!     .bind()
//!     .unwrap();
//!
//! for copy in [gnu, dotnet] {
//!     assert!(copy.recursive);
//!     assert_eq!(copy.sources, vec!["a", "b"]);
//!     assert_eq!(copy.target, "out");
//! }
//! ```
//!
//! # Binding
//! Binding happens in three passes:
//! 1. Every option collects the values of every supplied name it answers to (short name first, then the long name spellings of the dialect and the aliases).
//! Every positional takes its slice of the positional arguments (after the command name).
//! 2. Any supplied option or positional that nothing claimed is an error, unless [`ParsingOptions::ignore_unknown_arguments`] is set.
//! 3. Each property is converted via [`FromArgument`] and handed to the [`prelude::ObjectBuilder`].
//! A required property that was not supplied fails with [`ParseError::RequiredPropertyNotAssigned`].
//!
//! # Commands
//! A [`Schema`] may be named by one or more space separated levels (ex: `"remote add"`).
//! A [`CommandRegistry`] dispatches a [`CommandLine`] to the handler of the command with the longest matching name, falling back to the unnamed (default) command.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for tokenization, command matching and binding.
pub use polyarg_core::*;
