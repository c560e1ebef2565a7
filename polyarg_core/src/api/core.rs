use crate::api::schema::{Schema, SchemaLookup};
use crate::model::ParsingStyle;
use crate::parser::{Binding, ParseError};
use crate::prelude::{CommandObject, NoLookup};
use crate::tokens::{join_command_line, split_command_line, tokenize, Dialect, TokenSet};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configuration of a parse.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::{ParsingOptions, ParsingStyle};
///
/// let options = ParsingOptions::gnu()
///     .case_sensitive(false)
///     .url_scheme("myapp");
/// assert_eq!(options.style(), ParsingStyle::Gnu);
/// assert!(!options.is_case_sensitive());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsingOptions {
    style: ParsingStyle,
    case_sensitive: Option<bool>,
    url_schemes: Vec<String>,
    ignore_unknown_arguments: bool,
}

impl ParsingOptions {
    /// Options for the provided style.
    pub fn new(style: ParsingStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Options for the auto-detecting style.
    pub fn flexible() -> Self {
        Self::new(ParsingStyle::Flexible)
    }

    /// Options for the GNU style.
    pub fn gnu() -> Self {
        Self::new(ParsingStyle::Gnu)
    }

    /// Options for the POSIX style.
    pub fn posix() -> Self {
        Self::new(ParsingStyle::Posix)
    }

    /// Options for the .NET style.
    pub fn dotnet() -> Self {
        Self::new(ParsingStyle::DotNet)
    }

    /// Options for the PowerShell style.
    pub fn powershell() -> Self {
        Self::new(ParsingStyle::PowerShell)
    }

    /// Override the style's case-sensitivity for option and command names.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Parse a single `scheme://..` argument with the URL dialect.
    pub fn url_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.url_schemes.push(scheme.into());
        self
    }

    /// Ignore supplied options and positionals that the schema does not declare.
    pub fn ignore_unknown_arguments(mut self) -> Self {
        self.ignore_unknown_arguments = true;
        self
    }

    /// The style.
    pub fn style(&self) -> ParsingStyle {
        self.style
    }

    /// Whether names are compared case-sensitively in the style.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
            .unwrap_or_else(|| self.style.is_case_sensitive())
    }

    /// The schemes that select the URL dialect.
    pub fn url_schemes(&self) -> &[String] {
        &self.url_schemes
    }

    /// Whether undeclared arguments are ignored.
    pub fn ignores_unknown_arguments(&self) -> bool {
        self.ignore_unknown_arguments
    }

    pub(crate) fn is_case_sensitive_in(&self, dialect: &Dialect) -> bool {
        match dialect {
            Dialect::Style(_) => self.is_case_sensitive(),
            Dialect::Url(_) => self.case_sensitive.unwrap_or(false),
        }
    }
}

/// A tokenized command line, ready to be bound to any number of schemas.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::{CommandLine, ParsingOptions};
///
/// let command_line = CommandLine::parse_line(r#"remote add --name "my origin""#, ParsingOptions::gnu()).unwrap();
/// assert_eq!(command_line.token_set().guessed_command_name(), Some("remote"));
/// assert_eq!(command_line.to_string(), r#"remote add --name "my origin""#);
/// ```
#[derive(Debug, Clone)]
pub struct CommandLine {
    arguments: Vec<String>,
    options: ParsingOptions,
    dialect: Dialect,
    token_set: TokenSet,
}

impl CommandLine {
    /// Tokenize an argument vector (without the program name).
    pub fn parse<I, S>(arguments: I, options: ParsingOptions) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
        let dialect = Dialect::detect(&arguments, options.style(), options.url_schemes());
        let token_set = tokenize(
            &arguments,
            &dialect,
            options.is_case_sensitive_in(&dialect),
            &NoLookup,
        )?;

        Ok(Self {
            arguments,
            options,
            dialect,
            token_set,
        })
    }

    /// Tokenize a single, quote-aware, command line string.
    pub fn parse_line(line: &str, options: ParsingOptions) -> Result<Self, ParseError> {
        Self::parse(split_command_line(line), options)
    }

    /// Tokenize the arguments of this process.
    pub fn from_env(options: ParsingOptions) -> Result<Self, ParseError> {
        Self::parse(std::env::args().skip(1), options)
    }

    /// The raw arguments.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The configuration of this parse.
    pub fn options(&self) -> &ParsingOptions {
        &self.options
    }

    /// The schema independent tokenization (every unknown option takes a single value).
    pub fn token_set(&self) -> &TokenSet {
        &self.token_set
    }

    /// The URL scheme, when the URL dialect applied.
    pub fn url_scheme(&self) -> Option<&str> {
        self.token_set.url_scheme()
    }

    pub(crate) fn is_case_sensitive(&self) -> bool {
        self.options.is_case_sensitive_in(&self.dialect)
    }

    /// Bind this command line to `T`.
    ///
    /// The arguments are re-tokenized with `T`'s schema as lookahead, and the command name levels (if they match) are skipped.
    pub fn bind<T: CommandObject>(&self) -> Result<T, ParseError> {
        self.bind_schema(&T::schema())
    }

    pub(crate) fn bind_schema<T: CommandObject>(&self, schema: &Schema) -> Result<T, ParseError> {
        let case_sensitive = self.is_case_sensitive();
        let lookup = SchemaLookup::new(schema, &self.dialect, case_sensitive);
        // Keep every spelling distinct; each option views the names under its own case-sensitivity.
        let token_set = tokenize(&self.arguments, &self.dialect, true, &lookup)?;
        let levels = if schema
            .command()
            .matches(token_set.leading_positionals(), case_sensitive)
        {
            schema.command().levels().len()
        } else {
            0
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Binding '{}' with {levels} command levels in the {} dialect.",
                schema.command().name(),
                self.dialect
            );
        }

        Binding {
            token_set: &token_set,
            schema,
            levels,
            dialect: &self.dialect,
            case_sensitive,
            ignore_unknown_arguments: self.options.ignores_unknown_arguments(),
        }
        .bind()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_command_line(&self.arguments))
    }
}
