use std::collections::HashSet;

use crate::convert::FromArgument;
use crate::matcher::CommandDescriptor;
use crate::model::{Arity, MultiValueHandling, ParsingStyle, ValueKind};
use crate::naming::{to_camel_case, to_kebab_case, to_pascal_case};
use crate::parser::ConfigError;
use crate::prelude::OptionLookup;
use crate::tokens::{chars_equal, names_equal, Dialect, OptionKey};

/// A named option of a [`Schema`].
///
/// The long name defaults to the property name; in every dialect it is matched by the spellings conventional for that dialect.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::OptionDescriptor;
///
/// let option = OptionDescriptor::new::<Vec<String>>("IncludePath")
///     .short('I')
///     .alias("include");
/// assert_eq!(option.long_name(), "IncludePath");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    property: String,
    short: Option<char>,
    long: String,
    aliases: Vec<String>,
    case_sensitive: Option<bool>,
    exact_spelling: bool,
    kind: ValueKind,
    required: bool,
    multi_value: MultiValueHandling,
}

impl OptionDescriptor {
    /// An option binding the property `property` of type `T`.
    pub fn new<T: FromArgument>(property: impl Into<String>) -> Self {
        let property = property.into();

        Self {
            long: property.clone(),
            property,
            short: None,
            aliases: Vec::default(),
            case_sensitive: None,
            exact_spelling: false,
            kind: T::KIND,
            required: false,
            multi_value: MultiValueHandling::default(),
        }
    }

    /// Set the single character name (ex: `-o`).
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Replace the long name.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    /// Add another long name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Override the parser's case-sensitivity for this option.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Match the long name and aliases precisely as written, without kebab/Pascal/camel spellings.
    pub fn exact_spelling(mut self) -> Self {
        self.exact_spelling = true;
        self
    }

    /// Fail the binding when this option is not supplied.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// How multiple values reduce into a `String` property.
    pub fn multi_value(mut self, multi_value: MultiValueHandling) -> Self {
        self.multi_value = multi_value;
        self
    }

    /// The bound property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The single character name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long name.
    pub fn long_name(&self) -> &str {
        &self.long
    }

    /// The additional long names.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The case-sensitivity override, if any.
    pub fn is_case_sensitive(&self) -> Option<bool> {
        self.case_sensitive
    }

    /// The semantic shape of the property.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the option must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// How multiple values reduce into a `String` property.
    pub fn multi_value_handling(&self) -> MultiValueHandling {
        self.multi_value
    }

    /// Every spelling this option answers to in the `dialect`.
    pub(crate) fn candidate_names(&self, dialect: &Dialect) -> Vec<String> {
        let mut names: Vec<String> = Vec::default();

        for base in std::iter::once(&self.long).chain(self.aliases.iter()) {
            let spellings = if self.exact_spelling {
                vec![base.clone()]
            } else {
                match dialect {
                    Dialect::Style(ParsingStyle::Gnu) | Dialect::Style(ParsingStyle::Posix) => {
                        vec![to_kebab_case(base, true, true)]
                    }
                    Dialect::Style(ParsingStyle::PowerShell) => {
                        vec![to_pascal_case(base), to_camel_case(base)]
                    }
                    Dialect::Style(ParsingStyle::Flexible)
                    | Dialect::Style(ParsingStyle::DotNet)
                    | Dialect::Url(_) => vec![
                        to_kebab_case(base, true, true),
                        to_pascal_case(base),
                        to_camel_case(base),
                    ],
                }
            };

            for spelling in spellings {
                if !spelling.is_empty() && !names.contains(&spelling) {
                    names.push(spelling);
                }
            }
        }

        names
    }

    /// The single character names: the short name, then any one character spelling of the long names.
    pub(crate) fn short_names(&self, dialect: &Dialect) -> Vec<char> {
        let mut shorts: Vec<char> = self.short.into_iter().collect();

        for name in self.candidate_names(dialect) {
            if let OptionKey::Short(short) = OptionKey::of(&name) {
                if !shorts.contains(&short) {
                    shorts.push(short);
                }
            }
        }

        shorts
    }

    /// The multiple character spellings of the long names.
    pub(crate) fn long_names(&self, dialect: &Dialect) -> Vec<String> {
        self.candidate_names(dialect)
            .into_iter()
            .filter(|name| matches!(OptionKey::of(name), OptionKey::Long(_)))
            .collect()
    }
}

/// A positional argument slot of a [`Schema`]: `length` values starting at `index`, counted after the command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalDescriptor {
    property: String,
    index: usize,
    length: usize,
    kind: ValueKind,
    required: bool,
    multi_value: MultiValueHandling,
}

impl PositionalDescriptor {
    /// A positional binding the property `property` of type `T` at `index`.
    /// Lists take every remaining value; anything else takes one.
    pub fn new<T: FromArgument>(property: impl Into<String>, index: usize) -> Self {
        let length = match T::KIND {
            ValueKind::List => usize::MAX,
            _ => 1,
        };

        Self {
            property: property.into(),
            index,
            length,
            kind: T::KIND,
            required: false,
            multi_value: MultiValueHandling::default(),
        }
    }

    /// Take (at most) `length` values.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Fail the binding when this positional is not supplied.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// How multiple values reduce into a `String` property.
    pub fn multi_value(mut self, multi_value: MultiValueHandling) -> Self {
        self.multi_value = multi_value;
        self
    }

    /// The bound property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The position of the first value.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The maximum number of values.
    pub fn max_length(&self) -> usize {
        self.length
    }

    /// The semantic shape of the property.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the positional must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// How multiple values reduce into a `String` property.
    pub fn multi_value_handling(&self) -> MultiValueHandling {
        self.multi_value
    }

    /// The values this slot covers, clamped to the available values; `None` when it covers nothing.
    pub(crate) fn slice<'a>(&self, positionals: &'a [String]) -> Option<&'a [String]> {
        if self.index >= positionals.len() || self.length == 0 {
            None
        } else {
            let end = self.index.saturating_add(self.length).min(positionals.len());
            Some(&positionals[self.index..end])
        }
    }

    fn end(&self) -> usize {
        self.index.saturating_add(self.length)
    }
}

/// The declared shape of a bindable type: its command name, options and positionals.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::{OptionDescriptor, PositionalDescriptor, Schema};
///
/// let schema = Schema::named("remote add")
///     .option(OptionDescriptor::new::<bool>("Fetch").short('f'))
///     .positional(PositionalDescriptor::new::<String>("Name", 0).required())
///     .positional(PositionalDescriptor::new::<String>("Url", 1).required());
/// assert_eq!(schema.command().name(), "remote add");
/// assert!(schema.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    command: CommandDescriptor,
    options: Vec<OptionDescriptor>,
    positionals: Vec<PositionalDescriptor>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    /// The schema of the default (no name) command.
    pub fn new() -> Self {
        Self {
            command: CommandDescriptor::default_command(),
            options: Vec::default(),
            positionals: Vec::default(),
        }
    }

    /// The schema of a command named by space separated levels.
    pub fn named(name: &str) -> Self {
        Self {
            command: CommandDescriptor::named(name),
            ..Self::new()
        }
    }

    /// Override the parser's case-sensitivity for the command name.
    pub fn command_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.command = self.command.case_sensitive(case_sensitive);
        self
    }

    /// Add an option.
    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    /// Add a positional.
    pub fn positional(mut self, positional: PositionalDescriptor) -> Self {
        self.positionals.push(positional);
        self
    }

    /// The command name.
    pub fn command(&self) -> &CommandDescriptor {
        &self.command
    }

    /// The options, in declaration order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// The positionals, in declaration order.
    pub fn positionals(&self) -> &[PositionalDescriptor] {
        &self.positionals
    }

    /// Check the schema is unambiguous: no duplicate properties, names or short names, and no overlapping positionals.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut properties: HashSet<&str> = HashSet::default();
        let mut shorts: Vec<char> = Vec::default();
        let mut longs: Vec<&str> = Vec::default();

        let declared = self
            .options
            .iter()
            .map(OptionDescriptor::property)
            .chain(self.positionals.iter().map(PositionalDescriptor::property));

        for property in declared {
            if property.is_empty() {
                return Err(ConfigError("Properties must have a name.".to_string()));
            }

            if !properties.insert(property) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the property '{property}'."
                )));
            }
        }

        for option in &self.options {
            if let Some(short) = option.short {
                if shorts.iter().any(|s| chars_equal(*s, short, true)) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the short option '{short}'."
                    )));
                }

                shorts.push(short);
            }

            for name in std::iter::once(&option.long).chain(option.aliases.iter()) {
                if name.is_empty() {
                    return Err(ConfigError(format!(
                        "Option '{}' has an empty name.",
                        option.property
                    )));
                }

                if longs.iter().any(|l| names_equal(l, name, false)) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the option '{name}'."
                    )));
                }

                longs.push(name);
            }
        }

        for (i, a) in self.positionals.iter().enumerate() {
            for b in &self.positionals[i + 1..] {
                if a.index < b.end() && b.index < a.end() {
                    return Err(ConfigError(format!(
                        "Positionals '{}' and '{}' overlap.",
                        a.property, b.property
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Tokenizer lookahead backed by a [`Schema`].
pub(crate) struct SchemaLookup<'s> {
    schema: &'s Schema,
    dialect: &'s Dialect,
    case_sensitive: bool,
}

impl<'s> SchemaLookup<'s> {
    pub(crate) fn new(schema: &'s Schema, dialect: &'s Dialect, case_sensitive: bool) -> Self {
        Self {
            schema,
            dialect,
            case_sensitive,
        }
    }
}

impl<'s> OptionLookup for SchemaLookup<'s> {
    fn arity(&self, key: OptionKey<'_>) -> Option<Arity> {
        self.schema
            .options
            .iter()
            .find(|option| {
                let case_sensitive = option.case_sensitive.unwrap_or(self.case_sensitive);

                match key {
                    OptionKey::Short(short) => option
                        .short_names(self.dialect)
                        .into_iter()
                        .any(|s| chars_equal(s, short, case_sensitive)),
                    OptionKey::Long(name) => option
                        .long_names(self.dialect)
                        .iter()
                        .any(|l| names_equal(l, name, case_sensitive)),
                }
            })
            .map(|option| option.kind.arity())
    }
}
