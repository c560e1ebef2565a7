use thiserror::Error;

use crate::convert::ConvertError;

/// An error in the declared schema or the command registry, detected before any input is parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The closed set of parse failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A malformed option token.
    OptionalArgumentParse,
    /// A supplied option that nothing in the schema claims.
    OptionalArgumentNotFound,
    /// The option separator is not part of the dialect.
    OptionalArgumentSeparatorNotSupported,
    /// A positional token that no positional slot covers.
    PositionalArgumentNotFound,
    /// A combined short option cluster containing a non-boolean member.
    ArgumentCombinationIsNotBoolean,
    /// A value that cannot be converted to its declared type.
    InvalidValue,
    /// A required property that was never assigned.
    RequiredPropertyNotAssigned,
}

/// A failure to tokenize or bind a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A malformed option token.
    #[error("Parse error: cannot parse '{token}' (argument {index}): {reason}.")]
    OptionalArgumentParse {
        /// The position of the token in the argument vector.
        index: usize,
        /// The raw token.
        token: String,
        /// What is wrong with the token.
        reason: String,
    },

    /// A supplied option that nothing in the schema claims.
    #[error("Parse error: option '{name}' does not exist.")]
    OptionalArgumentNotFound {
        /// The option name as supplied.
        name: String,
    },

    /// The option separator is not part of the dialect.
    #[error("Parse error: the {style} style does not support the separator '{separator}' in '{token}' (argument {index}).")]
    OptionalArgumentSeparatorNotSupported {
        /// The position of the token in the argument vector.
        index: usize,
        /// The raw token.
        token: String,
        /// The rejected separator.
        separator: String,
        /// The dialect in use.
        style: String,
    },

    /// A positional token that no positional slot covers.
    #[error("Parse error: no positional argument for '{value}' (position {position}).")]
    PositionalArgumentNotFound {
        /// The position amongst the positional arguments.
        position: usize,
        /// The raw value.
        value: String,
    },

    /// A combined short option cluster containing a non-boolean member.
    #[error("Parse error: cannot combine the non-boolean option '{option}' in '{token}' (argument {index}).")]
    ArgumentCombinationIsNotBoolean {
        /// The position of the token in the argument vector.
        index: usize,
        /// The raw token.
        token: String,
        /// The offending member of the cluster.
        option: char,
    },

    /// A value that cannot be converted to its declared type.
    #[error("Parse error: invalid value '{value}' for '{property}' (expected {type_name}).")]
    InvalidValue {
        /// The property the value was bound to.
        property: String,
        /// The offending text.
        value: String,
        /// The target type.
        type_name: String,
    },

    /// A required property that was never assigned.
    #[error("Parse error: required property '{0}' was not assigned.")]
    RequiredPropertyNotAssigned(String),
}

impl ParseError {
    /// The category of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::OptionalArgumentParse { .. } => ParseErrorKind::OptionalArgumentParse,
            ParseError::OptionalArgumentNotFound { .. } => ParseErrorKind::OptionalArgumentNotFound,
            ParseError::OptionalArgumentSeparatorNotSupported { .. } => {
                ParseErrorKind::OptionalArgumentSeparatorNotSupported
            }
            ParseError::PositionalArgumentNotFound { .. } => {
                ParseErrorKind::PositionalArgumentNotFound
            }
            ParseError::ArgumentCombinationIsNotBoolean { .. } => {
                ParseErrorKind::ArgumentCombinationIsNotBoolean
            }
            ParseError::InvalidValue { .. } => ParseErrorKind::InvalidValue,
            ParseError::RequiredPropertyNotAssigned(_) => {
                ParseErrorKind::RequiredPropertyNotAssigned
            }
        }
    }

    pub(crate) fn parse(index: usize, token: &str, reason: impl Into<String>) -> Self {
        ParseError::OptionalArgumentParse {
            index,
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn separator(
        index: usize,
        token: &str,
        separator: impl Into<String>,
        style: impl std::fmt::Display,
    ) -> Self {
        ParseError::OptionalArgumentSeparatorNotSupported {
            index,
            token: token.to_string(),
            separator: separator.into(),
            style: style.to_string(),
        }
    }

    pub(crate) fn invalid_value(property: &str, error: ConvertError) -> Self {
        match error {
            ConvertError::InvalidConversion { value, type_name } => ParseError::InvalidValue {
                property: property.to_string(),
                value,
                type_name: type_name.to_string(),
            },
            ConvertError::MalformedPair { pair } => ParseError::InvalidValue {
                property: property.to_string(),
                value: pair,
                type_name: "key=value".to_string(),
            },
        }
    }
}
