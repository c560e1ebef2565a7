//! Conversion of raw option/positional values into typed properties.
mod collection;
mod scalar;

use thiserror::Error;

use crate::model::{MultiValueHandling, ValueKind};

pub use scalar::{parse_enum, ArgumentEnum};

/// A failure to convert raw text into its declared type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The text is not a valid value of the target type.
    #[error("Cannot convert '{value}' to {type_name}.")]
    InvalidConversion {
        /// The offending text.
        value: String,
        /// The target type.
        type_name: &'static str,
    },

    /// A dictionary entry without precisely one `=`.
    #[error("Malformed key=value pair '{pair}'.")]
    MalformedPair {
        /// The offending entry.
        pair: String,
    },
}

impl ConvertError {
    pub(crate) fn invalid(value: &str, type_name: &'static str) -> Self {
        ConvertError::InvalidConversion {
            value: value.to_string(),
            type_name,
        }
    }
}

/// Recognise the boolean literals `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, in any case.
pub(crate) fn boolean_literal(text: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["1", "true", "yes", "on"];
    const FALSE: [&str; 4] = ["0", "false", "no", "off"];

    if TRUE.iter().any(|literal| literal.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE.iter().any(|literal| literal.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}

/// The raw values bound to a single property.
///
/// `values() == None` means the argument was not supplied at all, while `Some(&[])` means it was supplied without any value.
#[derive(Debug, Clone, Copy)]
pub struct Argument<'a> {
    values: Option<&'a [String]>,
    multi_value: MultiValueHandling,
}

impl<'a> Argument<'a> {
    /// An argument with the provided raw values.
    pub fn new(values: Option<&'a [String]>, multi_value: MultiValueHandling) -> Self {
        Self {
            values,
            multi_value,
        }
    }

    /// An argument that was not supplied.
    pub fn absent() -> Self {
        Self::new(None, MultiValueHandling::default())
    }

    /// Whether the argument was supplied (possibly without values).
    pub fn is_present(&self) -> bool {
        self.values.is_some()
    }

    /// The raw values, if the argument was supplied.
    pub fn values(&self) -> Option<&'a [String]> {
        self.values
    }

    /// The first raw value, if any.
    pub fn first(&self) -> Option<&'a str> {
        self.values
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// How multiple values reduce into a single `String`.
    pub fn multi_value(&self) -> MultiValueHandling {
        self.multi_value
    }

    /// Convert into the target type.
    ///
    /// ### Example
    /// ```
    /// # use polyarg_core as polyarg;
    /// use polyarg::{Argument, MultiValueHandling};
    ///
    /// let values = vec!["1".to_string(), "2".to_string()];
    /// let argument = Argument::new(Some(values.as_slice()), MultiValueHandling::First);
    /// let numbers: Vec<u32> = argument.convert().unwrap();
    /// assert_eq!(numbers, vec![1, 2]);
    /// let absent: Option<u32> = Argument::absent().convert().unwrap();
    /// assert_eq!(absent, None);
    /// ```
    pub fn convert<T: FromArgument>(&self) -> Result<T, ConvertError> {
        T::from_argument(self)
    }

    /// Convert into an [`ArgumentEnum`]: absent or empty yields the default variant.
    pub fn enum_value<T: ArgumentEnum>(&self) -> Result<T, ConvertError> {
        match self.first() {
            None => Ok(T::default()),
            Some(value) if value.is_empty() => Ok(T::default()),
            Some(value) => parse_enum(value),
        }
    }
}

/// A property type that may be bound from an [`Argument`].
pub trait FromArgument: Sized {
    /// The semantic shape of this type; it decides how many tokens an option of this type consumes.
    const KIND: ValueKind;

    /// Convert the raw values.
    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError>;
}

/// A type that may be parsed from a single raw value: an element of a collection, or a dictionary key/value.
pub trait ArgumentValue: Sized {
    /// The semantic shape of this type.
    const KIND: ValueKind;

    /// Parse a single raw value.
    fn parse_value(value: &str) -> Result<Self, ConvertError>;
}

/// Implement [`ArgumentEnum`], [`ArgumentValue`] and [`FromArgument`] for a fieldless enum.
///
/// Variant names match case-insensitively, and by their kebab-case spelling.
/// The enum must be `Copy` and `Default`.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::{argument_enum, parse_enum};
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq)]
/// enum Color {
///     #[default]
///     Red,
///     LightBlue,
/// }
///
/// argument_enum!(Color { Red, LightBlue });
///
/// assert_eq!(parse_enum::<Color>("light-blue").unwrap(), Color::LightBlue);
/// assert_eq!(parse_enum::<Color>("RED").unwrap(), Color::Red);
/// assert!(parse_enum::<Color>("green").is_err());
/// ```
#[macro_export]
macro_rules! argument_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::ArgumentEnum for $name {
            fn variants() -> &'static [(&'static str, Self)] {
                &[$((stringify!($variant), $name::$variant)),+]
            }
        }

        impl $crate::ArgumentValue for $name {
            const KIND: $crate::ValueKind = $crate::ValueKind::Enum;

            fn parse_value(value: &str) -> Result<Self, $crate::ConvertError> {
                $crate::parse_enum(value)
            }
        }

        impl $crate::FromArgument for $name {
            const KIND: $crate::ValueKind = $crate::ValueKind::Enum;

            fn from_argument(argument: &$crate::Argument<'_>) -> Result<Self, $crate::ConvertError> {
                argument.enum_value()
            }
        }
    };
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    pub(crate) fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case("true", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("Yes", Some(true))]
    #[case("on", Some(true))]
    #[case("0", Some(false))]
    #[case("False", Some(false))]
    #[case("NO", Some(false))]
    #[case("off", Some(false))]
    #[case("", None)]
    #[case("2", None)]
    #[case("y", None)]
    #[case(" true", None)]
    fn literals(#[case] text: &str, #[case] expected: Option<bool>) {
        assert_eq!(boolean_literal(text), expected);
    }

    #[test]
    fn argument_presence() {
        // Setup
        let values = strings(&["a", "b"]);
        let none: Vec<String> = Vec::default();

        // Execute
        let supplied = Argument::new(Some(values.as_slice()), MultiValueHandling::Last);
        let empty = Argument::new(Some(none.as_slice()), MultiValueHandling::First);
        let absent = Argument::absent();

        // Verify
        assert!(supplied.is_present());
        assert_eq!(supplied.first(), Some("a"));
        assert_eq!(supplied.multi_value(), MultiValueHandling::Last);
        assert!(empty.is_present());
        assert_eq!(empty.first(), None);
        assert!(!absent.is_present());
        assert_eq!(absent.values(), None);
    }
}
