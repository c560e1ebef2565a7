use crate::convert::{boolean_literal, Argument, ArgumentValue, ConvertError, FromArgument};
use crate::model::{MultiValueHandling, ValueKind};
use crate::naming::to_kebab_case;

/// A fieldless enum that binds by variant name.
///
/// Implement via [`argument_enum!`](crate::argument_enum).
pub trait ArgumentEnum: Copy + Default + 'static {
    /// Every variant, by name.
    fn variants() -> &'static [(&'static str, Self)];
}

/// Parse an enum variant by name: case-insensitively, or by kebab-case equivalence (ex: `light-blue` for `LightBlue`).
pub fn parse_enum<T: ArgumentEnum>(value: &str) -> Result<T, ConvertError> {
    let trimmed = value.trim();
    let kebab = to_kebab_case(trimmed, true, true);

    T::variants()
        .iter()
        .find(|(name, _)| {
            name.eq_ignore_ascii_case(trimmed)
                || (!kebab.is_empty() && to_kebab_case(name, true, true) == kebab)
        })
        .map(|(_, variant)| *variant)
        .ok_or_else(|| ConvertError::invalid(value, short_type_name::<T>()))
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl ArgumentValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn parse_value(value: &str) -> Result<Self, ConvertError> {
        boolean_literal(value).ok_or_else(|| ConvertError::invalid(value, "bool"))
    }
}

impl FromArgument for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        match argument.values() {
            None => Ok(false),
            Some(values) => match values.last() {
                None => Ok(true),
                Some(value) => bool::parse_value(value),
            },
        }
    }
}

macro_rules! impl_number {
    ($($t:ty),+) => {
        $(
            impl ArgumentValue for $t {
                const KIND: ValueKind = ValueKind::Number;

                fn parse_value(value: &str) -> Result<Self, ConvertError> {
                    value
                        .trim()
                        .parse::<$t>()
                        .map_err(|_| ConvertError::invalid(value, stringify!($t)))
                }
            }

            impl FromArgument for $t {
                const KIND: ValueKind = ValueKind::Number;

                fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
                    match argument.first() {
                        None => Ok(<$t>::default()),
                        Some(value) => <$t>::parse_value(value),
                    }
                }
            }
        )+
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl ArgumentValue for char {
    const KIND: ValueKind = ValueKind::String;

    fn parse_value(value: &str) -> Result<Self, ConvertError> {
        Ok(value.chars().next().unwrap_or('\0'))
    }
}

impl FromArgument for char {
    const KIND: ValueKind = ValueKind::String;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        match argument.first() {
            None => Ok('\0'),
            Some(value) => char::parse_value(value),
        }
    }
}

impl ArgumentValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn parse_value(value: &str) -> Result<Self, ConvertError> {
        Ok(value.to_string())
    }
}

impl FromArgument for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        let values = match argument.values() {
            None | Some([]) => return Ok(String::default()),
            Some(values) => values,
        };

        Ok(match argument.multi_value() {
            MultiValueHandling::First => values[0].clone(),
            MultiValueHandling::Last => values[values.len() - 1].clone(),
            MultiValueHandling::SpaceAll => values.join(" "),
            MultiValueHandling::SlashAll => values.join("/"),
        })
    }
}
