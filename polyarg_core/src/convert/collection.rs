use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::convert::{Argument, ArgumentValue, ConvertError, FromArgument};
use crate::model::ValueKind;

impl<T: FromArgument> FromArgument for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        if argument.is_present() {
            T::from_argument(argument).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn elements<T: ArgumentValue, C: FromIterator<T>>(
    argument: &Argument<'_>,
) -> Result<C, ConvertError> {
    argument
        .values()
        .unwrap_or_default()
        .iter()
        .map(|value| T::parse_value(value))
        .collect()
}

macro_rules! impl_collection {
    ($($c:ident [$($bound:tt)*]),+) => {
        $(
            impl<T: ArgumentValue $($bound)*> FromArgument for $c<T> {
                const KIND: ValueKind = ValueKind::List;

                fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
                    elements(argument)
                }
            }
        )+
    };
}

impl_collection!(Vec [], VecDeque [], HashSet [+ Eq + Hash], BTreeSet [+ Ord]);

impl<T: ArgumentValue> FromArgument for Box<[T]> {
    const KIND: ValueKind = ValueKind::List;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        elements::<T, Vec<T>>(argument).map(Vec::into_boxed_slice)
    }
}

/// Split every raw value on `;` into `key=value` pairs, in order.
fn pairs<K: ArgumentValue, V: ArgumentValue>(
    argument: &Argument<'_>,
) -> Result<Vec<(K, V)>, ConvertError> {
    let mut pairs = Vec::default();

    for value in argument.values().unwrap_or_default() {
        for pair in value.split(';').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) if !value.contains('=') => {
                    pairs.push((K::parse_value(key)?, V::parse_value(value)?));
                }
                _ => {
                    return Err(ConvertError::MalformedPair {
                        pair: pair.to_string(),
                    });
                }
            }
        }
    }

    Ok(pairs)
}

impl<K, V> FromArgument for HashMap<K, V>
where
    K: ArgumentValue + Eq + Hash,
    V: ArgumentValue,
{
    const KIND: ValueKind = ValueKind::Dictionary;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        Ok(pairs(argument)?.into_iter().collect())
    }
}

impl<K, V> FromArgument for BTreeMap<K, V>
where
    K: ArgumentValue + Ord,
    V: ArgumentValue,
{
    const KIND: ValueKind = ValueKind::Dictionary;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        Ok(pairs(argument)?.into_iter().collect())
    }
}

/// A single `key=value` pair: the first one supplied, or the defaults when none is.
impl<K, V> FromArgument for (K, V)
where
    K: ArgumentValue + Default,
    V: ArgumentValue + Default,
{
    const KIND: ValueKind = ValueKind::Dictionary;

    fn from_argument(argument: &Argument<'_>) -> Result<Self, ConvertError> {
        Ok(pairs(argument)?.into_iter().next().unwrap_or_default())
    }
}
