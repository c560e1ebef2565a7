use crate::api::Schema;
use crate::convert::Argument;
use crate::model::{ParsingStyle, ValueKind};
use crate::parser::ParseError;
use crate::prelude::{CommandObject, ObjectBuilder};
use crate::tokens::{Dialect, TokenSet};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The inputs of a single binding.
pub(crate) struct Binding<'a> {
    pub(crate) token_set: &'a TokenSet,
    pub(crate) schema: &'a Schema,
    /// The number of leading positionals that make up the command name.
    pub(crate) levels: usize,
    pub(crate) dialect: &'a Dialect,
    pub(crate) case_sensitive: bool,
    pub(crate) ignore_unknown_arguments: bool,
}

impl<'a> Binding<'a> {
    /// Resolve the raw values of every option and positional, then convert and assign them.
    pub(crate) fn bind<T: CommandObject>(&self) -> Result<T, ParseError> {
        let option_values = self.option_values()?;
        let positional_values = self.positional_values()?;
        let mut builder = T::builder();

        let assignments = self
            .schema
            .options()
            .iter()
            .map(|option| {
                (
                    option.property(),
                    option.is_required(),
                    option.multi_value_handling(),
                )
            })
            .zip(option_values.iter().map(Option::as_deref))
            .chain(
                self.schema
                    .positionals()
                    .iter()
                    .map(|positional| {
                        (
                            positional.property(),
                            positional.is_required(),
                            positional.multi_value_handling(),
                        )
                    })
                    .zip(positional_values.iter().copied()),
            );

        for ((property, required, multi_value), values) in assignments {
            if required && values.is_none() {
                return Err(ParseError::RequiredPropertyNotAssigned(
                    property.to_string(),
                ));
            }

            builder
                .assign(property, &Argument::new(values, multi_value))
                .map_err(|error| ParseError::invalid_value(property, error))?;
        }

        builder.commit()
    }

    fn option_values(&self) -> Result<Vec<Option<Vec<String>>>, ParseError> {
        let mut consumed_long = vec![false; self.token_set.long_options().len()];
        let mut consumed_short = vec![false; self.token_set.short_options().len()];
        let mut resolved = Vec::with_capacity(self.schema.options().len());

        for option in self.schema.options() {
            let view = self
                .token_set
                .view(option.is_case_sensitive().unwrap_or(self.case_sensitive));
            let mut values: Option<Vec<String>> = None;
            let mut shorts: Vec<usize> = Vec::default();
            let mut longs: Vec<usize> = Vec::default();

            // Short names first: long names may be inferred spellings, short names are always explicit.
            for short in option.short_names(self.dialect) {
                for index in view.short_matches(short) {
                    if !shorts.contains(&index) {
                        shorts.push(index);
                    }
                }
            }

            for long in option.long_names(self.dialect) {
                for index in view.long_matches(&long) {
                    if !longs.contains(&index) {
                        longs.push(index);
                    }
                }
            }

            for index in shorts {
                consumed_short[index] = true;
                values
                    .get_or_insert_with(Vec::default)
                    .extend(self.token_set.short_options()[index].1.iter().cloned());
            }

            for index in longs {
                consumed_long[index] = true;
                values
                    .get_or_insert_with(Vec::default)
                    .extend(self.token_set.long_options()[index].1.iter().cloned());
            }

            if self.dialect == &Dialect::Style(ParsingStyle::PowerShell)
                && option.kind() == ValueKind::List
            {
                values = values.map(|values| {
                    values
                        .iter()
                        .flat_map(|value| value.split(','))
                        .filter(|value| !value.is_empty())
                        .map(String::from)
                        .collect()
                });
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Option '{}' resolved to {values:?}.",
                    option.property()
                );
            }

            resolved.push(values);
        }

        if !self.ignore_unknown_arguments {
            if let Some(index) = consumed_short.iter().position(|consumed| !consumed) {
                return Err(ParseError::OptionalArgumentNotFound {
                    name: self.token_set.short_options()[index].0.to_string(),
                });
            }

            if let Some(index) = consumed_long.iter().position(|consumed| !consumed) {
                return Err(ParseError::OptionalArgumentNotFound {
                    name: self.token_set.long_options()[index].0.clone(),
                });
            }
        }

        Ok(resolved)
    }

    fn positional_values(&self) -> Result<Vec<Option<&'a [String]>>, ParseError> {
        let positionals = &self.token_set.positionals()[self.levels..];
        let mut covered = vec![false; positionals.len()];
        let mut resolved = Vec::with_capacity(self.schema.positionals().len());

        for positional in self.schema.positionals() {
            let values = positional.slice(positionals);

            if values.is_some() {
                let end = positional
                    .index()
                    .saturating_add(positional.max_length())
                    .min(positionals.len());
                covered[positional.index()..end]
                    .iter_mut()
                    .for_each(|c| *c = true);
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Positional '{}' resolved to {values:?}.",
                    positional.property()
                );
            }

            resolved.push(values);
        }

        if !self.ignore_unknown_arguments {
            if let Some(position) = covered.iter().position(|covered| !covered) {
                return Err(ParseError::PositionalArgumentNotFound {
                    position,
                    value: positionals[position].clone(),
                });
            }
        }

        Ok(resolved)
    }
}
