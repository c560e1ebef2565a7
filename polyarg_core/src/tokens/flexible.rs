use crate::model::{Arity, ParsingStyle};
use crate::parser::ParseError;
use crate::prelude::OptionLookup;
use crate::tokens::model::{OptionKey, TokenSet, TokenSetBuilder};
use crate::tokens::{is_negative_number, slash_option, split_separator};

/// How a prefixed (`--`, `-`, `/`) dialect treats separators and boolean values.
#[derive(Debug, Clone, Copy)]
pub(super) struct Rules {
    pub(super) style: ParsingStyle,
    /// A boolean option may take a directly following boolean literal (ex: `--flag false`).
    pub(super) boolean_literals: bool,
    /// Long names accept an inline `:`/`=` value.
    pub(super) long_separators: bool,
}

const FLEXIBLE: Rules = Rules {
    style: ParsingStyle::Flexible,
    boolean_literals: true,
    long_separators: true,
};

pub(super) fn tokenize(
    args: &[String],
    case_sensitive: bool,
    lookup: &dyn OptionLookup,
) -> Result<TokenSet, ParseError> {
    tokenize_prefixed(args, case_sensitive, lookup, FLEXIBLE)
}

pub(super) fn tokenize_prefixed(
    args: &[String],
    case_sensitive: bool,
    lookup: &dyn OptionLookup,
    rules: Rules,
) -> Result<TokenSet, ParseError> {
    let mut builder = TokenSetBuilder::new(case_sensitive);

    for (index, token) in args.iter().enumerate() {
        if builder.is_positional_only() {
            builder.positional(token);
            continue;
        }

        if token == "--" {
            builder.end_options();
            continue;
        }

        let body = if let Some(body) = token.strip_prefix("--") {
            Some(body)
        } else if token.starts_with('-') && token != "-" && !is_negative_number(token, lookup) {
            Some(&token[1..])
        } else {
            slash_option(token, lookup)
        };

        match body {
            Some(body) => option(&mut builder, index, token, body, lookup, rules)?,
            None => builder.value(token),
        }
    }

    Ok(builder.build(None))
}

fn option(
    builder: &mut TokenSetBuilder,
    index: usize,
    token: &str,
    body: &str,
    lookup: &dyn OptionLookup,
    rules: Rules,
) -> Result<(), ParseError> {
    let (name, inline) = split_separator(body, &[':', '=']);

    if name.is_empty() {
        return Err(ParseError::parse(index, token, "missing option name"));
    }

    let key = OptionKey::of(name);

    if let (Some((separator, _)), OptionKey::Long(_)) = (inline, key) {
        if !rules.long_separators {
            return Err(ParseError::separator(index, token, separator, rules.style));
        }
    }

    let slot = builder.key(key);

    match inline {
        Some((_, value)) => builder.push_value(slot, value),
        None => match lookup.arity(key) {
            Some(Arity::Flag) => {
                if rules.boolean_literals {
                    builder.expect_literal(slot);
                }
            }
            Some(Arity::Many) => builder.expect_many(slot),
            Some(Arity::Single) | None => builder.expect_one(slot),
        },
    }

    Ok(())
}
