use crate::model::{Arity, ParsingStyle};
use crate::parser::ParseError;
use crate::prelude::OptionLookup;
use crate::tokens::model::{OptionKey, TokenSet, TokenSetBuilder};
use crate::tokens::{is_negative_number, is_value_token, split_separator};

pub(super) fn tokenize(
    args: &[String],
    case_sensitive: bool,
    lookup: &dyn OptionLookup,
) -> Result<TokenSet, ParseError> {
    let mut builder = TokenSetBuilder::new(case_sensitive);

    for (index, token) in args.iter().enumerate() {
        if builder.is_positional_only() {
            builder.positional(token);
        } else if token == "--" {
            builder.end_options();
        } else if let Some(body) = token.strip_prefix("--") {
            // Find a 'long' option, such as:
            //  --name
            //  --name ..
            //  --name=..
            //  --name:..
            long(&mut builder, index, token, body, lookup)?;
        } else if token.starts_with('-') && token != "-" && !is_negative_number(token, lookup) {
            // Find 'short' option(s), such as:
            //  -o
            //  -o ..
            //  -ovalue
            //  -abc
            //  -abc ..
            short(&mut builder, args, index, &token[1..], lookup)?;
        } else {
            builder.value(token);
        }
    }

    Ok(builder.build(None))
}

fn long(
    builder: &mut TokenSetBuilder,
    index: usize,
    token: &str,
    body: &str,
    lookup: &dyn OptionLookup,
) -> Result<(), ParseError> {
    let (name, inline) = split_separator(body, &['=', ':']);

    if name.is_empty() {
        return Err(ParseError::parse(index, token, "missing option name"));
    }

    let slot = builder.long(name);

    match inline {
        Some((_, value)) => builder.push_value(slot, value),
        None => {
            if lookup.arity(OptionKey::Long(name)) != Some(Arity::Flag) {
                builder.expect_one(slot);
            }
        }
    }

    Ok(())
}

fn short(
    builder: &mut TokenSetBuilder,
    args: &[String],
    index: usize,
    body: &str,
    lookup: &dyn OptionLookup,
) -> Result<(), ParseError> {
    let token = &args[index];
    let first = match body.chars().next() {
        Some(first) => first,
        None => unreachable!("internal error - short option body must not be empty"),
    };
    let rest = &body[first.len_utf8()..];

    if let Some(separator) = rest.chars().next().filter(|c| *c == '=' || *c == ':') {
        return Err(ParseError::separator(
            index,
            token,
            separator,
            ParsingStyle::Gnu,
        ));
    }

    let first_arity = lookup.arity(OptionKey::Short(first));

    if rest.is_empty() {
        let slot = builder.short(first);

        if first_arity != Some(Arity::Flag) {
            builder.expect_one(slot);
        }

        return Ok(());
    }

    // A cluster holds option letters only; anything else makes the rest an attached value (ex: `-ohttp://x`).
    let concatenated = match first_arity {
        Some(Arity::Single) | Some(Arity::Many) => true,
        None => rest.chars().any(|c| !c.is_alphanumeric()),
        Some(Arity::Flag) => false,
    };

    if concatenated {
        let slot = builder.short(first);
        builder.push_value(slot, rest);
        return Ok(());
    }

    // A cluster of boolean short options; only the last member may take the next value token.
    let members: Vec<char> = body.chars().collect();
    let next_is_value = args
        .get(index + 1)
        .map(|next| is_value_token(next, lookup))
        .unwrap_or(false);

    for (position, member) in members.iter().enumerate() {
        if *member == '=' || *member == ':' {
            return Err(ParseError::separator(
                index,
                token,
                *member,
                ParsingStyle::Gnu,
            ));
        }

        let is_last = position + 1 == members.len();

        match lookup.arity(OptionKey::Short(*member)) {
            Some(Arity::Flag) | None => {
                builder.short(*member);
            }
            Some(Arity::Single) | Some(Arity::Many) if is_last && next_is_value => {
                let slot = builder.short(*member);
                builder.expect_one(slot);
            }
            Some(Arity::Single) | Some(Arity::Many) => {
                return Err(ParseError::ArgumentCombinationIsNotBoolean {
                    index,
                    token: token.to_string(),
                    option: *member,
                });
            }
        }
    }

    Ok(())
}
