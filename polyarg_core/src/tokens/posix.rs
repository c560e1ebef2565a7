use crate::model::{Arity, ParsingStyle};
use crate::parser::ParseError;
use crate::prelude::OptionLookup;
use crate::tokens::is_negative_number;
use crate::tokens::model::{OptionKey, TokenSet, TokenSetBuilder};

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
        } else if token.starts_with("--") {
            return Err(ParseError::parse(
                index,
                token,
                "long options are not supported",
            ));
        } else if token.starts_with('-') && token != "-" && !is_negative_number(token, lookup) {
            short(&mut builder, index, token, lookup)?;
        } else {
            builder.value(token);
        }
    }

    Ok(builder.build(None))
}

fn short(
    builder: &mut TokenSetBuilder,
    index: usize,
    token: &str,
    lookup: &dyn OptionLookup,
) -> Result<(), ParseError> {
    let body = &token[1..];

    if let Some(separator) = body.chars().find(|c| *c == '=' || *c == ':') {
        return Err(ParseError::separator(
            index,
            token,
            separator,
            ParsingStyle::Posix,
        ));
    }

    let members: Vec<char> = body.chars().collect();

    if let [single] = members.as_slice() {
        let slot = builder.short(*single);

        if lookup.arity(OptionKey::Short(*single)) != Some(Arity::Flag) {
            builder.expect_one(slot);
        }

        return Ok(());
    }

    for member in members {
        match lookup.arity(OptionKey::Short(member)) {
            Some(Arity::Flag) | None => {
                builder.short(member);
            }
            Some(Arity::Single) | Some(Arity::Many) => {
                return Err(ParseError::ArgumentCombinationIsNotBoolean {
                    index,
                    token: token.to_string(),
                    option: member,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseErrorKind;
    use crate::tokens::tests::{args, Lookup};
    use rstest::rstest;

    fn lookup() -> Lookup {
        Lookup(vec![
            ("a", Arity::Flag),
            ("b", Arity::Flag),
            ("c", Arity::Flag),
            ("o", Arity::Single),
        ])
    }

    #[rstest]
    #[case(vec!["-a", "-b", "-c"], vec!['a', 'b', 'c'], vec![])]
    #[case(vec!["-abc"], vec!['a', 'b', 'c'], vec![])]
    #[case(vec!["-a", "x"], vec!['a'], vec!["x"])]
    #[case(vec!["x", "-ca"], vec!['c', 'a'], vec!["x"])]
    fn flags(
        #[case] input: Vec<&str>,
        #[case] expected: Vec<char>,
        #[case] positionals: Vec<&str>,
    ) {
        // Execute
        let token_set = tokenize(&args(&input), true, &lookup()).unwrap();

        // Verify
        let shorts: Vec<char> = token_set.short_options().iter().map(|(s, _)| *s).collect();
        assert_eq!(shorts, expected);
        assert!(token_set
            .short_options()
            .iter()
            .all(|(_, values)| values.is_empty()));
        assert_eq!(token_set.positionals(), args(&positionals));
    }

    #[test]
    fn value() {
        // Execute
        let token_set = tokenize(&args(&["-o", "x", "y"]), true, &lookup()).unwrap();

        // Verify
        assert_eq!(token_set.short_options(), &[('o', args(&["x"]))]);
        assert_eq!(token_set.positionals(), args(&["y"]));
    }

    #[rstest]
    #[case(vec!["--name"], ParseErrorKind::OptionalArgumentParse)]
    #[case(vec!["-o=x"], ParseErrorKind::OptionalArgumentSeparatorNotSupported)]
    #[case(vec!["-o:x"], ParseErrorKind::OptionalArgumentSeparatorNotSupported)]
    #[case(vec!["-ao"], ParseErrorKind::ArgumentCombinationIsNotBoolean)]
    #[case(vec!["-oa", "x"], ParseErrorKind::ArgumentCombinationIsNotBoolean)]
    fn errors(#[case] input: Vec<&str>, #[case] expected: ParseErrorKind) {
        let error = tokenize(&args(&input), true, &lookup()).unwrap_err();
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn positional_only() {
        let token_set = tokenize(&args(&["--", "--name", "-a"]), true, &lookup()).unwrap();
        assert!(token_set.short_options().is_empty());
        assert_eq!(token_set.positionals(), args(&["--name", "-a"]));
    }
}
