use crate::model::ParsingStyle;
use crate::parser::ParseError;
use crate::prelude::OptionLookup;
use crate::tokens::flexible::{tokenize_prefixed, Rules};
use crate::tokens::model::TokenSet;

// `-Name value` only: long names never carry an inline value.
const POWERSHELL: Rules = Rules {
    style: ParsingStyle::PowerShell,
    boolean_literals: true,
    long_separators: false,
};

pub(super) fn tokenize(
    args: &[String],
    case_sensitive: bool,
    lookup: &dyn OptionLookup,
) -> Result<TokenSet, ParseError> {
    tokenize_prefixed(args, case_sensitive, lookup, POWERSHELL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Arity;
    use crate::parser::ParseErrorKind;
    use crate::tokens::tests::{args, Lookup};
    use rstest::rstest;

    fn lookup() -> Lookup {
        Lookup(vec![
            ("Force", Arity::Flag),
            ("Path", Arity::Many),
            ("Name", Arity::Single),
        ])
    }

    #[rstest]
    #[case(vec!["-Name", "x"], "Name", vec!["x"])]
    #[case(vec!["/Name", "x"], "Name", vec!["x"])]
    #[case(vec!["--Name", "x"], "Name", vec!["x"])]
    #[case(vec!["-Path", "a,b", "c"], "Path", vec!["a,b", "c"])]
    #[case(vec!["-Force", "$false"], "Force", vec![])]
    #[case(vec!["-Force", "false"], "Force", vec!["false"])]
    fn options(#[case] input: Vec<&str>, #[case] name: &str, #[case] values: Vec<&str>) {
        // Execute
        let token_set = tokenize(&args(&input), false, &lookup()).unwrap();

        // Verify
        assert_eq!(
            token_set.long_options(),
            &[(name.to_string(), args(&values))]
        );
    }

    #[rstest]
    #[case(vec!["-Name:x"])]
    #[case(vec!["-Name=x"])]
    #[case(vec!["/Name:x"])]
    fn inline_separator(#[case] input: Vec<&str>) {
        // Execute
        let error = tokenize(&args(&input), false, &lookup()).unwrap_err();

        // Verify
        assert_eq!(
            error.kind(),
            ParseErrorKind::OptionalArgumentSeparatorNotSupported
        );
        assert_matches!(error, ParseError::OptionalArgumentSeparatorNotSupported { style, .. } => {
            assert_eq!(style, "PowerShell");
        });
    }

    #[test]
    fn short_inline() {
        let token_set = tokenize(&args(&["-n:x"]), false, &lookup()).unwrap();
        assert_eq!(token_set.short_options(), &[('n', args(&["x"]))]);
    }
}
