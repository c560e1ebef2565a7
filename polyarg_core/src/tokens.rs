mod dotnet;
mod flexible;
mod gnu;
mod model;
mod posix;
mod powershell;
mod split;
mod url;

pub use model::{OptionKey, TokenSet, TokenSetView};
pub(crate) use model::{chars_equal, names_equal};
pub use split::{join_command_line, split_command_line};

use crate::model::ParsingStyle;
use crate::parser::ParseError;
use crate::prelude::OptionLookup;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The grammar an argument vector is tokenized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Dialect {
    Style(ParsingStyle),
    Url(String),
}

impl Dialect {
    /// The URL dialect applies only when the whole input is a single `scheme://..` token for a registered scheme.
    pub(crate) fn detect(args: &[String], style: ParsingStyle, url_schemes: &[String]) -> Self {
        if let [single] = args {
            if let Some((scheme, _)) = single.split_once("://") {
                if let Some(registered) = url_schemes
                    .iter()
                    .find(|registered| registered.eq_ignore_ascii_case(scheme))
                {
                    return Dialect::Url(registered.clone());
                }
            }
        }

        Dialect::Style(style)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Style(style) => write!(f, "{style}"),
            Dialect::Url(scheme) => write!(f, "URL ({scheme})"),
        }
    }
}

/// Tokenize `args` in the `dialect`, consulting `lookup` for option arities.
pub(crate) fn tokenize(
    args: &[String],
    dialect: &Dialect,
    case_sensitive: bool,
    lookup: &dyn OptionLookup,
) -> Result<TokenSet, ParseError> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenizing {} arguments with the {dialect} dialect (case_sensitive={case_sensitive}).", args.len());
    }

    match dialect {
        Dialect::Style(ParsingStyle::Gnu) => gnu::tokenize(args, case_sensitive, lookup),
        Dialect::Style(ParsingStyle::Posix) => posix::tokenize(args, case_sensitive, lookup),
        Dialect::Style(ParsingStyle::DotNet) => dotnet::tokenize(args, case_sensitive, lookup),
        Dialect::Style(ParsingStyle::PowerShell) => {
            powershell::tokenize(args, case_sensitive, lookup)
        }
        Dialect::Style(ParsingStyle::Flexible) => flexible::tokenize(args, case_sensitive, lookup),
        Dialect::Url(scheme) => match args {
            [single] => url::tokenize(single, scheme, case_sensitive),
            _ => unreachable!("internal error - the URL dialect requires precisely one argument"),
        },
    }
}

/// Split `body` at the first of the `separators`.
fn split_separator<'a>(body: &'a str, separators: &[char]) -> (&'a str, Option<(char, &'a str)>) {
    match body.char_indices().find(|(_, c)| separators.contains(c)) {
        Some((offset, separator)) => (
            &body[..offset],
            Some((separator, &body[offset + separator.len_utf8()..])),
        ),
        None => (body, None),
    }
}

/// Whether `token` reads as a negative number (ex: `-5`, `-.5`) rather than a short option.
fn is_negative_number(token: &str, lookup: &dyn OptionLookup) -> bool {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some('-'), Some('.')) => true,
        (Some('-'), Some(digit)) if digit.is_ascii_digit() => {
            lookup.arity(OptionKey::Short(digit)).is_none()
        }
        _ => false,
    }
}

/// The option body of a `/name` token, when `name` is a known option.
fn slash_option<'a>(token: &'a str, lookup: &dyn OptionLookup) -> Option<&'a str> {
    let body = token.strip_prefix('/')?;
    let (name, _) = split_separator(body, &[':', '=']);

    if !name.is_empty() && lookup.arity(OptionKey::of(name)).is_some() {
        Some(body)
    } else {
        None
    }
}

/// Whether a GNU/POSIX `token` is a value rather than an option.
fn is_value_token(token: &str, lookup: &dyn OptionLookup) -> bool {
    !token.starts_with('-') || token == "-" || is_negative_number(token, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Arity;
    use crate::prelude::NoLookup;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    pub(crate) struct Lookup(pub(crate) Vec<(&'static str, Arity)>);

    impl OptionLookup for Lookup {
        fn arity(&self, key: OptionKey<'_>) -> Option<Arity> {
            self.0.iter().find_map(|(name, arity)| {
                if OptionKey::of(name) == key {
                    Some(*arity)
                } else {
                    None
                }
            })
        }
    }

    pub(crate) fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case(vec!["test://host"], vec!["test"], Dialect::Url("test".to_string()))]
    #[case(vec!["TEST://host"], vec!["test"], Dialect::Url("test".to_string()))]
    #[case(vec!["other://host"], vec!["test"], Dialect::Style(ParsingStyle::Gnu))]
    #[case(vec!["test://a", "test://b"], vec!["test"], Dialect::Style(ParsingStyle::Gnu))]
    #[case(vec!["test:/host"], vec!["test"], Dialect::Style(ParsingStyle::Gnu))]
    #[case(vec!["test://host"], vec![], Dialect::Style(ParsingStyle::Gnu))]
    fn detect(
        #[case] values: Vec<&str>,
        #[case] schemes: Vec<&str>,
        #[case] expected: Dialect,
    ) {
        // Setup
        let schemes: Vec<String> = schemes.into_iter().map(String::from).collect();

        // Execute
        let dialect = Dialect::detect(&args(&values), ParsingStyle::Gnu, &schemes);

        // Verify
        assert_eq!(dialect, expected);
    }

    #[rstest]
    #[case("name", ("name", None))]
    #[case("name=value", ("name", Some(('=', "value"))))]
    #[case("name:a=b", ("name", Some((':', "a=b"))))]
    #[case("name=", ("name", Some(('=', ""))))]
    #[case("=value", ("", Some(('=', "value"))))]
    fn separators(#[case] body: &str, #[case] expected: (&str, Option<(char, &str)>)) {
        assert_eq!(split_separator(body, &['=', ':']), expected);
    }

    #[rstest]
    #[case("-5", true)]
    #[case("-.5", true)]
    #[case("-1", false)]
    #[case("-a", false)]
    #[case("-", false)]
    #[case("5", false)]
    fn negative_numbers(#[case] token: &str, #[case] expected: bool) {
        let lookup = Lookup(vec![("1", Arity::Flag)]);
        assert_eq!(is_negative_number(token, &lookup), expected);
    }

    #[rstest]
    #[case("/name", Some("name"))]
    #[case("/name:value", Some("name:value"))]
    #[case("/tmp/file", None)]
    #[case("/", None)]
    #[case("name", None)]
    fn slash_options(#[case] token: &str, #[case] expected: Option<&str>) {
        let lookup = Lookup(vec![("name", Arity::Single)]);
        assert_eq!(slash_option(token, &lookup), expected);
    }

    fn is_option_token(token: &str) -> bool {
        token.starts_with('-') && token != "-" && token != "-5"
    }

    fn conserved(token_set: &TokenSet) -> Vec<String> {
        let mut values: Vec<String> = token_set
            .long_options()
            .iter()
            .flat_map(|(_, values)| values.iter().cloned())
            .chain(
                token_set
                    .short_options()
                    .iter()
                    .flat_map(|(_, values)| values.iter().cloned()),
            )
            .chain(token_set.positionals().iter().cloned())
            .collect();
        values.sort();
        values
    }

    #[test]
    fn token_conservation() {
        const POOL: &[&str] = &[
            "--name", "-x", "-Y", "value", "other", "--", "-5", "-", "/path", "--flag",
        ];
        const POSIX_POOL: &[&str] = &["-x", "-Y", "value", "other", "--", "-5", "-", "/path"];

        for _ in 0..300 {
            for style in [
                ParsingStyle::Gnu,
                ParsingStyle::Posix,
                ParsingStyle::Flexible,
                ParsingStyle::DotNet,
                ParsingStyle::PowerShell,
            ] {
                // Setup
                let pool = match style {
                    ParsingStyle::Posix => POSIX_POOL,
                    _ => POOL,
                };
                let length = thread_rng().gen_range(0..12);
                let input: Vec<String> = (0..length)
                    .map(|_| pool[thread_rng().gen_range(0..pool.len())].to_string())
                    .collect();
                let lookup = Lookup(vec![("flag", Arity::Flag), ("x", Arity::Many)]);

                // Execute
                let token_set =
                    tokenize(&input, &Dialect::Style(style), false, &lookup).unwrap();

                // Verify
                let mut expected: Vec<String> = Vec::default();
                let mut positional_only = false;
                for token in &input {
                    if positional_only {
                        expected.push(token.clone());
                    } else if token == "--" {
                        positional_only = true;
                    } else if !is_option_token(token) {
                        expected.push(token.clone());
                    }
                }

                expected.sort();
                assert_eq!(conserved(&token_set), expected, "style: {style}, input: {input:?}");
            }
        }
    }

    #[test]
    fn url_token_conservation() {
        const HOSTS: &[&str] = &["host", "remote"];
        const WORDS: &[(&str, &str)] = &[
            ("alpha", "alpha"),
            ("b%20c", "b c"),
            ("d+e", "d+e"),
            ("f%2Fg", "f/g"),
        ];
        const KEYS: &[&str] = &["name", "o", "items"];

        for _ in 0..300 {
            // Setup
            let mut rng = thread_rng();
            let host = HOSTS[rng.gen_range(0..HOSTS.len())];
            let mut url = format!("test://{host}");
            let mut expected = vec![host.to_string()];

            for _ in 0..rng.gen_range(0..4) {
                let (encoded, decoded) = WORDS[rng.gen_range(0..WORDS.len())];
                url.push('/');
                url.push_str(encoded);
                expected.push(decoded.to_string());
            }

            let mut pairs: Vec<String> = Vec::default();
            for _ in 0..rng.gen_range(0..4) {
                let key = KEYS[rng.gen_range(0..KEYS.len())];
                let (encoded, decoded) = WORDS[rng.gen_range(0..WORDS.len())];
                pairs.push(format!("{key}={encoded}"));
                expected.push(decoded.to_string());
            }

            if !pairs.is_empty() {
                url.push('?');
                url.push_str(&pairs.join("&"));
            }

            if rng.gen_bool(0.5) {
                let (encoded, decoded) = WORDS[rng.gen_range(0..WORDS.len())];
                url.push('#');
                url.push_str(encoded);
                expected.push(decoded.to_string());
            }

            // Execute
            let token_set = tokenize(
                &[url.clone()],
                &Dialect::Url("test".to_string()),
                false,
                &NoLookup,
            )
            .unwrap();

            // Verify
            expected.sort();
            assert_eq!(conserved(&token_set), expected, "url: {url}");
        }
    }

    #[test]
    fn empty_input() {
        for style in [
            ParsingStyle::Gnu,
            ParsingStyle::Posix,
            ParsingStyle::Flexible,
            ParsingStyle::DotNet,
            ParsingStyle::PowerShell,
        ] {
            let token_set =
                tokenize(&args(&[]), &Dialect::Style(style), true, &NoLookup).unwrap();
            assert!(token_set.long_options().is_empty());
            assert!(token_set.short_options().is_empty());
            assert!(token_set.positionals().is_empty());
            assert_eq!(token_set.guessed_command_name(), None);
        }
    }
}
