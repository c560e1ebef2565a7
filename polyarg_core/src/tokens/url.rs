use ::url::Url;

use crate::parser::ParseError;
use crate::tokens::model::{OptionKey, TokenSet, TokenSetBuilder};

const STYLE: &str = "URL";

/// Tokenize `scheme://host/path/..?key=value&..#fragment`.
///
/// The host and path segments are positionals, the query pairs are options and the fragment binds to the `fragment` option.
pub(super) fn tokenize(
    token: &str,
    scheme: &str,
    case_sensitive: bool,
) -> Result<TokenSet, ParseError> {
    let url = Url::parse(token).map_err(|error| ParseError::parse(0, token, error.to_string()))?;
    let mut builder = TokenSetBuilder::new(case_sensitive);

    if let Some(host) = url.host_str().filter(|host| !host.is_empty()) {
        builder.positional(&decode(token, host)?);
    }

    if let Some(segments) = url.path_segments() {
        for segment in segments.filter(|segment| !segment.is_empty()) {
            builder.positional(&decode(token, segment)?);
        }
    }

    let pairs = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty());

    // Percent-decoding only: a literal `+` stays a `+`.
    for pair in pairs {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(token, key)?;
        let value = decode(token, value)?;

        if key.is_empty() {
            return Err(ParseError::parse(0, token, "missing option name"));
        }

        if let Some(prefix) = key.chars().next().filter(|c| *c == '-' || *c == '/') {
            return Err(ParseError::separator(0, token, prefix, STYLE));
        }

        let slot = builder.key(OptionKey::of(&key));
        builder.push_value(slot, &value);
    }

    if let Some(fragment) = url.fragment().filter(|fragment| !fragment.is_empty()) {
        let slot = builder.long("fragment");
        builder.push_value(slot, &decode(token, fragment)?);
    }

    Ok(builder.build(Some(scheme.to_string())))
}

fn decode(token: &str, encoded: &str) -> Result<String, ParseError> {
    urlencoding::decode(encoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|error| ParseError::parse(0, token, error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseErrorKind;
    use crate::tokens::tests::args;
    use rstest::rstest;

    #[test]
    fn query_values() {
        // Execute
        let token_set = tokenize("test://?option=value%20with%20space", "test", false).unwrap();

        // Verify
        assert_eq!(
            token_set.long_options(),
            &[("option".to_string(), args(&["value with space"]))]
        );
        assert!(token_set.positionals().is_empty());
        assert_eq!(token_set.url_scheme(), Some("test"));
    }

    #[test]
    fn full_url() {
        // Execute
        let token_set = tokenize(
            "test://remote/add/my%20file?name=x&flag&o=y&name=z#top%20line",
            "test",
            false,
        )
        .unwrap();

        // Verify
        assert_eq!(
            token_set.positionals(),
            args(&["remote", "add", "my file"])
        );
        assert_eq!(token_set.guessed_command_name(), Some("remote"));
        assert_eq!(
            token_set.long_options(),
            &[
                ("name".to_string(), args(&["x", "z"])),
                ("flag".to_string(), args(&[])),
                ("fragment".to_string(), args(&["top line"])),
            ]
        );
        assert_eq!(token_set.short_options(), &[('o', args(&["y"]))]);
    }

    #[rstest]
    #[case("test://?name=a+b", "a+b")]
    #[case("test://?name=a%2Bb", "a+b")]
    #[case("test://?name=a%20b", "a b")]
    #[case("test://?name=a=b", "a=b")]
    #[case("test://?name=%C3%A9", "é")]
    fn query_decoding(#[case] token: &str, #[case] expected: &str) {
        // Execute
        let token_set = tokenize(token, "test", false).unwrap();

        // Verify
        assert_eq!(
            token_set.long_options(),
            &[("name".to_string(), args(&[expected]))]
        );
    }

    #[rstest]
    #[case("test://?=x", ParseErrorKind::OptionalArgumentParse)]
    #[case("test://?%2Do=x", ParseErrorKind::OptionalArgumentSeparatorNotSupported)]
    #[case("test://?-o=x", ParseErrorKind::OptionalArgumentSeparatorNotSupported)]
    #[case("test://?/o=x", ParseErrorKind::OptionalArgumentSeparatorNotSupported)]
    #[case("test://bad host/", ParseErrorKind::OptionalArgumentParse)]
    fn errors(#[case] token: &str, #[case] expected: ParseErrorKind) {
        let error = tokenize(token, "test", false).unwrap_err();
        assert_eq!(error.kind(), expected);
    }
}
