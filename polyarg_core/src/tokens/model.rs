use crate::convert::boolean_literal;

/// The name under which an option was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey<'a> {
    /// A multi-character name (ex: `--name`, `-Name`, `/name`).
    Long(&'a str),
    /// A single-character name (ex: `-n`).
    Short(char),
}

impl<'a> OptionKey<'a> {
    /// The key for a bare option name: one character is a short name, anything longer is a long name.
    pub fn of(name: &'a str) -> Self {
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (Some(single), None) => OptionKey::Short(single),
            _ => OptionKey::Long(name),
        }
    }
}

impl<'a> std::fmt::Display for OptionKey<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKey::Long(name) => write!(f, "{name}"),
            OptionKey::Short(short) => write!(f, "{short}"),
        }
    }
}

pub(crate) fn names_equal(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a == b || a.to_lowercase() == b.to_lowercase()
    }
}

pub(crate) fn chars_equal(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}

/// The tokenized command line: options, positional arguments and the command name candidate.
///
/// Every input token is accounted for precisely once: as an option name, as a value of an option, or as a positional argument.
/// The only exception is the `--` marker, which switches the remaining tokens into positional arguments.
///
/// Option names are unique under the case-sensitivity the set was tokenized with.
/// Use [`TokenSet::view`] to re-interpret the names under a different case-sensitivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    case_sensitive: bool,
    long_options: Vec<(String, Vec<String>)>,
    short_options: Vec<(char, Vec<String>)>,
    positionals: Vec<String>,
    leading: usize,
    url_scheme: Option<String>,
}

impl TokenSet {
    /// Whether the option names of this set were made unique case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The long options, in the order they were first supplied, with all their values.
    pub fn long_options(&self) -> &[(String, Vec<String>)] {
        &self.long_options
    }

    /// The short options, in the order they were first supplied, with all their values.
    pub fn short_options(&self) -> &[(char, Vec<String>)] {
        &self.short_options
    }

    /// All positional arguments, including any leading command name tokens.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The positional arguments supplied before any option (or `--`).
    /// These are the candidates for command name matching.
    pub fn leading_positionals(&self) -> &[String] {
        &self.positionals[..self.leading]
    }

    /// The first positional argument, if it appeared before any option.
    pub fn guessed_command_name(&self) -> Option<&str> {
        self.leading_positionals().first().map(String::as_str)
    }

    /// The URL scheme, when this set was tokenized from a `scheme://..` input.
    pub fn url_scheme(&self) -> Option<&str> {
        self.url_scheme.as_deref()
    }

    /// View this set under the provided case-sensitivity without copying.
    ///
    /// Projecting onto the case-sensitivity the set already has yields the same structure as the set itself.
    pub fn view(&self, case_sensitive: bool) -> TokenSetView<'_> {
        TokenSetView {
            token_set: self,
            case_sensitive,
        }
    }
}

/// A case-sensitivity projection of a [`TokenSet`].
#[derive(Debug, Clone, Copy)]
pub struct TokenSetView<'a> {
    token_set: &'a TokenSet,
    case_sensitive: bool,
}

impl<'a> TokenSetView<'a> {
    /// The underlying token set.
    pub fn token_set(&self) -> &'a TokenSet {
        self.token_set
    }

    /// Whether this view compares option names case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Indices (into [`TokenSet::long_options`]) of every long option matching `name` under this view.
    pub fn long_matches(&self, name: &str) -> Vec<usize> {
        self.token_set
            .long_options
            .iter()
            .enumerate()
            .filter(|(_, (key, _))| names_equal(key, name, self.case_sensitive))
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices (into [`TokenSet::short_options`]) of every short option matching `short` under this view.
    pub fn short_matches(&self, short: char) -> Vec<usize> {
        self.token_set
            .short_options
            .iter()
            .enumerate()
            .filter(|(_, (key, _))| chars_equal(*key, short, self.case_sensitive))
            .map(|(index, _)| index)
            .collect()
    }

    /// The values of the long option `name`, or `None` if it was not supplied.
    pub fn long_values(&self, name: &str) -> Option<Vec<String>> {
        let indices = self.long_matches(name);
        collect(indices, |index| &self.token_set.long_options[index].1)
    }

    /// The values of the short option `short`, or `None` if it was not supplied.
    pub fn short_values(&self, short: char) -> Option<Vec<String>> {
        let indices = self.short_matches(short);
        collect(indices, |index| &self.token_set.short_options[index].1)
    }

    /// The long options under this view: names equal under the view's case-sensitivity are merged.
    pub fn long_options(&self) -> Vec<(&'a str, Vec<&'a str>)> {
        let mut merged: Vec<(&'a str, Vec<&'a str>)> = Vec::default();

        for (key, values) in &self.token_set.long_options {
            match merged
                .iter_mut()
                .find(|(name, _)| names_equal(name, key, self.case_sensitive))
            {
                Some((_, existing)) => existing.extend(values.iter().map(String::as_str)),
                None => merged.push((key.as_str(), values.iter().map(String::as_str).collect())),
            }
        }

        merged
    }

    /// The short options under this view: names equal under the view's case-sensitivity are merged.
    pub fn short_options(&self) -> Vec<(char, Vec<&'a str>)> {
        let mut merged: Vec<(char, Vec<&'a str>)> = Vec::default();

        for (key, values) in &self.token_set.short_options {
            match merged
                .iter_mut()
                .find(|(short, _)| chars_equal(*short, *key, self.case_sensitive))
            {
                Some((_, existing)) => existing.extend(values.iter().map(String::as_str)),
                None => merged.push((*key, values.iter().map(String::as_str).collect())),
            }
        }

        merged
    }
}

fn collect<'a>(
    indices: Vec<usize>,
    values_at: impl Fn(usize) -> &'a Vec<String>,
) -> Option<Vec<String>> {
    if indices.is_empty() {
        None
    } else {
        Some(
            indices
                .into_iter()
                .flat_map(|index| values_at(index).iter().cloned())
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Long(usize),
    Short(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Awaiting {
    Nothing,
    One(Slot),
    Many(Slot),
    Literal(Slot),
}

/// Accumulates a [`TokenSet`] while a tokenizer walks the input.
///
/// Tracks which option (if any) is waiting for detached values, and when the input switched into positional-only mode.
#[derive(Debug)]
pub(crate) struct TokenSetBuilder {
    case_sensitive: bool,
    long_options: Vec<(String, Vec<String>)>,
    short_options: Vec<(char, Vec<String>)>,
    positionals: Vec<String>,
    leading: usize,
    seen_option: bool,
    positional_only: bool,
    awaiting: Awaiting,
}

impl TokenSetBuilder {
    pub(crate) fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            long_options: Vec::default(),
            short_options: Vec::default(),
            positionals: Vec::default(),
            leading: 0,
            seen_option: false,
            positional_only: false,
            awaiting: Awaiting::Nothing,
        }
    }

    pub(crate) fn is_positional_only(&self) -> bool {
        self.positional_only
    }

    /// Switch (irrevocably) into positional-only mode.
    pub(crate) fn end_options(&mut self) {
        self.seen_option = true;
        self.positional_only = true;
        self.awaiting = Awaiting::Nothing;
    }

    pub(crate) fn long(&mut self, name: &str) -> Slot {
        self.seen_option = true;
        self.awaiting = Awaiting::Nothing;
        let case_sensitive = self.case_sensitive;

        match self
            .long_options
            .iter()
            .position(|(key, _)| names_equal(key, name, case_sensitive))
        {
            Some(index) => Slot::Long(index),
            None => {
                self.long_options.push((name.to_string(), Vec::default()));
                Slot::Long(self.long_options.len() - 1)
            }
        }
    }

    pub(crate) fn short(&mut self, short: char) -> Slot {
        self.seen_option = true;
        self.awaiting = Awaiting::Nothing;
        let case_sensitive = self.case_sensitive;

        match self
            .short_options
            .iter()
            .position(|(key, _)| chars_equal(*key, short, case_sensitive))
        {
            Some(index) => Slot::Short(index),
            None => {
                self.short_options.push((short, Vec::default()));
                Slot::Short(self.short_options.len() - 1)
            }
        }
    }

    pub(crate) fn key(&mut self, key: OptionKey<'_>) -> Slot {
        match key {
            OptionKey::Long(name) => self.long(name),
            OptionKey::Short(short) => self.short(short),
        }
    }

    /// Attach an inline value; an empty inline value leaves the option present with no values.
    pub(crate) fn push_value(&mut self, slot: Slot, value: &str) {
        if value.is_empty() {
            return;
        }

        match slot {
            Slot::Long(index) => self.long_options[index].1.push(value.to_string()),
            Slot::Short(index) => self.short_options[index].1.push(value.to_string()),
        }
    }

    /// The option takes the next value token, if there is one.
    pub(crate) fn expect_one(&mut self, slot: Slot) {
        self.awaiting = Awaiting::One(slot);
    }

    /// The option takes every value token up to the next option.
    pub(crate) fn expect_many(&mut self, slot: Slot) {
        self.awaiting = Awaiting::Many(slot);
    }

    /// The (boolean) option takes the next token only if it is a boolean literal.
    pub(crate) fn expect_literal(&mut self, slot: Slot) {
        self.awaiting = Awaiting::Literal(slot);
    }

    /// Accept a non-option token: either a detached option value or a positional argument.
    pub(crate) fn value(&mut self, token: &str) {
        match self.awaiting {
            Awaiting::Nothing => self.positional(token),
            Awaiting::One(slot) => {
                self.attach(slot, token);
                self.awaiting = Awaiting::Nothing;
            }
            Awaiting::Many(slot) => self.attach(slot, token),
            Awaiting::Literal(slot) => {
                self.awaiting = Awaiting::Nothing;

                if boolean_literal(token).is_some() {
                    self.attach(slot, token);
                } else {
                    self.positional(token);
                }
            }
        }
    }

    pub(crate) fn positional(&mut self, token: &str) {
        self.positionals.push(token.to_string());

        if !self.seen_option {
            self.leading += 1;
        }
    }

    fn attach(&mut self, slot: Slot, token: &str) {
        match slot {
            Slot::Long(index) => self.long_options[index].1.push(token.to_string()),
            Slot::Short(index) => self.short_options[index].1.push(token.to_string()),
        }
    }

    pub(crate) fn build(self, url_scheme: Option<String>) -> TokenSet {
        let TokenSetBuilder {
            case_sensitive,
            long_options,
            short_options,
            positionals,
            leading,
            ..
        } = self;

        TokenSet {
            case_sensitive,
            long_options,
            short_options,
            positionals,
            leading,
            url_scheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case("n", OptionKey::Short('n'))]
    #[case("é", OptionKey::Short('é'))]
    #[case("name", OptionKey::Long("name"))]
    #[case("", OptionKey::Long(""))]
    fn option_key(#[case] name: &str, #[case] expected: OptionKey) {
        assert_eq!(OptionKey::of(name), expected);
    }

    #[test]
    fn builder_values() {
        // Setup
        let mut builder = TokenSetBuilder::new(true);

        // Execute
        builder.value("command");
        let slot = builder.long("name");
        builder.expect_one(slot);
        builder.value("a");
        builder.value("b");
        let slot = builder.short('v');
        builder.expect_many(slot);
        builder.value("c");
        builder.value("d");
        let slot = builder.long("name");
        builder.push_value(slot, "e");
        builder.push_value(slot, "");
        let token_set = builder.build(None);

        // Verify
        assert_eq!(
            token_set.long_options(),
            &[("name".to_string(), strings(&["a", "e"]))]
        );
        assert_eq!(
            token_set.short_options(),
            &[('v', strings(&["c", "d"]))]
        );
        assert_eq!(token_set.positionals(), strings(&["command", "b"]));
        assert_eq!(token_set.leading_positionals(), strings(&["command"]));
        assert_eq!(token_set.guessed_command_name(), Some("command"));
    }

    #[rstest]
    #[case("false", vec!["false"], vec![])]
    #[case("On", vec!["On"], vec![])]
    #[case("0", vec!["0"], vec![])]
    #[case("value", vec![], vec!["value"])]
    fn builder_literal(
        #[case] token: &str,
        #[case] expected_values: Vec<&str>,
        #[case] expected_positionals: Vec<&str>,
    ) {
        // Setup
        let mut builder = TokenSetBuilder::new(false);

        // Execute
        let slot = builder.long("flag");
        builder.expect_literal(slot);
        builder.value(token);
        let token_set = builder.build(None);

        // Verify
        assert_eq!(
            token_set.long_options(),
            &[("flag".to_string(), strings(&expected_values))]
        );
        assert_eq!(token_set.positionals(), strings(&expected_positionals));
        assert_eq!(token_set.guessed_command_name(), None);
    }

    #[test]
    fn builder_end_options() {
        // Setup
        let mut builder = TokenSetBuilder::new(false);

        // Execute
        let slot = builder.long("name");
        builder.expect_one(slot);
        builder.end_options();
        builder.value("--value");

        // Verify
        assert!(builder.is_positional_only());
        let token_set = builder.build(None);
        assert_eq!(
            token_set.long_options(),
            &[("name".to_string(), Vec::default())]
        );
        assert_eq!(token_set.positionals(), strings(&["--value"]));
        assert!(token_set.leading_positionals().is_empty());
    }

    #[rstest]
    #[case(true, 2)]
    #[case(false, 1)]
    fn builder_case_uniqueness(#[case] case_sensitive: bool, #[case] expected: usize) {
        // Setup
        let mut builder = TokenSetBuilder::new(case_sensitive);

        // Execute
        builder.long("Name");
        builder.long("name");
        builder.short('V');
        builder.short('v');
        let token_set = builder.build(None);

        // Verify
        assert_eq!(token_set.long_options().len(), expected);
        assert_eq!(token_set.short_options().len(), expected);
        assert_eq!(token_set.long_options()[0].0, "Name");
    }

    fn mixed_case_set() -> TokenSet {
        let mut builder = TokenSetBuilder::new(true);
        let slot = builder.long("Name");
        builder.push_value(slot, "a");
        let slot = builder.long("name");
        builder.push_value(slot, "b");
        let slot = builder.short('v');
        builder.push_value(slot, "c");
        builder.build(None)
    }

    #[test]
    fn view_same_case_sensitivity() {
        // Setup
        let token_set = mixed_case_set();

        // Execute
        let view = token_set.view(token_set.is_case_sensitive());

        // Verify
        assert!(std::ptr::eq(view.token_set(), &token_set));
        let expected: Vec<(&str, Vec<&str>)> = token_set
            .long_options()
            .iter()
            .map(|(k, vs)| (k.as_str(), vs.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(view.long_options(), expected);
        assert_eq!(view.long_values("Name"), Some(strings(&["a"])));
        assert_eq!(view.long_values("NAME"), None);
        assert_eq!(view.short_values('V'), None);
    }

    #[test]
    fn view_case_insensitive() {
        // Setup
        let token_set = mixed_case_set();

        // Execute
        let view = token_set.view(false);

        // Verify
        assert_eq!(view.long_options(), vec![("Name", vec!["a", "b"])]);
        assert_eq!(view.long_matches("NAME"), vec![0, 1]);
        assert_eq!(view.long_values("nAmE"), Some(strings(&["a", "b"])));
        assert_eq!(view.short_values('V'), Some(strings(&["c"])));
        assert_eq!(view.short_options(), vec![('v', vec!["c"])]);
        assert_eq!(view.long_values("other"), None);
    }
}
