/// The command line dialect used to tokenize the input.
///
/// The URL dialect is not listed here: it is selected implicitly when the whole input is a single
/// `scheme://..` token for one of the [`ParsingOptions::url_scheme`](./struct.ParsingOptions.html#method.url_scheme) registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParsingStyle {
    /// Auto-detecting superset: `--`, `-` and `/` prefixes; `=`, `:` or space separators.
    #[default]
    Flexible,
    /// `--name[=|:value]`, `-x`, `-abc` combinations and `-ovalue`.
    Gnu,
    /// Short options only; `-a -b -c` or `-abc` (all boolean).
    Posix,
    /// `-name:value`, `--name:value`, `/name:value` (also `=`).
    DotNet,
    /// `-ParameterName value` and `/ParameterName value`.
    PowerShell,
}

impl ParsingStyle {
    /// Whether option names are compared case-sensitively when not overridden.
    pub fn is_case_sensitive(&self) -> bool {
        match self {
            ParsingStyle::Gnu | ParsingStyle::Posix => true,
            ParsingStyle::Flexible | ParsingStyle::DotNet | ParsingStyle::PowerShell => false,
        }
    }
}

impl std::fmt::Display for ParsingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsingStyle::Flexible => write!(f, "Flexible"),
            ParsingStyle::Gnu => write!(f, "GNU"),
            ParsingStyle::Posix => write!(f, "POSIX"),
            ParsingStyle::DotNet => write!(f, "DotNet"),
            ParsingStyle::PowerShell => write!(f, "PowerShell"),
        }
    }
}

/// The semantic shape of the value an option/positional binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Presence-implies-true flags.
    Boolean,
    /// Integer and floating point numbers.
    Number,
    /// Text (including single characters).
    String,
    /// A named variant of a fieldless enum.
    Enum,
    /// Any number of values collected into a container.
    List,
    /// `key=value` pairs collected into a map.
    Dictionary,
}

impl ValueKind {
    /// How an option of this kind consumes the tokens that follow it.
    pub fn arity(&self) -> Arity {
        match self {
            ValueKind::Boolean => Arity::Flag,
            ValueKind::List | ValueKind::Dictionary => Arity::Many,
            ValueKind::Number | ValueKind::String | ValueKind::Enum => Arity::Single,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The number of detached value tokens an option may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// No detached values; presence alone is meaningful.
    Flag,
    /// Precisely one detached value.
    Single,
    /// Any number of detached values (style permitting).
    Many,
}

/// How a `String` target reduces multiple supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MultiValueHandling {
    /// Keep the first value.
    #[default]
    First,
    /// Keep the last value.
    Last,
    /// Join all values with a space.
    SpaceAll,
    /// Join all values with a slash.
    SlashAll,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueKind::Boolean, Arity::Flag)]
    #[case(ValueKind::Number, Arity::Single)]
    #[case(ValueKind::String, Arity::Single)]
    #[case(ValueKind::Enum, Arity::Single)]
    #[case(ValueKind::List, Arity::Many)]
    #[case(ValueKind::Dictionary, Arity::Many)]
    fn kind_arity(#[case] kind: ValueKind, #[case] expected: Arity) {
        assert_eq!(kind.arity(), expected);
    }

    #[test]
    fn style_case_sensitivity() {
        assert!(ParsingStyle::Gnu.is_case_sensitive());
        assert!(ParsingStyle::Posix.is_case_sensitive());
        assert!(!ParsingStyle::Flexible.is_case_sensitive());
        assert!(!ParsingStyle::DotNet.is_case_sensitive());
        assert!(!ParsingStyle::PowerShell.is_case_sensitive());
        assert_eq!(ParsingStyle::default(), ParsingStyle::Flexible);
    }
}
