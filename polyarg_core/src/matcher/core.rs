use crate::tokens::names_equal;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The (possibly multi-level) name selecting a schema.
///
/// Zero levels is the default command, which matches any input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    levels: Vec<String>,
    case_sensitive: Option<bool>,
}

impl CommandDescriptor {
    /// The default (no name) command.
    pub fn default_command() -> Self {
        Self {
            levels: Vec::default(),
            case_sensitive: None,
        }
    }

    /// A command named by space separated levels (ex: `"remote add"`).
    pub fn named(name: &str) -> Self {
        Self {
            levels: name.split_whitespace().map(String::from).collect(),
            case_sensitive: None,
        }
    }

    /// Override the parser's case-sensitivity for this command's name.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// The levels of the name.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// The name, with levels joined by single spaces.
    pub fn name(&self) -> String {
        self.levels.join(" ")
    }

    /// Whether this is the default (no name) command.
    pub fn is_default(&self) -> bool {
        self.levels.is_empty()
    }

    /// The case-sensitivity override, if any.
    pub fn is_case_sensitive(&self) -> Option<bool> {
        self.case_sensitive
    }

    /// Whether the leading positional arguments start with every level of this name.
    pub fn matches(&self, leading: &[String], case_sensitive: bool) -> bool {
        let case_sensitive = self.case_sensitive.unwrap_or(case_sensitive);

        self.levels.len() <= leading.len()
            && self
                .levels
                .iter()
                .zip(leading)
                .all(|(level, token)| names_equal(level, token, case_sensitive))
    }
}

/// Select the command for the leading positional arguments of a command line.
///
/// The command with the most matching levels wins; the default command matches only when no named command does.
/// Levels compare as whole tokens, so `"bar"` never matches an input of `"barbaz"`.
pub fn match_command<'d, I>(
    leading: &[String],
    commands: I,
    case_sensitive: bool,
) -> Option<&'d CommandDescriptor>
where
    I: IntoIterator<Item = &'d CommandDescriptor>,
{
    let mut best: Option<&'d CommandDescriptor> = None;

    for command in commands {
        if command.matches(leading, case_sensitive)
            && best
                .map(|best| command.levels.len() > best.levels.len())
                .unwrap_or(true)
        {
            best = Some(command);
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Matched {leading:?} to command {:?}.",
            best.map(CommandDescriptor::name)
        );
    }

    best
}
