//! Engine module for `polyarg`.
//! See [documentation root](https://docs.rs/polyarg/latest/polyarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod convert;
mod matcher;
mod model;
pub mod naming;
mod parser;
pub mod prelude;
mod tokens;

pub use api::*;
pub use convert::*;
pub use matcher::*;
pub use model::*;
pub use parser::{ConfigError, ParseError, ParseErrorKind};
pub use tokens::{join_command_line, split_command_line, OptionKey, TokenSet, TokenSetView};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
