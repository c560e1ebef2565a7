use crate::model::ParsingStyle;
use crate::parser::ParseError;
use crate::prelude::OptionLookup;
use crate::tokens::flexible::{tokenize_prefixed, Rules};
use crate::tokens::model::TokenSet;

// Booleans take no detached value; `-flag:false` is the only way to pass one.
const DOTNET: Rules = Rules {
    style: ParsingStyle::DotNet,
    boolean_literals: false,
    long_separators: true,
};

pub(super) fn tokenize(
    args: &[String],
    case_sensitive: bool,
    lookup: &dyn OptionLookup,
) -> Result<TokenSet, ParseError> {
    tokenize_prefixed(args, case_sensitive, lookup, DOTNET)
}
