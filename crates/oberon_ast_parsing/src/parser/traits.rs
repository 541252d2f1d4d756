use crate::parser::{ParseResult, Parser};

/// Parse a syntax tree part
pub trait Parsable: Sized {
    /// The name of the non-terminal, as shown in error messages
    const NON_TERMINAL: &'static str;

    /// Attempt to parse some syntax tree part
    fn parse(parser: &mut Parser<'_>) -> ParseResult<Self>;
}

/// A sub trait that determines if this type could be parsed without doing the parsing
pub trait CouldParse: Parsable {
    /// Checks the lookahead without consuming anything
    fn could_parse(parser: &mut Parser<'_>) -> ParseResult<bool>;
}
