//! nom parsers for single tokens and the insignificant text between them

use crate::lexer::LexErrorKind;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till, take_until};
use nom::character::complete::{alpha1, alphanumeric1, anychar, char, digit1, multispace1};
use nom::combinator::{cut, map, map_res, opt, peek, recognize, rest, value, verify};
use nom::error::{context, ContextError, ErrorKind, FromExternalError, ParseError};
use nom::multi::{fold_many0, many0_count};
use nom::sequence::{pair, preceded, terminated};
use nom::{IResult, Parser};
use oberon_tokens::token::TokenKind;

pub(super) type Result<'a, O> = IResult<&'a str, O, TokenError<'a>>;

/// The nom error type used while lexing.
///
/// Plain combinator failures carry no kind. Failures that have a specific lexical meaning carry a
/// [LexErrorKind] and are raised as [nom::Err::Failure] so that no other alternative is tried.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TokenError<'a> {
    pub(super) input: &'a str,
    pub(super) kind: Option<LexErrorKind>,
}

impl<'a> TokenError<'a> {
    pub(super) fn new(input: &'a str, kind: Option<LexErrorKind>) -> Self {
        Self { input, kind }
    }
}

impl<'a> ParseError<&'a str> for TokenError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self::new(input, None)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn or(self, other: Self) -> Self {
        if other.kind.is_some() {
            other
        } else {
            self
        }
    }
}

impl<'a> ContextError<&'a str> for TokenError<'a> {}

impl<'a> FromExternalError<&'a str, LexErrorKind> for TokenError<'a> {
    fn from_external_error(input: &'a str, _kind: ErrorKind, e: LexErrorKind) -> Self {
        Self::new(input, Some(e))
    }
}

/// Parses a single token from the start of `src`.
///
/// `src` must not start with insignificant text.
pub(super) fn parse_token(src: &str) -> Result<'_, TokenKind> {
    context(
        "token",
        alt((
            parse_word,
            parse_number,
            parse_string,
            parse_operator,
            parse_punctuation,
            invalid_char,
        )),
    )(src)
}

/// Skips whitespace, line comments and block comments
pub(super) fn parse_insignificant(src: &str) -> Result<'_, ()> {
    context(
        "insignificant",
        value(
            (),
            many0_count(alt((
                context("whitespace", multispace1),
                context(
                    "line comment",
                    recognize(pair(tag("//"), take_till(|c: char| c == '\n'))),
                ),
                context(
                    "block comment",
                    recognize(preceded(
                        tag("/*"),
                        alt((
                            terminated(take_until("*/"), tag("*/")),
                            unterminated(rest, LexErrorKind::UnterminatedComment),
                        )),
                    )),
                ),
            ))),
        ),
    )(src)
}

/// Recognizes `[a-zA-Z_][a-zA-Z0-9_]*`
pub(super) fn recognize_identifier(input: &str) -> Result<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// Runs `skipped` and then fails at the position it stopped at.
///
/// Used for constructs that were opened but never closed.
fn unterminated<'a, O, F>(
    mut skipped: F,
    kind: LexErrorKind,
) -> impl FnMut(&'a str) -> Result<'a, O>
where
    F: Parser<&'a str, &'a str, TokenError<'a>>,
{
    move |input: &'a str| {
        let (rest, _) = skipped.parse(input)?;
        Err(nom::Err::Failure(TokenError::new(rest, Some(kind.clone()))))
    }
}

fn invalid_char(input: &str) -> Result<'_, TokenKind> {
    let (_, c) = anychar(input)?;
    Err(nom::Err::Failure(TokenError::new(
        input,
        Some(LexErrorKind::InvalidChar(c)),
    )))
}

fn parse_word(src: &str) -> Result<'_, TokenKind> {
    context(
        "word",
        map(recognize_identifier, |word: &str| {
            TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Identifier(word.to_string()))
        }),
    )(src)
}

fn parse_operator(src: &str) -> Result<'_, TokenKind> {
    context(
        "operator",
        alt((
            value(TokenKind::Eq, tag("==")),
            value(TokenKind::Neq, tag("!=")),
            value(TokenKind::Lte, tag("<=")),
            value(TokenKind::Gte, tag(">=")),
            value(TokenKind::And, tag("&&")),
            value(TokenKind::Or, tag("||")),
            value(TokenKind::Bang, char('!')),
            value(TokenKind::Assign, char('=')),
            value(TokenKind::Lt, char('<')),
            value(TokenKind::Gt, char('>')),
            value(TokenKind::Plus, char('+')),
            value(TokenKind::Minus, char('-')),
            value(TokenKind::Star, char('*')),
            value(TokenKind::Div, char('/')),
            value(TokenKind::Rem, char('%')),
        )),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<'_, TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::SemiColon, char(';')),
            value(TokenKind::Comma, char(',')),
            value(TokenKind::LParen, char('(')),
            value(TokenKind::RParen, char(')')),
            value(TokenKind::LCurly, char('{')),
            value(TokenKind::RCurly, char('}')),
        )),
    )(src)
}

fn parse_number(input: &str) -> Result<'_, TokenKind> {
    context(
        "number",
        preceded(
            peek(digit1),
            cut(map_res(
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                number_kind,
            )),
        ),
    )(input)
}

fn number_kind(text: &str) -> std::result::Result<TokenKind, LexErrorKind> {
    let invalid = || LexErrorKind::InvalidNumber(text.to_string());
    if text.contains('.') {
        text.parse().map(TokenKind::Float).map_err(|_| invalid())
    } else {
        text.parse().map(TokenKind::Integer).map_err(|_| invalid())
    }
}

#[derive(Debug, Clone)]
enum StringFragment<'a> {
    Literal(&'a str),
    EscapedChar(char),
}

fn parse_literal_str(input: &str) -> Result<'_, &str> {
    let not_quoted = is_not("\"\\\n");
    verify(not_quoted, |s: &str| !s.is_empty())(input)
}

fn parse_escaped_char(input: &str) -> Result<'_, char> {
    preceded(
        char('\\'),
        alt((
            value('"', char('"')),
            value('\\', char('\\')),
            value('\n', char('n')),
            value('\t', char('t')),
            value('\r', char('r')),
            value('\0', char('0')),
            invalid_escape,
        )),
    )(input)
}

fn invalid_escape(input: &str) -> Result<'_, char> {
    let (_, c) = anychar(input)?;
    Err(nom::Err::Failure(TokenError::new(
        input,
        Some(LexErrorKind::InvalidEscape(c)),
    )))
}

fn parse_string_fragment(input: &str) -> Result<'_, StringFragment> {
    alt((
        map(parse_literal_str, StringFragment::Literal),
        map(parse_escaped_char, StringFragment::EscapedChar),
    ))(input)
}

fn parse_string_value(input: &str) -> Result<'_, String> {
    let build_string = fold_many0(
        parse_string_fragment,
        String::new,
        |mut accum, next| {
            match next {
                StringFragment::Literal(l) => accum.push_str(l),
                StringFragment::EscapedChar(c) => accum.push(c),
            }
            accum
        },
    );
    let closing_quote = alt((
        char('"'),
        unterminated(
            take_till(|c: char| c == '\n'),
            LexErrorKind::UnterminatedString,
        ),
    ));

    preceded(char('"'), cut(terminated(build_string, closing_quote)))(input)
}

fn parse_string(input: &str) -> Result<'_, TokenKind> {
    context("string", map(parse_string_value, TokenKind::String))(input)
}
