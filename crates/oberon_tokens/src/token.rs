//! A lexical token from a source file

use crate::location::{Located, SourceLocation};
use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source file
#[derive(Clone)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    location: SourceLocation,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// The exact source text this token was scanned from
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The location directly after this token
    pub fn end(&self) -> SourceLocation {
        self.location.end_of(&self.lexeme)
    }

    pub fn into_kind(self) -> TokenKind {
        self.kind
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.kind, f)
    }
}

impl Located for Token {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// The broad class a [TokenKind] belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
}

/// The kind for a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // keywords
    Function,
    Var,
    If,
    Else,
    While,
    Return,
    True,
    False,

    Identifier(String),

    // literals
    Integer(i64),
    Float(f64),
    String(String),

    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Div,
    /// %
    Rem,
    /// ==
    Eq,
    /// !=
    Neq,
    /// <
    Lt,
    /// <=
    Lte,
    /// >
    Gt,
    /// >=
    Gte,
    /// &&
    And,
    /// ||
    Or,
    /// !
    Bang,
    /// =
    Assign,

    LParen,
    RParen,
    LCurly,
    RCurly,
    Comma,
    SemiColon,
}

impl TokenKind {
    /// Gets the keyword for a given word, if it is one
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "function" => TokenKind::Function,
            "var" => TokenKind::Var,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "return" => TokenKind::Return,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        };
        Some(kind)
    }

    /// Classifies this kind
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Function
            | TokenKind::Var
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Return => TokenCategory::Keyword,
            TokenKind::Identifier(_) => TokenCategory::Identifier,
            TokenKind::True
            | TokenKind::False
            | TokenKind::Integer(_)
            | TokenKind::Float(_)
            | TokenKind::String(_) => TokenCategory::Literal,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Div
            | TokenKind::Rem
            | TokenKind::Eq
            | TokenKind::Neq
            | TokenKind::Lt
            | TokenKind::Lte
            | TokenKind::Gt
            | TokenKind::Gte
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::Bang
            | TokenKind::Assign => TokenCategory::Operator,
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LCurly
            | TokenKind::RCurly
            | TokenKind::Comma
            | TokenKind::SemiColon => TokenCategory::Punctuation,
        }
    }

    /// The fixed spelling of this kind, if it has one
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Function => "function",
            TokenKind::Var => "var",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Div => "/",
            TokenKind::Rem => "%",
            TokenKind::Eq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Lte => "<=",
            TokenKind::Gt => ">",
            TokenKind::Gte => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Bang => "!",
            TokenKind::Assign => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::SemiColon => ";",
            TokenKind::Identifier(_)
            | TokenKind::Integer(_)
            | TokenKind::Float(_)
            | TokenKind::String(_) => return None,
        };
        Some(symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(id) => write!(f, "identifier `{id}`"),
            TokenKind::Integer(i) => write!(f, "integer `{i}`"),
            TokenKind::Float(float) => write!(f, "float `{float}`"),
            TokenKind::String(s) => write!(f, "string {s:?}"),
            other => match other.symbol() {
                Some(symbol) => write!(f, "`{symbol}`"),
                None => unreachable!("only literal kinds and identifiers have no symbol"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("function"), Some(TokenKind::Function));
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("functions"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(TokenKind::Return.category(), TokenCategory::Keyword);
        assert_eq!(TokenKind::True.category(), TokenCategory::Literal);
        assert_eq!(
            TokenKind::Identifier("x".to_string()).category(),
            TokenCategory::Identifier
        );
        assert_eq!(TokenKind::Lte.category(), TokenCategory::Operator);
        assert_eq!(TokenKind::SemiColon.category(), TokenCategory::Punctuation);
    }

    #[test]
    fn test_token_end() {
        let token = Token::new(
            TokenKind::Return,
            "return",
            SourceLocation::new("test.ob", 2, 3),
        );
        assert_eq!(token.end(), SourceLocation::new("test.ob", 2, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::RCurly.to_string(), "`}`");
        assert_eq!(
            TokenKind::Identifier("add".to_string()).to_string(),
            "identifier `add`"
        );
    }

    #[test]
    fn test_token_debug_shows_kind() {
        let token = Token::new(
            TokenKind::Identifier("x".to_string()),
            "x",
            SourceLocation::new("test.ob", 1, 1),
        );
        assert_eq!(format!("{token:?}"), r#"Identifier("x")"#);
    }
}
