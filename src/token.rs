use std::{
    fmt::{self, Display},
    ops::Range,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String, Number,

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            And | Class | Else | False | Fun | For | If | Nil | Or
                | Print | Return | Super | This | True | Var | While
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::EndOfFile => write!(f, "Eof"),
            kind => write!(f, "{:?}", kind),
        }
    }
}

/// The interpreted value of a `String` or `Number` token.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{}", s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) literal: Option<Literal>,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) span: Range<usize>,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// Line of the first character of the lexeme.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the first character of the lexeme. For `EndOfFile` this is
    /// the column just past the last character of the source.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte range of the lexeme within the scanned source.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn number(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Lexeme: {}, Literal: ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(lit) => write!(f, "{}", lit)?,
            None => write!(f, "nil")?,
        }
        write!(f, ", Line: {}, Column: {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(kind: TokenKind, lexeme: &str, literal: Option<Literal>) -> Token {
        Token { kind, lexeme: lexeme.into(), literal, line: 1, column: 1, span: 0..lexeme.len() }
    }

    #[test]
    fn end_of_file_displays_as_eof() {
        assert_eq!("Eof", TokenKind::EndOfFile.to_string());
        assert_eq!("BangEqual", TokenKind::BangEqual.to_string());
    }

    #[test]
    fn token_without_literal_displays_nil() {
        let t = make(TokenKind::Var, "var", None);
        assert_eq!("Type: Var, Lexeme: var, Literal: nil, Line: 1, Column: 1", t.to_string());
    }

    #[test]
    fn number_token_displays_its_value() {
        let t = make(TokenKind::Number, "12.5", Some(Literal::Number(12.5)));
        assert_eq!("Type: Number, Lexeme: 12.5, Literal: 12.5, Line: 1, Column: 1", t.to_string());
        assert_eq!(Some(12.5), t.number());
        assert_eq!(None, t.string());
    }

    #[test]
    fn string_token_exposes_its_contents() {
        let t = make(TokenKind::String, "\"hi\"", Some(Literal::String("hi".into())));
        assert_eq!(Some("hi"), t.string());
        assert_eq!(None, t.number());
    }

    #[test]
    fn keywords_are_classified() {
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::EndOfFile.is_keyword());
    }
}
