use crate::{
    error::{LexicalError, Result},
    token::{Literal, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::CharIndices;
use tracing::{debug, trace};

pub(crate) static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Everything a single pass over a source string produced.
#[derive(Debug, PartialEq, Clone)]
pub struct Scanned {
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
}

impl Scanned {
    /// Always ends with exactly one `EndOfFile` token.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<LexicalError>) {
        (self.tokens, self.errors)
    }
}

/// Walks a source string one character at a time, yielding tokens and
/// lexical errors in the order they occur.
///
/// Iterating never yields the trailing `EndOfFile` token; use
/// [`Scanner::scan_tokens`] for the complete token list.
pub struct Scanner<'a> {
    source: &'a str,
    src: PeekMoreIterator<CharIndices<'a>>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        loop {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;

            let next_char = self.advance()?;
            if let Some(result) = self.next_token(next_char) {
                return Some(result);
            }
        }
    }
}

impl <'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            src: source.char_indices().peekmore(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Scanned {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for result in self.by_ref() {
            match result {
                Ok(token) => tokens.push(token),
                Err(e) => errors.push(e),
            }
        }

        tokens.push(Token {
            kind: TokenKind::EndOfFile,
            lexeme: String::new(),
            literal: None,
            line: self.line,
            column: self.column,
            span: self.current..self.current,
        });
        debug!(tokens = tokens.len(), errors = errors.len(), "finished scanning");

        Scanned { tokens, errors }
    }

    fn next_token(&mut self, c: char) -> Option<Result<Token>> {
        use TokenKind::*;
        match c {
            '(' => self.token(LeftParen),
            ')' => self.token(RightParen),
            '{' => self.token(LeftBrace),
            '}' => self.token(RightBrace),
            ',' => self.token(Comma),
            '-' => self.token(Minus),
            '+' => self.token(Plus),
            ';' => self.token(Semicolon),
            '*' => self.token(Star),
            '.' => self.extract_dot(),
            '!' => self.token_if_next_matches('=', BangEqual, Bang),
            '=' => self.token_if_next_matches('=', EqualEqual, Equal),
            '<' => self.token_if_next_matches('=', LessEqual, Less),
            '>' => self.token_if_next_matches('=', GreaterEqual, Greater),
            '/' => {
                if self.does_next_match('/') {
                    self.advance_while(|n| n != '\n');
                    None
                } else {
                    self.token(Slash)
                }
            },
            // newlines are accounted for in `advance`
            ' ' | '\r' | '\t' | '\n' => None,
            '"' => Some(self.extract_string()),
            c if is_digit(c) => Some(self.extract_number()),
            c if is_alpha(c) => Some(self.extract_identifier()),
            c => Some(Err(self.error(LexicalError::unexpected_character(
                self.start_line,
                self.start_column,
                c,
            )))),
        }
    }

    /// A dot may not start a number (`.5`) or an identifier (`.x`). The
    /// digit or identifier run after the dot is consumed with it.
    fn extract_dot(&mut self) -> Option<Result<Token>> {
        match self.peek() {
            Some(c) if is_digit(c) => {
                self.advance_while(is_digit);
                Some(Err(self.error(LexicalError::invalid_number(
                    self.start_line,
                    self.start_column,
                ))))
            },
            Some(c) if is_alpha(c) => {
                self.advance_while(is_alphanumeric);
                Some(Err(self.error_here("Invalid identifier: cannot start with a dot")))
            },
            _ => self.token(TokenKind::Dot),
        }
    }

    fn extract_string(&mut self) -> Result<Token> {
        self.advance_while(|n| n != '"');
        if self.advance().is_none() {
            return Err(self.error(LexicalError::unterminated_string(
                self.start_line,
                self.start_column,
            )));
        }

        let source = self.source;
        let value = &source[self.start + 1..self.current - 1];
        Ok(self.make_token(TokenKind::String, Some(Literal::String(value.to_string()))))
    }

    fn extract_number(&mut self) -> Result<Token> {
        self.advance_while(is_digit);

        if self.peek().map_or(false, is_alpha) {
            self.advance_while(is_alphanumeric);
            return Err(self.error_here("Invalid identifier: cannot start with a number"));
        }

        if self.peek() == Some('.') {
            if !self.peek_next().map_or(false, is_digit) {
                return Err(self.reject_dot_after_number());
            }

            self.advance();
            self.advance_while(is_digit);

            if self.peek() == Some('.') {
                return Err(self.reject_dot_after_number());
            }
        }

        let lexeme = self.lexeme();
        match lexeme.parse() {
            Err(_) => Err(self.error_here(format!("Invalid Number: {}", lexeme))),
            Ok(number) => Ok(self.make_token(TokenKind::Number, Some(Literal::Number(number)))),
        }
    }

    /// The number ends before a misplaced dot. A dot that leads into digits
    /// or a name is left for `extract_dot` to report on its own; a bare one
    /// is swallowed here.
    fn reject_dot_after_number(&mut self) -> LexicalError {
        if !self.peek_next().map_or(false, is_alphanumeric) {
            self.advance();
        }
        self.error(LexicalError::invalid_number(self.start_line, self.start_column))
    }

    fn extract_identifier(&mut self) -> Result<Token> {
        self.advance_while(is_alphanumeric);

        let kind = KEYWORDS
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        Ok(self.make_token(kind, None))
    }

    fn token(&self, kind: TokenKind) -> Option<Result<Token>> {
        Some(Ok(self.make_token(kind, None)))
    }

    fn token_if_next_matches(
        &mut self,
        c: char,
        matched: TokenKind,
        otherwise: TokenKind,
    ) -> Option<Result<Token>> {
        let kind = if self.does_next_match(c) { matched } else { otherwise };
        self.token(kind)
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let token = Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal,
            line: self.start_line,
            column: self.start_column,
            span: self.start..self.current,
        };
        trace!(
            kind = %token.kind,
            lexeme = token.lexeme.as_str(),
            line = token.line,
            column = token.column,
            "token"
        );
        token
    }

    fn error_here<S: Into<String>>(&self, message: S) -> LexicalError {
        self.error(LexicalError::new(self.start_line, self.start_column, message))
    }

    fn error(&self, e: LexicalError) -> LexicalError {
        debug!(line = e.line(), column = e.column(), "{}", e.message());
        e
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn peek(&mut self) -> Option<char> {
        self.src.peek().map(|&(_, c)| c)
    }

    fn peek_next(&mut self) -> Option<char> {
        self.src.peek_nth(1).map(|&(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (offset, c) = self.src.next()?;
        self.current = offset + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.peek() {
            Some(next) if next == c => {
                self.advance();
                true
            },
            _ => false,
        }
    }

    fn advance_while(&mut self, should_continue: impl Fn(char) -> bool) {
        while let Some(next) = self.peek() {
            if !should_continue(next) {
                break;
            }
            self.advance();
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
