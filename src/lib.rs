//! Lexical analysis for the Omix scripting language.
//!
//! ```
//! use omix::TokenKind;
//!
//! let scanned = omix::scan("var answer = 42;");
//! assert!(!scanned.has_errors());
//!
//! let kinds: Vec<_> = scanned.tokens().iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     vec![
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfFile,
//!     ],
//!     kinds
//! );
//! ```

pub mod error;
pub mod scanner;
pub mod token;

pub use crate::{
    error::{LexicalError, Phase, Result},
    scanner::{Scanned, Scanner},
    token::{Literal, Token, TokenKind},
};

/// Scans a complete source string.
pub fn scan(source: &str) -> Scanned {
    Scanner::new(source).scan_tokens()
}
