use std::fmt;

use crate::src_loc::SrcLoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Def,
  Ident,
  IntLit,
  Colon,
  LParen,
  RParen,
  Comma,
  /// Never produced by the lexer, reported when lookahead runs off the end.
  Eof,
}

impl TokenKind {
  pub const fn name(self) -> &'static str {
    match self {
      TokenKind::Def => "def",
      TokenKind::Ident => "identifier",
      TokenKind::IntLit => "integer",
      TokenKind::Colon => "colon",
      TokenKind::LParen => "open_paren",
      TokenKind::RParen => "close_paren",
      TokenKind::Comma => "comma",
      TokenKind::Eof => "end of input",
    }
  }
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub value: String,
  pub loc: SrcLoc,
}

impl Token {
  pub fn new(kind: TokenKind, value: impl Into<String>, loc: SrcLoc) -> Self {
    Token { kind, value: value.into(), loc }
  }
}
