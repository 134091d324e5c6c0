use crate::internal::{TokenKind as T, *};
use snafu::Snafu;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum LexError {
  #[snafu(display("no token recognized at offset {} (found `{found}`)", loc.offset))]
  NoTokenRecognized { found: char, loc: SrcLoc },
  #[snafu(display("source is {len} bytes, the limit is {}", MAX_SRC_LEN))]
  SourceTooLarge { len: usize },
}

/// Offsets are stored as `u32`.
pub const MAX_SRC_LEN: usize = u32::MAX as usize;

impl LexError {
  pub const fn loc(&self) -> SrcLoc {
    match self {
      LexError::NoTokenRecognized { loc, .. } => *loc,
      LexError::SourceTooLarge { .. } => SrcLoc::new(0, 0),
    }
  }
}

/// Returns the length of the match anchored at the start of `rest`, 0 if none.
type Matcher = fn(&[u8]) -> usize;

// priority order matters: `def` must win over a plain identifier
const PATTERNS: [(TokenKind, Matcher); 7] = [
  (T::Def, match_def),
  (T::Ident, match_ident),
  (T::IntLit, match_int_lit),
  (T::Colon, match_colon),
  (T::LParen, match_lparen),
  (T::RParen, match_rparen),
  (T::Comma, match_comma),
];

#[derive(Debug)]
pub struct Lexer<'a> {
  src: &'a str,
  pos: usize,
}

impl<'a> Lexer<'a> {
  pub fn new(src: &'a str) -> Self {
    Lexer { src, pos: 0 }
  }

  pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::with_capacity(32);
    while let Some(token) = self.next_token()? {
      tokens.push(token);
    }
    Ok(tokens)
  }

  pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
    check_src_len(self.src.len())?;
    self.skip_whitespace();
    let rest = &self.src[self.pos..];
    let Some(found) = rest.chars().next() else {
      return Ok(None);
    };
    for (kind, matcher) in PATTERNS {
      let len = matcher(rest.as_bytes());
      if len == 0 {
        continue;
      }
      let loc = SrcLoc::new(self.pos as u32, len as u32);
      let token = Token::new(kind, &rest[..len], loc);
      trace!(kind = %token.kind, value = %token.value, offset = loc.offset, "token");
      self.pos += len;
      return Ok(Some(token));
    }
    Err(LexError::NoTokenRecognized {
      found,
      loc: SrcLoc::new(self.pos as u32, found.len_utf8() as u32),
    })
  }

  fn skip_whitespace(&mut self) {
    let rest = self.src[self.pos..].trim_start();
    self.pos = self.src.len() - rest.len();
  }
}

fn check_src_len(len: usize) -> Result<(), LexError> {
  if len > MAX_SRC_LEN {
    return Err(LexError::SourceTooLarge { len });
  }
  Ok(())
}

const fn is_word_byte(byte: u8) -> bool {
  byte.is_ascii_alphanumeric() || byte == b'_'
}

/// A word only matches if it isn't immediately followed by another word byte.
fn match_word(rest: &[u8], pred: fn(&u8) -> bool) -> usize {
  let len = rest.iter().take_while(|&b| pred(b)).count();
  match rest.get(len) {
    Some(&next) if is_word_byte(next) => 0,
    _ => len,
  }
}

fn match_def(rest: &[u8]) -> usize {
  match rest.strip_prefix(b"def") {
    Some([next, ..]) if is_word_byte(*next) => 0,
    Some(_) => 3,
    None => 0,
  }
}

fn match_ident(rest: &[u8]) -> usize {
  match_word(rest, u8::is_ascii_alphabetic)
}

fn match_int_lit(rest: &[u8]) -> usize {
  match_word(rest, u8::is_ascii_digit)
}

fn match_byte(rest: &[u8], byte: u8) -> usize {
  usize::from(rest.first() == Some(&byte))
}

fn match_colon(rest: &[u8]) -> usize {
  match_byte(rest, b':')
}

fn match_lparen(rest: &[u8]) -> usize {
  match_byte(rest, b'(')
}

fn match_rparen(rest: &[u8]) -> usize {
  match_byte(rest, b')')
}

fn match_comma(rest: &[u8]) -> usize {
  match_byte(rest, b',')
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
      .lex()
      .unwrap()
      .into_iter()
      .map(|token| token.kind)
      .collect()
  }

  #[test]
  fn single_char_tokens_and_whitespace() {
    let mut lexer = Lexer::new(" :\t(\n) ,");
    let cases: &[(T, u32, &str)] = &[
      (T::Colon, 1, ":"),
      (T::LParen, 3, "("),
      (T::RParen, 5, ")"),
      (T::Comma, 7, ","),
    ];
    for (kind, offset, value) in cases {
      let token = lexer.next_token().unwrap().unwrap();
      assert_eq!(token.kind, *kind);
      assert_eq!(token.loc.offset, *offset);
      assert_eq!(token.value, *value);
    }
    assert_eq!(lexer.next_token(), Ok(None));
  }

  #[test]
  fn simple_program() {
    let tokens = Lexer::new("def add(x, y): add(x,17)").lex().unwrap();
    let cases: &[(T, &str)] = &[
      (T::Def, "def"),
      (T::Ident, "add"),
      (T::LParen, "("),
      (T::Ident, "x"),
      (T::Comma, ","),
      (T::Ident, "y"), // 5
      (T::RParen, ")"),
      (T::Colon, ":"),
      (T::Ident, "add"),
      (T::LParen, "("),
      (T::Ident, "x"), // 10
      (T::Comma, ","),
      (T::IntLit, "17"),
      (T::RParen, ")"),
    ];
    assert_eq!(tokens.len(), cases.len());
    for (token, (kind, value)) in tokens.iter().zip(cases) {
      assert_eq!(token.kind, *kind);
      assert_eq!(token.value, *value);
    }
  }

  #[test]
  fn def_keyword_takes_priority_over_ident() {
    assert_eq!(kinds("def"), vec![T::Def]);
    assert_eq!(kinds("define"), vec![T::Ident]);
    assert_eq!(kinds("deff def"), vec![T::Ident, T::Def]);
    assert_eq!(kinds("def(x)"), vec![T::Def, T::LParen, T::Ident, T::RParen]);
  }

  #[test]
  fn words_must_end_on_a_word_boundary() {
    for input in ["abc1", "1abc", "foo_bar", "def_"] {
      let err = Lexer::new(input).lex().unwrap_err();
      assert_eq!(err.loc().offset, 0, "input: {input}");
    }
  }

  #[test]
  fn unrecognized_char() {
    let err = Lexer::new("def f(): $").lex().unwrap_err();
    assert_eq!(
      err,
      LexError::NoTokenRecognized { found: '$', loc: SrcLoc::new(9, 1) }
    );
    assert_eq!(err.to_string(), "no token recognized at offset 9 (found `$`)");
  }

  #[test]
  fn multibyte_char_is_reported_whole() {
    let err = Lexer::new("def é").lex().unwrap_err();
    assert_eq!(
      err,
      LexError::NoTokenRecognized { found: 'é', loc: SrcLoc::new(4, 2) }
    );
  }

  #[test]
  fn oversized_source_is_an_error() {
    assert_eq!(check_src_len(MAX_SRC_LEN), Ok(()));
    assert_eq!(
      check_src_len(MAX_SRC_LEN + 1),
      Err(LexError::SourceTooLarge { len: MAX_SRC_LEN + 1 })
    );
  }

  #[test]
  fn empty_and_blank_input() {
    assert_eq!(Lexer::new("").lex(), Ok(vec![]));
    assert_eq!(Lexer::new(" \n\t ").lex(), Ok(vec![]));
  }

  #[test]
  fn token_values_rebuild_source_without_whitespace() {
    let input = "  def  h ( ) :\n foo( 1 ,bar(2, x) )  \n";
    let joined: String = Lexer::new(input)
      .lex()
      .unwrap()
      .iter()
      .map(|token| token.value.as_str())
      .collect();
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, stripped);
  }

  #[test]
  fn token_locs_point_into_source() {
    let input = "def  g(x):\n x";
    for token in Lexer::new(input).lex().unwrap() {
      assert_eq!(token.loc.str(input), token.value);
    }
  }
}
