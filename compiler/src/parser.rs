use crate::internal::{TokenKind as T, *};
use snafu::Snafu;
use tracing::{instrument, trace};

/// Deepest expression nesting accepted before bailing out with an error.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug)]
pub struct Parser<'a> {
  tokens: &'a [Token],
  tok_pos: usize,
  depth: usize,
  eof: SrcLoc,
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ParseError {
  #[snafu(display("expected {expected}, found {found}"))]
  ExpectedToken {
    expected: TokenKind,
    found: TokenKind,
    loc: SrcLoc,
  },
  #[snafu(display("expected {}, found {found}", one_of(expected)))]
  ExpectedOneOf {
    expected: &'static [TokenKind],
    found: TokenKind,
    loc: SrcLoc,
  },
  #[snafu(display("expected an expression, found {found}"))]
  ExpectedExpression { found: TokenKind, loc: SrcLoc },
  #[snafu(display("expressions nested deeper than {} levels", MAX_DEPTH))]
  NestingTooDeep { loc: SrcLoc },
  #[snafu(display("unexpected trailing input, found {found}"))]
  TrailingInput { found: TokenKind, loc: SrcLoc },
}

impl ParseError {
  pub const fn loc(&self) -> SrcLoc {
    match self {
      ParseError::ExpectedToken { loc, .. }
      | ParseError::ExpectedOneOf { loc, .. }
      | ParseError::ExpectedExpression { loc, .. }
      | ParseError::NestingTooDeep { loc }
      | ParseError::TrailingInput { loc, .. } => *loc,
    }
  }
}

fn one_of(kinds: &[TokenKind]) -> String {
  let names: Vec<&str> = kinds.iter().map(|kind| kind.name()).collect();
  names.join(" or ")
}

impl<'a> Parser<'a> {
  pub fn new(tokens: &'a [Token]) -> Self {
    let eof = tokens.last().map_or(SrcLoc::default(), |token| {
      SrcLoc::new(token.loc.offset + token.loc.len, 0)
    });
    Parser { tokens, tok_pos: 0, depth: 0, eof }
  }

  /// Parses exactly one definition, rejecting anything left over.
  #[instrument(skip_all)]
  pub fn parse(mut self) -> Result<Def, ParseError> {
    let def = self.parse_def()?;
    if let Some(token) = self.tokens.get(self.tok_pos) {
      return Err(ParseError::TrailingInput { found: token.kind, loc: token.loc });
    }
    Ok(def)
  }

  #[instrument(skip_all)]
  fn parse_def(&mut self) -> Result<Def, ParseError> {
    self.consume_expecting(T::Def)?;
    let name = self.consume_expecting(T::Ident)?.value.clone();
    let arg_names = self.parse_arg_names()?;
    self.consume_expecting(T::Colon)?;
    let body = self.parse_expr()?;
    trace!(name = %name, num_args = arg_names.len(), "parsed def");
    Ok(Def::new(name, arg_names, body))
  }

  #[instrument(skip_all)]
  fn parse_arg_names(&mut self) -> Result<Vec<String>, ParseError> {
    let mut arg_names = Vec::new();
    self.consume_expecting(T::LParen)?;
    if self.cur_token_is(T::Ident) {
      arg_names.push(self.advance().value.clone());
      while self.cur_token_is(T::Comma) {
        self.advance();
        arg_names.push(self.consume_expecting(T::Ident)?.value.clone());
      }
    } else if !self.cur_token_is(T::RParen) {
      return Err(ParseError::ExpectedOneOf {
        expected: &[T::Ident, T::RParen],
        found: self.peek_kind(0),
        loc: self.cur_loc(),
      });
    }
    self.consume_expecting(T::RParen)?;
    Ok(arg_names)
  }

  #[instrument(skip_all)]
  fn parse_expr(&mut self) -> Result<Node, ParseError> {
    if self.depth == MAX_DEPTH {
      return Err(ParseError::NestingTooDeep { loc: self.cur_loc() });
    }
    self.depth += 1;
    let expr = self.parse_expr_inner();
    self.depth -= 1;
    expr
  }

  fn parse_expr_inner(&mut self) -> Result<Node, ParseError> {
    match self.peek_kind(0) {
      T::IntLit => self.parse_int_lit(),
      T::Ident if self.peek_kind(1) == T::LParen => self.parse_call().map(Node::Call),
      T::Ident => self.parse_var_ref(),
      found => Err(ParseError::ExpectedExpression { found, loc: self.cur_loc() }),
    }
  }

  #[instrument(skip_all)]
  fn parse_int_lit(&mut self) -> Result<Node, ParseError> {
    let token = self.advance();
    let digits = token.value.trim_start_matches('0');
    let value = if digits.is_empty() { "0" } else { digits };
    Ok(Node::Integer(value.to_string()))
  }

  #[instrument(skip_all)]
  fn parse_call(&mut self) -> Result<Call, ParseError> {
    let name = self.consume_expecting(T::Ident)?.value.clone();
    let args = self.parse_arg_exprs()?;
    Ok(Call::new(name, args))
  }

  #[instrument(skip_all)]
  fn parse_var_ref(&mut self) -> Result<Node, ParseError> {
    let name = self.consume_expecting(T::Ident)?.value.clone();
    Ok(Node::VarRef(name))
  }

  #[instrument(skip_all)]
  fn parse_arg_exprs(&mut self) -> Result<Vec<Node>, ParseError> {
    let mut args = Vec::new();
    self.consume_expecting(T::LParen)?;
    if !self.cur_token_is(T::RParen) {
      args.push(self.parse_expr()?);
      while self.cur_token_is(T::Comma) {
        self.advance();
        args.push(self.parse_expr()?);
      }
    }
    self.consume_expecting(T::RParen)?;
    Ok(args)
  }

  fn cur_token_is(&self, kind: TokenKind) -> bool {
    self.peek_kind(0) == kind
  }

  /// Kind of the token `offset` places ahead, `Eof` once past the end.
  fn peek_kind(&self, offset: usize) -> TokenKind {
    self
      .tokens
      .get(self.tok_pos + offset)
      .map_or(T::Eof, |token| token.kind)
  }

  fn cur_loc(&self) -> SrcLoc {
    self
      .tokens
      .get(self.tok_pos)
      .map_or(self.eof, |token| token.loc)
  }

  fn consume_expecting(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
    if self.cur_token_is(kind) {
      Ok(self.advance())
    } else {
      Err(ParseError::ExpectedToken {
        expected: kind,
        found: self.peek_kind(0),
        loc: self.cur_loc(),
      })
    }
  }

  /// Only call after a lookahead has confirmed a token is present.
  fn advance(&mut self) -> &'a Token {
    let tokens = self.tokens;
    let token = &tokens[self.tok_pos];
    self.tok_pos += 1;
    token
  }
}
