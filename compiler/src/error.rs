use crate::internal::*;
use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

/// The first error raised by any stage; compilation never continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CompileError {
  #[snafu(context(false), display("lex error: {source}"))]
  Lex { source: LexError },
  #[snafu(context(false), display("syntax error: {source}"))]
  Parse { source: ParseError },
  #[snafu(context(false), display("codegen error: {source}"))]
  Codegen { source: CodegenError },
}

impl CompileError {
  pub fn loc(&self) -> Option<SrcLoc> {
    match self {
      CompileError::Lex { source } => Some(source.loc()),
      CompileError::Parse { source } => Some(source.loc()),
      CompileError::Codegen { .. } => None,
    }
  }
}
