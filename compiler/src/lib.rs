pub mod ast;
pub mod codegen;
pub mod diag;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod src_loc;
pub mod token;

pub mod internal {
  pub use crate::ast::*;
  pub use crate::codegen::*;
  pub use crate::diag::*;
  pub use crate::error::*;
  pub use crate::lexer::*;
  pub use crate::parser::*;
  pub use crate::src_loc::*;
  pub use crate::token::*;
  pub use crate::compile;
}

pub use error::{CompileError, CompileResult};

use internal::*;
use tracing::{debug, instrument};

/// Compiles a single `def` into a JavaScript function declaration.
#[instrument(skip_all)]
pub fn compile(src: &str) -> CompileResult<String> {
  let tokens = Lexer::new(src).lex()?;
  debug!(num_tokens = tokens.len(), "lexed");
  let def = Parser::new(&tokens).parse()?;
  debug!(name = %def.name, num_args = def.arg_names.len(), "parsed");
  let js = Generator::new().generate_def(&def)?;
  Ok(js)
}

#[cfg(test)]
static INIT: std::sync::Once = std::sync::Once::new();

#[cfg(test)]
pub(crate) fn configure_test_tracing() {
  use tracing_subscriber::fmt::format::FmtSpan;
  use tracing_subscriber::{fmt, EnvFilter};
  INIT.call_once(|| {
    let subscriber = fmt::Subscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_test_writer()
      .with_span_events(FmtSpan::ACTIVE)
      .finish();
    tracing::subscriber::set_global_default(subscriber)
      .expect("setting default tracing subscriber failed");
  });
}
