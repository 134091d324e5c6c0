use crate::internal::*;
use snafu::Snafu;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CodegenError {
  #[snafu(display("unrecognized node kind `{kind}`, expected {expected}"))]
  UnexpectedNode {
    kind: &'static str,
    expected: &'static str,
  },
  #[snafu(display("expressions nested deeper than {limit} levels"))]
  NestingTooDeep { limit: usize },
}

/// Emits JavaScript for a tree. Only a `Def` is accepted at the root.
#[derive(Debug)]
pub struct Generator {
  out: String,
  depth: usize,
}

impl Generator {
  pub fn new() -> Self {
    Generator {
      out: String::with_capacity(64),
      depth: 0,
    }
  }

  #[instrument(skip_all)]
  pub fn generate(self, node: &Node) -> Result<String, CodegenError> {
    match node {
      Node::Def(def) => self.generate_def(def),
      other => Err(CodegenError::UnexpectedNode {
        kind: other.kind_name(),
        expected: "def",
      }),
    }
  }

  pub fn generate_def(mut self, def: &Def) -> Result<String, CodegenError> {
    self.visit_def(def)?;
    Ok(self.out)
  }

  #[instrument(skip_all)]
  fn visit_def(&mut self, def: &Def) -> Result<(), CodegenError> {
    self.out.push_str("function ");
    self.out.push_str(&def.name);
    self.out.push('(');
    self.out.push_str(&def.arg_names.join(","));
    self.out.push_str(") {return ");
    self.visit_expr(&def.body)?;
    self.out.push_str("};");
    Ok(())
  }

  // hand-built trees can be deeper than anything the parser accepts
  fn visit_expr(&mut self, node: &Node) -> Result<(), CodegenError> {
    if self.depth == MAX_DEPTH {
      return Err(CodegenError::NestingTooDeep { limit: MAX_DEPTH });
    }
    self.depth += 1;
    let res = self.visit_expr_inner(node);
    self.depth -= 1;
    res
  }

  #[instrument(skip_all)]
  fn visit_expr_inner(&mut self, node: &Node) -> Result<(), CodegenError> {
    match node {
      Node::Integer(digits) => self.out.push_str(digits),
      Node::VarRef(name) => self.out.push_str(name),
      Node::Call(call) => self.visit_call(call)?,
      Node::Def(_) => {
        return Err(CodegenError::UnexpectedNode {
          kind: node.kind_name(),
          expected: "an expression",
        });
      }
    }
    Ok(())
  }

  #[instrument(skip_all)]
  fn visit_call(&mut self, call: &Call) -> Result<(), CodegenError> {
    self.out.push_str(&call.name);
    self.out.push('(');
    for (idx, arg) in call.args.iter().enumerate() {
      if idx > 0 {
        self.out.push(',');
      }
      self.visit_expr(arg)?;
    }
    self.out.push(')');
    Ok(())
  }
}
