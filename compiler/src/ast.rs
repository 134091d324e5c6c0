#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Def(Def),
  /// Decimal digits without leading zeros, any length.
  Integer(String),
  Call(Call),
  VarRef(String),
}

/// The single top-level construct: `def NAME(ARGS): BODY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Def {
  pub name: String,
  // uniqueness is not checked
  pub arg_names: Vec<String>,
  pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
  pub name: String,
  pub args: Vec<Node>,
}

impl Node {
  pub const fn kind_name(&self) -> &'static str {
    match self {
      Node::Def(_) => "def",
      Node::Integer(_) => "integer",
      Node::Call(_) => "call",
      Node::VarRef(_) => "var_ref",
    }
  }
}

impl Def {
  pub fn new(name: impl Into<String>, arg_names: Vec<String>, body: Node) -> Self {
    Def {
      name: name.into(),
      arg_names,
      body: Box::new(body),
    }
  }
}

impl Call {
  pub fn new(name: impl Into<String>, args: Vec<Node>) -> Self {
    Call { name: name.into(), args }
  }
}

impl From<Def> for Node {
  fn from(def: Def) -> Self {
    Node::Def(def)
  }
}

impl From<Call> for Node {
  fn from(call: Call) -> Self {
    Node::Call(call)
  }
}
