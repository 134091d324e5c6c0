use crate::internal::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  /// 1-based, 0 when the error has no source location
  pub line: u32,
  pub col: u32,
  pub width: u32,
  pub msg: String,
}

impl Diagnostic {
  pub fn new(err: &CompileError, src: &str) -> Self {
    let msg = err.to_string();
    let Some(loc) = err.loc() else {
      return Diagnostic { line: 0, col: 0, width: 0, msg };
    };
    let (line, col) = loc.line_col(src);
    let width = loc.str(src).chars().count().max(1) as u32;
    Diagnostic { line, col, width, msg }
  }

  pub fn render(&self, src: &str) -> String {
    let mut out = format!("error: {}\n", self.msg);
    if self.line == 0 {
      return out;
    }
    let src_line = src.lines().nth(self.line as usize - 1).unwrap_or("");
    let gutter = " ".repeat(self.line.to_string().len());
    out.push_str(&format!("{gutter}--> {}:{}\n", self.line, self.col));
    out.push_str(&format!("{gutter} |\n"));
    out.push_str(&format!("{} | {src_line}\n", self.line));
    out.push_str(&format!(
      "{gutter} | {}{}\n",
      " ".repeat(self.col as usize - 1),
      "^".repeat(self.width as usize)
    ));
    out
  }
}
