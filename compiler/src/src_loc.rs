#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SrcLoc {
  pub offset: u32,
  pub len: u32,
}

impl SrcLoc {
  pub const fn new(offset: u32, len: u32) -> Self {
    SrcLoc { offset, len }
  }

  pub fn str<'a>(&self, src: &'a str) -> &'a str {
    let offset = self.offset as usize;
    &src[offset..offset + self.len as usize]
  }

  /// 1-based line and column of the start of this location.
  pub fn line_col(&self, src: &str) -> (u32, u32) {
    let offset = (self.offset as usize).min(src.len());
    let before = &src[..offset];
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let col = before[line_start..].chars().count() as u32 + 1;
    (line, col)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_col_is_one_based() {
    let src = "def f():\n  foo(x)";
    assert_eq!(SrcLoc::new(0, 3).line_col(src), (1, 1));
    assert_eq!(SrcLoc::new(4, 1).line_col(src), (1, 5));
    assert_eq!(SrcLoc::new(11, 3).line_col(src), (2, 3));
    assert_eq!(SrcLoc::new(11, 3).str(src), "foo");
  }

  #[test]
  fn line_col_at_end_of_input() {
    let src = "def f(): ";
    assert_eq!(SrcLoc::new(9, 0).line_col(src), (1, 10));
  }
}
