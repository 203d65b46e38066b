use super::Vector;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, PartialEq)]
// Directed edge from A to B.
pub struct DirectedEdge<'a> {
  pub src: &'a Vector,
  pub dst: &'a Vector,
}

impl Copy for DirectedEdge<'_> {}
impl Clone for DirectedEdge<'_> {
  fn clone(&self) -> Self {
    *self
  }
}

impl DirectedEdge<'_> {
  /// Displacement from `src` to `dst`.
  pub fn vector(&self) -> Vector {
    self.dst - self.src
  }

  pub fn length(&self) -> f64 {
    self.vector().length()
  }

  /// Twice the signed area of the triangle (origin, src, dst).
  pub fn cross(&self) -> f64 {
    self.src.cross(self.dst)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn edge_vector_and_length() {
    let (a, b) = (Vector::new(1.0, 1.0), Vector::new(4.0, 5.0));
    let edge = DirectedEdge { src: &a, dst: &b };
    assert_eq!(edge.vector(), Vector::new(3.0, 4.0));
    assert_eq!(edge.length(), 5.0);
    assert_eq!(edge.cross(), 1.0);
  }
}
