use crate::data::DirectedEdge;
use crate::data::Vector;

/// Boundary edges of a polygon in order, wrapping around from the last
/// vertex to the first.
pub struct EdgeIter<'a> {
  pub(crate) vertices: &'a [Vector],
  pub(crate) index: usize,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = DirectedEdge<'a>;
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.vertices.len();
    if self.index >= n {
      return None;
    }
    let edge = DirectedEdge {
      src: &self.vertices[self.index],
      dst: &self.vertices[(self.index + 1) % n],
    };
    self.index += 1;
    Some(edge)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {
  fn len(&self) -> usize {
    self.vertices.len().saturating_sub(self.index)
  }
}

#[cfg(test)]
mod tests {
  use crate::data::*;

  #[test]
  fn edges_wrap_around() {
    let p = Polygon::new(vec![
      Vector::new(0.0, 0.0),
      Vector::new(1.0, 0.0),
      Vector::new(0.0, 1.0),
    ])
    .unwrap();
    let edges: Vec<_> = p.iter_boundary_edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(*edges[2].src, Vector::new(0.0, 1.0));
    assert_eq!(*edges[2].dst, Vector::new(0.0, 0.0));
    assert_eq!(p.iter_boundary_edges().len(), 3);
  }
}
