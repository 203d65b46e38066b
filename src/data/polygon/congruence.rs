use ordered_float::OrderedFloat;

use super::Polygon;
use crate::approx_eq;

/// Direction in which the second side sequence is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
  /// Same orientation: rotation and translation only.
  Forward,
  /// Opposite orientation: the second polygon is mirrored.
  Backward,
}

impl Polygon {
  /// Whether `self` and `other` are related by a rotation, a translation and
  /// optionally a reflection.
  ///
  /// Only the cyclic sequences of side lengths are compared: every pair of
  /// sides with equal length is tried as an anchor, and the remaining sides
  /// are walked both in the same direction and in the reverse direction.
  /// This is a necessary condition for congruence. It is not sufficient for
  /// polygons whose angles differ while their side lengths agree, e.g. a
  /// square and a rhombus.
  ///
  /// $O(n^3)$ in the worst case, intended for polygons with few vertices.
  ///
  /// ```rust
  /// # use shapes2d::data::*;
  /// let a = Polygon::new(vec![
  ///   Vector::new(0.0, 0.0),
  ///   Vector::new(2.0, 0.0),
  ///   Vector::new(2.0, 1.0),
  ///   Vector::new(0.0, 1.0),
  /// ])?;
  /// let mut b = a.clone();
  /// b.rotate(1.0)?;
  /// b.translate(Vector::new(5.0, -3.0));
  /// assert!(a.congruent_to(&b));
  /// assert!(a != b);
  /// # Ok::<(), shapes2d::Error>(())
  /// ```
  pub fn congruent_to(&self, other: &Polygon) -> bool {
    let n = self.vertices_count();
    if n != other.vertices_count() {
      return false;
    }
    let lhs = self.side_lengths();
    let rhs = other.side_lengths();
    if !sorted_sides_match(&lhs, &rhs) {
      return false;
    }
    let anchors = candidate_anchors(&lhs, &rhs);
    [Walk::Forward, Walk::Backward].iter().any(|&walk| {
      anchors
        .iter()
        .any(|&(i, j)| sides_match_from(&lhs, &rhs, i, j, walk))
    })
  }
}

// Every pair of sides with the same length.
fn candidate_anchors(lhs: &[f64], rhs: &[f64]) -> Vec<(usize, usize)> {
  let mut anchors = Vec::new();
  for (i, a) in lhs.iter().enumerate() {
    for (j, b) in rhs.iter().enumerate() {
      if approx_eq(*a, *b) {
        anchors.push((i, j));
      }
    }
  }
  anchors
}

// Walk the n-1 sides following the anchor (i, j).
fn sides_match_from(lhs: &[f64], rhs: &[f64], i: usize, j: usize, walk: Walk) -> bool {
  let n = lhs.len();
  (1..n).all(|step| {
    let k = match walk {
      Walk::Forward => (j + step) % n,
      Walk::Backward => (j + n - step) % n,
    };
    approx_eq(lhs[(i + step) % n], rhs[k])
  })
}

// Sorted pairing minimizes the largest difference of any pairing, so a
// mismatch here rules out every anchor.
fn sorted_sides_match(lhs: &[f64], rhs: &[f64]) -> bool {
  fn sorted(sides: &[f64]) -> Vec<OrderedFloat<f64>> {
    let mut sides: Vec<_> = sides.iter().copied().map(OrderedFloat).collect();
    sides.sort_unstable();
    sides
  }
  sorted(lhs)
    .into_iter()
    .zip(sorted(rhs))
    .all(|(a, b)| approx_eq(a.into_inner(), b.into_inner()))
}
