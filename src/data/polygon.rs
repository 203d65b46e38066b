use claims::debug_assert_ok;
use num_traits::Zero;
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Transform;
use crate::data::Vector;
use crate::{Error, Orientation};

mod congruence;

mod iter;
pub use iter::*;

/// Simple polygon given by its vertices in counter-clockwise order.
///
/// Holes and self-intersections are not supported. Queries assume at least
/// three vertices, which [`Polygon::new`] enforces.
#[derive(Debug, Clone)]
pub struct Polygon {
  pub(crate) vertices: Vec<Vector>,
}

impl Polygon {
  /// Vertices must already be valid and counter-clockwise. Checked in debug
  /// builds only.
  pub fn new_unchecked(vertices: Vec<Vector>) -> Polygon {
    let p = Polygon { vertices };
    debug_assert_ok!(p.validate());
    p
  }

  /// Clockwise input is reversed so that vertices are always stored in
  /// counter-clockwise order.
  ///
  /// ```rust
  /// # use shapes2d::data::*;
  /// let poly = Polygon::new(vec![
  ///   Vector::new(0.0, 0.0),
  ///   Vector::new(0.0, 1.0),
  ///   Vector::new(1.0, 0.0),
  /// ])?;
  /// assert!(poly.signed_area() > 0.0);
  /// assert_eq!(poly.vertices()[0], Vector::new(1.0, 0.0));
  /// # Ok::<(), shapes2d::Error>(())
  /// ```
  pub fn new(vertices: Vec<Vector>) -> Result<Polygon, Error> {
    let mut p = Polygon { vertices };
    p.validate()?;
    p.ensure_ccw();
    Ok(p)
  }

  pub fn validate(&self) -> Result<(), Error> {
    // Has at least three points.
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    if !self.vertices.iter().all(Vector::is_finite) {
      return Err(Error::NonFiniteCoordinate);
    }
    Ok(())
  }

  /// $O(n \log n)$ Random convex polygon with `n` vertices (at least 3)
  /// whose bounding box is close to the unit square.
  ///
  /// Random edge vectors summing to zero are sorted by angle and chained.
  pub fn random_convex<R>(n: usize, rng: &mut R) -> Polygon
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let mut vs = random_vectors(n, rng);
    vs.sort_unstable_by_key(|v| OrderedFloat(v.y_coord().atan2(v.x_coord())));
    let vertices: Vec<Vector> = vs
      .into_iter()
      .scan(Vector::zero(), |st, vec| {
        *st += vec;
        Some(*st)
      })
      .collect();
    let p = Polygon { vertices };
    // If the edges are (nearly) parallel then give up and try again.
    if p.orientation() != Orientation::CounterClockWise {
      return Self::random_convex(n, rng);
    }
    p
  }

  pub fn vertices(&self) -> &[Vector] {
    &self.vertices
  }

  pub fn vertices_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
    self.vertices.iter()
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      vertices: &self.vertices,
      index: 0,
    }
  }

  /// `sides[i] = |P[i+1] - P[i]|`, cyclic.
  pub fn side_lengths(&self) -> Vec<f64> {
    self.iter_boundary_edges().map(|edge| edge.length()).collect()
  }

  pub fn signed_area_2x(&self) -> f64 {
    self.iter_boundary_edges().map(|edge| edge.cross()).sum()
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Shoelace formula.
  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  pub fn perimeter(&self) -> f64 {
    self.iter_boundary_edges().map(|edge| edge.length()).sum()
  }

  pub fn orientation(&self) -> Orientation {
    Orientation::from_signed_area(self.signed_area())
  }

  /// Area-weighted centroid of the interior. This is not the average of the
  /// vertices.
  ///
  /// Fails with [`Error::DegenerateGeometry`] when the polygon has no area.
  /// Small polygons are fine, collinearity is decided exactly.
  pub fn centroid(&self) -> Result<Vector, Error> {
    if self.is_degenerate() {
      return Err(Error::DegenerateGeometry);
    }
    // Self-crossing outlines can still cancel out to zero.
    let area = self.signed_area();
    if area == 0.0 {
      return Err(Error::DegenerateGeometry);
    }
    let xs: Vector = self
      .iter_boundary_edges()
      .map(|edge| (edge.src + edge.dst) * edge.cross())
      .sum();
    let centroid = xs / (6.0 * area);
    if !centroid.is_finite() {
      return Err(Error::DegenerateGeometry);
    }
    Ok(centroid)
  }

  /// True when all vertices lie on a single line (or coincide).
  pub fn is_degenerate(&self) -> bool {
    let first = match self.vertices.first() {
      Some(first) => first,
      None => return true,
    };
    match self.vertices.iter().find(|v| v.0 != first.0) {
      None => true,
      Some(second) => self
        .vertices
        .iter()
        .all(|v| Orientation::new(first, second, v).is_colinear()),
    }
  }

  /// Rotate counter-clockwise by `angle` radians around the centroid.
  pub fn rotate(&mut self, angle: f64) -> Result<(), Error> {
    let pivot = self.centroid()?;
    self.rotate_around(pivot, angle);
    Ok(())
  }

  /// `angle` must be finite. Checked in debug builds only.
  pub fn rotate_around(&mut self, pivot: Vector, angle: f64) {
    debug_assert!(angle.is_finite(), "non-finite angle {}", angle);
    self.apply(&Transform::rotate(angle).around(pivot));
  }

  /// Scale by `factor` around the centroid. A negative factor is a point
  /// reflection through the centroid and keeps the vertices counter-clockwise.
  pub fn scale(&mut self, factor: f64) -> Result<(), Error> {
    let pivot = self.centroid()?;
    self.scale_around(pivot, factor);
    Ok(())
  }

  /// `factor` must be finite. Checked in debug builds only.
  pub fn scale_around(&mut self, pivot: Vector, factor: f64) {
    debug_assert!(factor.is_finite(), "non-finite scale factor {}", factor);
    self.apply(&Transform::uniform_scale(factor).around(pivot));
  }

  /// `offset` must be finite. Checked in debug builds only.
  pub fn translate(&mut self, offset: Vector) {
    debug_assert!(offset.is_finite(), "non-finite offset {:?}", offset);
    for pt in self.vertices.iter_mut() {
      *pt += offset;
    }
  }

  pub fn map_points<F>(self, f: F) -> Polygon
  where
    F: Fn(Vector) -> Vector,
  {
    let mut p = Polygon {
      vertices: self.vertices.into_iter().map(f).collect(),
    };
    p.ensure_ccw();
    p
  }

  pub fn ensure_ccw(&mut self) {
    if self.signed_area_2x() < 0.0 {
      self.vertices.reverse();
    }
  }

  // Only for orientation-preserving transforms.
  fn apply(&mut self, t: &Transform) {
    for pt in self.vertices.iter_mut() {
      *pt = t * *pt;
    }
  }
}

/// Same vertex set, compared with tolerance and regardless of order.
/// Congruent polygons at different positions are not equal.
impl PartialEq for Polygon {
  fn eq(&self, other: &Polygon) -> bool {
    fn subset(lhs: &[Vector], rhs: &[Vector]) -> bool {
      lhs.iter().all(|pt| rhs.contains(pt))
    }
    self.vertices.len() == other.vertices.len()
      && subset(&self.vertices, &other.vertices)
      && subset(&other.vertices, &self.vertices)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Helper functions

// Property: random_between_iter(n, &mut rng).sum::<f64>() ≈ 1.0
fn random_between_iter<R>(n: usize, rng: &mut R) -> impl Iterator<Item = f64>
where
  R: Rng + ?Sized,
{
  assert!(n > 0);
  let mut pts = Vec::with_capacity(n);
  while pts.len() < n - 1 {
    pts.push(rng.gen_range(0.0..1.0));
  }
  pts.sort_unstable_by_key(|&x| OrderedFloat(x));
  pts.push(1.0);
  pts.into_iter().scan(0.0, |from, x| {
    let out = x - *from;
    *from = x;
    Some(out)
  })
}

// Property: random_between_zero(n, &mut rng).iter().sum::<f64>() ≈ 0.0
fn random_between_zero<R>(n: usize, rng: &mut R) -> Vec<f64>
where
  R: Rng + ?Sized,
{
  assert!(n >= 2);
  let n_positive = rng.gen_range(1..n); // [1;n[
  let n_negative = n - n_positive;
  let positive = random_between_iter(n_positive, rng);
  let negative = random_between_iter(n_negative, rng).map(|i| -i);
  let mut result: Vec<f64> = positive.chain(negative).collect();
  result.shuffle(rng);
  result
}

// Random vectors that sum to zero.
fn random_vectors<R>(n: usize, rng: &mut R) -> Vec<Vector>
where
  R: Rng + ?Sized,
{
  random_between_zero(n, rng)
    .into_iter()
    .zip(random_between_zero(n, rng))
    .map(|(a, b)| Vector([a, b]))
    .collect()
}
