use std::ops::Deref;

use super::{Circle, Polygon, Vector};
use crate::{approx_eq, Error, Orientation};

#[derive(Debug, Clone)]
pub struct Triangle(Polygon);

impl Triangle {
  /// Vertices are stored counter-clockwise regardless of input order.
  pub fn new(pts: [Vector; 3]) -> Result<Triangle, Error> {
    Ok(Triangle(Polygon::new(pts.to_vec())?))
  }

  pub fn polygon(&self) -> &Polygon {
    &self.0
  }

  pub fn vertices(&self) -> [Vector; 3] {
    let vs = self.0.vertices();
    [vs[0], vs[1], vs[2]]
  }

  /// Exact orientation of the three vertices. `CoLinear` for degenerate
  /// triangles, `CounterClockWise` otherwise.
  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.vertices();
    Orientation::new(&a, &b, &c)
  }

  // Lengths of the sides opposite to each vertex.
  fn opposite_sides(&self) -> [f64; 3] {
    let [a, b, c] = self.vertices();
    [(b - c).length(), (c - a).length(), (a - b).length()]
  }

  /// Circle through all three vertices.
  ///
  /// Fails with [`Error::DegenerateGeometry`] if the vertices are collinear.
  ///
  /// ```rust
  /// # use shapes2d::data::*;
  /// # use shapes2d::Error;
  /// let flat = Triangle::new([
  ///   Vector::new(0.0, 0.0),
  ///   Vector::new(1.0, 1.0),
  ///   Vector::new(2.0, 2.0),
  /// ])?;
  /// assert_eq!(flat.circumscribed_circle(), Err(Error::DegenerateGeometry));
  /// # Ok::<(), shapes2d::Error>(())
  /// ```
  pub fn circumscribed_circle(&self) -> Result<Circle, Error> {
    let [a, b, c] = self.vertices();
    let [ax, ay] = a.0;
    let [bx, by] = b.0;
    let [cx, cy] = c.0;

    if self.orientation().is_colinear() {
      return Err(Error::DegenerateGeometry);
    }
    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));

    let (a2, b2, c2) = (a.squared_length(), b.squared_length(), c.squared_length());
    let ux = a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by);
    let uy = a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax);

    let [la, lb, lc] = self.opposite_sides();
    let radius = la * lb * lc / (4.0 * self.area());
    let center = Vector::new(ux, uy) / d;
    // Exactly non-collinear input can still underflow or overflow.
    if !center.is_finite() || !radius.is_finite() {
      return Err(Error::DegenerateGeometry);
    }
    Ok(Circle::new_unchecked(center, radius))
  }

  /// Largest circle inside the triangle, centered at the incenter.
  ///
  /// A flat triangle has an inscribed circle of radius zero. Fails with
  /// [`Error::DegenerateGeometry`] only if all three vertices coincide.
  pub fn inscribed_circle(&self) -> Result<Circle, Error> {
    let [a, b, c] = self.vertices();
    let [la, lb, lc] = self.opposite_sides();
    let s = (la + lb + lc) / 2.0;
    if approx_eq(s, 0.0) {
      return Err(Error::DegenerateGeometry);
    }
    let center = (a * la + b * lb + c * lc) / (2.0 * s);
    // Heron's formula divided by s. Rounding may push a nearly flat triangle
    // slightly below zero.
    let radius = ((s - la) * (s - lb) * (s - lc) / s).max(0.0).sqrt();
    Ok(Circle::new_unchecked(center, radius))
  }

  pub fn rotate(&mut self, angle: f64) -> Result<(), Error> {
    self.0.rotate(angle)
  }

  pub fn scale(&mut self, factor: f64) -> Result<(), Error> {
    self.0.scale(factor)
  }

  pub fn translate(&mut self, offset: Vector) {
    self.0.translate(offset)
  }
}

impl Deref for Triangle {
  type Target = Polygon;
  fn deref(&self) -> &Polygon {
    self.polygon()
  }
}

impl From<Triangle> for Polygon {
  fn from(triangle: Triangle) -> Polygon {
    triangle.0
  }
}
