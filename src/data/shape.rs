use super::{Circle, Polygon, Rectangle, Square, Triangle, Vector};
use crate::Error;

/// Any of the supported shapes.
///
/// Comparisons only make sense within a family: circles compare with
/// circles, and polygons, rectangles, squares and triangles all compare as
/// polygons. Comparing across families yields `false`.
///
/// ```rust
/// # use shapes2d::data::*;
/// let square = Shape::from(Square::new(Vector::new(0.0, 0.0), 1.0)?);
/// let polygon = Shape::from(Polygon::new(vec![
///   Vector::new(5.0, 5.0),
///   Vector::new(6.0, 5.0),
///   Vector::new(6.0, 6.0),
///   Vector::new(5.0, 6.0),
/// ])?);
/// let circle = Shape::from(Circle::new(Vector::new(0.0, 0.0), 1.0)?);
/// assert!(square.congruent_to(&polygon));
/// assert!(!square.congruent_to(&circle));
/// # Ok::<(), shapes2d::Error>(())
/// ```
#[derive(Debug, Clone)]
pub enum Shape {
  Circle(Circle),
  Polygon(Polygon),
  Rectangle(Rectangle),
  Square(Square),
  Triangle(Triangle),
}

// Comparison families.
enum Family<'a> {
  Round(&'a Circle),
  Polygonal(&'a Polygon),
}

impl Shape {
  fn family(&self) -> Family<'_> {
    match self {
      Shape::Circle(c) => Family::Round(c),
      Shape::Polygon(p) => Family::Polygonal(p),
      Shape::Rectangle(r) => Family::Polygonal(r.polygon()),
      Shape::Square(s) => Family::Polygonal(s.polygon()),
      Shape::Triangle(t) => Family::Polygonal(t.polygon()),
    }
  }

  /// Vertices of polygonal shapes, `None` for circles.
  pub fn as_polygon(&self) -> Option<&Polygon> {
    match self.family() {
      Family::Round(_) => None,
      Family::Polygonal(p) => Some(p),
    }
  }

  /// Center of a circle, cached center of rectangles and squares, and the
  /// area centroid of other polygons.
  pub fn center(&self) -> Result<Vector, Error> {
    match self {
      Shape::Circle(c) => Ok(c.center()),
      Shape::Polygon(p) => p.centroid(),
      Shape::Rectangle(r) => Ok(r.center()),
      Shape::Square(s) => Ok(s.center()),
      Shape::Triangle(t) => t.centroid(),
    }
  }

  pub fn perimeter(&self) -> f64 {
    match self.family() {
      Family::Round(c) => c.perimeter(),
      Family::Polygonal(p) => p.perimeter(),
    }
  }

  pub fn area(&self) -> f64 {
    match self.family() {
      Family::Round(c) => c.area(),
      Family::Polygonal(p) => p.area(),
    }
  }

  pub fn congruent_to(&self, other: &Shape) -> bool {
    match (self.family(), other.family()) {
      (Family::Round(a), Family::Round(b)) => a.congruent_to(b),
      (Family::Polygonal(a), Family::Polygonal(b)) => a.congruent_to(b),
      (Family::Round(_), Family::Polygonal(_)) | (Family::Polygonal(_), Family::Round(_)) => false,
    }
  }

  /// Same position and same shape. Also available as `==`.
  pub fn equals(&self, other: &Shape) -> bool {
    match (self.family(), other.family()) {
      (Family::Round(a), Family::Round(b)) => a == b,
      (Family::Polygonal(a), Family::Polygonal(b)) => a == b,
      (Family::Round(_), Family::Polygonal(_)) | (Family::Polygonal(_), Family::Round(_)) => false,
    }
  }

  /// Rotate counter-clockwise around [`Shape::center`]. Fails for polygons
  /// and triangles without area.
  pub fn rotate(&mut self, angle: f64) -> Result<(), Error> {
    match self {
      Shape::Circle(c) => c.rotate(angle),
      Shape::Polygon(p) => p.rotate(angle)?,
      Shape::Rectangle(r) => r.rotate(angle),
      Shape::Square(s) => s.rotate(angle),
      Shape::Triangle(t) => t.rotate(angle)?,
    }
    Ok(())
  }

  /// Scale around [`Shape::center`]. Fails for polygons and triangles
  /// without area.
  pub fn scale(&mut self, factor: f64) -> Result<(), Error> {
    match self {
      Shape::Circle(c) => c.scale(factor),
      Shape::Polygon(p) => p.scale(factor)?,
      Shape::Rectangle(r) => r.scale(factor),
      Shape::Square(s) => s.scale(factor),
      Shape::Triangle(t) => t.scale(factor)?,
    }
    Ok(())
  }

  pub fn translate(&mut self, offset: Vector) {
    match self {
      Shape::Circle(c) => c.translate(offset),
      Shape::Polygon(p) => p.translate(offset),
      Shape::Rectangle(r) => r.translate(offset),
      Shape::Square(s) => s.translate(offset),
      Shape::Triangle(t) => t.translate(offset),
    }
  }
}

impl PartialEq for Shape {
  fn eq(&self, other: &Shape) -> bool {
    self.equals(other)
  }
}

impl From<Circle> for Shape {
  fn from(circle: Circle) -> Shape {
    Shape::Circle(circle)
  }
}

impl From<Polygon> for Shape {
  fn from(polygon: Polygon) -> Shape {
    Shape::Polygon(polygon)
  }
}

impl From<Rectangle> for Shape {
  fn from(rectangle: Rectangle) -> Shape {
    Shape::Rectangle(rectangle)
  }
}

impl From<Square> for Shape {
  fn from(square: Square) -> Shape {
    Shape::Square(square)
  }
}

impl From<Triangle> for Shape {
  fn from(triangle: Triangle) -> Shape {
    Shape::Triangle(triangle)
  }
}
