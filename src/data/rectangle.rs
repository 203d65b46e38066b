use std::f64::consts::SQRT_2;
use std::ops::Deref;

use super::{Circle, Polygon, Vector};
use crate::Error;

///////////////////////////////////////////////////////////////////////////////
// Rectangle

/// Axis-aligned at construction. Rotation turns the vertices around the
/// center while `height` and `width` keep describing the side lengths.
#[derive(Debug, Clone)]
pub struct Rectangle {
  polygon: Polygon,
  center: Vector,
  height: f64,
  width: f64,
}

impl Rectangle {
  pub fn new(center: Vector, height: f64, width: f64) -> Result<Rectangle, Error> {
    if !center.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    if !valid_length(height) || !valid_length(width) {
      return Err(Error::InvalidDimensions);
    }
    let (dx, dy) = (width / 2.0, height / 2.0);
    // Finite center and sides can still overflow into infinite corners.
    let polygon = Polygon::new(vec![
      center + Vector::new(dx, -dy),
      center + Vector::new(dx, dy),
      center + Vector::new(-dx, dy),
      center + Vector::new(-dx, -dy),
    ])?;
    Ok(Rectangle {
      polygon,
      center,
      height,
      width,
    })
  }

  pub fn center(&self) -> Vector {
    self.center
  }

  pub fn height(&self) -> f64 {
    self.height
  }

  pub fn width(&self) -> f64 {
    self.width
  }

  pub fn polygon(&self) -> &Polygon {
    &self.polygon
  }

  pub fn rotate(&mut self, angle: f64) {
    self.polygon.rotate_around(self.center, angle);
  }

  /// `factor` must be finite.
  pub fn scale(&mut self, factor: f64) {
    self.polygon.scale_around(self.center, factor);
    self.height *= factor.abs();
    self.width *= factor.abs();
  }

  pub fn translate(&mut self, offset: Vector) {
    self.polygon.translate(offset);
    self.center += offset;
  }
}

impl Deref for Rectangle {
  type Target = Polygon;
  fn deref(&self) -> &Polygon {
    self.polygon()
  }
}

impl From<Rectangle> for Polygon {
  fn from(rect: Rectangle) -> Polygon {
    rect.polygon
  }
}

///////////////////////////////////////////////////////////////////////////////
// Square

#[derive(Debug, Clone)]
pub struct Square {
  rectangle: Rectangle,
  side: f64,
}

impl Square {
  /// ```rust
  /// # use shapes2d::data::*;
  /// let square = Square::new(Vector::new(0.0, 0.0), 2.0)?;
  /// assert_eq!(square.inscribed_circle().radius(), 1.0);
  /// assert!(square.vertices().contains(&Vector::new(-1.0, 1.0)));
  /// # Ok::<(), shapes2d::Error>(())
  /// ```
  pub fn new(center: Vector, side: f64) -> Result<Square, Error> {
    Ok(Square {
      rectangle: Rectangle::new(center, side, side)?,
      side,
    })
  }

  pub fn side(&self) -> f64 {
    self.side
  }

  pub fn rectangle(&self) -> &Rectangle {
    &self.rectangle
  }

  /// Circle through all four corners.
  pub fn circumscribed_circle(&self) -> Circle {
    Circle::new_unchecked(self.center(), self.side * SQRT_2 / 2.0)
  }

  /// Circle touching all four sides.
  pub fn inscribed_circle(&self) -> Circle {
    Circle::new_unchecked(self.center(), self.side / 2.0)
  }

  pub fn rotate(&mut self, angle: f64) {
    self.rectangle.rotate(angle);
  }

  pub fn scale(&mut self, factor: f64) {
    self.rectangle.scale(factor);
    self.side *= factor.abs();
  }

  pub fn translate(&mut self, offset: Vector) {
    self.rectangle.translate(offset);
  }
}

impl Deref for Square {
  type Target = Rectangle;
  fn deref(&self) -> &Rectangle {
    self.rectangle()
  }
}

impl From<Square> for Polygon {
  fn from(square: Square) -> Polygon {
    square.rectangle.into()
  }
}

fn valid_length(len: f64) -> bool {
  len.is_finite() && len >= 0.0
}
