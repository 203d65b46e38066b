use claims::debug_assert_ok;
use std::f64::consts::PI;

use super::Vector;
use crate::{approx_eq, Error};

#[derive(Debug, Clone, Copy)]
pub struct Circle {
  center: Vector,
  radius: f64,
}

impl Circle {
  pub fn new(center: Vector, radius: f64) -> Result<Circle, Error> {
    let circle = Circle { center, radius };
    circle.validate()?;
    Ok(circle)
  }

  pub fn new_unchecked(center: Vector, radius: f64) -> Circle {
    let circle = Circle { center, radius };
    debug_assert_ok!(circle.validate());
    circle
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !self.center.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    if !self.radius.is_finite() || self.radius < 0.0 {
      return Err(Error::InvalidDimensions);
    }
    Ok(())
  }

  pub fn center(&self) -> Vector {
    self.center
  }

  pub fn radius(&self) -> f64 {
    self.radius
  }

  pub fn perimeter(&self) -> f64 {
    2.0 * PI * self.radius
  }

  pub fn area(&self) -> f64 {
    PI * self.radius * self.radius
  }

  /// Circles are congruent exactly when their radii agree.
  pub fn congruent_to(&self, other: &Circle) -> bool {
    approx_eq(self.radius, other.radius)
  }

  /// No-op, circles are rotation invariant.
  pub fn rotate(&mut self, _angle: f64) {}

  /// `factor` must be finite. Checked in debug builds only.
  pub fn scale(&mut self, factor: f64) {
    debug_assert!(factor.is_finite(), "non-finite scale factor {}", factor);
    self.radius *= factor.abs();
  }

  /// `offset` must be finite. Checked in debug builds only.
  pub fn translate(&mut self, offset: Vector) {
    debug_assert!(offset.is_finite(), "non-finite offset {:?}", offset);
    self.center += offset;
  }
}

impl PartialEq for Circle {
  fn eq(&self, other: &Circle) -> bool {
    approx_eq(self.radius, other.radius) && self.center == other.center
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  #[test]
  fn measurements() {
    let c = assert_ok!(Circle::new(Vector::new(1.0, 2.0), 2.0));
    assert!(approx_eq(c.perimeter(), 4.0 * PI));
    assert!(approx_eq(c.area(), 4.0 * PI));
    assert_eq!(c.center(), Vector::new(1.0, 2.0));
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "non-finite scale factor")]
  fn nan_scale_is_rejected() {
    let mut c = Circle::new(Vector::new(0.0, 0.0), 1.0).unwrap();
    c.scale(f64::NAN);
  }

  #[test]
  fn invalid_radius() {
    assert_err_eq!(
      Circle::new(Vector::new(0.0, 0.0), -1.0),
      Error::InvalidDimensions
    );
    assert_err_eq!(
      Circle::new(Vector::new(0.0, 0.0), f64::INFINITY),
      Error::InvalidDimensions
    );
    assert_err_eq!(
      Circle::new(Vector::new(f64::NAN, 0.0), 1.0),
      Error::NonFiniteCoordinate
    );
    assert_ok!(Circle::new(Vector::new(0.0, 0.0), 0.0));
  }

  #[test]
  fn congruence_and_equality() {
    let a = Circle::new_unchecked(Vector::new(0.0, 0.0), 1.0);
    let b = Circle::new_unchecked(Vector::new(5.0, 5.0), 1.0);
    let c = Circle::new_unchecked(Vector::new(0.0, 0.0), 1.5);
    assert!(a.congruent_to(&b));
    assert!(!a.congruent_to(&c));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, Circle::new_unchecked(Vector::new(0.0, 0.000001), 1.0));
  }

  #[test]
  fn mutators() {
    let mut c = Circle::new_unchecked(Vector::new(0.0, 0.0), 1.0);
    c.rotate(1.234);
    assert_eq!(c, Circle::new_unchecked(Vector::new(0.0, 0.0), 1.0));
    c.scale(-3.0);
    assert_eq!(c.radius(), 3.0);
    c.translate(Vector::new(1.0, -1.0));
    assert_eq!(c.center(), Vector::new(1.0, -1.0));
  }
}
