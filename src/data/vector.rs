use array_init::array_init;
use num_traits::identities::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter::Sum;
use std::ops::Index;
use std::ops::Neg;

use crate::approx_eq;

/// A point or displacement in the plane.
///
/// Equality is tolerance based: two vectors are equal when both coordinates
/// differ by less than [`EPSILON`](crate::EPSILON). This makes `==` symmetric
/// but not transitive near the tolerance boundary.
///
/// ```rust
/// # use shapes2d::data::Vector;
/// assert_eq!(Vector::new(1.0, 2.0), Vector::new(1.000001, 2.0));
/// assert_ne!(Vector::new(1.0, 2.0), Vector::new(1.1, 2.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

// Random sampling.
impl Distribution<Vector> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    Vector(array_init(|_| rng.gen()))
  }
}

impl Vector {
  pub const fn new(x: f64, y: f64) -> Vector {
    Vector([x, y])
  }

  pub fn x_coord(&self) -> f64 {
    self.0[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.0[1]
  }

  pub fn is_finite(&self) -> bool {
    self.0.iter().all(|c| c.is_finite())
  }

  pub fn squared_length(&self) -> f64 {
    dot(self, self)
  }

  pub fn length(&self) -> f64 {
    self.squared_length().sqrt()
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    dot(self, other)
  }

  pub fn cross(&self, other: &Vector) -> f64 {
    cross(self, other)
  }

  /// `|cross(self, other)| < EPSILON`
  pub fn collinear(&self, other: &Vector) -> bool {
    approx_eq(cross(self, other), 0.0)
  }

  /// Rotate counter-clockwise around the origin by `angle` radians.
  #[must_use]
  pub fn rotate(&self, angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    let [x, y] = self.0;
    Vector([cos * x - sin * y, sin * x + cos * y])
  }
}

pub fn dot(lhs: &Vector, rhs: &Vector) -> f64 {
  lhs.0[0] * rhs.0[0] + lhs.0[1] * rhs.0[1]
}

pub fn cross(lhs: &Vector, rhs: &Vector) -> f64 {
  lhs.0[0] * rhs.0[1] - lhs.0[1] * rhs.0[0]
}

impl PartialEq for Vector {
  fn eq(&self, other: &Vector) -> bool {
    self.0.iter().zip(other.0.iter()).all(|(a, b)| approx_eq(*a, *b))
  }
}

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<(f64, f64)> for Vector {
  fn from(pt: (f64, f64)) -> Vector {
    Vector([pt.0, pt.1])
  }
}

impl From<[f64; 2]> for Vector {
  fn from(array: [f64; 2]) -> Vector {
    Vector(array)
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl Zero for Vector {
  fn zero() -> Vector {
    Vector([0.0; 2])
  }
  // Exact, unlike `==`.
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl Sum for Vector {
  fn sum<I>(iter: I) -> Vector
  where
    I: Iterator<Item = Vector>,
  {
    let mut acc = Vector::zero();
    for vec in iter {
      acc += vec;
    }
    acc
  }
}

impl Neg for Vector {
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}

impl Neg for &Vector {
  type Output = Vector;
  fn neg(self) -> Vector {
    -*self
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use std::f64::consts::{FRAC_PI_2, PI};

  proptest! {
    #[test]
    fn equality_is_symmetric(a in any_vector(), b in any_vector()) {
      prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equality_is_symmetric_near_boundary(a in any_vector(), dx in -2e-5..2e-5f64, dy in -2e-5..2e-5f64) {
      let b = a + Vector::new(dx, dy);
      prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn cross_is_anti_commutative(a in any_vector(), b in any_vector()) {
      prop_assert!(approx_eq(cross(&a, &b), -cross(&b, &a)));
    }

    #[test]
    fn rotation_preserves_length(a in any_vector(), angle in any_angle()) {
      let rotated = a.rotate(angle);
      prop_assert!((rotated.length() - a.length()).abs() < 1e-9 * a.length().max(1.0));
    }

    #[test]
    fn sub_add_inverse(a in any_vector(), b in any_vector()) {
      prop_assert_eq!(a - b + b, a);
    }
  }

  #[test]
  fn arithmetic() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, -1.0);
    assert_eq!(a + b, Vector::new(4.0, 1.0));
    assert_eq!(a - b, Vector::new(-2.0, 3.0));
    assert_eq!(-a, Vector::new(-1.0, -2.0));
    assert_eq!(a * 2.0, Vector::new(2.0, 4.0));
    assert_eq!(2.0 * a, Vector::new(2.0, 4.0));
    assert_eq!(b / 2.0, Vector::new(1.5, -0.5));
    assert_eq!(&a + &b, a + b);
    assert_eq!(&a - &b, a - b);
  }

  #[test]
  fn assigning_arithmetic() {
    let mut v = Vector::new(1.0, 1.0);
    v += Vector::new(1.0, 2.0);
    assert_eq!(v, Vector::new(2.0, 3.0));
    v -= &Vector::new(2.0, 2.0);
    assert_eq!(v, Vector::new(0.0, 1.0));
    v *= 4.0;
    assert_eq!(v, Vector::new(0.0, 4.0));
    v /= 2.0;
    assert_eq!(v, Vector::new(0.0, 2.0));
  }

  #[test]
  fn products() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, 4.0);
    assert_eq!(dot(&a, &b), 11.0);
    assert_eq!(cross(&a, &b), -2.0);
    assert_eq!(a.dot(&b), 11.0);
    assert_eq!(a.cross(&b), -2.0);
    assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
  }

  #[test]
  fn collinearity() {
    assert!(Vector::new(1.0, 1.0).collinear(&Vector::new(-2.0, -2.0)));
    assert!(Vector::new(0.0, 0.0).collinear(&Vector::new(5.0, 1.0)));
    assert!(!Vector::new(1.0, 0.0).collinear(&Vector::new(0.0, 1.0)));
  }

  #[test]
  fn rotate_quarter_turns() {
    let v = Vector::new(1.0, 0.0);
    assert_eq!(v.rotate(FRAC_PI_2), Vector::new(0.0, 1.0));
    assert_eq!(v.rotate(PI), Vector::new(-1.0, 0.0));
  }

  #[test]
  fn tolerance_is_not_transitive() {
    let a = Vector::new(0.0, 0.0);
    let b = Vector::new(0.6e-5, 0.0);
    let c = Vector::new(1.2e-5, 0.0);
    assert!(a == b && b == c);
    assert!(a != c);
  }

  #[test]
  fn sum_of_vectors() {
    let total: Vector = vec![Vector::new(1.0, 2.0), Vector::new(3.0, 4.0)]
      .into_iter()
      .sum();
    assert_eq!(total, Vector::new(4.0, 6.0));
    assert!(Vector::zero().is_zero());
  }
}
