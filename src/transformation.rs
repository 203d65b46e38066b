use array_init::array_init;
use std::ops::Mul;

use crate::data::Polygon;
use crate::data::Vector;

type Matrix = [[f64; 3]; 3];

/// Affine transformation of the plane, stored as a homogeneous 3x3 matrix.
///
/// Transforms compose with `*`: `(a * b) * v == a * (b * v)`.
///
/// ```rust
/// # use shapes2d::data::{Transform, Vector};
/// let t = Transform::translate(Vector::new(1.0, 0.0)) * Transform::uniform_scale(2.0);
/// assert_eq!(&t * Vector::new(1.0, 1.0), Vector::new(3.0, 2.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Transform(Matrix);

impl Transform {
  pub fn identity() -> Transform {
    Transform(array_init(|row| {
      array_init(|col| if row == col { 1.0 } else { 0.0 })
    }))
  }

  pub fn translate(vec: Vector) -> Transform {
    let mut m = Transform::identity().0;
    m[0][2] = vec.0[0];
    m[1][2] = vec.0[1];
    Transform(m)
  }

  /// Counter-clockwise rotation around the origin.
  pub fn rotate(angle: f64) -> Transform {
    let (sin, cos) = angle.sin_cos();
    let mut m = Transform::identity().0;
    m[0][0] = cos;
    m[0][1] = -sin;
    m[1][0] = sin;
    m[1][1] = cos;
    Transform(m)
  }

  pub fn scale(vec: Vector) -> Transform {
    let mut m = Transform::identity().0;
    m[0][0] = vec.0[0];
    m[1][1] = vec.0[1];
    Transform(m)
  }

  pub fn uniform_scale(v: f64) -> Transform {
    Transform::scale(Vector::new(v, v))
  }

  /// Mirror across the x axis: `(x, y) -> (x, -y)`.
  pub fn reflect_x() -> Transform {
    Transform::scale(Vector::new(1.0, -1.0))
  }

  /// Mirror across the y axis: `(x, y) -> (-x, y)`.
  pub fn reflect_y() -> Transform {
    Transform::scale(Vector::new(-1.0, 1.0))
  }

  /// Conjugate `self` so that it acts around `pivot` instead of the origin.
  pub fn around(self, pivot: Vector) -> Transform {
    Transform::translate(pivot) * self * Transform::translate(-pivot)
  }
}

impl Mul<&Transform> for &Transform {
  type Output = Transform;
  fn mul(self, other: &Transform) -> Transform {
    let (a, b) = (&self.0, &other.0);
    Transform(array_init(|i| {
      array_init(|j| (0..3).map(|k| a[i][k] * b[k][j]).sum())
    }))
  }
}

impl Mul for Transform {
  type Output = Transform;
  fn mul(self, other: Transform) -> Transform {
    &self * &other
  }
}

// &t * &v = v
impl Mul<&Vector> for &Transform {
  type Output = Vector;
  fn mul(self, other: &Vector) -> Vector {
    let m = &self.0;
    let v = [other.0[0], other.0[1], 1.0];
    let ret: [f64; 3] = array_init(|i| (0..3).map(|k| m[i][k] * v[k]).sum());
    Vector([ret[0] / ret[2], ret[1] / ret[2]])
  }
}

// &t * v = v
impl Mul<Vector> for &Transform {
  type Output = Vector;
  fn mul(self, other: Vector) -> Vector {
    self.mul(&other)
  }
}

impl Mul<Vector> for Transform {
  type Output = Vector;
  fn mul(self, other: Vector) -> Vector {
    (&self).mul(&other)
  }
}

// Mirrored polygons are re-normalized to counter-clockwise order.
impl Mul<&Polygon> for &Transform {
  type Output = Polygon;
  fn mul(self, other: &Polygon) -> Polygon {
    other.clone().map_points(|p| self * p)
  }
}

impl Mul<Polygon> for &Transform {
  type Output = Polygon;
  fn mul(self, other: Polygon) -> Polygon {
    other.map_points(|p| self * p)
  }
}

impl Mul<Polygon> for Transform {
  type Output = Polygon;
  fn mul(self, other: Polygon) -> Polygon {
    (&self).mul(other)
  }
}

impl Mul<&Polygon> for Transform {
  type Output = Polygon;
  fn mul(self, other: &Polygon) -> Polygon {
    (&self).mul(other)
  }
}
