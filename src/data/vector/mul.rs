use array_init::array_init;
use std::ops::Mul;
use std::ops::MulAssign;

use super::Vector;

impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(self: Vector, other: f64) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}

impl Mul<f64> for &Vector {
  type Output = Vector;
  fn mul(self, other: f64) -> Vector {
    *self * other
  }
}

// scalar * vector
impl Mul<Vector> for f64 {
  type Output = Vector;
  fn mul(self, other: Vector) -> Vector {
    other * self
  }
}

impl MulAssign<f64> for Vector {
  fn mul_assign(&mut self, other: f64) {
    for elt in self.0.iter_mut() {
      *elt *= other
    }
  }
}
