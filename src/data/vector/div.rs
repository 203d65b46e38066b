use array_init::array_init;
use std::ops::Div;
use std::ops::DivAssign;

use super::Vector;

impl Div<f64> for Vector {
  type Output = Vector;

  fn div(self: Vector, other: f64) -> Self::Output {
    Vector(array_init(|i| self.0[i] / other))
  }
}

impl Div<f64> for &Vector {
  type Output = Vector;
  fn div(self, other: f64) -> Vector {
    *self / other
  }
}

impl DivAssign<f64> for Vector {
  fn div_assign(&mut self, other: f64) {
    for elt in self.0.iter_mut() {
      *elt /= other
    }
  }
}
