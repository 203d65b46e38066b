// This module contains strategies for:
//  * vectors and offsets
//  * rotation angles and scale factors
//  * convex polygons
use crate::data::{Polygon, Vector};

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::f64::consts::PI;

pub fn any_vector() -> impl Strategy<Value = Vector> {
  (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Vector::new(x, y))
}

// Smaller than any_vector so that translated polygons keep their precision.
pub fn any_offset() -> impl Strategy<Value = Vector> {
  (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Vector::new(x, y))
}

pub fn any_angle() -> impl Strategy<Value = f64> {
  -PI..PI
}

// Bounded away from zero.
pub fn any_scale() -> impl Strategy<Value = f64> {
  prop_oneof![-5.0..-0.1f64, 0.1..5.0f64]
}

pub fn any_convex_polygon() -> impl Strategy<Value = Polygon> {
  (3..12usize, any::<u64>(), 1.0..10.0f64, any_offset())
    .prop_map(|(n, seed, size, offset)| {
      let mut rng = SmallRng::seed_from_u64(seed);
      let mut poly = Polygon::random_convex(n, &mut rng);
      poly.scale_around(Vector::new(0.0, 0.0), size);
      poly.translate(offset);
      poly
    })
    .prop_filter("polygon too thin", |poly| poly.area() > 0.1)
}

#[cfg(test)]
mod tests {
  use super::*;

  proptest! {
    #[test]
    fn convex_polygons_are_valid(poly in any_convex_polygon()) {
      prop_assert_eq!(poly.validate().err(), None);
      prop_assert!(poly.orientation().is_ccw());
    }
  }
}
