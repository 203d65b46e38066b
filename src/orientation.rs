use crate::data::Vector;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is computed with an adaptive-precision predicate and is exact
  /// for all finite inputs.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use shapes2d::data::Vector;
  /// # use shapes2d::Orientation;
  /// let p1 = Vector::new(0.0, 0.0);
  /// let p2 = Vector::new(0.0, 1.0); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Vector::new(0.0, 2.0)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Vector::new(-1.0, 2.0)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Vector::new(1.0, 2.0)).is_cw());
  /// ```
  pub fn new(p1: &Vector, p2: &Vector, p3: &Vector) -> Orientation {
    let orient = geometry_predicates::predicates::orient2d(p1.0, p2.0, p3.0);
    if orient > 0.0 {
      Orientation::CounterClockWise
    } else if orient < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// Winding of a shape with the given signed area. Only an area of exactly
  /// zero is `CoLinear`, tiny shapes keep their winding.
  pub fn from_signed_area(area: f64) -> Orientation {
    if area > 0.0 {
      Orientation::CounterClockWise
    } else if area < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn orientation_reverse(pt1 in any_vector(), pt2 in any_vector(), pt3 in any_vector()) {
      let abc = Orientation::new(&pt1, &pt2, &pt3);
      let cba = Orientation::new(&pt3, &pt2, &pt1);
      prop_assert_eq!(abc, cba.reverse())
    }

    #[test]
    fn orientation_cyclic(pt1 in any_vector(), pt2 in any_vector(), pt3 in any_vector()) {
      prop_assert_eq!(
        Orientation::new(&pt1, &pt2, &pt3),
        Orientation::new(&pt2, &pt3, &pt1)
      )
    }
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Orientation::new(
        &Vector::new(0.0, 0.0),
        &Vector::new(1.0, 1.0),
        &Vector::new(2.0, 2.0)
      ),
      Orientation::CoLinear
    );
    assert_eq!(
      Orientation::new(
        &Vector::new(0.0, 0.0),
        &Vector::new(0.0, 1.0),
        &Vector::new(2.0, 2.0)
      ),
      Orientation::ClockWise
    );
    assert_eq!(
      Orientation::new(
        &Vector::new(0.0, 0.0),
        &Vector::new(0.0, 1.0),
        &Vector::new(-2.0, 2.0)
      ),
      Orientation::CounterClockWise
    );
  }

  #[test]
  fn signed_area_sign() {
    assert!(Orientation::from_signed_area(2.0).is_ccw());
    assert!(Orientation::from_signed_area(-2.0).is_cw());
    assert!(Orientation::from_signed_area(1e-7).is_ccw());
    assert!(Orientation::from_signed_area(0.0).is_colinear());
  }
}
