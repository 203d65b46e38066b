// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar shapes: circles, polygons, rectangles, squares and triangles with
//! area, perimeter, centroid and congruence queries.
//!
//! All arithmetic is done in `f64` and comparisons are tolerance based, see
//! [`EPSILON`] and [`approx_eq`].
//!
//! ```rust
//! # use shapes2d::data::*;
//! let tri = Triangle::new([
//!   Vector::new(0.0, 0.0),
//!   Vector::new(4.0, 0.0),
//!   Vector::new(0.0, 3.0),
//! ])?;
//! assert_eq!(tri.area(), 6.0);
//! assert_eq!(tri.circumscribed_circle()?.radius(), 2.5);
//! # Ok::<(), shapes2d::Error>(())
//! ```

pub mod data;
mod orientation;
mod transformation;

pub use orientation::Orientation;

/// Absolute tolerance used by every floating-point comparison in this crate.
pub const EPSILON: f64 = 1e-5;

/// `|a - b| < EPSILON`
///
/// Not transitive: `approx_eq(a, b) && approx_eq(b, c)` does not imply
/// `approx_eq(a, c)`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
  (a - b).abs() < EPSILON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  NonFiniteCoordinate,
  /// Negative or non-finite radius, height, width or side.
  InvalidDimensions,
  /// The shape has no interior (zero area or coincident points) and the
  /// requested quantity would be a division by zero.
  DegenerateGeometry,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::InvalidDimensions => write!(f, "Invalid dimensions"),
      Error::DegenerateGeometry => write!(
        f,
        "Shape is degenerate and the requested quantity is undefined"
      ),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
