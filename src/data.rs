mod circle;
mod directed_edge;
pub mod polygon;
mod rectangle;
mod shape;
mod triangle;
mod vector;

pub use circle::*;
pub use directed_edge::*;
pub use rectangle::*;
pub use shape::*;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon};
pub use crate::transformation::Transform;
pub use vector::{cross, dot, Vector};
