mod directed_edge;
mod line;
pub(crate) mod point;
pub mod polygon;

pub use directed_edge::*;
pub use line::*;

#[doc(inline)]
pub use crate::data::polygon::{Cursor, Polygon};
pub use point::Point;
