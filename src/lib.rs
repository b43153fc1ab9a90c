#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex decomposition of simple polygons.
//!
//! A polygon is split at its reflex vertices until every piece is convex. The
//! diagonal for each reflex vertex is picked with a fast local heuristic, so the
//! number of pieces is small but not guaranteed to be minimal.
//!
//! ```rust
//! # use polydecomp::data::{Point, Polygon};
//! # use polydecomp::algorithms::convex_decomposition;
//! let notched = Polygon::new(vec![
//!   Point::new([-100.0, 100.0]),
//!   Point::new([-100.0, 0.0]),
//!   Point::new([100.0, 0.0]),
//!   Point::new([100.0, 100.0]),
//!   Point::new([50.0, 50.0]),
//! ])?;
//! let pieces = convex_decomposition(&notched)?;
//! assert_eq!(pieces.len(), 2);
//! assert!(pieces.iter().all(|piece| piece.is_convex()));
//! # Ok::<(), polydecomp::Error>(())
//! ```
use num_traits::Float;
use std::iter::Sum;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::{is_left, is_left_on, is_right, is_right_on, signed_area_2x, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three vertices.
  InvalidPolygon,
  DuplicatePoints,
  SelfIntersections,
  NonFiniteCoordinate,
  /// The decomposition inserted more diagonals than its configured limit.
  SplitLimitExceeded,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidPolygon => write!(f, "Polygon needs at least three vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::SelfIntersections => write!(f, "Self intersections"),
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
      Error::SplitLimitExceeded => write!(f, "Split limit exceeded"),
    }
  }
}

impl std::error::Error for Error {}

/// Real-number type used for coordinates.
///
/// Every predicate and distance is evaluated in the scalar type itself; there is
/// no widening to a more precise type inside a computation.
pub trait PolygonScalar: Float + std::fmt::Debug + Sum {
  fn from_constant(val: i8) -> Self;
  fn from_f64_lossy(val: f64) -> Self;
  fn as_f64(self) -> f64;
  /// Absolute bound on a 2x2 determinant below which two lines count as
  /// parallel. Fixed at 1e-8 for every width and not scaled by coordinate
  /// magnitude, so very large or very small inputs should be normalized first.
  fn parallel_tolerance() -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
        #[allow(clippy::cast_possible_truncation)]
        fn from_f64_lossy(val: f64) -> Self {
          val as $ty
        }
        #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
        fn as_f64(self) -> f64 {
          self as f64
        }
        #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
        fn parallel_tolerance() -> Self {
          1e-8_f64 as $ty
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
