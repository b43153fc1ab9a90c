use super::Point;
use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line through `origin` and `through`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
  pub origin: Point<T, 2>,
  pub through: Point<T, 2>,
}

impl<T> Line<T> {
  pub fn new_through(origin: Point<T, 2>, through: Point<T, 2>) -> Line<T> {
    Line { origin, through }
  }
}

impl<T: PolygonScalar> Line<T> {
  /// Intersection of two infinite lines, solved with a 2x2 determinant.
  ///
  /// Returns `None` when `|det| <= tolerance`. The tolerance is absolute: lines
  /// through very large coordinates may be reported as crossing when they are
  /// nearly parallel, and lines through tiny coordinates may be reported as
  /// parallel when they are not.
  pub fn intersection(&self, other: &Line<T>, tolerance: T) -> Option<Point<T, 2>> {
    let (p1, p2) = (&self.origin, &self.through);
    let (q1, q2) = (&other.origin, &other.through);
    let a1 = p2[1] - p1[1];
    let b1 = p1[0] - p2[0];
    let c1 = a1 * p1[0] + b1 * p1[1];
    let a2 = q2[1] - q1[1];
    let b2 = q1[0] - q2[0];
    let c2 = a2 * q1[0] + b2 * q1[1];
    let det = a1 * b2 - a2 * b1;
    if det.abs() <= tolerance {
      return None;
    }
    Some(Point::new([
      (b2 * c1 - b1 * c2) / det,
      (a1 * c2 - a2 * c1) / det,
    ]))
  }

  /// Like [`Line::intersection`] but parallel lines yield the origin.
  ///
  /// The origin is a sentinel, not a checked answer: it is indistinguishable
  /// from a genuine intersection at `(0, 0)`.
  pub fn intersection_point(&self, other: &Line<T>, tolerance: T) -> Point<T, 2> {
    self
      .intersection(other, tolerance)
      .unwrap_or_else(Point::zero)
  }
}
