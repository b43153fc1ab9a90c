use ordered_float::OrderedFloat;
use rand::Rng;
use std::collections::BTreeSet;

use crate::data::DirectedEdge;
use crate::data::Point;
use crate::Error;
use crate::Orientation;
use crate::PolygonScalar;

mod iter;
pub use iter::*;

/// Closed ring of vertices. The last vertex connects back to the first.
///
/// Vertices are stored in order and owned outright. Splitting a polygon always
/// copies the relevant vertices into a fresh `Polygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  /// Wrap a vertex list without checking the vertex count or fixing the winding.
  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { points }
  }

  /// Build a polygon from at least three vertices and orient it
  /// counter-clockwise.
  ///
  /// Simplicity is not checked here; see [`Polygon::validate`].
  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error>
  where
    T: PolygonScalar,
  {
    if points.len() < 3 {
      return Err(Error::InvalidPolygon);
    }
    let mut p = Self::new_unchecked(points);
    p.ensure_ccw();
    Ok(p)
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.points
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }

  /// Cyclic access. `idx` may be negative or past the end and is wrapped with
  /// Euclidean modulo, so `at(-1)` is the last vertex and `at(len)` the first.
  ///
  /// # Panics
  ///
  /// Panics if the polygon is empty.
  pub fn at(&self, idx: isize) -> &Point<T, 2> {
    let len = self.points.len() as isize;
    &self.points[idx.rem_euclid(len) as usize]
  }

  pub fn cursor(&self, idx: usize) -> Cursor<'_, T> {
    Cursor {
      polygon: self,
      position: idx % self.points.len(),
    }
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.points.iter(),
    }
  }

  pub fn iter_boundary(&self) -> CursorIter<'_, T> {
    CursorIter {
      cursor: Cursor {
        polygon: self,
        position: 0,
      },
      remaining: self.points.len(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      iter: self.iter_boundary(),
    }
  }

  pub fn cast<U, F>(self, f: F) -> Polygon<U>
  where
    T: Clone,
    F: Fn(T) -> U + Clone,
  {
    let points = self
      .points
      .into_iter()
      .map(|p| p.cast(f.clone()))
      .collect();
    Polygon { points }
  }
}

impl<T: PolygonScalar> Polygon<T> {
  /// Shoelace sum: twice the signed area, positive for counter-clockwise rings.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.array[0] * q.array[1] - q.array[0] * p.array[1]
      })
      .sum()
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  /// Index of the vertex with the smallest y coordinate. Ties go to the
  /// largest x coordinate, then to the lowest index.
  pub fn bottom_right(&self) -> Option<usize> {
    let mut points = self.points.iter().enumerate();
    let (mut br, mut best) = points.next()?;
    for (idx, pt) in points {
      if pt[1] < best[1] || (pt[1] == best[1] && pt[0] > best[0]) {
        br = idx;
        best = pt;
      }
    }
    Some(br)
  }

  /// Winding test at the bottom-right vertex, which is always convex on a
  /// simple polygon. Colinear neighbours count as clockwise.
  pub fn is_ccw(&self) -> bool {
    match self.bottom_right() {
      None => false,
      Some(br) => self.cursor(br).orientation().is_ccw(),
    }
  }

  /// Reverse the vertex order in place unless the polygon is already
  /// counter-clockwise.
  pub fn ensure_ccw(&mut self) {
    if !self.is_empty() && !self.is_ccw() {
      self.points.reverse();
    }
  }

  /// Consuming form of [`Polygon::ensure_ccw`].
  #[must_use]
  pub fn ccw(mut self) -> Polygon<T> {
    self.ensure_ccw();
    self
  }

  /// The turn `idx - 1 -> idx -> idx + 1` goes right. Only meaningful on a
  /// counter-clockwise polygon.
  pub fn is_reflex(&self, idx: isize) -> bool {
    self.at(idx - 1).is_right(self.at(idx), self.at(idx + 1))
  }

  pub fn reflex_vertices(&self) -> impl Iterator<Item = usize> + '_ {
    self
      .iter_boundary()
      .filter(|cursor| cursor.is_reflex())
      .map(|cursor| cursor.index())
  }

  pub fn is_convex(&self) -> bool {
    self.reflex_vertices().next().is_none()
  }

  /// Check that the polygon is simple. $O(n^2)$
  ///
  /// Rejects fewer than three vertices, NaN or infinite coordinates, repeated
  /// vertices, edges that double back on their predecessor and non-adjacent
  /// edges that touch or cross. All orientation tests are exact.
  pub fn validate(&self) -> Result<(), Error> {
    if self.len() < 3 {
      return Err(Error::InvalidPolygon);
    }
    if !self.iter().all(|pt| pt.is_finite()) {
      return Err(Error::NonFiniteCoordinate);
    }

    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      if !seen.insert([OrderedFloat(pt[0].as_f64()), OrderedFloat(pt[1].as_f64())]) {
        return Err(Error::DuplicatePoints);
      }
    }

    for cursor in self.iter_boundary() {
      let prev = cursor.prev().point();
      let this = cursor.point();
      let next = cursor.next().point();
      let incoming = DirectedEdge {
        src: prev,
        dst: this,
      };
      let outgoing = DirectedEdge {
        src: this,
        dst: next,
      };
      if Orientation::new_robust(prev, this, next).is_colinear()
        && (incoming.contains(next) || outgoing.contains(prev))
      {
        return Err(Error::SelfIntersections);
      }
    }

    let edges: Vec<DirectedEdge<'_, T>> = self.iter_boundary_edges().collect();
    let n = edges.len();
    for i in 0..n {
      for j in i + 2..n {
        if i == 0 && j == n - 1 {
          continue;
        }
        if edges[i].intersects(edges[j]) {
          return Err(Error::SelfIntersections);
        }
      }
    }
    Ok(())
  }

  /// Random star-shaped polygon with `n` vertices (at least 3) inside the unit
  /// disk, oriented counter-clockwise.
  ///
  /// Vertices sit at increasing angles around the origin with every angular gap
  /// below half a turn, so the origin sees the whole boundary and the polygon
  /// is simple.
  pub fn random_star<R>(n: usize, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let gaps: Vec<f64> = (0..n).map(|_| rng.gen_range(1.0..2.0)).collect();
    let total: f64 = gaps.iter().sum();
    let mut angle = 0.0;
    let points = gaps
      .into_iter()
      .map(|gap| {
        angle += gap / total * std::f64::consts::TAU;
        let radius: f64 = rng.gen_range(0.2..1.0);
        Point::new([
          T::from_f64_lossy(radius * angle.cos()),
          T::from_f64_lossy(radius * angle.sin()),
        ])
      })
      .collect();
    Polygon::new_unchecked(points)
  }
}

#[derive(Debug)]
pub struct Cursor<'a, T> {
  polygon: &'a Polygon<T>,
  position: usize,
}

impl<'a, T> PartialEq for Cursor<'a, T> {
  fn eq(&self, other: &Cursor<'a, T>) -> bool {
    std::ptr::eq(self.polygon, other.polygon) && self.position == other.position
  }
}

// Can't derive it because T should not be 'Clone'.
impl<T> Clone for Cursor<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}
impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
  pub fn index(self) -> usize {
    self.position
  }

  pub fn prev(mut self) -> Cursor<'a, T> {
    self.move_prev();
    self
  }

  pub fn next(mut self) -> Cursor<'a, T> {
    self.move_next();
    self
  }

  pub fn point(self) -> &'a Point<T, 2> {
    &self.polygon.points[self.position]
  }

  pub fn move_next(&mut self) {
    self.position = (self.position + 1) % self.polygon.len();
  }

  pub fn move_prev(&mut self) {
    if self.position == 0 {
      self.position = self.polygon.len() - 1;
    } else {
      self.position -= 1;
    }
  }

  pub fn orientation(&self) -> Orientation
  where
    T: PolygonScalar,
  {
    let p1 = self.prev().point();
    let p2 = self.point();
    let p3 = self.next().point();
    Orientation::new(p1, p2, p3)
  }

  pub fn is_reflex(&self) -> bool
  where
    T: PolygonScalar,
  {
    self.orientation().is_cw()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok, assert_some_eq};
  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn poly(pts: &[[f64; 2]]) -> Polygon<f64> {
    Polygon::new_unchecked(pts.iter().copied().map(Point::new).collect())
  }

  #[test]
  fn cyclic_access() {
    let p = poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    assert_eq!(p.at(-1), &Point::new([1.0, 1.0]));
    assert_eq!(p.at(-3), &Point::new([0.0, 0.0]));
    assert_eq!(p.at(-4), &Point::new([1.0, 1.0]));
    assert_eq!(p.at(3), &Point::new([0.0, 0.0]));
    assert_eq!(p.at(7), &Point::new([1.0, 0.0]));
    assert_eq!(p.cursor(0).prev().index(), 2);
    assert_eq!(p.cursor(2).next().index(), 0);
  }

  #[test]
  fn clockwise_square_is_reversed() {
    let mut p = poly(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]);
    assert!(!p.is_ccw());
    p.ensure_ccw();
    assert_eq!(
      p,
      poly(&[[10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]])
    );
    let br = p.bottom_right().unwrap();
    assert!(p.cursor(br).orientation().is_ccw());
    assert_eq!(p.signed_area(), 100.0);
  }

  #[test]
  fn bottom_right_tie_break() {
    let p = poly(&[[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [-1.0, 0.0]]);
    assert_some_eq!(p.bottom_right(), 1);
    assert_eq!(Polygon::<f64>::new_unchecked(vec![]).bottom_right(), None);
  }

  #[test]
  fn new_rejects_short_input() {
    assert_err_eq!(Polygon::<f64>::new(vec![]), Error::InvalidPolygon);
    assert_err_eq!(
      Polygon::new(vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])]),
      Error::InvalidPolygon
    );
  }

  #[test]
  fn new_orients() {
    let p = assert_ok!(Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([0.0, 1.0]),
      Point::new([1.0, 0.0]),
    ]));
    assert!(p.is_ccw());
    assert!(p.signed_area() > 0.0);
  }

  #[test]
  fn reflex_detection() {
    // L-shape, counter-clockwise; vertex 3 is the inner corner.
    let p = poly(&[
      [0.0, 0.0],
      [2.0, 0.0],
      [2.0, 1.0],
      [1.0, 1.0],
      [1.0, 2.0],
      [0.0, 2.0],
    ]);
    assert_eq!(p.reflex_vertices().collect::<Vec<_>>(), vec![3]);
    assert!(p.is_reflex(3));
    assert!(p.is_reflex(-3));
    assert!(!p.is_reflex(0));
    assert!(!p.is_convex());
    assert_eq!(p.area(), 3.0);
  }

  #[test]
  fn validate_accepts_simple() {
    assert_ok!(poly(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 2.0], [0.0, 2.0]]).validate());
    assert_ok!(poly(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).validate());
  }

  #[test]
  fn validate_rejects() {
    assert_err_eq!(poly(&[[0.0, 0.0], [1.0, 0.0]]).validate(), Error::InvalidPolygon);
    assert_err_eq!(
      poly(&[[0.0, 0.0], [f64::NAN, 0.0], [0.0, 1.0]]).validate(),
      Error::NonFiniteCoordinate
    );
    assert_err_eq!(
      poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [1.0, 0.0]]).validate(),
      Error::DuplicatePoints
    );
    // Bow tie.
    assert_err_eq!(
      poly(&[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]).validate(),
      Error::SelfIntersections
    );
    // Spike doubling back along its own edge.
    assert_err_eq!(
      poly(&[[0.0, 0.0], [2.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).validate(),
      Error::SelfIntersections
    );
    // Flat.
    assert_err_eq!(
      poly(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]).validate(),
      Error::SelfIntersections
    );
    // Vertex touching a non-adjacent edge.
    assert_err_eq!(
      poly(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 0.0], [0.0, 4.0]]).validate(),
      Error::SelfIntersections
    );
  }

  #[test]
  fn random_star_is_simple() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    for n in [0, 3, 4, 10, 50] {
      let p: Polygon<f64> = Polygon::random_star(n, &mut rng);
      assert_eq!(p.len(), n.max(3));
      assert_ok!(p.validate());
      assert!(p.is_ccw());
    }
  }

  #[test]
  fn cast_to_single_precision() {
    let p = poly(&[[0.0, 0.0], [4.0, 0.0], [0.0, 2.0]]).cast(|c| c as f32);
    assert_eq!(p.signed_area(), 4.0_f32);
  }

  #[proptest]
  fn ensure_ccw_idempotent(#[strategy(any_star(24))] p: Polygon<f64>) {
    let mut reversed = p.clone();
    reversed.points.reverse();
    for mut p in [p, reversed] {
      p.ensure_ccw();
      let once = p.clone();
      p.ensure_ccw();
      prop_assert_eq!(&once, &p);
      prop_assert!(p.is_ccw());
      prop_assert!(p.signed_area() > 0.0);
    }
  }

  #[proptest]
  fn convex_has_no_reflex(#[strategy(any_convex(24))] p: Polygon<f64>) {
    prop_assert!(p.is_convex());
    prop_assert!(p.is_ccw());
  }
}
