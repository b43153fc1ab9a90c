use array_init::array_init;
use num_traits::*;
use std::ops::Deref;
use std::ops::Index;

use crate::orientation;
use crate::{Orientation, PolygonScalar};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// Origin. Also returned by [`Line::intersection_point`](crate::data::Line::intersection_point)
  /// when two lines do not meet.
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point {
      array: array_init(|_| Zero::zero()),
    }
  }

  /// Squared distance between two points. Only the ordering of distances is
  /// ever needed, so no square root is taken.
  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: PolygonScalar,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(&a, &b)| {
        let diff = b - a;
        diff * diff
      })
      .sum()
  }

  pub fn midpoint(&self, rhs: &Point<T, N>) -> Point<T, N>
  where
    T: PolygonScalar,
  {
    let two = T::from_constant(2);
    Point {
      array: array_init(|i| (self.array[i] + rhs.array[i]) / two),
    }
  }

  pub fn is_finite(&self) -> bool
  where
    T: PolygonScalar,
  {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
  fn from(array: [T; N]) -> Point<T, N> {
    Point { array }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Turn taken when walking `self -> q -> r`.
  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// `r` lies strictly left of the directed line `self -> q`.
  pub fn is_left(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    orientation::is_left(&self.array, &q.array, &r.array)
  }

  pub fn is_left_on(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    orientation::is_left_on(&self.array, &q.array, &r.array)
  }

  pub fn is_right(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    orientation::is_right(&self.array, &q.array, &r.array)
  }

  pub fn is_right_on(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    orientation::is_right_on(&self.array, &q.array, &r.array)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}
