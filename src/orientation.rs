use crate::PolygonScalar;

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
  /// The turn is read off the sign of [`signed_area_2x`] evaluated in the scalar
  /// type, so it inherits ordinary floating point rounding.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polydecomp::data::Point;
  /// # use polydecomp::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    let area = signed_area_2x(p1, p2, p3);
    if area > T::zero() {
      Orientation::CounterClockWise
    } else if area < T::zero() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// Same as [`Orientation::new`] but evaluated with the adaptive-precision
  /// `orient2d` predicate, so the answer is exact for the given coordinates.
  pub fn new_robust<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    let orient = geometry_predicates::predicates::orient2d(
      [p1[0].as_f64(), p1[1].as_f64()],
      [p2[0].as_f64(), p2[1].as_f64()],
      [p3[0].as_f64(), p3[1].as_f64()],
    );
    if orient > 0.0 {
      Orientation::CounterClockWise
    } else if orient < 0.0 {
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
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
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

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive when `a -> b -> c` turns left, negative when it turns right and
/// zero when the points are colinear.
pub fn signed_area_2x<T>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> T
where
  T: PolygonScalar,
{
  (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
}

/// `c` lies strictly left of the directed line `a -> b`.
pub fn is_left<T: PolygonScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
  signed_area_2x(a, b, c) > T::zero()
}

/// `c` lies left of or on the directed line `a -> b`.
pub fn is_left_on<T: PolygonScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
  signed_area_2x(a, b, c) >= T::zero()
}

/// `c` lies strictly right of the directed line `a -> b`.
pub fn is_right<T: PolygonScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
  signed_area_2x(a, b, c) < T::zero()
}

/// `c` lies right of or on the directed line `a -> b`.
pub fn is_right_on<T: PolygonScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
  signed_area_2x(a, b, c) <= T::zero()
}
