//! Convex decomposition by resolving reflex vertices one diagonal at a time.
//!
//! For the first reflex vertex `i` of a counter-clockwise polygon, the lines
//! through its two incident edges are extended into the interior until they hit
//! the boundary. If some vertex lies between the two hits and inside the cone at
//! `i`, the closest such vertex becomes the other end of the diagonal.
//! Otherwise both hits land on neighbouring edges (a notch) and the diagonal
//! ends at the midpoint of the two hits instead. Both halves are then
//! decomposed further, the smaller one first.
//!
//! The diagonal is not checked for visibility, and degenerate input
//! (colinear runs, repeated vertices, near-parallel edges) is not detected.
//! In those cases the pieces are still free of reflex vertices but may not
//! tile the input exactly.
use crate::data::{Line, Point, Polygon};
use crate::{Error, PolygonScalar};

/// Decomposition settings.
///
/// ```rust
/// # use polydecomp::algorithms::Decomposer;
/// # use polydecomp::data::{Point, Polygon};
/// let l_shape = Polygon::new(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([2.0, 1.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([1.0, 2.0]),
///   Point::new([0.0, 2.0]),
/// ])?;
/// let pieces = Decomposer::new()
///   .with_tolerance(1e-12)
///   .with_max_splits(16)
///   .decompose(&l_shape)?;
/// assert_eq!(pieces.len(), 2);
/// # Ok::<(), polydecomp::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposer<T> {
  tolerance: T,
  max_splits: Option<usize>,
}

impl<T: PolygonScalar> Default for Decomposer<T> {
  fn default() -> Self {
    Decomposer {
      tolerance: T::parallel_tolerance(),
      max_splits: None,
    }
  }
}

impl<T: PolygonScalar> Decomposer<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Determinant bound under which two lines count as parallel. Defaults to
  /// [`PolygonScalar::parallel_tolerance`].
  #[must_use]
  pub fn with_tolerance(mut self, tolerance: T) -> Self {
    self.tolerance = tolerance;
    self
  }

  /// Give up with [`Error::SplitLimitExceeded`] after this many diagonals.
  /// Defaults to `n * n` for an input with `n` vertices.
  #[must_use]
  pub fn with_max_splits(mut self, max_splits: usize) -> Self {
    self.max_splits = Some(max_splits);
    self
  }

  pub fn tolerance(&self) -> T {
    self.tolerance
  }

  /// Step through the decomposition of `polygon`.
  ///
  /// The input is copied and oriented counter-clockwise first; the caller's
  /// polygon is left untouched.
  pub fn iter(&self, polygon: &Polygon<T>) -> Result<Decomposition<T>, Error> {
    let n = polygon.len();
    if n < 3 {
      return Err(Error::InvalidPolygon);
    }
    tracing::debug!(vertices = n, "decomposing polygon");
    Ok(Decomposition {
      pending: vec![polygon.clone().ccw()],
      tolerance: self.tolerance,
      splits: 0,
      max_splits: self.max_splits.unwrap_or_else(|| n.saturating_mul(n)),
      exhausted: false,
    })
  }

  /// Convex pieces of `polygon`, in the order they are completed.
  pub fn decompose(&self, polygon: &Polygon<T>) -> Result<Vec<Polygon<T>>, Error> {
    let mut pieces = Vec::new();
    for step in self.iter(polygon)? {
      if let Step::Convex(piece) = step? {
        pieces.push(piece);
      }
    }
    Ok(pieces)
  }
}

/// Decompose with the default tolerance and split limit.
///
/// Rejects polygons with fewer than three vertices. The winding is fixed
/// before decomposing; every piece comes out counter-clockwise.
pub fn convex_decomposition<T>(polygon: &Polygon<T>) -> Result<Vec<Polygon<T>>, Error>
where
  T: PolygonScalar,
{
  Decomposer::default().decompose(polygon)
}

/// Decompose a counter-clockwise polygon with at least three vertices.
///
/// No checks and no split limit. On input that is not simple this may not
/// terminate.
pub fn decompose_ccw<T>(polygon: Polygon<T>, tolerance: T) -> Vec<Polygon<T>>
where
  T: PolygonScalar,
{
  let steps = Decomposition {
    pending: vec![polygon],
    tolerance,
    splits: 0,
    max_splits: usize::MAX,
    exhausted: false,
  };
  steps
    .filter_map(|step| match step {
      Ok(Step::Convex(piece)) => Some(piece),
      _ => None,
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
  /// The diagonal ends at an existing vertex.
  Vertex,
  /// The diagonal ends at a new point halfway between the two boundary hits.
  Notch,
}

/// A diagonal inserted at a reflex vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split<T> {
  pub reflex: Point<T, 2>,
  pub target: Point<T, 2>,
  pub kind: SplitKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
  Split(Split<T>),
  Convex(Polygon<T>),
}

/// Work-stack iterator over a decomposition.
///
/// Yields every inserted diagonal and every finished piece in the order a
/// depth-first recursion visits them, smaller half first. After
/// [`Error::SplitLimitExceeded`] the iterator is empty.
#[derive(Debug, Clone)]
pub struct Decomposition<T> {
  pending: Vec<Polygon<T>>,
  tolerance: T,
  splits: usize,
  max_splits: usize,
  exhausted: bool,
}

impl<T: PolygonScalar> Iterator for Decomposition<T> {
  type Item = Result<Step<T>, Error>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.exhausted {
      return None;
    }
    let polygon = self.pending.pop()?;
    match split(&polygon, self.tolerance) {
      None => {
        tracing::trace!(vertices = polygon.len(), "convex piece");
        Some(Ok(Step::Convex(polygon)))
      }
      Some((split, first, second)) => {
        if self.splits >= self.max_splits {
          tracing::warn!(splits = self.splits, "split limit exceeded");
          self.exhausted = true;
          self.pending.clear();
          return Some(Err(Error::SplitLimitExceeded));
        }
        self.splits += 1;
        self.pending.push(second);
        self.pending.push(first);
        Some(Ok(Step::Split(split)))
      }
    }
  }
}

// Nearest boundary hit of a line extended from a reflex vertex.
#[derive(Debug, Clone, Copy)]
struct Hit<T> {
  index: usize,
  point: Point<T, 2>,
  distance: T,
}

impl<T: PolygonScalar> Hit<T> {
  // Degenerate input where no edge qualifies.
  fn missing() -> Hit<T> {
    Hit {
      index: 0,
      point: Point::zero(),
      distance: T::zero(),
    }
  }
}

// Split at the first reflex vertex. Returns the diagonal and both halves,
// smaller half first, or None if the polygon is convex.
fn split<T>(polygon: &Polygon<T>, tolerance: T) -> Option<(Split<T>, Polygon<T>, Polygon<T>)>
where
  T: PolygonScalar,
{
  let n = polygon.len();
  let i = (0..n).find(|&i| polygon.is_reflex(i as isize))?;
  let lower = lower_hit(polygon, i, tolerance).unwrap_or_else(Hit::missing);
  let upper = upper_hit(polygon, i, tolerance).unwrap_or_else(Hit::missing);
  let pts = polygon.points();

  let (split, lower_pts, upper_pts) = if lower.index == (upper.index + 1) % n {
    let mid = lower.point.midpoint(&upper.point);
    tracing::debug!(reflex = i, lower = lower.index, upper = upper.index, "notch split");
    let mut lower_pts = Vec::with_capacity(n + 1);
    let mut upper_pts = vec![mid];
    if i < upper.index {
      lower_pts.extend_from_slice(&pts[i..=upper.index]);
      lower_pts.push(mid);
      if lower.index != 0 {
        upper_pts.extend_from_slice(&pts[lower.index..]);
      }
      upper_pts.extend_from_slice(&pts[..=i]);
    } else {
      if i != 0 {
        lower_pts.extend_from_slice(&pts[i..]);
      }
      lower_pts.extend_from_slice(&pts[..=upper.index]);
      lower_pts.push(mid);
      upper_pts.extend_from_slice(&pts[lower.index..=i]);
    }
    let split = Split {
      reflex: pts[i],
      target: mid,
      kind: SplitKind::Notch,
    };
    (split, lower_pts, upper_pts)
  } else {
    let closest = closest_visible(polygon, i, lower.index, upper.index);
    tracing::debug!(reflex = i, target = closest, "vertex split");
    let (lower_pts, upper_pts) = if i < closest {
      let lower_pts = pts[i..=closest].to_vec();
      let mut upper_pts = pts[closest..].to_vec();
      upper_pts.extend_from_slice(&pts[..=i]);
      (lower_pts, upper_pts)
    } else {
      let mut lower_pts = if i != 0 { pts[i..].to_vec() } else { Vec::new() };
      lower_pts.extend_from_slice(&pts[..=closest]);
      (lower_pts, pts[closest..=i].to_vec())
    };
    let split = Split {
      reflex: pts[i],
      target: pts[closest],
      kind: SplitKind::Vertex,
    };
    (split, lower_pts, upper_pts)
  };

  let lower_poly = Polygon::new_unchecked(lower_pts);
  let upper_poly = Polygon::new_unchecked(upper_pts);
  if lower_poly.len() < upper_poly.len() {
    Some((split, lower_poly, upper_poly))
  } else {
    Some((split, upper_poly, lower_poly))
  }
}

// Extend the incoming edge (i-1, i) past i and find the nearest edge (j-1, j)
// it crosses on the interior side of the outgoing edge.
fn lower_hit<T>(polygon: &Polygon<T>, i: usize, tolerance: T) -> Option<Hit<T>>
where
  T: PolygonScalar,
{
  let i = i as isize;
  let (prev, this, next) = (polygon.at(i - 1), polygon.at(i), polygon.at(i + 1));
  let ray = Line::new_through(*prev, *this);
  let mut best: Option<Hit<T>> = None;
  for j in 0..polygon.len() as isize {
    let (a, b) = (polygon.at(j), polygon.at(j - 1));
    if prev.is_left(this, a) && prev.is_right_on(this, b) {
      let point = ray.intersection_point(&Line::new_through(*a, *b), tolerance);
      if next.is_right(this, &point) {
        let distance = this.squared_euclidean_distance(&point);
        if best.map_or(true, |hit| distance < hit.distance) {
          best = Some(Hit {
            index: j as usize,
            point,
            distance,
          });
        }
      }
    }
  }
  best
}

// Extend the outgoing edge (i, i+1) backwards past i and find the nearest edge
// (j, j+1) it crosses on the interior side of the incoming edge.
fn upper_hit<T>(polygon: &Polygon<T>, i: usize, tolerance: T) -> Option<Hit<T>>
where
  T: PolygonScalar,
{
  let i = i as isize;
  let (prev, this, next) = (polygon.at(i - 1), polygon.at(i), polygon.at(i + 1));
  let ray = Line::new_through(*next, *this);
  let mut best: Option<Hit<T>> = None;
  for j in 0..polygon.len() as isize {
    let (a, b) = (polygon.at(j), polygon.at(j + 1));
    if next.is_left(this, b) && next.is_right_on(this, a) {
      let point = ray.intersection_point(&Line::new_through(*a, *b), tolerance);
      if prev.is_left(this, &point) {
        let distance = this.squared_euclidean_distance(&point);
        if best.map_or(true, |hit| distance < hit.distance) {
          best = Some(Hit {
            index: j as usize,
            point,
            distance,
          });
        }
      }
    }
  }
  best
}

// Closest vertex in the index range [lower, upper] (wrapping) that lies inside
// the cone spanned by the two edges at i. Falls back to vertex 0.
fn closest_visible<T>(polygon: &Polygon<T>, i: usize, lower: usize, upper: usize) -> usize
where
  T: PolygonScalar,
{
  let n = polygon.len();
  let signed = i as isize;
  let (prev, this, next) = (
    polygon.at(signed - 1),
    polygon.at(signed),
    polygon.at(signed + 1),
  );
  let upper = if lower > upper { upper + n } else { upper };
  let mut closest: Option<(usize, T)> = None;
  for j in lower..=upper {
    let candidate = polygon.at(j as isize);
    if prev.is_left_on(this, candidate) && next.is_right_on(this, candidate) {
      let distance = this.squared_euclidean_distance(candidate);
      if closest.map_or(true, |(_, best)| distance < best) {
        closest = Some((j % n, distance));
      }
    }
  }
  closest.map_or(0, |(idx, _)| idx)
}
