use super::Point;
use crate::{Orientation, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B, both endpoints included.
#[derive(Debug, PartialEq)]
pub struct DirectedEdge<'a, T> {
  pub src: &'a Point<T, 2>,
  pub dst: &'a Point<T, 2>,
}

impl<T> Copy for DirectedEdge<'_, T> {}
impl<T> Clone for DirectedEdge<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: PolygonScalar> DirectedEdge<'_, T> {
  /// `pt` lies on the closed segment. Uses exact orientation.
  pub fn contains(self, pt: &Point<T, 2>) -> bool {
    Orientation::new_robust(self.src, self.dst, pt).is_colinear() && self.in_bounding_box(pt)
  }

  /// The two closed segments share at least one point. Uses exact orientation.
  pub fn intersects(self, other: DirectedEdge<'_, T>) -> bool {
    let o1 = Orientation::new_robust(self.src, self.dst, other.src);
    let o2 = Orientation::new_robust(self.src, self.dst, other.dst);
    let o3 = Orientation::new_robust(other.src, other.dst, self.src);
    let o4 = Orientation::new_robust(other.src, other.dst, self.dst);

    if o1 != o2 && o3 != o4 {
      return true;
    }
    (o1.is_colinear() && self.in_bounding_box(other.src))
      || (o2.is_colinear() && self.in_bounding_box(other.dst))
      || (o3.is_colinear() && other.in_bounding_box(self.src))
      || (o4.is_colinear() && other.in_bounding_box(self.dst))
  }

  fn in_bounding_box(self, pt: &Point<T, 2>) -> bool {
    (0..2).all(|axis| {
      let lo = self.src[axis].min(self.dst[axis]);
      let hi = self.src[axis].max(self.dst[axis]);
      lo <= pt[axis] && pt[axis] <= hi
    })
  }
}
