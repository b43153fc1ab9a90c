use crate::data::Cursor;
use crate::data::DirectedEdge;
use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T, 2>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct EdgeIter<'a, T: 'a> {
  pub(crate) iter: CursorIter<'a, T>,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T>;
  fn next(&mut self) -> Option<Self::Item> {
    let cursor = self.iter.next()?;
    Some(DirectedEdge {
      src: cursor.point(),
      dst: cursor.next().point(),
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

/// Walks every vertex once, starting at position 0.
pub struct CursorIter<'a, T: 'a> {
  pub(crate) cursor: Cursor<'a, T>,
  pub(crate) remaining: usize,
}

impl<T> Clone for CursorIter<'_, T> {
  fn clone(&self) -> Self {
    CursorIter {
      cursor: self.cursor,
      remaining: self.remaining,
    }
  }
}

impl<'a, T> Iterator for CursorIter<'a, T> {
  type Item = Cursor<'a, T>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let out = self.cursor;
    self.cursor.move_next();
    self.remaining -= 1;
    Some(out)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for CursorIter<'_, T> {}
