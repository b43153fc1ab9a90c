// Strategies for:
//  * points on an integer grid
//  * simple star-shaped polygons
//  * convex polygons
//  * triangles
use crate::data::{Point, Polygon};

use proptest::collection::vec;
use proptest::prelude::*;

/// Points with small integer coordinates. Every product of two differences
/// stays exact in `f64`, so predicates on them never round.
pub fn any_grid_point() -> impl Strategy<Value = Point<f64, 2>> {
  (-1000_i32..=1000, -1000_i32..=1000).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

// Angular gaps drawn from [1, 2) never exceed half of their sum once there are
// three or more, so the origin stays inside and sees every vertex.
fn angles(gaps: &[f64]) -> Vec<f64> {
  let total: f64 = gaps.iter().sum();
  let mut angle = 0.0;
  gaps
    .iter()
    .map(|gap| {
      angle += gap / total * std::f64::consts::TAU;
      angle
    })
    .collect()
}

/// Simple star-shaped polygons with up to `max_n` vertices, counter-clockwise.
pub fn any_star(max_n: usize) -> impl Strategy<Value = Polygon<f64>> {
  vec((1.0..2.0_f64, 1.0..100.0_f64), 3..=max_n.max(3)).prop_map(|spokes| {
    let gaps: Vec<f64> = spokes.iter().map(|(gap, _)| *gap).collect();
    let points = angles(&gaps)
      .into_iter()
      .zip(spokes.iter().map(|(_, radius)| *radius))
      .map(|(angle, radius)| Point::new([radius * angle.cos(), radius * angle.sin()]))
      .collect();
    Polygon::new_unchecked(points)
  })
}

/// Strictly convex polygons with up to `max_n` vertices on a circle,
/// counter-clockwise.
pub fn any_convex(max_n: usize) -> impl Strategy<Value = Polygon<f64>> {
  (vec(1.0..2.0_f64, 3..=max_n.max(3)), 1.0..1000.0_f64).prop_map(|(gaps, radius)| {
    let points = angles(&gaps)
      .into_iter()
      .map(|angle| Point::new([radius * angle.cos(), radius * angle.sin()]))
      .collect();
    Polygon::new_unchecked(points)
  })
}

/// Non-degenerate triangles on the integer grid, in either winding.
pub fn any_triangle() -> impl Strategy<Value = Polygon<f64>> {
  (any_grid_point(), any_grid_point(), any_grid_point())
    .prop_filter("colinear", |(a, b, c)| !a.orientation(b, c).is_colinear())
    .prop_map(|(a, b, c)| Polygon::new_unchecked(vec![a, b, c]))
}
