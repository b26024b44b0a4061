//! # Geometry Kernel
//!
//! Pure functions over an ordered sequence of 2-D vertices describing a
//! possibly-open polygon boundary (the first vertex is implicitly joined to
//! the last). These are the primitives the section model composes: signed
//! area, centroid ordinate, sub-region area/centroid above a horizontal
//! cut, and the chord width at an elevation.
//!
//! ## Conventions
//!
//! - Coordinates are millimeters in a local section frame, y increasing
//!   upward.
//! - Depth-like results (`centroid_y`, `centroid_above`) are reported as
//!   the distance below the polygon's topmost vertex, matching the
//!   "elevation from the extreme compression fiber" convention used by the
//!   flexural solvers.
//! - Elevation comparisons use closed intervals so a cut exactly through a
//!   vertex is still detected as a boundary crossing.
//!
//! A horizontal cut with more than two boundary crossings (a non-convex
//! boundary producing multiple chords) is rejected as `InvalidGeometry`
//! rather than silently mishandled.

use serde::{Deserialize, Serialize};

use crate::errors::{RcError, RcResult};

/// A vertex of a section polygon, millimeters in the local section frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Minimum vertex count for a non-degenerate polygon
const MIN_VERTICES: usize = 3;

pub(crate) fn require_polygon(nodes: &[Point]) -> RcResult<()> {
    let mut distinct: Vec<Point> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !distinct.iter().any(|p| p.x == node.x && p.y == node.y) {
            distinct.push(*node);
        }
    }
    if distinct.len() < MIN_VERTICES {
        return Err(RcError::invalid_geometry(format!(
            "polygon requires at least {} distinct vertices, found {}",
            MIN_VERTICES,
            distinct.len()
        )));
    }
    Ok(())
}

/// Signed shoelace sum over the implicitly-closed ring. Positive for
/// counter-clockwise winding.
fn signed_area(nodes: &[Point]) -> f64 {
    let n = nodes.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = nodes[i];
        let b = nodes[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Area of the polygon by the shoelace formula.
///
/// Fails with `InvalidGeometry` for fewer than 3 distinct vertices.
pub fn area(nodes: &[Point]) -> RcResult<f64> {
    require_polygon(nodes)?;
    Ok(signed_area(nodes).abs())
}

/// Centroid ordinate of the polygon, reported as the distance below its
/// topmost vertex.
///
/// Fails with `DivisionByZero` if the polygon encloses zero area.
pub fn centroid_y(nodes: &[Point]) -> RcResult<f64> {
    require_polygon(nodes)?;

    let signed = signed_area(nodes);
    if signed.abs() < f64::EPSILON {
        return Err(RcError::division_by_zero(
            "centroid of a zero-area polygon",
        ));
    }

    let n = nodes.len();
    let mut moment = 0.0;
    for i in 0..n {
        let a = nodes[i];
        let b = nodes[(i + 1) % n];
        moment += (a.y + b.y) * (a.x * b.y - b.x * a.y);
    }
    // Signs cancel between the moment sum and the signed area, so the raw
    // centroid is winding-independent.
    let raw = moment / (6.0 * signed);

    Ok(highest_y(nodes)? - raw)
}

/// Highest y-ordinate among the vertices.
pub fn highest_y(nodes: &[Point]) -> RcResult<f64> {
    nodes
        .iter()
        .map(|p| p.y)
        .fold(None, |acc: Option<f64>, y| {
            Some(acc.map_or(y, |a| a.max(y)))
        })
        .ok_or_else(|| RcError::invalid_geometry("empty vertex list"))
}

/// Lowest y-ordinate among the vertices.
pub fn lowest_y(nodes: &[Point]) -> RcResult<f64> {
    nodes
        .iter()
        .map(|p| p.y)
        .fold(None, |acc: Option<f64>, y| {
            Some(acc.map_or(y, |a| a.min(y)))
        })
        .ok_or_else(|| RcError::invalid_geometry("empty vertex list"))
}

/// Linear x-intercept of the edge (x1,y1)-(x3,y3) at elevation y2.
fn interpolate(x1: f64, x3: f64, y1: f64, y2: f64, y3: f64) -> f64 {
    (y2 - y3) / (y1 - y3) * (x1 - x3) + x3
}

/// True if the edge straddles the elevation. Closed on the start vertex so
/// a cut exactly through a vertex is still counted.
fn straddles(y1: f64, y3: f64, elevation: f64) -> bool {
    (y1 <= elevation && y3 > elevation) || (y1 >= elevation && y3 < elevation)
}

/// X-intercepts of the closed boundary with the horizontal line at
/// `elevation`, in boundary order.
pub fn crossings_at(elevation: f64, nodes: &[Point]) -> Vec<f64> {
    let n = nodes.len();
    let mut intercepts = Vec::new();
    for i in 0..n {
        let a = nodes[i];
        let b = nodes[(i + 1) % n];
        if straddles(a.y, b.y, elevation) {
            intercepts.push(interpolate(a.x, b.x, a.y, elevation, b.y));
        }
    }
    intercepts
}

/// Chord width of the polygon at a horizontal elevation.
///
/// Returns 0 when the elevation misses the polygon entirely (or grazes a
/// single vertex). More than two boundary crossings means the cut produces
/// multiple chords, which this kernel does not support; that case fails
/// with `InvalidGeometry`.
pub fn width_at(elevation: f64, nodes: &[Point]) -> RcResult<f64> {
    require_polygon(nodes)?;

    let intercepts = crossings_at(elevation, nodes);
    match intercepts.len() {
        0 | 1 => Ok(0.0),
        2 => Ok((intercepts[0] - intercepts[1]).abs()),
        n => Err(RcError::invalid_geometry(format!(
            "elevation {elevation} crosses the boundary {n} times; only single-chord cuts are supported"
        ))),
    }
}

/// Build the clipped ring above a horizontal cut: the boundary-intersection
/// points plus every original vertex at or above the elevation, preserving
/// the original winding order.
fn clip_above(elevation: f64, nodes: &[Point]) -> RcResult<Vec<Point>> {
    let n = nodes.len();
    let mut crossings = 0usize;
    let mut ring: Vec<Point> = Vec::new();

    for i in 0..n {
        let a = nodes[i];
        let b = nodes[(i + 1) % n];
        if a.y >= elevation {
            ring.push(a);
        }
        if straddles(a.y, b.y, elevation) {
            crossings += 1;
            ring.push(Point::new(interpolate(a.x, b.x, a.y, elevation, b.y), elevation));
        }
    }

    if crossings > 2 {
        return Err(RcError::invalid_geometry(format!(
            "elevation {elevation} crosses the boundary {crossings} times; only single-chord cuts are supported"
        )));
    }

    // Duplicate points from a cut through a vertex contribute nothing to
    // the shoelace sums and are left in place.
    Ok(ring)
}

/// Area of the polygon region above a horizontal elevation.
///
/// An elevation at or above the topmost vertex yields 0; one at or below
/// the lowest vertex yields the full polygon area.
pub fn area_above(elevation: f64, nodes: &[Point]) -> RcResult<f64> {
    require_polygon(nodes)?;

    if elevation >= highest_y(nodes)? {
        return Ok(0.0);
    }

    let ring = clip_above(elevation, nodes)?;
    if ring.len() < MIN_VERTICES {
        return Ok(0.0);
    }
    Ok(signed_area(&ring).abs())
}

/// Centroid of the polygon region above a horizontal elevation, reported
/// as the distance below the clipped region's topmost vertex.
pub fn centroid_above(elevation: f64, nodes: &[Point]) -> RcResult<f64> {
    require_polygon(nodes)?;

    let ring = clip_above(elevation, nodes)?;
    centroid_y(&ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(width: f64, height: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, height),
            Point::new(width, height),
            Point::new(width, 0.0),
        ]
    }

    fn triangle(base: f64, height: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(base / 2.0, height),
            Point::new(base, 0.0),
        ]
    }

    #[test]
    fn test_rectangle_area() {
        let rect = rectangle(300.0, 450.0);
        let a = area(&rect).unwrap();
        assert!((a - 135_000.0).abs() / 135_000.0 < 1e-6);
    }

    #[test]
    fn test_triangle_area() {
        let tri = triangle(300.0, 600.0);
        let a = area(&tri).unwrap();
        assert!((a - 90_000.0).abs() / 90_000.0 < 1e-6);
    }

    #[test]
    fn test_area_winding_independent() {
        let mut rect = rectangle(300.0, 450.0);
        rect.reverse();
        assert!((area(&rect).unwrap() - 135_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_polygon() {
        let line = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(matches!(
            area(&line),
            Err(crate::errors::RcError::InvalidGeometry { .. })
        ));

        // Three vertices but only two distinct
        let collapsed = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        assert!(area(&collapsed).is_err());
    }

    #[test]
    fn test_rectangle_centroid() {
        // Centroid of a rectangle of height h is h/2 from the top, for any
        // width.
        for width in [50.0, 300.0, 1200.0] {
            let rect = rectangle(width, 450.0);
            let c = centroid_y(&rect).unwrap();
            assert!((c - 225.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_triangle_centroid() {
        // Apex-up triangle: centroid sits 2h/3 below the apex.
        let tri = triangle(300.0, 600.0);
        let c = centroid_y(&tri).unwrap();
        assert!((c - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_area_centroid() {
        let flat = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 0.0),
        ];
        assert!(matches!(
            centroid_y(&flat),
            Err(crate::errors::RcError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_extrema() {
        let tri = triangle(300.0, 600.0);
        assert_eq!(highest_y(&tri).unwrap(), 600.0);
        assert_eq!(lowest_y(&tri).unwrap(), 0.0);
    }

    #[test]
    fn test_rectangle_width_independent_of_elevation() {
        let rect = rectangle(300.0, 450.0);
        for e in [1.0, 100.0, 225.0, 449.0] {
            assert!((width_at(e, &rect).unwrap() - 300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_width_outside_polygon() {
        let rect = rectangle(300.0, 450.0);
        assert_eq!(width_at(500.0, &rect).unwrap(), 0.0);
        assert_eq!(width_at(-10.0, &rect).unwrap(), 0.0);
    }

    #[test]
    fn test_width_rejects_multiple_chords() {
        // U shape: a cut through the opening crosses the boundary 4 times.
        let u_shape = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 300.0),
            Point::new(100.0, 300.0),
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 300.0),
            Point::new(300.0, 300.0),
            Point::new(300.0, 0.0),
        ];
        assert!(matches!(
            width_at(200.0, &u_shape),
            Err(crate::errors::RcError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_area_above_rectangle() {
        let rect = rectangle(300.0, 450.0);
        // Cut 100 below the top leaves a 300x100 strip above.
        let a = area_above(350.0, &rect).unwrap();
        assert!((a - 30_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_above_matches_similar_triangle() {
        // Apex-up triangle: the region above a cut is a similar triangle,
        // so the clipped area has a closed form independent of the kernel.
        let tri = triangle(300.0, 600.0);
        let total = area(&tri).unwrap();
        for e in [50.0, 200.0, 433.3, 599.0] {
            let above = area_above(e, &tri).unwrap();
            let ratio = (600.0 - e) / 600.0;
            assert!((above - total * ratio * ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn test_area_above_complement_reconstructs_total() {
        // The complement is computed independently by clipping the
        // y-mirrored polygon above the mirrored cut; the two clipped
        // areas must rebuild the full polygon area.
        let tri = triangle(300.0, 600.0);
        let mirrored: Vec<Point> = tri.iter().map(|p| Point::new(p.x, -p.y)).collect();
        let total = area(&tri).unwrap();
        for e in [50.0, 200.0, 433.3, 599.0] {
            let above = area_above(e, &tri).unwrap();
            let below = area_above(-e, &mirrored).unwrap();
            assert!(above > 0.0 && below > 0.0);
            assert!((above + below - total).abs() < 1e-9);
        }
    }

    #[test]
    fn test_area_above_extremes() {
        let rect = rectangle(300.0, 450.0);
        assert_eq!(area_above(450.0, &rect).unwrap(), 0.0);
        assert!((area_above(0.0, &rect).unwrap() - 135_000.0).abs() < 1e-9);
        assert!((area_above(-50.0, &rect).unwrap() - 135_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_above_rectangle() {
        let rect = rectangle(300.0, 450.0);
        // Strip above the cut is 100 tall: centroid 50 below the top.
        let c = centroid_above(350.0, &rect).unwrap();
        assert!((c - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_crossing_through_vertex_detected() {
        let tri = triangle(300.0, 600.0);
        // A cut exactly at a base vertex elevation must still be seen.
        let intercepts = crossings_at(0.0, &tri);
        assert!(!intercepts.is_empty());
    }
}
