//! # Section Model
//!
//! A cross-section is one main polygon plus zero or more clipping polygons
//! (voids) fully enclosed by it. The model composes geometry-kernel calls
//! into net (gross minus voids) queries: area, centroid, chord width at an
//! elevation, and partial area/centroid above a horizontal axis.
//!
//! Clipping polygons carry their own vertex frames; depth-like results
//! from a clipping are re-based onto the main polygon's top before any
//! area-weighted combination.

use serde::{Deserialize, Serialize};

use crate::errors::{RcError, RcResult};
use crate::geometry::{self, Point};

/// A validated polygon: at least 3 distinct vertices, implicitly closed,
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    nodes: Vec<Point>,
}

impl Polygon {
    /// Validate and wrap an ordered vertex list.
    pub fn new(nodes: Vec<Point>) -> RcResult<Self> {
        geometry::require_polygon(&nodes)?;
        Ok(Self { nodes })
    }

    /// Build from (x, y) pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> RcResult<Self> {
        Self::new(pairs.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// The ordered vertex list.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Polygon area.
    pub fn area(&self) -> RcResult<f64> {
        geometry::area(&self.nodes)
    }

    /// Highest vertex ordinate.
    pub fn top(&self) -> RcResult<f64> {
        geometry::highest_y(&self.nodes)
    }

    /// Lowest vertex ordinate.
    pub fn bottom(&self) -> RcResult<f64> {
        geometry::lowest_y(&self.nodes)
    }
}

/// A cross-section: main polygon with optional hollow clippings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    main: Polygon,
    clippings: Vec<Polygon>,
}

impl Section {
    /// Create a solid section from its main polygon.
    pub fn new(main: Polygon) -> Self {
        Self {
            main,
            clippings: Vec::new(),
        }
    }

    /// Add a void polygon (builder form).
    pub fn with_clipping(mut self, clipping: Polygon) -> Self {
        self.clippings.push(clipping);
        self
    }

    /// Add a void polygon.
    pub fn add_clipping(&mut self, clipping: Polygon) {
        self.clippings.push(clipping);
    }

    /// The main (outer) polygon.
    pub fn main(&self) -> &Polygon {
        &self.main
    }

    /// The void polygons.
    pub fn clippings(&self) -> &[Polygon] {
        &self.clippings
    }

    /// Elevation of the extreme compression fiber (top of the main
    /// polygon).
    pub fn top(&self) -> RcResult<f64> {
        self.main.top()
    }

    /// Elevation of the bottom fiber of the main polygon.
    pub fn bottom(&self) -> RcResult<f64> {
        self.main.bottom()
    }

    /// Overall section height.
    pub fn height(&self) -> RcResult<f64> {
        Ok(self.top()? - self.bottom()?)
    }

    /// Net area: main polygon minus every void.
    ///
    /// A negative result signals voids that overflow or overlap the main
    /// polygon and fails with `InvalidGeometry`.
    pub fn gross_area(&self) -> RcResult<f64> {
        let mut net = self.main.area()?;
        for clip in &self.clippings {
            net -= clip.area()?;
        }
        if net < 0.0 {
            return Err(RcError::invalid_geometry(format!(
                "net section area is negative ({net:.3}); clippings exceed the main polygon"
            )));
        }
        Ok(net)
    }

    /// Net chord width at a horizontal elevation: main width minus the
    /// width of every void the elevation line passes through.
    ///
    /// A void whose boundary is crossed any number of times other than 0
    /// or 2 is ambiguous and fails with `InvalidClipping`.
    pub fn effective_width(&self, elevation: f64) -> RcResult<f64> {
        let mut width = geometry::width_at(elevation, self.main.nodes())?;

        for clip in &self.clippings {
            let intercepts = geometry::crossings_at(elevation, clip.nodes());
            match intercepts.len() {
                0 => {}
                2 => width -= (intercepts[0] - intercepts[1]).abs(),
                n => return Err(RcError::invalid_clipping(elevation, n)),
            }
        }

        Ok(width)
    }

    /// Net area above a horizontal axis elevation.
    pub fn area_above_axis(&self, elevation: f64) -> RcResult<f64> {
        let mut net = geometry::area_above(elevation, self.main.nodes())?;
        for clip in &self.clippings {
            net -= geometry::area_above(elevation, clip.nodes())?;
        }
        if net < 0.0 {
            return Err(RcError::invalid_geometry(format!(
                "net area above elevation {elevation} is negative ({net:.3})"
            )));
        }
        Ok(net)
    }

    /// Centroid of the net region above a horizontal axis, as a depth
    /// below the main polygon's top fiber.
    ///
    /// Area-weighted: each void's partial centroid is re-based by the
    /// offset between the main top and the void's top before subtraction.
    pub fn centroid_above_axis(&self, elevation: f64) -> RcResult<f64> {
        let main_top = self.top()?;
        let main_area = geometry::area_above(elevation, self.main.nodes())?;
        if main_area <= 0.0 {
            return Err(RcError::division_by_zero(format!(
                "no net area above elevation {elevation}"
            )));
        }
        let mut weighted = main_area * geometry::centroid_above(elevation, self.main.nodes())?;
        let mut net_area = main_area;

        for clip in &self.clippings {
            let clip_area = geometry::area_above(elevation, clip.nodes())?;
            if clip_area == 0.0 {
                continue;
            }
            let offset = main_top - clip.top()?;
            let clip_centroid = geometry::centroid_above(elevation, clip.nodes())?;
            weighted -= clip_area * (offset + clip_centroid);
            net_area -= clip_area;
        }

        if net_area <= 0.0 {
            return Err(RcError::division_by_zero(format!(
                "no net area above elevation {elevation}"
            )));
        }
        Ok(weighted / net_area)
    }

    /// Centroid of the whole net section, as a depth below the top fiber.
    pub fn net_centroid(&self) -> RcResult<f64> {
        let main_top = self.top()?;
        let main_area = self.main.area()?;
        let mut weighted = main_area * geometry::centroid_y(self.main.nodes())?;
        let mut net_area = main_area;

        for clip in &self.clippings {
            let clip_area = clip.area()?;
            let offset = main_top - clip.top()?;
            let clip_centroid = geometry::centroid_y(clip.nodes())?;
            weighted -= clip_area * (offset + clip_centroid);
            net_area -= clip_area;
        }

        if net_area <= 0.0 {
            return Err(RcError::division_by_zero(
                "net centroid of a zero-area section",
            ));
        }
        Ok(weighted / net_area)
    }
}
