// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Vector geometry for glyph layers.
//!
//! A `PathData` is an ordered list of polyline `Subpath`s. Every subpath
//! starts with an explicit move-to point and continues with line-to points;
//! a closed subpath has an implicit edge from its last point back to its
//! first. All geometry converts to `kurbo::BezPath` for rendering and
//! persists as SVG path data.

pub mod synth;

use crate::error::ProjectError;
use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};

/// Tolerance used when flattening curves found in imported path data
const FLATTEN_TOLERANCE: f64 = 0.25;

/// One continuous move-to-started chain of points
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Subpath {
    /// An open polyline through `points`
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Vertices in walk order, with the closing edge made explicit.
    pub fn vertices(&self) -> Vec<Point> {
        let mut vertices = self.points.clone();
        if self.closed && self.points.len() >= 2 {
            vertices.push(self.points[0]);
        }
        vertices
    }
}

/// Geometry of a vector layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PathData {
    subpaths: Vec<Subpath>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_subpaths(subpaths: Vec<Subpath>) -> Self {
        let subpaths = subpaths
            .into_iter()
            .filter(|sp| !sp.points.is_empty())
            .collect();
        Self { subpaths }
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    pub fn into_subpaths(self) -> Vec<Subpath> {
        self.subpaths
    }

    /// Append a subpath; empty subpaths are dropped.
    pub fn push(&mut self, subpath: Subpath) {
        if !subpath.points.is_empty() {
            self.subpaths.push(subpath);
        }
    }

    /// Every point of every subpath
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.subpaths.iter().flat_map(|sp| sp.points.iter().copied())
    }

    /// Largest X coordinate reached by any point
    pub fn max_x(&self) -> Option<f64> {
        self.points().map(|p| p.x).reduce(f64::max)
    }

    /// Convert this path to a kurbo BezPath for rendering
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        for subpath in &self.subpaths {
            let mut points = subpath.points.iter();
            let Some(&first) = points.next() else {
                continue;
            };
            bez.move_to(first);
            for &pt in points {
                bez.line_to(pt);
            }
            if subpath.closed {
                bez.close_path();
            }
        }
        bez
    }

    /// Build path data from a kurbo path, flattening any curves.
    pub fn from_bezpath(bez: &BezPath) -> Self {
        let mut subpaths = Vec::new();
        let mut current: Option<Subpath> = None;
        kurbo::flatten(bez.iter(), FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => {
                subpaths.extend(current.replace(Subpath::open(vec![p])));
            }
            PathEl::LineTo(p) => match current.as_mut() {
                Some(sp) => sp.points.push(p),
                None => current = Some(Subpath::open(vec![p])),
            },
            PathEl::ClosePath => {
                if let Some(mut sp) = current.take() {
                    sp.closed = true;
                    subpaths.push(sp);
                }
            }
            // flatten only yields lines
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
        subpaths.extend(current);
        Self::from_subpaths(subpaths)
    }

    /// Serialize as SVG path data
    pub fn to_svg(&self) -> String {
        self.to_bezpath().to_svg()
    }

    /// Parse SVG path data; an empty or blank string is an empty path.
    pub fn parse_svg(data: &str) -> Result<Self, ProjectError> {
        if data.trim().is_empty() {
            return Ok(Self::new());
        }
        let bez = BezPath::from_svg(data).map_err(|e| ProjectError::PathData {
            data: data.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_bezpath(&bez))
    }
}

impl From<PathData> for String {
    fn from(path: PathData) -> Self {
        path.to_svg()
    }
}

impl TryFrom<String> for PathData {
    type Error = ProjectError;

    fn try_from(data: String) -> Result<Self, Self::Error> {
        Self::parse_svg(&data)
    }
}

/// Round a coordinate to the synthesizer grid.
pub(crate) fn snap(value: f64) -> f64 {
    let scale = 1.0 / crate::settings::canvas::COORD_PRECISION;
    // `+ 0.0` turns -0.0 into 0.0
    (value * scale).round() / scale + 0.0
}

pub(crate) fn snap_point(p: Point) -> Point {
    Point::new(snap(p.x), snap(p.y))
}
