// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometric eraser.
//!
//! Erasing walks each subpath segment by segment. A segment whose nearest
//! point lies within half the erase radius is dropped, and the surviving
//! runs on either side become separate open subpaths. Closed subpaths are
//! walked with their closing edge made explicit, so erasing a piece of a
//! closed shape opens it up.

use crate::model::{Layer, LayerStack};
use crate::path::{PathData, Subpath};
use kurbo::{Line, ParamCurveNearest, Point};

/// Outcome of erasing across a layer stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EraseReport {
    /// Layers whose geometry changed but still hold something
    pub trimmed: usize,
    /// Layers removed because all of their geometry was erased
    pub removed: usize,
}

impl EraseReport {
    pub fn changed(&self) -> bool {
        self.trimmed > 0 || self.removed > 0
    }
}

/// Split one subpath around the erase point.
///
/// Returns the surviving open chains, each with at least two points.
pub fn erase_subpath(subpath: &Subpath, at: Point, radius: f64) -> Vec<Subpath> {
    let vertices = subpath.vertices();
    let threshold_sq = (radius / 2.0).powi(2);
    let mut survivors = Vec::new();
    let mut chain: Vec<Point> = Vec::new();

    for pair in vertices.windows(2) {
        let segment = Line::new(pair[0], pair[1]);
        // kurbo::Line::nearest clamps the projection to the segment
        let erased = segment.nearest(at, 0.0).distance_sq < threshold_sq;
        if erased {
            flush(&mut chain, &mut survivors);
        } else {
            if chain.is_empty() {
                chain.push(pair[0]);
            }
            chain.push(pair[1]);
        }
    }
    flush(&mut chain, &mut survivors);
    survivors
}

fn flush(chain: &mut Vec<Point>, survivors: &mut Vec<Subpath>) {
    let points = std::mem::take(chain);
    if points.len() >= 2 {
        survivors.push(Subpath::open(points));
    }
}

/// Whether any segment of `subpath`, or its only point, is under the eraser
fn touches(subpath: &Subpath, at: Point, radius: f64) -> bool {
    let threshold_sq = (radius / 2.0).powi(2);
    let vertices = subpath.vertices();
    if let [only] = vertices.as_slice() {
        return (*only - at).hypot2() < threshold_sq;
    }
    vertices
        .windows(2)
        .any(|pair| Line::new(pair[0], pair[1]).nearest(at, 0.0).distance_sq < threshold_sq)
}

/// Erase around `at` in a single path. Returns `None` if nothing was hit,
/// so the caller can leave its geometry untouched.
pub fn erase_path(path: &PathData, at: Point, radius: f64) -> Option<PathData> {
    if !path.subpaths().iter().any(|sp| touches(sp, at, radius)) {
        return None;
    }
    let survivors = path
        .subpaths()
        .iter()
        .flat_map(|sp| match (touches(sp, at, radius), sp.points.len()) {
            (false, _) => vec![sp.clone()],
            // a dot under the eraser simply disappears
            (true, 1) => Vec::new(),
            (true, _) => erase_subpath(sp, at, radius),
        })
        .collect();
    Some(PathData::from_subpaths(survivors))
}

/// Erase around `at` in every unlocked, visible vector layer of `stack`.
///
/// Layers that lose all of their geometry are removed, except that the last
/// remaining layer is kept (empty) so a glyph never ends up without layers.
/// A radius that is not positive erases nothing.
pub fn erase_layers(stack: &mut LayerStack, at: Point, radius: f64) -> EraseReport {
    let mut report = EraseReport::default();
    if radius.is_nan() || radius <= 0.0 {
        tracing::debug!("Ignoring erase with radius {}", radius);
        return report;
    }
    let mut emptied = Vec::new();

    stack.for_each_mut(|layer| {
        let Layer::Vector(vector) = layer else {
            return;
        };
        if vector.locked || !vector.visible || vector.geometry.is_empty() {
            return;
        }
        if let Some(geometry) = erase_path(&vector.geometry, at, radius) {
            if geometry.is_empty() {
                emptied.push(vector.id);
            } else {
                report.trimmed += 1;
            }
            vector.geometry = geometry;
        }
    });

    for id in emptied {
        if stack.len() > 1 {
            stack.remove(id);
            report.removed += 1;
        } else {
            report.trimmed += 1;
        }
    }

    if report.changed() {
        tracing::debug!(
            "Erase at ({:.1}, {:.1}) r={}: {} trimmed, {} removed",
            at.x,
            at.y,
            radius,
            report.trimmed,
            report.removed
        );
    }
    report
}
