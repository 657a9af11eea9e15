// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Path synthesis for the drawing tools.
//!
//! Turns pointer input into polyline subpaths:
//! - Freehand: every sampled point, unsmoothed
//! - Line: start and final pointer position
//! - Rectangle: edges walked in fixed-length steps
//! - Circle: fixed 32-gon
//!
//! Shapes use a uniform vertex density so the eraser, which tests one
//! segment at a time, bites out a local piece instead of a whole edge.

use super::{Subpath, snap_point};
use crate::settings::shapes::{CIRCLE_SEGMENTS, RECT_STEP};
use kurbo::{Point, Vec2};
use std::f64::consts::TAU;

/// Freehand stroke through every sampled point
pub fn freehand(start: Point, moves: &[Point]) -> Subpath {
    let points = std::iter::once(start)
        .chain(moves.iter().copied())
        .map(snap_point)
        .collect();
    Subpath::open(points)
}

/// Straight line; only the final pointer position matters
pub fn line(start: Point, end: Point) -> Subpath {
    Subpath::open(vec![snap_point(start), snap_point(end)])
}

/// Rectangle from an anchor and a signed drag size.
///
/// Walks top, right, bottom, left and ends on the anchor again. Returns
/// `None` when the drag has no extent.
pub fn rectangle(anchor: Point, size: Vec2) -> Option<Subpath> {
    let (x, y) = (anchor.x, anchor.y);
    let (w, h) = (size.x, size.y);
    if w == 0.0 && h == 0.0 {
        return None;
    }
    let sx = w.signum();
    let sy = h.signum();

    let mut points = vec![anchor];
    // top
    for i in steps(w) {
        points.push(Point::new(x + sx * i, y));
    }
    points.push(Point::new(x + w, y));
    // right
    for i in steps(h) {
        points.push(Point::new(x + w, y + sy * i));
    }
    points.push(Point::new(x + w, y + h));
    // bottom
    for i in steps(w) {
        points.push(Point::new(x + w - sx * i, y + h));
    }
    points.push(Point::new(x, y + h));
    // left
    for i in steps(h) {
        points.push(Point::new(x, y + h - sy * i));
    }
    points.push(anchor);

    Some(Subpath::open(points.into_iter().map(snap_point).collect()))
}

/// Interior step offsets along an edge of signed length `len`
fn steps(len: f64) -> impl Iterator<Item = f64> {
    let len = len.abs();
    (1..)
        .map(|i| i as f64 * RECT_STEP)
        .take_while(move |&d| d < len)
}

/// Regular polygon inscribed in the circle reached by `drag`.
///
/// Starts at angle 0 and ends back on the starting vertex. Returns `None`
/// for a zero radius.
pub fn circle(center: Point, drag: Vec2) -> Option<Subpath> {
    let radius = drag.hypot();
    if radius == 0.0 {
        return None;
    }
    let points = (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            center + Vec2::from_angle(angle) * radius
        })
        .map(snap_point)
        .collect();
    Some(Subpath::open(points))
}
