// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer gestures: drawing, shapes and erasing for EditSession

use super::EditSession;
use crate::editing::eraser;
use crate::model::{Layer, VectorLayer};
use crate::path::{Subpath, synth};
use crate::tools::{DrawMode, GestureState};
use kurbo::Point;

impl EditSession {
    /// Whether a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_active()
    }

    /// Pointer pressed.
    ///
    /// Ignored when the active layer is locked or a raster image. The
    /// pre-gesture state is captured here and enters the history only once
    /// the gesture actually changes something.
    pub fn begin_gesture(&mut self, point: Point) {
        if self.active_layer().is_some_and(|layer| !layer.is_drawable()) {
            tracing::debug!("Gesture ignored: active layer is locked or an image");
            return;
        }

        self.pending_snapshot = Some(self.layers.clone());
        self.gesture = GestureState::Begun {
            mode: self.mode,
            start: point,
            moves: Vec::new(),
        };
        tracing::debug!("{:?}: gesture began at {:?}", self.mode, point);

        if self.mode == DrawMode::Eraser {
            self.erase_step(point);
        }
    }

    /// Pointer moved. Discarded unless a gesture has begun.
    pub fn move_gesture(&mut self, point: Point) {
        let GestureState::Begun { mode, moves, .. } = &mut self.gesture else {
            return;
        };
        moves.push(point);
        if *mode == DrawMode::Eraser {
            self.erase_step(point);
        }
    }

    /// Pointer released; commits the synthesized geometry.
    pub fn end_gesture(&mut self) {
        let GestureState::Begun { mode, start, moves } = std::mem::take(&mut self.gesture) else {
            return;
        };
        let end = moves.last().copied().unwrap_or(start);

        // Erasing already happened while the pointer moved
        let subpath = match mode {
            DrawMode::Freehand => Some(synth::freehand(start, &moves)),
            DrawMode::Line => Some(synth::line(start, end)),
            DrawMode::Rectangle => synth::rectangle(start, end - start),
            DrawMode::Circle => synth::circle(start, end - start),
            DrawMode::Eraser => None,
        };

        if let Some(subpath) = subpath {
            if mode.appends_to_layer() {
                self.commit_stroke(subpath);
            } else if mode.is_shape() {
                self.commit_shape(mode, subpath);
            }
        }

        self.pending_snapshot = None;
        tracing::debug!("{:?}: gesture ended", mode);
    }

    /// Abandon the gesture in progress without committing anything
    pub fn cancel_gesture(&mut self) {
        self.gesture = GestureState::Ready;
        self.pending_snapshot = None;
    }

    /// Erase around `at` in all unlocked, visible vector layers as a single
    /// undoable step. Returns whether anything was removed.
    pub fn erase(&mut self, at: Point, radius: f64) -> bool {
        self.edit_layers(|layers| eraser::erase_layers(layers, at, radius).changed())
            && self.drop_missing_active()
    }

    fn erase_step(&mut self, at: Point) {
        let report = eraser::erase_layers(&mut self.layers, at, self.brush.eraser_size);
        if report.changed() {
            self.record_gesture_change();
            self.drop_missing_active();
        }
    }

    /// Always true, so it can be chained after a successful edit
    fn drop_missing_active(&mut self) -> bool {
        if self.active_layer.is_some_and(|id| !self.layers.contains(id)) {
            self.active_layer = None;
        }
        true
    }

    fn record_gesture_change(&mut self) {
        if let Some(snapshot) = self.pending_snapshot.take() {
            self.undo.add_undo_group(snapshot);
        }
        self.dirty = true;
    }

    /// Append a freehand or line stroke to the active layer, or start a new
    /// layer when there is none.
    fn commit_stroke(&mut self, subpath: Subpath) {
        self.record_gesture_change();
        let brush = self.brush.clone();

        let target = self
            .active_layer
            .and_then(|id| self.layers.get_mut(id))
            .and_then(Layer::as_vector_mut)
            .filter(|layer| !layer.locked);

        match target {
            Some(layer) => {
                layer.geometry.push(subpath);
                layer.stroke_width = brush.stroke_width;
                layer.color = brush.color;
                layer.cap = brush.cap;
            }
            None => self.push_new_layer(DrawMode::Freehand, subpath),
        }
    }

    /// Shapes always land on a layer of their own
    fn commit_shape(&mut self, mode: DrawMode, subpath: Subpath) {
        self.record_gesture_change();
        self.push_new_layer(mode, subpath);
    }

    fn push_new_layer(&mut self, mode: DrawMode, subpath: Subpath) {
        let label = format!("{} {}", mode.layer_label(), self.layers.len() + 1);
        let mut layer = VectorLayer::new(
            label,
            self.brush.stroke_width,
            self.brush.color.clone(),
            self.brush.cap,
        );
        layer.geometry.push(subpath);
        let id = self.layers.push_top(Layer::Vector(layer));
        self.active_layer = Some(id);
    }
}
