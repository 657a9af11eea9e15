// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Layer management for EditSession

use super::EditSession;
use crate::error::EditError;
use crate::model::{Layer, LayerId, LayerStack, LineCap, RasterLayer, VectorLayer};
use crate::settings::{brush, canvas};
use crate::tools::clamp_stroke_width;

/// Direction for reordering a layer in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerMove {
    /// Towards the top (painted later)
    Up,
    /// Towards the bottom (painted earlier)
    Down,
}

impl EditSession {
    /// Make `id` the drawing target. A vector layer's style becomes the brush.
    pub fn set_active_layer(&mut self, id: LayerId) -> Result<(), EditError> {
        self.check_layer(id)?;
        self.active_layer = Some(id);
        self.take_brush_from_active();
        Ok(())
    }

    /// Add an empty vector layer on top, styled with the current brush.
    pub fn add_layer(&mut self) -> LayerId {
        let label = format!("New Layer {}", self.layers.len() + 1);
        let layer = VectorLayer::new(
            label,
            self.brush.stroke_width,
            self.brush.color.clone(),
            self.brush.cap,
        );
        let id = self.edit_layers(|layers| layers.push_top(Layer::Vector(layer)));
        self.active_layer = Some(id);
        tracing::debug!("Added layer {}", id);
        id
    }

    pub fn delete_layer(&mut self, id: LayerId) -> Result<(), EditError> {
        self.check_layer(id)?;
        if self.layers.len() <= 1 {
            return Err(EditError::LastLayer);
        }
        self.edit_layers(|layers| layers.remove(id));
        if self.active_layer == Some(id) {
            self.active_layer = None;
        }
        tracing::debug!("Deleted layer {}", id);
        Ok(())
    }

    /// Move a layer one step in paint order. Moving past either end is a no-op.
    pub fn move_layer(&mut self, id: LayerId, direction: LayerMove) -> Result<(), EditError> {
        let index = self
            .layers
            .position(id)
            .ok_or(EditError::UnknownLayer(id))?;
        let target = match direction {
            LayerMove::Up => index + 1,
            LayerMove::Down => match index.checked_sub(1) {
                Some(target) => target,
                None => return Ok(()),
            },
        };
        if target >= self.layers.len() {
            return Ok(());
        }
        self.edit_layers(|layers| layers.swap(index, target));
        Ok(())
    }

    pub fn rename_layer(&mut self, id: LayerId, label: impl Into<String>) -> Result<(), EditError> {
        let label = label.into();
        self.update_layer(id, |layer| layer.set_label(label))
    }

    pub fn toggle_visibility(&mut self, id: LayerId) -> Result<(), EditError> {
        self.update_layer(id, |layer| layer.set_visible(!layer.is_visible()))
    }

    pub fn toggle_lock(&mut self, id: LayerId) -> Result<(), EditError> {
        self.update_layer(id, |layer| layer.set_locked(!layer.is_locked()))
    }

    /// Switch a layer between full and dimmed opacity
    pub fn toggle_opacity(&mut self, id: LayerId) -> Result<(), EditError> {
        self.update_layer(id, |layer| {
            let opacity = if layer.opacity() < 1.0 {
                1.0
            } else {
                brush::DIMMED_OPACITY
            };
            layer.set_opacity(opacity);
        })
    }

    /// Change the brush width; the active vector layer follows.
    pub fn set_stroke_width(&mut self, width: f64) {
        let width = clamp_stroke_width(width);
        self.brush.stroke_width = width;
        self.style_active_layer(|layer| layer.stroke_width = width);
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.brush.color = color.clone();
        self.style_active_layer(|layer| layer.color = color);
    }

    pub fn set_cap(&mut self, cap: LineCap) {
        self.brush.cap = cap;
        self.style_active_layer(|layer| layer.cap = cap);
    }

    /// Place a reference image under all other layers, covering the canvas.
    ///
    /// `image_ref` is stored as given, usually a data URI.
    pub fn import_image(&mut self, image_ref: impl Into<String>) -> LayerId {
        let layer = RasterLayer {
            id: LayerId::next(),
            image_ref: image_ref.into(),
            x: 0.0,
            y: 0.0,
            width: canvas::SIZE,
            height: canvas::SIZE,
            opacity: brush::IMAGE_OPACITY,
            visible: true,
            locked: false,
            label: "Reference Image".to_string(),
        };
        let id = self.edit_layers(|layers| layers.push_bottom(Layer::Raster(layer)));
        self.active_layer = Some(id);
        tracing::info!("Imported reference image as layer {}", id);
        id
    }

    fn check_layer(&self, id: LayerId) -> Result<(), EditError> {
        if self.layers.contains(id) {
            Ok(())
        } else {
            Err(EditError::UnknownLayer(id))
        }
    }

    fn update_layer(&mut self, id: LayerId, f: impl FnOnce(&mut Layer)) -> Result<(), EditError> {
        self.check_layer(id)?;
        self.edit_layers(|layers: &mut LayerStack| {
            if let Some(layer) = layers.get_mut(id) {
                f(layer);
            }
        });
        Ok(())
    }

    fn style_active_layer(&mut self, f: impl FnOnce(&mut VectorLayer)) {
        let Some(id) = self.active_layer else {
            return;
        };
        self.edit_layers(|layers| {
            if let Some(layer) = layers.get_mut(id).and_then(Layer::as_vector_mut) {
                f(layer);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::session;
    use super::*;

    fn labels(session: &EditSession) -> Vec<String> {
        session
            .layers()
            .iter()
            .map(|layer| layer.label().to_string())
            .collect()
    }

    #[test]
    fn add_layer_goes_on_top_and_becomes_active() {
        let mut s = session();
        let id = s.add_layer();
        assert_eq!(labels(&s), ["Base Layer", "New Layer 2"]);
        assert_eq!(s.active_layer_id(), Some(id));
        assert!(s.is_dirty());
    }

    #[test]
    fn deleting_the_last_layer_is_rejected() {
        let mut s = session();
        let id = s.active_layer_id().unwrap();
        let before = s.layers().clone();
        assert_eq!(s.delete_layer(id), Err(EditError::LastLayer));
        assert_eq!(s.layers(), &before);
        assert!(!s.can_undo());
        assert!(!s.is_dirty());
    }

    #[test]
    fn unknown_layer_is_an_error() {
        let mut s = session();
        s.add_layer();
        let stray = LayerId::next();
        assert_eq!(s.delete_layer(stray), Err(EditError::UnknownLayer(stray)));
        assert_eq!(s.toggle_lock(stray), Err(EditError::UnknownLayer(stray)));
        assert_eq!(
            s.move_layer(stray, LayerMove::Up),
            Err(EditError::UnknownLayer(stray))
        );
        assert_eq!(s.set_active_layer(stray), Err(EditError::UnknownLayer(stray)));
    }

    #[test]
    fn selecting_a_layer_keeps_its_width_when_drawing() {
        let mut s = session();
        let base = s.active_layer_id().unwrap();
        s.set_stroke_width(5.0);
        s.begin_gesture(kurbo::Point::new(10.0, 10.0));
        s.move_gesture(kurbo::Point::new(40.0, 10.0));
        s.end_gesture();

        s.add_layer();
        s.set_stroke_width(40.0);
        s.set_active_layer(base).unwrap();
        assert_eq!(s.brush.stroke_width, 5.0);

        s.begin_gesture(kurbo::Point::new(10.0, 60.0));
        s.move_gesture(kurbo::Point::new(40.0, 60.0));
        s.end_gesture();
        let layer = s.layer(base).unwrap().as_vector().unwrap();
        assert_eq!(layer.stroke_width, 5.0);
        assert_eq!(layer.geometry.subpaths().len(), 2);
    }

    #[test]
    fn selecting_an_image_leaves_the_brush_alone() {
        let mut s = session();
        s.set_stroke_width(33.0);
        let image = s.import_image("data:image/png;base64,AAAA");
        s.set_active_layer(image).unwrap();
        assert_eq!(s.brush.stroke_width, 33.0);
    }

    #[test]
    fn deleting_the_active_layer_clears_it() {
        let mut s = session();
        let id = s.add_layer();
        s.delete_layer(id).unwrap();
        assert_eq!(s.layers().len(), 1);
        assert_eq!(s.active_layer_id(), None);
    }

    #[test]
    fn move_layer_reorders_and_stops_at_the_ends() {
        let mut s = session();
        let base = s.layers().top().unwrap();
        s.add_layer();
        s.move_layer(base, LayerMove::Up).unwrap();
        assert_eq!(labels(&s), ["New Layer 2", "Base Layer"]);

        let before = s.clone();
        s.move_layer(base, LayerMove::Up).unwrap();
        assert_eq!(s.layers(), before.layers());
        s.undo();
        assert_eq!(labels(&s), ["Base Layer", "New Layer 2"]);
    }

    #[test]
    fn toggles_flip_and_undo() {
        let mut s = session();
        let id = s.active_layer_id().unwrap();
        s.toggle_visibility(id).unwrap();
        s.toggle_opacity(id).unwrap();
        s.rename_layer(id, "Outline").unwrap();

        let layer = s.layer(id).unwrap();
        assert!(!layer.is_visible());
        assert_eq!(layer.opacity(), 0.4);
        assert_eq!(layer.label(), "Outline");

        s.toggle_opacity(id).unwrap();
        assert_eq!(s.layer(id).unwrap().opacity(), 1.0);

        while s.undo() {}
        let layer = s.layer(id).unwrap();
        assert!(layer.is_visible());
        assert_eq!(layer.label(), "Base Layer");
    }

    #[test]
    fn style_edits_follow_the_active_layer() {
        let mut s = session();
        s.set_stroke_width(120.0);
        s.set_color("#336699");
        s.set_cap(LineCap::Square);
        assert_eq!(s.brush.stroke_width, 60.0);

        let layer = s.active_layer().unwrap().as_vector().unwrap();
        assert_eq!(layer.stroke_width, 60.0);
        assert_eq!(layer.color, "#336699");
        assert_eq!(layer.cap, LineCap::Square);

        assert!(s.undo());
        let layer = s.active_layer().unwrap().as_vector().unwrap();
        assert_eq!(layer.cap, LineCap::Round);
        assert_eq!(layer.color, "#336699");
    }

    #[test]
    fn imported_image_sits_at_the_bottom() {
        let mut s = session();
        let id = s.import_image("data:image/png;base64,AAAA");
        assert_eq!(s.layers().ids()[0], id);
        assert_eq!(s.active_layer_id(), Some(id));

        let Some(Layer::Raster(image)) = s.layer(id) else {
            panic!("expected a raster layer");
        };
        assert_eq!(image.frame().width(), 400.0);
        assert_eq!(image.opacity, 0.5);

        // Drawing onto an image layer is ignored
        let before = s.layers().clone();
        s.begin_gesture(kurbo::Point::new(10.0, 10.0));
        s.move_gesture(kurbo::Point::new(20.0, 20.0));
        s.end_gesture();
        assert_eq!(s.layers(), &before);
    }

    #[test]
    fn undo_redo_restore_layer_stacks_exactly() {
        let mut s = session();
        let start = s.layers().clone();
        let id = s.add_layer();
        s.toggle_lock(id).unwrap();
        let end = s.layers().clone();

        assert!(s.undo());
        assert!(s.undo());
        assert_eq!(s.layers(), &start);
        assert!(s.redo());
        assert!(s.redo());
        assert_eq!(s.layers(), &end);
        assert!(!s.redo());
    }
}
