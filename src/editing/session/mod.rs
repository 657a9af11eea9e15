// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - manages editing state for a single glyph

mod gesture;
mod layers;

pub use layers::LayerMove;

use super::undo::UndoState;
use crate::config::EditorConfig;
use crate::model::glyph::default_alias;
use crate::model::{Glyph, GlyphPatch, Layer, LayerId, LayerStack, VectorLayer};
use crate::tools::{Brush, DrawMode, GestureState, clamp_stroke_width};

/// Editing session for one glyph
///
/// Holds a working copy of the glyph's layer stack together with the active
/// layer, the brush, the pointer gesture in progress and the undo history.
/// Nothing reaches the glyph set until [`EditSession::save`] is called;
/// dropping the session discards the edits.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Character being edited
    character: char,

    /// Alias carried over from the stored glyph
    alias: Option<char>,

    /// Working copy of the layer stack
    layers: LayerStack,

    /// Layer targeted by drawing tools and style edits
    /// None after the active layer was deleted
    active_layer: Option<LayerId>,

    /// Layer-stack snapshots, session scoped
    undo: UndoState<LayerStack>,

    /// Whether there are unsaved edits
    dirty: bool,

    /// Current stroke style
    pub brush: Brush,

    /// Current drawing tool
    pub mode: DrawMode,

    /// Pointer gesture in progress
    gesture: GestureState,

    /// Pre-gesture snapshot, pushed to history on the gesture's first change
    pending_snapshot: Option<LayerStack>,
}

impl EditSession {
    /// Open a session on `character`, starting from its stored glyph if any.
    ///
    /// The top layer becomes active and the brush takes its style. A fresh
    /// glyph's base layer is styled with the configured brush.
    pub fn new(character: char, stored: Option<&Glyph>, config: &EditorConfig) -> Self {
        let brush = Brush::from_config(&config.brush, config.eraser.size);
        let (mut layers, alias) = match stored {
            Some(glyph) => (LayerStack::from_layers(glyph.layers.iter().cloned()), glyph.alias),
            None => (LayerStack::new(), default_alias(character)),
        };
        if layers.is_empty() {
            layers.push_top(Layer::Vector(VectorLayer::new(
                "Base Layer",
                brush.stroke_width,
                brush.color.clone(),
                brush.cap,
            )));
        }
        let active_layer = layers.top();

        tracing::debug!(
            "Opened edit session for {:?} ({} layers)",
            character,
            layers.len()
        );

        let mut session = Self {
            character,
            alias,
            layers,
            active_layer,
            undo: UndoState::with_limit(config.history.limit),
            dirty: false,
            brush,
            mode: DrawMode::default(),
            gesture: GestureState::Ready,
            pending_snapshot: None,
        };
        session.take_brush_from_active();
        session
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id)
    }

    pub fn active_layer_id(&self) -> Option<LayerId> {
        self.active_layer
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active_layer.and_then(|id| self.layers.get(id))
    }

    /// Whether there are edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Undo the last edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        match self.undo.undo(self.layers.clone()) {
            Some(previous) => {
                self.restore(previous);
                tracing::debug!("Undo: restored previous state");
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        match self.undo.redo(self.layers.clone()) {
            Some(next) => {
                self.restore(next);
                tracing::debug!("Redo: restored next state");
                true
            }
            None => false,
        }
    }

    /// Copy the active vector layer's style into the brush, so further
    /// strokes on that layer keep its look.
    fn take_brush_from_active(&mut self) {
        let Some(layer) = self.active_layer().and_then(Layer::as_vector) else {
            return;
        };
        let (width, color, cap) = (layer.stroke_width, layer.color.clone(), layer.cap);
        self.brush.stroke_width = clamp_stroke_width(width);
        self.brush.color = color;
        self.brush.cap = cap;
    }

    fn restore(&mut self, layers: LayerStack) {
        self.layers = layers;
        if self.active_layer.is_some_and(|id| !self.layers.contains(id)) {
            self.active_layer = None;
        }
        self.dirty = true;
    }

    /// Run a layer-stack edit as one undoable step.
    ///
    /// The snapshot is only recorded if `edit` actually changed something.
    fn edit_layers<R>(&mut self, edit: impl FnOnce(&mut LayerStack) -> R) -> R {
        let before = self.layers.clone();
        let result = edit(&mut self.layers);
        if self.layers != before {
            self.undo.add_undo_group(before);
            self.dirty = true;
        }
        result
    }

    /// Build the glyph this session currently describes
    pub fn to_glyph(&self) -> Glyph {
        let mut glyph = Glyph::new(self.character, self.layers.to_layers());
        glyph.alias = self.alias;
        glyph
    }

    /// Commit the working copy. The session stays open and becomes clean.
    pub fn save(&mut self) -> GlyphPatch {
        let glyph = self.to_glyph();
        tracing::info!(
            "Saved glyph {:?}: {} layers, width {}",
            self.character,
            glyph.layers.len(),
            glyph.bounding_width
        );
        self.dirty = false;
        GlyphPatch { glyph }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineCap;
    use crate::model::glyph::base_layer;
    use crate::path::Subpath;
    use kurbo::Point;

    pub(super) fn session() -> EditSession {
        EditSession::new('a', None, &EditorConfig::default())
    }

    #[test]
    fn fresh_session_has_one_empty_active_layer() {
        let session = session();
        assert_eq!(session.layers().len(), 1);
        let active = session.active_layer().unwrap();
        assert_eq!(active.label(), "Base Layer");
        assert!(active.as_vector().unwrap().geometry.is_empty());
        assert!(!session.is_dirty());
        assert!(!session.can_undo());
    }

    #[test]
    fn opens_stored_glyph_with_top_layer_active() {
        let mut top = VectorLayer::new("top", 5.0, "#000", LineCap::Round);
        top.geometry
            .push(Subpath::open(vec![Point::new(0.0, 0.0), Point::new(80.0, 0.0)]));
        let top_id = top.id;
        let glyph = Glyph::new('b', vec![base_layer(), Layer::Vector(top)]);

        let session = EditSession::new('b', Some(&glyph), &EditorConfig::default());
        assert_eq!(session.layers().len(), 2);
        assert_eq!(session.active_layer_id(), Some(top_id));
        assert_eq!(session.to_glyph(), glyph);
    }

    #[test]
    fn reopened_glyph_keeps_its_top_layer_style() {
        let mut top = VectorLayer::new("top", 5.0, "#000", LineCap::Square);
        top.geometry
            .push(Subpath::open(vec![Point::new(0.0, 0.0), Point::new(80.0, 0.0)]));
        let glyph = Glyph::new('b', vec![base_layer(), Layer::Vector(top)]);

        let mut session = EditSession::new('b', Some(&glyph), &EditorConfig::default());
        assert_eq!(session.brush.stroke_width, 5.0);
        assert_eq!(session.brush.color, "#000");
        assert_eq!(session.brush.cap, LineCap::Square);

        session.begin_gesture(Point::new(10.0, 50.0));
        session.move_gesture(Point::new(60.0, 50.0));
        session.end_gesture();
        let layer = session.active_layer().unwrap().as_vector().unwrap();
        assert_eq!(layer.stroke_width, 5.0);
        assert_eq!(layer.geometry.subpaths().len(), 2);
    }

    #[test]
    fn fresh_base_layer_uses_the_configured_brush() {
        let mut config = EditorConfig::default();
        config.brush.stroke_width = 22.0;
        config.brush.color = "#123456".into();
        let session = EditSession::new('c', None, &config);
        let base = session.active_layer().unwrap().as_vector().unwrap();
        assert_eq!(base.stroke_width, 22.0);
        assert_eq!(base.color, "#123456");
        assert_eq!(session.brush.stroke_width, 22.0);
    }

    #[test]
    fn undo_and_redo_on_empty_history_are_noops() {
        let mut session = session();
        let before = session.layers().clone();
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.layers(), &before);
        assert!(!session.is_dirty());
    }

    #[test]
    fn save_marks_clean_and_derives_width() {
        let mut session = session();
        session.begin_gesture(Point::new(10.0, 10.0));
        session.move_gesture(Point::new(150.0, 20.0));
        session.end_gesture();
        assert!(session.is_dirty());

        let patch = session.save();
        assert!(!session.is_dirty());
        assert_eq!(patch.glyph.character, 'a');
        assert_eq!(patch.glyph.alias, Some('\u{E061}'));
        assert_eq!(patch.glyph.bounding_width, 150.0);
    }

    #[test]
    fn saving_a_blank_glyph_is_allowed() {
        let mut session = session();
        let patch = session.save();
        assert_eq!(patch.glyph.layers.len(), 1);
        assert_eq!(patch.glyph.bounding_width, 50.0);
    }

    #[test]
    fn history_limit_from_config() {
        let mut config = EditorConfig::default();
        config.history.limit = Some(1);
        let mut session = EditSession::new('a', None, &config);
        session.add_layer();
        session.add_layer();
        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.layers().len(), 2);
    }
}
