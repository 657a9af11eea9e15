// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Layer arena with an explicit paint order.
//!
//! Layers are stored by `LayerId` and ordered by a separate id vector, so
//! reordering, deletion and undo restores never invalidate an outstanding
//! id such as the session's active layer. The whole stack is cheap to clone
//! for history snapshots and compares by deep equality.

use super::{Layer, LayerId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerStack {
    layers: HashMap<LayerId, Layer>,
    /// Paint order, bottom first
    order: Vec<LayerId>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from layers in paint order. Duplicate ids get a fresh one.
    pub fn from_layers(layers: impl IntoIterator<Item = Layer>) -> Self {
        let mut stack = Self::new();
        for mut layer in layers {
            if stack.contains(layer.id()) {
                layer.set_id(LayerId::next());
            }
            stack.push_top(layer);
        }
        stack
    }

    /// Layers in paint order
    pub fn to_layers(&self) -> Vec<Layer> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(&id)
    }

    /// Layers in paint order, bottom first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Layer> + '_ {
        self.order.iter().filter_map(|id| self.layers.get(id))
    }

    pub fn ids(&self) -> &[LayerId] {
        &self.order
    }

    pub fn top(&self) -> Option<LayerId> {
        self.order.last().copied()
    }

    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Add a layer above all others
    pub fn push_top(&mut self, layer: Layer) -> LayerId {
        let id = layer.id();
        self.order.push(id);
        self.layers.insert(id, layer);
        id
    }

    /// Add a layer below all others
    pub fn push_bottom(&mut self, layer: Layer) -> LayerId {
        let id = layer.id();
        self.order.insert(0, id);
        self.layers.insert(id, layer);
        id
    }

    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let layer = self.layers.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(layer)
    }

    /// Swap the paint positions of two layers
    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Apply `f` to every layer, in paint order
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Layer)) {
        for id in &self.order {
            if let Some(layer) = self.layers.get_mut(id) {
                f(layer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineCap, VectorLayer};

    fn layer(label: &str) -> Layer {
        Layer::Vector(VectorLayer::new(label, 10.0, "#000", LineCap::Round))
    }

    fn labels(stack: &LayerStack) -> Vec<&str> {
        stack.iter().map(Layer::label).collect()
    }

    #[test]
    fn preserves_paint_order() {
        let stack = LayerStack::from_layers([layer("a"), layer("b"), layer("c")]);
        assert_eq!(labels(&stack), ["a", "b", "c"]);
        assert_eq!(stack.to_layers().len(), 3);
    }

    #[test]
    fn push_bottom_and_remove() {
        let mut stack = LayerStack::from_layers([layer("a")]);
        let id = stack.push_bottom(layer("img"));
        assert_eq!(labels(&stack), ["img", "a"]);
        assert_eq!(stack.position(id), Some(0));

        let removed = stack.remove(id).unwrap();
        assert_eq!(removed.label(), "img");
        assert!(!stack.contains(id));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn swap_keeps_ids_valid() {
        let mut stack = LayerStack::from_layers([layer("a"), layer("b")]);
        let a = stack.ids()[0];
        stack.swap(0, 1);
        assert_eq!(labels(&stack), ["b", "a"]);
        assert_eq!(stack.get(a).unwrap().label(), "a");
        assert_eq!(stack.top(), Some(a));
    }

    #[test]
    fn duplicate_ids_are_reassigned() {
        let a = layer("a");
        let stack = LayerStack::from_layers([a.clone(), a]);
        assert_eq!(stack.len(), 2);
        assert_ne!(stack.ids()[0], stack.ids()[1]);
    }
}
