// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Script data model

pub mod entity_id;
pub mod glyph;
pub mod glyph_set;
pub mod layer;
pub mod layer_stack;
pub mod script;

pub use entity_id::LayerId;
pub use glyph::Glyph;
pub use glyph_set::GlyphSet;
pub use layer::{Layer, LineCap, RasterLayer, VectorLayer};
pub use layer_stack::LayerStack;
pub use script::{Direction, GlyphPatch, ScriptConfig, SpacingMode};
