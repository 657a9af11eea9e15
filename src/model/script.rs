// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-document script configuration.
//!
//! The glyph set is shared behind an `Arc` and only ever replaced as a
//! whole: committing a glyph clones the set, modifies the clone and swaps
//! the pointer. A layout that holds the previous `Arc` keeps seeing the
//! previous set in full.

use super::{Glyph, GlyphSet};
use crate::error::ProjectError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Writing direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Horizontal lines, characters left to right
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    /// Horizontal lines, characters right to left
    #[serde(rename = "rtl")]
    RightToLeft,
    /// Vertical columns, new columns to the left
    #[serde(rename = "ttb-rtl", alias = "ttb")]
    TopToBottomRtl,
    /// Vertical columns, new columns to the right
    #[serde(rename = "ttb-ltr")]
    TopToBottomLtr,
}

impl Direction {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::TopToBottomRtl | Self::TopToBottomLtr)
    }

    /// Get a short name for display
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::LeftToRight => "LTR",
            Self::RightToLeft => "RTL",
            Self::TopToBottomRtl => "V-RTL",
            Self::TopToBottomLtr => "V-LTR",
        }
    }
}

/// How glyph advances are computed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingMode {
    /// Advance follows each glyph's bounding width
    Proportional,
    /// Every glyph occupies one unit cell
    #[default]
    Mono,
}

impl SpacingMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Proportional => Self::Mono,
            Self::Mono => Self::Proportional,
        }
    }
}

/// A committed glyph, ready to be applied to a script's glyph set
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPatch {
    pub glyph: Glyph,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    #[serde(rename = "glyphs", default)]
    pub glyph_set: Arc<GlyphSet>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub spacing_mode: SpacingMode,
}

impl ScriptConfig {
    pub fn new(glyph_set: GlyphSet, direction: Direction, spacing_mode: SpacingMode) -> Self {
        Self {
            glyph_set: Arc::new(glyph_set),
            direction,
            spacing_mode,
        }
    }

    /// Commit a saved glyph (Arc pattern - clone, modify, reassign)
    pub fn apply(&mut self, patch: GlyphPatch) {
        let mut glyphs = (*self.glyph_set).clone();
        tracing::info!(
            "Committing glyph {:?} ({} layers, width {})",
            patch.glyph.character,
            patch.glyph.layers.len(),
            patch.glyph.bounding_width
        );
        glyphs.insert(patch.glyph);
        self.glyph_set = Arc::new(glyphs);
    }

    pub fn toggle_spacing_mode(&mut self) {
        self.spacing_mode = self.spacing_mode.toggled();
    }

    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
