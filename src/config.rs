// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor configuration.
//!
//! Loaded from a TOML file; every section and field is optional and falls
//! back to the defaults in `settings.rs`.
//!
//! ```toml
//! [brush]
//! stroke_width = 12.0
//! color = "#222222"
//! cap = "square"
//!
//! [eraser]
//! size = 20.0
//!
//! [history]
//! limit = 200
//!
//! [layout]
//! line_gap = 0.5
//! char_gap = 0.1
//! ```

use crate::model::LineCap;
use crate::settings::{brush, layout};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub brush: BrushConfig,
    pub eraser: EraserConfig,
    pub history: HistoryConfig,
    pub layout: LayoutConfig,
}

/// Brush used for new strokes and shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub stroke_width: f64,
    pub color: String,
    pub cap: LineCap,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            stroke_width: brush::DEFAULT_STROKE_WIDTH,
            color: brush::DEFAULT_COLOR.to_string(),
            cap: LineCap::Round,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EraserConfig {
    /// Erase radius; segments closer than half of it are removed.
    /// Clamped to the brush width range when a session starts.
    pub size: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            size: brush::DEFAULT_STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum undo depth per glyph; unlimited when absent
    pub limit: Option<usize>,
}

/// Spacing between lines and cells, in unit cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub line_gap: f64,
    pub char_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_gap: layout::LINE_GAP,
            char_gap: layout::CHAR_GAP,
        }
    }
}

impl EditorConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse editor config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read editor config {}", path.display()))?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{:#}; using defaults", e);
            Self::default()
        })
    }
}
