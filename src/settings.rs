// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Engine constants.
//!
//! These values are fixed by the drawing model and the project format.
//! Anything a user may reasonably want to tune lives in `config.rs` instead.

// ============================================================================
// CANVAS SETTINGS
// ============================================================================
/// Side length of the square authoring canvas (design units)
const CANVAS_SIZE: f64 = 400.0;

/// Narrowest bounding width a glyph may report
const MIN_GLYPH_WIDTH: f64 = 50.0;

/// Synthesized coordinates are rounded to this step
const COORD_PRECISION: f64 = 0.1;

// ============================================================================
// SHAPE TESSELLATION
// ============================================================================
/// Length of each sub-segment used when walking rectangle edges
const RECT_STEP: f64 = 5.0;

/// Number of sides of the polygon used for circles
const CIRCLE_SEGMENTS: usize = 32;

// ============================================================================
// BRUSH SETTINGS
// ============================================================================
const DEFAULT_STROKE_WIDTH: f64 = 15.0;
const MIN_STROKE_WIDTH: f64 = 1.0;
const MAX_STROKE_WIDTH: f64 = 60.0;
const DEFAULT_COLOR: &str = "#ffffff";

/// Opacity toggled on with the layer "dim" switch
const DIMMED_OPACITY: f64 = 0.4;

/// Opacity given to freshly imported reference images
const IMAGE_OPACITY: f64 = 0.5;

// ============================================================================
// LAYOUT SETTINGS
// ============================================================================
// All advances are fractions of the unit cell (1.0).

/// Advance of every non-blank cell in mono spacing
const MONO_ADVANCE: f64 = 1.0;

/// Advance of a space, independent of spacing mode
const BLANK_ADVANCE: f64 = 0.25;

/// Advance of the not-defined marker in proportional spacing
const NOTDEF_ADVANCE: f64 = 0.5;

const LINE_GAP: f64 = 0.25;
const CHAR_GAP: f64 = 0.05;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Authoring canvas geometry
pub mod canvas {
    /// Canvas side length (design units)
    pub const SIZE: f64 = super::CANVAS_SIZE;

    /// Lower clamp for derived glyph widths
    pub const MIN_GLYPH_WIDTH: f64 = super::MIN_GLYPH_WIDTH;

    /// Rounding step for synthesized points
    pub const COORD_PRECISION: f64 = super::COORD_PRECISION;
}

/// Fixed tessellation used by the shape tools
pub mod shapes {
    pub const RECT_STEP: f64 = super::RECT_STEP;
    pub const CIRCLE_SEGMENTS: usize = super::CIRCLE_SEGMENTS;
}

/// Brush defaults and limits
pub mod brush {
    pub const DEFAULT_STROKE_WIDTH: f64 = super::DEFAULT_STROKE_WIDTH;
    pub const MIN_STROKE_WIDTH: f64 = super::MIN_STROKE_WIDTH;
    pub const MAX_STROKE_WIDTH: f64 = super::MAX_STROKE_WIDTH;
    pub const DEFAULT_COLOR: &str = super::DEFAULT_COLOR;
    pub const DIMMED_OPACITY: f64 = super::DIMMED_OPACITY;
    pub const IMAGE_OPACITY: f64 = super::IMAGE_OPACITY;
}

/// Layout advances and default gaps, in unit cells
pub mod layout {
    pub const MONO_ADVANCE: f64 = super::MONO_ADVANCE;
    pub const BLANK_ADVANCE: f64 = super::BLANK_ADVANCE;
    pub const NOTDEF_ADVANCE: f64 = super::NOTDEF_ADVANCE;
    pub const LINE_GAP: f64 = super::LINE_GAP;
    pub const CHAR_GAP: f64 = super::CHAR_GAP;
}
