// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing tools and brush state

use crate::config::BrushConfig;
use crate::model::LineCap;
use crate::settings::brush;
use kurbo::Point;

// ===== Draw Mode =====

/// Active drawing tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Unsmoothed stroke through every pointer sample
    #[default]
    Freehand,
    /// Straight line from press to release
    Line,
    /// Rectangle from anchor and drag
    Rectangle,
    /// Circle from center and drag radius
    Circle,
    /// Geometric eraser
    Eraser,
}

impl DrawMode {
    /// Tools that extend the active layer instead of creating a new one
    pub fn appends_to_layer(self) -> bool {
        matches!(self, Self::Freehand | Self::Line)
    }

    pub fn is_shape(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle)
    }

    /// Label prefix for layers this tool creates
    pub fn layer_label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Freehand | Self::Line | Self::Eraser => "Layer",
        }
    }
}

// ===== Brush =====

/// Stroke style applied to new strokes
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub stroke_width: f64,
    pub color: String,
    pub cap: LineCap,
    /// Erase radius, independent of the stroke width
    pub eraser_size: f64,
}

impl Brush {
    pub fn from_config(config: &BrushConfig, eraser_size: f64) -> Self {
        Self {
            stroke_width: clamp_stroke_width(config.stroke_width),
            color: config.color.clone(),
            cap: config.cap,
            eraser_size: clamp_eraser_size(eraser_size),
        }
    }
}

/// Keep a stroke width inside the brush slider range
pub fn clamp_stroke_width(width: f64) -> f64 {
    width.clamp(brush::MIN_STROKE_WIDTH, brush::MAX_STROKE_WIDTH)
}

/// The eraser shares the brush slider range
pub fn clamp_eraser_size(size: f64) -> f64 {
    if size.is_nan() {
        return brush::DEFAULT_STROKE_WIDTH;
    }
    size.clamp(brush::MIN_STROKE_WIDTH, brush::MAX_STROKE_WIDTH)
}

// ===== Gesture State =====

/// State of the pointer gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// Ready to start drawing
    #[default]
    Ready,
    /// Pointer down; `moves` holds every sample since the press
    Begun {
        mode: DrawMode,
        start: Point,
        moves: Vec<Point>,
    },
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Begun { .. })
    }
}
