// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Direction-aware text layout over a glyph set.
//!
//! Text is split into lines on `\n` and every character becomes one cell.
//! Each cell resolves to a glyph (by literal character, then by alias), a
//! blank for the space character, or a not-defined box. Nothing here can
//! fail: unknown characters still take up a cell.
//!
//! All distances are in unit cells, where a unit cell is the canvas size
//! (one mono advance). Lines are one unit thick. A block whose flow runs
//! against a screen axis (right-to-left characters, right-to-left
//! columns) is mirrored inside its own bounds, so every frame has
//! non-negative coordinates.

mod flow;

pub use flow::{Axis, FlowAxes, Sign};

use crate::config::LayoutConfig;
use crate::model::{Direction, GlyphSet, ScriptConfig, SpacingMode};
use crate::settings::{canvas, layout};
use kurbo::{BezPath, Rect, Size};
use serde::Serialize;

/// Gaps between lines and between cells, in unit cells
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub line_gap: f64,
    pub char_gap: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            line_gap: layout::LINE_GAP,
            char_gap: layout::CHAR_GAP,
        }
    }
}

impl From<LayoutConfig> for LayoutMetrics {
    fn from(config: LayoutConfig) -> Self {
        Self {
            line_gap: config.line_gap,
            char_gap: config.char_gap,
        }
    }
}

/// What a cell shows
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellContent {
    /// An authored glyph. `character` is the glyph's own character, which
    /// differs from the source character when it was reached by alias.
    Glyph { character: char },
    /// Space
    Blank,
    /// No glyph for this character
    NotDef,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Character from the input text
    pub source: char,
    pub content: CellContent,
    /// Length along the character axis
    pub advance: f64,
    pub frame: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Cells in reading order
    pub cells: Vec<Cell>,
    /// Total length along the character axis, gaps included
    pub extent: f64,
    /// Area the line's cells cover. Empty lines still get their slot.
    pub frame: Rect,
}

/// Positioned cells for a piece of text
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub direction: Direction,
    pub spacing: SpacingMode,
    pub axes: FlowAxes,
    /// Lines in reading order
    pub lines: Vec<Line>,
    /// Bounds of the whole block
    pub size: Size,
}

impl LayoutResult {
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.lines.iter().flat_map(|line| line.cells.iter())
    }
}

/// Lay out `text` with the script's glyphs, direction and spacing mode.
///
/// Cells are per Unicode scalar value: a character outside the BMP is one
/// cell, not a UTF-16 surrogate pair.
pub fn render_text(text: &str, script: &ScriptConfig) -> LayoutResult {
    render_text_with(
        text,
        &script.glyph_set,
        script.direction,
        script.spacing_mode,
        LayoutMetrics::default(),
    )
}

pub fn render_text_with(
    text: &str,
    glyphs: &GlyphSet,
    direction: Direction,
    spacing: SpacingMode,
    metrics: LayoutMetrics,
) -> LayoutResult {
    let axes = direction.axes();

    // Pass 1: resolve cells and measure lines along the character axis
    let mut lines: Vec<Line> = split_lines(text)
        .map(|source| {
            let cells: Vec<Cell> = source
                .chars()
                .map(|c| resolve_cell(c, glyphs, spacing))
                .collect();
            let gaps = cells.len().saturating_sub(1) as f64 * metrics.char_gap;
            let extent = cells.iter().map(|cell| cell.advance).sum::<f64>() + gaps;
            Line {
                cells,
                extent,
                frame: Rect::ZERO,
            }
        })
        .collect();

    let char_span = lines.iter().map(|line| line.extent).fold(0.0, f64::max);
    let line_count = lines.len() as f64;
    let line_span = line_count + (line_count - 1.0).max(0.0) * metrics.line_gap;

    // Pass 2: place lines and cells
    for (index, line) in lines.iter_mut().enumerate() {
        let mut line_pos = index as f64 * (1.0 + metrics.line_gap);
        if axes.line_sign.is_negative() {
            line_pos = line_span - line_pos - 1.0;
        }

        let mut cursor = 0.0;
        for cell in &mut line.cells {
            let char_pos = if axes.char_sign.is_negative() {
                char_span - cursor - cell.advance
            } else {
                cursor
            };
            cell.frame = frame(axes, line_pos, char_pos, cell.advance);
            cursor += cell.advance + metrics.char_gap;
        }

        let line_start = if axes.char_sign.is_negative() {
            char_span - line.extent
        } else {
            0.0
        };
        line.frame = frame(axes, line_pos, line_start, line.extent);
    }

    let size = match axes.char_axis {
        Axis::Horizontal => Size::new(char_span, line_span),
        Axis::Vertical => Size::new(line_span, char_span),
    };

    tracing::debug!(
        "Laid out {} lines ({}, {:?}): {:.2} x {:.2}",
        lines.len(),
        direction.short_name(),
        spacing,
        size.width,
        size.height
    );

    LayoutResult {
        direction,
        spacing,
        axes,
        lines,
        size,
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn resolve_cell(source: char, glyphs: &GlyphSet, spacing: SpacingMode) -> Cell {
    let (content, advance) = match glyphs.lookup(source) {
        Some(glyph) => {
            let advance = match spacing {
                SpacingMode::Mono => layout::MONO_ADVANCE,
                SpacingMode::Proportional => glyph.bounding_width / canvas::SIZE,
            };
            (
                CellContent::Glyph {
                    character: glyph.character,
                },
                advance,
            )
        }
        None if source == ' ' => (CellContent::Blank, layout::BLANK_ADVANCE),
        None => {
            let advance = match spacing {
                SpacingMode::Mono => layout::MONO_ADVANCE,
                SpacingMode::Proportional => layout::NOTDEF_ADVANCE,
            };
            (CellContent::NotDef, advance)
        }
    };
    Cell {
        source,
        content,
        advance,
        frame: Rect::ZERO,
    }
}

/// Map a (line, character) position to a screen rectangle
fn frame(axes: FlowAxes, line_pos: f64, char_pos: f64, length: f64) -> Rect {
    match axes.char_axis {
        Axis::Horizontal => Rect::new(char_pos, line_pos, char_pos + length, line_pos + 1.0),
        Axis::Vertical => Rect::new(line_pos, char_pos, line_pos + 1.0, char_pos + length),
    }
}

/// Box-with-a-cross drawn for characters without a glyph, in canvas units
pub fn notdef_outline() -> BezPath {
    let inset = canvas::SIZE * 0.2;
    let bounds = Rect::new(inset, inset, canvas::SIZE - inset, canvas::SIZE - inset);
    let mut path = BezPath::new();
    path.move_to((bounds.x0, bounds.y0));
    path.line_to((bounds.x1, bounds.y0));
    path.line_to((bounds.x1, bounds.y1));
    path.line_to((bounds.x0, bounds.y1));
    path.close_path();
    path.move_to((bounds.x0, bounds.y0));
    path.line_to((bounds.x1, bounds.y1));
    path.move_to((bounds.x1, bounds.y0));
    path.line_to((bounds.x0, bounds.y1));
    path
}
