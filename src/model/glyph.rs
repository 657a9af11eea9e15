// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A glyph: the layered artwork bound to one character.

use super::layer::{Layer, LineCap, VectorLayer};
use crate::settings::{brush, canvas};
use serde::{Deserialize, Deserializer, Serialize};

/// Start of the private-use block used for glyph aliases
const ALIAS_BASE: u32 = 0xE000;
/// Last codepoint of the BMP private-use area
const ALIAS_LAST: u32 = 0xF8FF;

/// Artwork for one character.
///
/// Glyphs stored in a `GlyphSet` are replaced wholesale on save; editing
/// always happens on an `EditSession` working copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    #[serde(rename = "char")]
    pub character: char,
    #[serde(rename = "pua", default, with = "alias_serde")]
    pub alias: Option<char>,
    #[serde(rename = "strokes", default, deserialize_with = "non_empty_layers")]
    pub layers: Vec<Layer>,
    #[serde(rename = "viewWidth", default)]
    pub bounding_width: f64,
}

impl Glyph {
    /// Build a glyph from a layer stack, deriving its bounding width.
    pub fn new(character: char, layers: Vec<Layer>) -> Self {
        let layers = if layers.is_empty() {
            vec![base_layer()]
        } else {
            layers
        };
        let bounding_width = bounding_width(&layers);
        Self {
            character,
            alias: default_alias(character),
            layers,
            bounding_width,
        }
    }

    /// A glyph holding a single empty vector layer
    pub fn blank(character: char) -> Self {
        Self::new(character, Vec::new())
    }

    /// Recompute the derived width if stored data lacked one.
    pub(crate) fn normalize(&mut self) {
        if self.layers.is_empty() {
            self.layers.push(base_layer());
        }
        if self.bounding_width <= 0.0 {
            self.bounding_width = bounding_width(&self.layers);
        }
    }

    /// Visible layers in paint order (bottom first)
    pub fn visible_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.is_visible())
    }
}

/// The empty layer every new glyph starts with
pub fn base_layer() -> Layer {
    Layer::Vector(VectorLayer::new(
        "Base Layer",
        brush::DEFAULT_STROKE_WIDTH,
        brush::DEFAULT_COLOR,
        LineCap::Round,
    ))
}

/// The private-use codepoint a character is also reachable through
pub fn default_alias(character: char) -> Option<char> {
    let code = ALIAS_BASE.checked_add(character as u32)?;
    if code > ALIAS_LAST {
        return None;
    }
    char::from_u32(code)
}

/// Rightmost extent of the visible artwork, clamped to the canvas.
pub fn bounding_width<'a>(layers: impl IntoIterator<Item = &'a Layer>) -> f64 {
    let max_x = layers
        .into_iter()
        .filter(|layer| layer.is_visible())
        .filter_map(Layer::max_x)
        .fold(canvas::MIN_GLYPH_WIDTH, f64::max);
    max_x.clamp(canvas::MIN_GLYPH_WIDTH, canvas::SIZE)
}

fn non_empty_layers<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Layer>, D::Error> {
    let mut layers = Vec::<Layer>::deserialize(deserializer)?;
    if layers.is_empty() {
        layers.push(base_layer());
    }
    Ok(layers)
}

/// Aliases are written as the character itself. Older projects stored an
/// escaped `\uXXXX` string, which is also accepted.
mod alias_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(alias: &Option<char>, serializer: S) -> Result<S::Ok, S::Error> {
        match alias {
            Some(c) => serializer.serialize_char(*c),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<char>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Some(c));
        }
        let hex = text
            .strip_prefix("\\u")
            .or_else(|| text.strip_prefix("U+"))
            .ok_or_else(|| D::Error::custom(format!("invalid glyph alias {text:?}")))?;
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid glyph alias {text:?}")))
    }
}
