// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph layers: vector strokes and raster reference images.

use super::LayerId;
use crate::path::PathData;
use crate::settings::brush;
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};

/// Stroke cap style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Round,
    Square,
}

impl From<LineCap> for kurbo::Cap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Round => kurbo::Cap::Round,
            LineCap::Square => kurbo::Cap::Square,
        }
    }
}

/// A stroked vector layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorLayer {
    pub id: LayerId,
    #[serde(rename = "d", default)]
    pub geometry: PathData,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub label: String,
}

impl VectorLayer {
    /// An empty, visible, unlocked layer
    pub fn new(label: impl Into<String>, stroke_width: f64, color: impl Into<String>, cap: LineCap) -> Self {
        Self {
            id: LayerId::next(),
            geometry: PathData::new(),
            stroke_width,
            color: color.into(),
            cap,
            visible: true,
            locked: false,
            opacity: None,
            label: label.into(),
        }
    }

    /// Kurbo stroke style for rendering this layer
    pub fn stroke(&self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.stroke_width)
            .with_caps(self.cap.into())
            .with_join(kurbo::Join::Round)
    }
}

/// A raster reference image. The image itself is an opaque reference,
/// typically a data URI, and is never decoded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterLayer {
    pub id: LayerId,
    #[serde(rename = "imageUrl")]
    pub image_ref: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub label: String,
}

impl RasterLayer {
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// One drawable unit of a glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Layer {
    #[serde(rename = "path")]
    Vector(VectorLayer),
    #[serde(rename = "image")]
    Raster(RasterLayer),
}

impl Layer {
    pub fn id(&self) -> LayerId {
        match self {
            Layer::Vector(layer) => layer.id,
            Layer::Raster(layer) => layer.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: LayerId) {
        match self {
            Layer::Vector(layer) => layer.id = id,
            Layer::Raster(layer) => layer.id = id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Layer::Vector(layer) => &layer.label,
            Layer::Raster(layer) => &layer.label,
        }
    }

    pub fn set_label(&mut self, label: String) {
        match self {
            Layer::Vector(layer) => layer.label = label,
            Layer::Raster(layer) => layer.label = label,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Layer::Vector(layer) => layer.visible,
            Layer::Raster(layer) => layer.visible,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Layer::Vector(layer) => layer.visible = visible,
            Layer::Raster(layer) => layer.visible = visible,
        }
    }

    pub fn is_locked(&self) -> bool {
        match self {
            Layer::Vector(layer) => layer.locked,
            Layer::Raster(layer) => layer.locked,
        }
    }

    pub fn set_locked(&mut self, locked: bool) {
        match self {
            Layer::Vector(layer) => layer.locked = locked,
            Layer::Raster(layer) => layer.locked = locked,
        }
    }

    /// Effective opacity; vector layers without one are fully opaque
    pub fn opacity(&self) -> f64 {
        match self {
            Layer::Vector(layer) => layer.opacity.unwrap_or(1.0),
            Layer::Raster(layer) => layer.opacity,
        }
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        match self {
            Layer::Vector(layer) => layer.opacity = Some(opacity),
            Layer::Raster(layer) => layer.opacity = opacity,
        }
    }

    pub fn as_vector(&self) -> Option<&VectorLayer> {
        match self {
            Layer::Vector(layer) => Some(layer),
            Layer::Raster(_) => None,
        }
    }

    pub fn as_vector_mut(&mut self) -> Option<&mut VectorLayer> {
        match self {
            Layer::Vector(layer) => Some(layer),
            Layer::Raster(_) => None,
        }
    }

    /// Whether drawing tools may modify this layer
    pub fn is_drawable(&self) -> bool {
        matches!(self, Layer::Vector(layer) if !layer.locked)
    }

    /// Rightmost X reached by this layer's content, if any
    pub fn max_x(&self) -> Option<f64> {
        match self {
            Layer::Vector(layer) => layer.geometry.max_x(),
            Layer::Raster(layer) => Some(layer.x + layer.width),
        }
    }

    /// Outline for vector layers; raster layers have none
    pub fn to_bezpath(&self) -> Option<BezPath> {
        self.as_vector().map(|layer| layer.geometry.to_bezpath())
    }
}

fn default_true() -> bool {
    true
}

fn default_stroke_width() -> f64 {
    brush::DEFAULT_STROKE_WIDTH
}

fn default_opacity() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Subpath;
    use kurbo::Point;

    #[test]
    fn raster_extent_is_x_plus_width() {
        let layer = Layer::Raster(RasterLayer {
            id: LayerId::next(),
            image_ref: "data:image/png;base64,AAAA".into(),
            x: 10.0,
            y: 0.0,
            width: 120.0,
            height: 40.0,
            opacity: 0.5,
            visible: true,
            locked: false,
            label: "ref".into(),
        });
        assert_eq!(layer.max_x(), Some(130.0));
        assert!(!layer.is_drawable());
        assert!(layer.to_bezpath().is_none());
    }

    #[test]
    fn stroke_style_follows_layer() {
        let layer = VectorLayer::new("a", 12.0, "#fff", LineCap::Square);
        let stroke = layer.stroke();
        assert_eq!(stroke.width, 12.0);
        assert_eq!(stroke.start_cap, kurbo::Cap::Square);
        assert_eq!(stroke.end_cap, kurbo::Cap::Square);
        assert_eq!(stroke.join, kurbo::Join::Round);
    }

    #[test]
    fn locked_vector_is_not_drawable() {
        let mut layer = Layer::Vector(VectorLayer::new("a", 15.0, "#fff", LineCap::Round));
        assert!(layer.is_drawable());
        layer.set_locked(true);
        assert!(!layer.is_drawable());
    }

    #[test]
    fn vector_layer_json_uses_project_field_names() {
        let mut layer = VectorLayer::new("Base Layer", 12.0, "#ff0000", LineCap::Square);
        layer.geometry.push(Subpath::open(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]));
        let json = serde_json::to_value(Layer::Vector(layer.clone())).unwrap();
        assert_eq!(json["type"], "path");
        assert_eq!(json["strokeWidth"], 12.0);
        assert_eq!(json["cap"], "square");
        assert!(json["d"].is_string());
        assert!(json.get("opacity").is_none());

        let back: Layer = serde_json::from_value(json).unwrap();
        assert_eq!(back, Layer::Vector(layer));
    }

    #[test]
    fn legacy_layer_json_is_accepted() {
        let json = r##"{
            "id": "layer-1700000000000", "type": "path", "d": "M 10.0 10.0 L 20.0 20.0",
            "width": 15, "strokeWidth": 15, "cap": "round", "color": "#ffffff",
            "visible": true, "locked": false, "label": "Layer 1"
        }"##;
        let layer: Layer = serde_json::from_str(json).unwrap();
        let vector = layer.as_vector().unwrap();
        assert_eq!(vector.id.get(), 1_700_000_000_000);
        assert_eq!(vector.geometry.subpaths().len(), 1);
    }
}
