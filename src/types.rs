//! Core data types for the studio: colors, shape styles, shapes, and the layer model.
//!
//! Shapes live in document coordinates (see [`crate::constants::CANVAS_WIDTH`] and
//! [`crate::constants::CANVAS_HEIGHT`]); the UI converts to and from screen space.

use crate::constants;
use crate::error::ColorParseError;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for committed shapes.
pub type ShapeId = Uuid;

/// A 24-bit sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(hex.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to an egui color with the given alpha.
    pub fn to_color32_with_alpha(self, alpha: u8) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }

    /// Parses one of the palette constants. Falls back to black on a malformed constant.
    pub(crate) fn from_constant(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::new(0, 0, 0))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(value: Rgb) -> Self {
        egui::Color32::from_rgb(value.r, value.g, value.b)
    }
}

impl From<egui::Color32> for Rgb {
    /// Drops alpha; color pickers in the toolbar are opaque.
    fn from(value: egui::Color32) -> Self {
        Self::new(value.r(), value.g(), value.b())
    }
}

/// Fill and stroke styling shared by every shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Interior color
    pub fill: Rgb,
    /// Outline color
    pub stroke: Rgb,
    /// Outline width in document units
    pub stroke_width: f32,
    /// Alpha applied to the fill when painted (255 for committed shapes)
    #[serde(skip, default = "opaque")]
    pub fill_alpha: u8,
}

fn opaque() -> u8 {
    255
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Rgb::from_constant(constants::DEFAULT_FILL_HEX),
            stroke: Rgb::from_constant(constants::DEFAULT_STROKE_HEX),
            stroke_width: constants::DEFAULT_STROKE_WIDTH,
            fill_alpha: opaque(),
        }
    }
}

/// The geometry of a shape. Only circles exist in the formline vocabulary so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    /// A circle: eyes, joints, decorative dots
    Circle {
        /// Center as (x, y) in document units
        center: (f32, f32),
        /// Radius in document units, never below [`constants::MIN_RADIUS`]
        radius: f32,
    },
}

/// A single renderable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape
    pub id: ShapeId,
    /// Geometry
    pub kind: ShapeKind,
    /// Fill and stroke styling
    pub style: ShapeStyle,
}

impl Shape {
    /// Builds a circle, clamping the radius to [`constants::MIN_RADIUS`].
    ///
    /// A non-finite radius is treated as the minimum.
    pub fn circle(center: (f32, f32), radius: f32, style: ShapeStyle) -> Self {
        let radius = if radius.is_finite() {
            radius.max(constants::MIN_RADIUS)
        } else {
            constants::MIN_RADIUS
        };
        Self {
            id: Uuid::new_v4(),
            kind: ShapeKind::Circle { center, radius },
            style,
        }
    }

    /// A copy restyled for the preview layer: semi-transparent fill and a thin outline.
    pub fn preview(&self) -> Self {
        let mut preview = self.clone();
        preview.style.fill_alpha = constants::PREVIEW_FILL_ALPHA;
        preview.style.stroke_width = constants::PREVIEW_STROKE_WIDTH;
        preview
    }
}

/// The two ordered shape collections the canvas draws.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    /// Transient shapes shown while a drag is in progress
    pub preview: Vec<Shape>,
    /// Shapes the user has committed; append-only until cleared
    pub committed: Vec<Shape>,
}

impl Layers {
    /// Creates two empty layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is in the preview layer with `shape`.
    pub fn set_preview(&mut self, shape: Shape) {
        self.preview.clear();
        self.preview.push(shape);
    }

    /// Empties the preview layer.
    pub fn clear_preview(&mut self) {
        self.preview.clear();
    }

    /// Appends `shape` to the committed layer, drops the preview, and returns
    /// the committed count.
    pub fn commit(&mut self, shape: Shape) -> usize {
        self.preview.clear();
        self.committed.push(shape);
        self.committed.len()
    }

    /// Removes every shape from both layers.
    pub fn clear(&mut self) {
        self.preview.clear();
        self.committed.clear();
    }

    /// True when neither layer holds a shape.
    pub fn is_empty(&self) -> bool {
        self.preview.is_empty() && self.committed.is_empty()
    }
}
