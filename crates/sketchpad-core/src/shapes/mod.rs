//! Drawable items stored in the history.

mod placement;
mod stroke;

pub use placement::StickerPlacement;
pub use stroke::Stroke;

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Unique identifier for drawables.
pub type DrawableId = Uuid;

/// Common behaviour of everything that can be committed to the history.
pub trait DrawableTrait {
    /// Get the unique identifier.
    fn id(&self) -> DrawableId;

    /// Get the bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Follow the pointer while the interaction that created this item is active.
    ///
    /// Strokes extend their path, sticker placements move their anchor.
    fn drag(&mut self, point: Point);
}

/// Enum wrapper for all drawable kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(StickerPlacement),
}

impl Drawable {
    pub fn id(&self) -> DrawableId {
        match self {
            Drawable::Stroke(s) => s.id(),
            Drawable::Sticker(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Drawable::Stroke(s) => s.bounds(),
            Drawable::Sticker(s) => s.bounds(),
        }
    }

    pub fn drag(&mut self, point: Point) {
        match self {
            Drawable::Stroke(s) => s.drag(point),
            Drawable::Sticker(s) => s.drag(point),
        }
    }

    /// Get the stroke if this drawable is a stroke.
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(s) => Some(s),
            _ => None,
        }
    }

    /// Get the sticker placement if this drawable is one.
    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match self {
            Drawable::Sticker(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<StickerPlacement> for Drawable {
    fn from(placement: StickerPlacement) -> Self {
        Drawable::Sticker(placement)
    }
}
