//! Tool selection for the sketchpad.

use crate::shapes::{Drawable, SerializableColor, StickerPlacement, Stroke};
use crate::sticker::Sticker;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Width of the "Thin" marker.
pub const THIN_WIDTH: f64 = 2.0;
/// Width of the "Thick" marker.
pub const THICK_WIDTH: f64 = 6.0;

/// Tool options exposed on the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Thin,
    Thick,
    /// Sticker placement using the catalog entry with this name.
    Sticker(String),
}

/// The tool that the next pointer-down will use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tool {
    /// Freehand marker with a line width.
    Marker { width: f64 },
    /// Stamp a sticker.
    Sticker(Sticker),
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Marker { width: THIN_WIDTH }
    }
}

impl Tool {
    /// Marker width, if this is the marker tool.
    pub fn width(&self) -> Option<f64> {
        match self {
            Tool::Marker { width } => Some(*width),
            Tool::Sticker(_) => None,
        }
    }

    /// Create the drawable this tool produces when the pointer goes down at `point`.
    pub fn begin(&self, point: Point, color: SerializableColor) -> Drawable {
        match self {
            Tool::Marker { width } => Stroke::with_color(point, *width, color).into(),
            Tool::Sticker(sticker) => StickerPlacement::new(sticker.clone(), point).into(),
        }
    }
}
