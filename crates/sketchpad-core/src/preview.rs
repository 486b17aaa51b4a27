//! Transient tool previews that follow the pointer.

use crate::sticker::Sticker;
use crate::tools::Tool;
use kurbo::Point;

/// Opacity of the sticker preview glyph.
pub const STICKER_PREVIEW_ALPHA: f64 = 0.7;

/// A non-committed visual tracking the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Circle with the diameter of the marker width.
    Marker { width: f64, position: Point },
    /// Translucent copy of the pending sticker.
    Sticker { sticker: Sticker, position: Point },
}

impl ToolPreview {
    /// Preview for `tool` at `position`.
    pub fn for_tool(tool: &Tool, position: Point) -> Self {
        match tool {
            Tool::Marker { width } => ToolPreview::Marker {
                width: *width,
                position,
            },
            Tool::Sticker(sticker) => ToolPreview::Sticker {
                sticker: sticker.clone(),
                position,
            },
        }
    }

    pub fn position(&self) -> Point {
        match self {
            ToolPreview::Marker { position, .. } | ToolPreview::Sticker { position, .. } => *position,
        }
    }

    /// Track the pointer.
    pub fn move_to(&mut self, point: Point) {
        match self {
            ToolPreview::Marker { position, .. } | ToolPreview::Sticker { position, .. } => {
                *position = point
            }
        }
    }
}

/// Previews currently attached to the surface.
///
/// Enter and leave events come in pairs, so this holds at most one entry in
/// practice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewSet {
    previews: Vec<ToolPreview>,
}

impl PreviewSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, preview: ToolPreview) {
        self.previews.push(preview);
    }

    /// Move every live preview to `point`.
    pub fn move_to(&mut self, point: Point) {
        for preview in &mut self.previews {
            preview.move_to(point);
        }
    }

    /// Destroy all previews.
    pub fn clear(&mut self) {
        self.previews.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolPreview> {
        self.previews.iter()
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}
