//! Sticker stamped onto the surface.

use super::{DrawableId, DrawableTrait};
use crate::sticker::Sticker;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An instance of a catalog sticker anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerPlacement {
    pub(crate) id: DrawableId,
    /// Definition this placement was stamped from.
    pub sticker: Sticker,
    /// Where the glyph is drawn. Only the latest position is kept.
    pub anchor: Point,
}

impl StickerPlacement {
    /// Stamp `sticker` at `anchor`.
    pub fn new(sticker: Sticker, anchor: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            sticker,
            anchor,
        }
    }

    /// Move the sticker to `point`, replacing the previous anchor.
    pub fn reposition(&mut self, point: Point) {
        self.anchor = point;
    }
}

impl DrawableTrait for StickerPlacement {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn bounds(&self) -> Rect {
        // Glyph metrics are only known to the surface, so approximate with
        // a square of the font size around the anchor.
        let half = self.sticker.font_size() / 2.0;
        Rect::new(
            self.anchor.x - half,
            self.anchor.y - half,
            self.anchor.x + half,
            self.anchor.y + half,
        )
    }

    fn drag(&mut self, point: Point) {
        self.reposition(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reposition_overwrites_anchor() {
        let mut placement = StickerPlacement::new(Sticker::emoji("skull", "💀"), Point::new(50.0, 50.0));
        placement.reposition(Point::new(55.0, 52.0));
        placement.reposition(Point::new(60.0, 60.0));
        assert_eq!(placement.anchor, Point::new(60.0, 60.0));
    }

    #[test]
    fn test_bounds_centered_on_anchor() {
        let placement = StickerPlacement::new(Sticker::emoji("skull", "💀"), Point::new(50.0, 50.0));
        let bounds = placement.bounds();
        assert_eq!(bounds.center(), Point::new(50.0, 50.0));
        assert!((bounds.width() - 24.0).abs() < f64::EPSILON);
    }
}
