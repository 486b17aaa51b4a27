//! 2D drawing surface abstraction.

use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;
use sketchpad_core::{TextAlign, TextBaseline};

/// A raster 2D drawing context in the style of `CanvasRenderingContext2D`.
///
/// Style setters change the current state; `save`/`restore` push and pop
/// that state (including the transform).
pub trait Surface {
    /// Surface size in its own pixel units.
    fn size(&self) -> Size;

    /// Erase a region.
    fn clear_rect(&mut self, rect: Rect);

    /// Push the current style and transform.
    fn save(&mut self);

    /// Pop the style and transform saved by the matching `save`.
    fn restore(&mut self);

    /// Scale subsequent drawing.
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Outline a path with the current line width and stroke color.
    fn stroke_path(&mut self, path: &BezPath);

    /// Fill a path with the current fill color.
    fn fill_path(&mut self, path: &BezPath);

    /// Draw text with the current font, alignment and fill color.
    fn fill_text(&mut self, text: &str, position: Point);

    /// Erase the whole surface.
    fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(Rect::from_origin_size(Point::ZERO, size));
    }
}

/// CSS color string for a peniko color.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            (rgba.a as f64 / 255.0 * 100.0).round() / 100.0
        )
    }
}
