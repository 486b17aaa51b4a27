//! Canvas2D surface backed by an HTML `<canvas>`.

use crate::renderer::{RenderResult, RendererError};
use crate::surface::{Surface, css_color};
use kurbo::{BezPath, PathEl, Point, Rect, Size};
use peniko::Color;
use sketchpad_core::{TextAlign, TextBaseline};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Surface drawing through `CanvasRenderingContext2d`.
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    size: Size,
}

impl Canvas2dSurface {
    /// Wrap an existing context.
    pub fn new(ctx: CanvasRenderingContext2d, size: Size) -> Self {
        Self { ctx, size }
    }

    /// Acquire the 2D context of `canvas`.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> RenderResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| RendererError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| RendererError::SurfaceUnavailable("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RendererError::SurfaceUnavailable("not a 2d context".to_string()))?;
        let size = Size::new(canvas.width() as f64, canvas.height() as f64);
        Ok(Self::new(ctx, size))
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn trace(&self, path: &BezPath) {
        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        if let Err(e) = self.ctx.scale(sx, sy) {
            log::warn!("Canvas scale failed: {:?}", e);
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.ctx.set_text_baseline(baseline.as_str());
    }

    fn stroke_path(&mut self, path: &BezPath) {
        self.trace(path);
        self.ctx.stroke();
    }

    fn fill_path(&mut self, path: &BezPath) {
        self.trace(path);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        if let Err(e) = self.ctx.fill_text(text, position.x, position.y) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
