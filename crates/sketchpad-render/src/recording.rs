//! In-memory surface that records draw calls.
//!
//! Paths and text positions are stored in device space (after the current
//! transform), so scaled output can be inspected directly.

use crate::surface::Surface;
use kurbo::{Affine, BezPath, Point, Rect, Size};
use peniko::Color;
use sketchpad_core::{SerializableColor, TextAlign, TextBaseline};

/// Style and transform state, as saved by `save`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub line_width: f64,
    pub stroke_color: SerializableColor,
    pub fill_color: SerializableColor,
    pub global_alpha: f64,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    pub transform: Affine,
}

impl Default for SurfaceState {
    /// Canvas 2D defaults.
    fn default() -> Self {
        Self {
            line_width: 1.0,
            stroke_color: SerializableColor::black(),
            fill_color: SerializableColor::black(),
            global_alpha: 1.0,
            font: "10px sans-serif".to_string(),
            text_align: TextAlign::Start,
            text_baseline: TextBaseline::Alphabetic,
            transform: Affine::IDENTITY,
        }
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        rect: Rect,
    },
    StrokePath {
        path: BezPath,
        line_width: f64,
        color: SerializableColor,
        alpha: f64,
    },
    FillPath {
        path: BezPath,
        color: SerializableColor,
        alpha: f64,
    },
    FillText {
        text: String,
        position: Point,
        font: String,
        align: TextAlign,
        baseline: TextBaseline,
        alpha: f64,
    },
}

/// Surface that keeps a log of everything drawn on it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    state: SurfaceState,
    stack: Vec<SurfaceState>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            state: SurfaceState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Every command since creation.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands drawn after the most recent clear, i.e. what is visible
    /// after a full redraw.
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Current (unsaved) state.
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// Number of outstanding `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    fn device_scale(&self) -> f64 {
        self.state.transform.determinant().abs().sqrt()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        let rect = self.state.transform.transform_rect_bbox(rect);
        self.commands.push(DrawCommand::Clear { rect });
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        // Unbalanced restore is ignored, as on a real canvas.
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color.into();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color.into();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.global_alpha = alpha;
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn stroke_path(&mut self, path: &BezPath) {
        self.commands.push(DrawCommand::StrokePath {
            path: self.state.transform * path.clone(),
            line_width: self.state.line_width * self.device_scale(),
            color: self.state.stroke_color,
            alpha: self.state.global_alpha,
        });
    }

    fn fill_path(&mut self, path: &BezPath) {
        self.commands.push(DrawCommand::FillPath {
            path: self.state.transform * path.clone(),
            color: self.state.fill_color,
            alpha: self.state.global_alpha,
        });
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position: self.state.transform * position,
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
            alpha: self.state.global_alpha,
        });
    }
}
