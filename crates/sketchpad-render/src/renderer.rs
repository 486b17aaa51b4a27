//! Painting drawables and previews, and the full-surface redraw.

use crate::surface::Surface;
use kurbo::{Circle, Shape as _, Size};
use peniko::Color;
use sketchpad_core::preview::STICKER_PREVIEW_ALPHA;
use sketchpad_core::{Drawable, Session, Sticker, StickerPlacement, Stroke, TextAlign, TextBaseline, ToolPreview};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single redraw.
pub struct RenderContext<'a> {
    /// The session to render.
    pub session: &'a Session,
    /// Area to clear before painting.
    pub viewport_size: Size,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(session: &'a Session, viewport_size: Size) -> Self {
        Self {
            session,
            viewport_size,
        }
    }
}

/// Trait for redraw strategies.
pub trait Renderer {
    /// Clear the surface and repaint everything visible in `ctx`.
    fn redraw(&mut self, surface: &mut dyn Surface, ctx: &RenderContext);
}

/// Colors used for the marker preview circle.
#[derive(Debug, Clone, Copy)]
pub struct PreviewStyle {
    pub outline_width: f64,
    pub outline: Color,
    pub fill: Color,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            outline_width: 2.0,
            outline: Color::from_rgba8(0, 0, 0, 128),
            fill: Color::from_rgba8(0, 0, 0, 26),
        }
    }
}

/// Default renderer: full clear, committed drawables in order, then
/// previews while the pointer is up.
#[derive(Debug, Clone, Default)]
pub struct SketchRenderer {
    pub preview_style: PreviewStyle,
}

impl SketchRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one committed drawable.
    pub fn render_drawable(&self, surface: &mut dyn Surface, drawable: &Drawable) {
        match drawable {
            Drawable::Stroke(stroke) => render_stroke(surface, stroke),
            Drawable::Sticker(placement) => render_placement(surface, placement),
        }
    }

    /// Paint a tool preview.
    pub fn render_preview(&self, surface: &mut dyn Surface, preview: &ToolPreview) {
        match preview {
            ToolPreview::Marker { width, position } => {
                let style = &self.preview_style;
                let circle = Circle::new(*position, width / 2.0).to_path(0.1);
                surface.save();
                surface.set_line_width(style.outline_width);
                surface.set_stroke_color(style.outline);
                surface.set_fill_color(style.fill);
                surface.stroke_path(&circle);
                surface.fill_path(&circle);
                surface.restore();
            }
            ToolPreview::Sticker { sticker, position } => {
                surface.save();
                surface.set_font(&sticker.font);
                surface.set_text_align(TextAlign::Center);
                surface.set_text_baseline(TextBaseline::Middle);
                surface.set_global_alpha(STICKER_PREVIEW_ALPHA);
                surface.fill_text(&sticker.text, *position);
                surface.restore();
            }
        }
    }
}

impl Renderer for SketchRenderer {
    fn redraw(&mut self, surface: &mut dyn Surface, ctx: &RenderContext) {
        surface.clear_rect(kurbo::Rect::from_origin_size(kurbo::Point::ZERO, ctx.viewport_size));

        let session = ctx.session;
        for drawable in session.history().committed() {
            self.render_drawable(surface, drawable);
        }

        if session.shows_previews() {
            for preview in session.previews().iter() {
                self.render_preview(surface, preview);
            }
        }
    }
}

/// Draw a stroke as a polyline. Strokes with a single point draw nothing.
pub fn render_stroke(surface: &mut dyn Surface, stroke: &Stroke) {
    let Some(path) = stroke.to_path() else {
        return;
    };

    surface.save();
    surface.set_line_width(stroke.width());
    surface.set_stroke_color(stroke.color.into());
    surface.stroke_path(&path);
    surface.restore();
}

/// Draw a sticker glyph, fully opaque, at its anchor.
pub fn render_placement(surface: &mut dyn Surface, placement: &StickerPlacement) {
    surface.save();
    apply_sticker_font(surface, &placement.sticker);
    surface.set_global_alpha(1.0);
    surface.fill_text(&placement.sticker.text, placement.anchor);
    surface.restore();
}

fn apply_sticker_font(surface: &mut dyn Surface, sticker: &Sticker) {
    surface.set_font(&sticker.font);
    surface.set_text_align(sticker.align);
    surface.set_text_baseline(sticker.baseline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface, SurfaceState};
    use kurbo::{PathEl, Point, Shape as _};
    use sketchpad_core::{PointerEvent, SerializableColor, ToolKind};

    fn surface() -> RecordingSurface {
        RecordingSurface::new(256.0, 256.0)
    }

    fn redraw(session: &Session, surface: &mut RecordingSurface) {
        let ctx = RenderContext::new(session, Size::new(256.0, 256.0));
        SketchRenderer::new().redraw(surface, &ctx);
    }

    fn drag(session: &mut Session, points: &[(f64, f64)]) {
        let (first, rest) = points.split_first().unwrap();
        session.handle_pointer(PointerEvent::Down {
            position: Point::new(first.0, first.1),
        });
        for (x, y) in rest {
            session.handle_pointer(PointerEvent::Move {
                position: Point::new(*x, *y),
            });
        }
        let (x, y) = points[points.len() - 1];
        session.handle_pointer(PointerEvent::Up {
            position: Point::new(x, y),
        });
    }

    #[test]
    fn test_single_point_stroke_draws_nothing() {
        let mut surface = surface();
        render_stroke(&mut surface, &Stroke::new(Point::new(3.0, 3.0), 2.0));
        assert!(surface.commands().is_empty());
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn test_stroke_scenario_renders_two_segments() {
        let mut session = Session::default();
        drag(&mut session, &[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]);

        let mut surface = surface();
        redraw(&session, &mut surface);

        let frame = surface.frame();
        assert_eq!(frame.len(), 1);
        let DrawCommand::StrokePath { path, line_width, color, .. } = &frame[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(10.0, 10.0)),
                PathEl::LineTo(Point::new(20.0, 10.0)),
                PathEl::LineTo(Point::new(20.0, 20.0)),
            ]
        );
        assert_eq!(*line_width, 2.0);
        assert_eq!(*color, SerializableColor::black());
    }

    #[test]
    fn test_stroke_does_not_leak_style() {
        let mut surface = surface();
        let mut stroke = Stroke::new(Point::ZERO, 6.0);
        stroke.extend(Point::new(5.0, 5.0));
        render_stroke(&mut surface, &stroke);

        assert_eq!(surface.state(), &SurfaceState::default());
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn test_sticker_renders_opaque_glyph() {
        let mut session = Session::default();
        session.select_tool(&ToolKind::Sticker("skull".to_string())).unwrap();
        drag(&mut session, &[(50.0, 50.0), (60.0, 60.0)]);

        let mut surface = surface();
        surface.set_global_alpha(0.2);
        redraw(&session, &mut surface);

        assert_eq!(
            surface.frame(),
            &[DrawCommand::FillText {
                text: "💀".to_string(),
                position: Point::new(60.0, 60.0),
                font: "24px Arial".to_string(),
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
                alpha: 1.0,
            }]
        );
        assert!((surface.state().global_alpha - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_previews_hidden_while_drawing() {
        let mut session = Session::default();
        session.handle_pointer(PointerEvent::Enter { position: Point::new(40.0, 40.0) });

        let mut surface = surface();
        redraw(&session, &mut surface);
        // Circle outline and fill.
        assert_eq!(surface.frame().len(), 2);

        session.handle_pointer(PointerEvent::Down { position: Point::new(40.0, 40.0) });
        session.handle_pointer(PointerEvent::Move { position: Point::new(45.0, 40.0) });
        redraw(&session, &mut surface);
        assert_eq!(surface.frame().len(), 1);
        assert!(matches!(surface.frame()[0], DrawCommand::StrokePath { .. }));
    }

    #[test]
    fn test_marker_preview_circle() {
        let mut surface = surface();
        SketchRenderer::new().render_preview(
            &mut surface,
            &ToolPreview::Marker {
                width: 6.0,
                position: Point::new(100.0, 100.0),
            },
        );

        let DrawCommand::StrokePath { path, line_width, color, .. } = &surface.commands()[0] else {
            panic!("expected an outline");
        };
        let bounds = path.bounding_box();
        assert!((bounds.width() - 6.0).abs() < 0.01);
        assert!((bounds.center().x - 100.0).abs() < 0.01);
        assert_eq!(*line_width, 2.0);
        assert_eq!(color.a, 128);
        assert!(matches!(&surface.commands()[1], DrawCommand::FillPath { color, .. } if color.a == 26));
        assert_eq!(surface.state(), &SurfaceState::default());
    }

    #[test]
    fn test_sticker_preview_is_translucent() {
        let mut surface = surface();
        SketchRenderer::new().render_preview(
            &mut surface,
            &ToolPreview::Sticker {
                sticker: Sticker::emoji("ghost", "👻"),
                position: Point::new(7.0, 9.0),
            },
        );

        assert!(matches!(
            &surface.commands()[0],
            DrawCommand::FillText { alpha, position, .. }
                if (*alpha - 0.7).abs() < f64::EPSILON && *position == Point::new(7.0, 9.0)
        ));
    }

    #[test]
    fn test_clear_yields_blank_frame() {
        let mut session = Session::default();
        drag(&mut session, &[(1.0, 1.0), (9.0, 9.0)]);
        session.clear();

        let mut surface = surface();
        redraw(&session, &mut surface);
        assert!(surface.frame().is_empty());
        assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
    }
}
