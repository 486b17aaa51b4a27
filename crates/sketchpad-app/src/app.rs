//! Platform-independent application state.

use crate::ui::{ToolbarButton, UiAction, toolbar};
use sketchpad_core::{PointerEvent, Session, SketchpadConfig};
use sketchpad_render::{RenderContext, Renderer, SketchRenderer, Surface, render_export};

/// Message shown when asking for a custom sticker.
pub const CUSTOM_STICKER_PROMPT: &str = "Paste your Custom sticker: ";
/// Text pre-filled in the custom sticker prompt.
pub const CUSTOM_STICKER_DEFAULT: &str = "user sticker";

/// Work an action needs from the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformRequest {
    /// Prompt for text and pass the answer to [`App::add_custom_sticker`].
    PromptCustomSticker {
        message: &'static str,
        default: &'static str,
    },
    /// Create an offscreen surface of the configured export size, paint it
    /// with [`App::export`] and offer it as a download.
    Export,
}

/// Main application struct.
pub struct App {
    config: SketchpadConfig,
    session: Session,
    renderer: SketchRenderer,
}

impl App {
    pub fn new(config: SketchpadConfig) -> Self {
        let session = Session::new(&config);
        Self {
            config,
            session,
            renderer: SketchRenderer::new(),
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Buttons for the current sticker catalog.
    pub fn toolbar(&self) -> Vec<ToolbarButton> {
        toolbar(self.session.catalog(), &self.config.export)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.session.handle_pointer(event);
    }

    /// Apply a toolbar or keyboard action.
    pub fn dispatch(&mut self, action: &UiAction) -> Option<PlatformRequest> {
        match action {
            UiAction::Clear => self.session.clear(),
            UiAction::Undo => {
                self.session.undo();
            }
            UiAction::Redo => {
                self.session.redo();
            }
            UiAction::SelectTool(kind) => {
                if let Err(e) = self.session.select_tool(kind) {
                    log::warn!("Tool not selected: {}", e);
                }
            }
            UiAction::CustomSticker => {
                return Some(PlatformRequest::PromptCustomSticker {
                    message: CUSTOM_STICKER_PROMPT,
                    default: CUSTOM_STICKER_DEFAULT,
                });
            }
            UiAction::Export => return Some(PlatformRequest::Export),
        }
        None
    }

    /// Register the prompt answer as a sticker. Returns the button to add,
    /// or `None` if the prompt was cancelled or left blank.
    pub fn add_custom_sticker(&mut self, input: Option<&str>) -> Option<ToolbarButton> {
        let input = input?;
        match self.session.add_custom_sticker(input) {
            Ok(sticker) => Some(ToolbarButton::sticker(sticker)),
            Err(e) => {
                log::info!("Custom sticker not added: {}", e);
                None
            }
        }
    }

    /// Repaint `surface` if the session asked for it since the last call.
    pub fn redraw_if_needed(&mut self, surface: &mut dyn Surface) -> bool {
        if self.session.take_events().is_empty() {
            return false;
        }
        self.redraw(surface);
        true
    }

    /// Unconditional full repaint.
    pub fn redraw(&mut self, surface: &mut dyn Surface) {
        let ctx = RenderContext::new(&self.session, surface.size());
        self.renderer.redraw(surface, &ctx);
    }

    /// Paint the committed drawables onto an export surface.
    pub fn export(&self, surface: &mut dyn Surface) {
        render_export(surface, self.session.history().committed(), &self.config.export);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SketchpadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Panel;
    use kurbo::Point;
    use sketchpad_core::ToolKind;
    use sketchpad_render::{DrawCommand, RecordingSurface};

    fn click(app: &mut App, x: f64, y: f64) {
        app.handle_pointer(PointerEvent::Down {
            position: Point::new(x, y),
        });
        app.handle_pointer(PointerEvent::Move {
            position: Point::new(x + 5.0, y),
        });
        app.handle_pointer(PointerEvent::Up {
            position: Point::new(x + 5.0, y),
        });
    }

    #[test]
    fn test_undo_redo_buttons() {
        let mut app = App::default();
        let mut surface = RecordingSurface::new(256.0, 256.0);
        click(&mut app, 10.0, 10.0);
        assert!(app.redraw_if_needed(&mut surface));
        assert_eq!(surface.frame().len(), 1);

        assert_eq!(app.dispatch(&UiAction::Undo), None);
        assert!(app.redraw_if_needed(&mut surface));
        assert!(surface.frame().is_empty());

        // Nothing left to undo: no redraw.
        app.dispatch(&UiAction::Undo);
        assert!(!app.redraw_if_needed(&mut surface));

        app.dispatch(&UiAction::Redo);
        assert!(app.redraw_if_needed(&mut surface));
        assert_eq!(surface.frame().len(), 1);
    }

    #[test]
    fn test_clear_button_blanks_surface() {
        let mut app = App::default();
        let mut surface = RecordingSurface::new(256.0, 256.0);
        click(&mut app, 10.0, 10.0);
        click(&mut app, 20.0, 20.0);
        app.dispatch(&UiAction::Clear);

        assert!(app.redraw_if_needed(&mut surface));
        assert!(surface.frame().is_empty());
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_thick_button() {
        let mut app = App::default();
        app.dispatch(&UiAction::SelectTool(ToolKind::Thick));
        click(&mut app, 0.0, 0.0);

        let mut surface = RecordingSurface::new(256.0, 256.0);
        app.redraw(&mut surface);
        assert!(matches!(
            surface.frame()[0],
            DrawCommand::StrokePath { line_width, .. } if line_width == 6.0
        ));
    }

    #[test]
    fn test_custom_sticker_flow() {
        let mut app = App::default();
        let request = app.dispatch(&UiAction::CustomSticker);
        assert_eq!(
            request,
            Some(PlatformRequest::PromptCustomSticker {
                message: CUSTOM_STICKER_PROMPT,
                default: CUSTOM_STICKER_DEFAULT,
            })
        );

        let button = app.add_custom_sticker(Some("🦀")).unwrap();
        assert_eq!(button.label, "🦀");
        assert_eq!(button.panel, Panel::Right);
        assert!(app.toolbar().contains(&button));

        app.dispatch(&button.action);
        click(&mut app, 30.0, 30.0);
        let placement = app.session().history().committed()[0].as_sticker().unwrap();
        assert_eq!(placement.sticker.text, "🦀");
        assert_eq!(placement.anchor, Point::new(35.0, 30.0));
    }

    #[test]
    fn test_cancelled_prompt_adds_nothing() {
        let mut app = App::default();
        let before = app.toolbar().len();
        assert!(app.add_custom_sticker(None).is_none());
        assert!(app.add_custom_sticker(Some("  ")).is_none());
        assert_eq!(app.toolbar().len(), before);
    }

    #[test]
    fn test_export_request_and_render() {
        let mut app = App::default();
        click(&mut app, 10.0, 10.0);
        assert_eq!(app.dispatch(&UiAction::Export), Some(PlatformRequest::Export));

        let export = &app.config().export;
        let mut surface = RecordingSurface::new(export.width as f64, export.height as f64);
        app.export(&mut surface);
        let DrawCommand::StrokePath { path, .. } = &surface.commands()[1] else {
            panic!("expected a stroke");
        };
        assert_eq!(path.elements()[0], kurbo::PathEl::MoveTo(Point::new(40.0, 40.0)));
    }

    #[test]
    fn test_unknown_sticker_action_is_ignored() {
        let mut app = App::default();
        app.dispatch(&UiAction::SelectTool(ToolKind::Sticker("nope".to_string())));
        click(&mut app, 0.0, 0.0);
        assert!(app.session().history().committed()[0].as_stroke().is_some());
    }

    #[test]
    fn test_release_outside_canvas_ends_drag() {
        let mut app = App::default();
        app.handle_pointer(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
        });
        app.handle_pointer(PointerEvent::Leave {
            position: Point::new(0.0, 10.0),
        });
        app.handle_pointer(PointerEvent::Up {
            position: Point::new(-40.0, 10.0),
        });
        app.handle_pointer(PointerEvent::Enter {
            position: Point::new(0.0, 20.0),
        });
        app.handle_pointer(PointerEvent::Move {
            position: Point::new(30.0, 20.0),
        });

        let stroke = app.session().history().committed()[0].as_stroke().unwrap();
        assert_eq!(stroke.len(), 1);
        assert!(app.session().in_progress().is_none());
    }
}
