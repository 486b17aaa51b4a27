//! Drawing session: history, tool state and pointer dispatch.

use crate::config::SketchpadConfig;
use crate::history::History;
use crate::input::{Cursor, InputPhase, PointerEvent};
use crate::preview::{PreviewSet, ToolPreview};
use crate::shapes::{Drawable, DrawableId, SerializableColor};
use crate::sticker::{CatalogResult, Sticker, StickerCatalog};
use crate::tools::{Tool, ToolKind};
use kurbo::Point;

/// Redraw requests emitted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The committed drawables changed.
    DrawingChanged,
    /// Only the tool preview moved or disappeared.
    ToolMoved,
}

/// Everything a single sketchpad owns.
#[derive(Debug, Clone)]
pub struct Session {
    history: History,
    catalog: StickerCatalog,
    tool: Tool,
    thin_width: f64,
    thick_width: f64,
    stroke_color: SerializableColor,
    cursor: Cursor,
    previews: PreviewSet,
    /// Drawable being extended by the current pointer interaction.
    in_progress: Option<DrawableId>,
    /// Redraw requests not yet picked up by the render loop.
    pending: Vec<SessionEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl Session {
    /// Create a session from a config.
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            history: History::new(),
            catalog: config.catalog(),
            tool: Tool::Marker {
                width: config.default_width,
            },
            thin_width: config.thin_width,
            thick_width: config.thick_width,
            stroke_color: config.stroke_color,
            cursor: Cursor::new(),
            previews: PreviewSet::new(),
            in_progress: None,
            pending: Vec::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn catalog(&self) -> &StickerCatalog {
        &self.catalog
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn previews(&self) -> &PreviewSet {
        &self.previews
    }

    /// Id of the drawable the current interaction is extending.
    pub fn in_progress(&self) -> Option<DrawableId> {
        self.in_progress
    }

    /// Whether previews should be painted (pointer not held).
    pub fn shows_previews(&self) -> bool {
        !self.cursor.active
    }

    /// Current interaction phase.
    pub fn phase(&self) -> InputPhase {
        if self.cursor.active {
            InputPhase::Drawing
        } else if self.cursor.inside && !self.previews.is_empty() {
            InputPhase::Hovering
        } else {
            InputPhase::Idle
        }
    }

    /// Drain the redraw requests emitted since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Whether a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        !self.pending.is_empty()
    }

    fn emit(&mut self, event: SessionEvent) {
        self.pending.push(event);
    }

    /// Feed a pointer event through the input state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.cursor.handle_pointer_event(event);
        match event {
            PointerEvent::Down { position } => self.begin_interaction(position),
            PointerEvent::Move { position } => self.pointer_moved(position),
            PointerEvent::Up { .. } => {
                if let Some(id) = self.in_progress.take() {
                    log::debug!("Finished drawable {}", id);
                }
            }
            PointerEvent::Enter { position } => {
                self.previews.activate(ToolPreview::for_tool(&self.tool, position));
            }
            PointerEvent::Leave { .. } => {
                self.previews.clear();
                self.emit(SessionEvent::ToolMoved);
            }
        }
    }

    fn begin_interaction(&mut self, position: Point) {
        let drawable = self.tool.begin(position, self.stroke_color);
        let id = drawable.id();
        log::debug!("Started drawable {} at ({}, {})", id, position.x, position.y);
        self.in_progress = Some(id);
        self.commit(drawable);
    }

    fn pointer_moved(&mut self, position: Point) {
        if self.cursor.active {
            // Gone only if cleared mid-drag; undone drawables still extend.
            let Some(id) = self.in_progress else {
                return;
            };
            if let Some(drawable) = self.history.get_mut(id) {
                drawable.drag(position);
                self.emit(SessionEvent::DrawingChanged);
            }
        } else if !self.previews.is_empty() {
            self.previews.move_to(position);
            self.emit(SessionEvent::ToolMoved);
        }
    }

    /// Commit a drawable to the history.
    pub fn commit(&mut self, drawable: Drawable) {
        self.history.commit(drawable);
        self.emit(SessionEvent::DrawingChanged);
    }

    /// Undo the newest drawable. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        self.emit(SessionEvent::DrawingChanged);
        true
    }

    /// Redo the last undone drawable. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.emit(SessionEvent::DrawingChanged);
        true
    }

    /// Wipe the committed drawables. The redo stack is kept.
    pub fn clear(&mut self) {
        self.history.clear();
        self.emit(SessionEvent::DrawingChanged);
    }

    /// Switch tools. Applies from the next pointer-down or pointer-enter.
    pub fn select_tool(&mut self, kind: &ToolKind) -> CatalogResult<()> {
        self.tool = match kind {
            ToolKind::Thin => Tool::Marker {
                width: self.thin_width,
            },
            ToolKind::Thick => Tool::Marker {
                width: self.thick_width,
            },
            ToolKind::Sticker(name) => Tool::Sticker(self.catalog.require(name)?.clone()),
        };
        log::debug!("Selected tool {:?}", kind);
        Ok(())
    }

    /// Register a user-provided glyph as a new sticker.
    pub fn add_custom_sticker(&mut self, input: &str) -> CatalogResult<&Sticker> {
        self.catalog.register_custom(input)
    }
}
