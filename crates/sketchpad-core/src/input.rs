//! Pointer events and cursor state.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Enter { position: Point },
    Leave { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Enter { position }
            | PointerEvent::Leave { position } => position,
        }
    }
}

/// Phase of the current pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputPhase {
    /// Pointer up with no preview on the surface.
    #[default]
    Idle,
    /// Pointer up over the surface with a live preview.
    Hovering,
    /// Pointer down, a drawable is being extended.
    Drawing,
}

/// Tracks the pointer between events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    /// Whether the pointer button is held.
    pub active: bool,
    /// Last known pointer position.
    pub position: Point,
    /// Whether the pointer is over the surface.
    pub inside: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the effect of `event` on the cursor.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        self.position = event.position();
        match event {
            PointerEvent::Down { .. } => self.active = true,
            PointerEvent::Up { .. } => self.active = false,
            PointerEvent::Enter { .. } => self.inside = true,
            PointerEvent::Leave { .. } => self.inside = false,
            PointerEvent::Move { .. } => {}
        }
    }
}
