//! Sketchpad Core Library
//!
//! Platform-agnostic drawing model for the sketchpad: strokes and sticker
//! placements, the undo/redo history, tool previews and the pointer state
//! machine that drives them.

pub mod config;
pub mod history;
pub mod input;
pub mod preview;
pub mod session;
pub mod shapes;
pub mod sticker;
pub mod tools;

pub use config::{ConfigError, ExportConfig, SketchpadConfig};
pub use history::History;
pub use input::{Cursor, InputPhase, PointerEvent};
pub use preview::{PreviewSet, ToolPreview};
pub use session::{Session, SessionEvent};
pub use shapes::{Drawable, DrawableId, SerializableColor, StickerPlacement, Stroke};
pub use sticker::{CatalogError, Sticker, StickerCatalog, TextAlign, TextBaseline};
pub use tools::{Tool, ToolKind};
