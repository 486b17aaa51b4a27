//! Sketchpad Application
//!
//! Toolbar model, keyboard shortcuts and the application state that ties the
//! drawing session to a render surface. On wasm32 the `web` module builds the
//! page and wires browser events into [`App`].

mod app;
mod error;
mod shortcuts;
mod ui;

pub use app::{App, CUSTOM_STICKER_DEFAULT, CUSTOM_STICKER_PROMPT, PlatformRequest};
pub use error::{ShellError, ShellResult};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{Panel, ToolbarButton, UiAction, toolbar};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
