//! Sketchpad Render Library
//!
//! Surface abstraction, the full-surface redraw loop and high-resolution
//! export. `RecordingSurface` works everywhere; `Canvas2dSurface` draws to an
//! HTML canvas on wasm32.

mod export;
mod recording;
mod renderer;
mod surface;

#[cfg(target_arch = "wasm32")]
mod canvas2d;

pub use export::render_export;
pub use recording::{DrawCommand, RecordingSurface, SurfaceState};
pub use renderer::{
    PreviewStyle, RenderContext, RenderResult, Renderer, RendererError, SketchRenderer, render_placement,
    render_stroke,
};
pub use surface::{Surface, css_color};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
