//! High-resolution export of committed drawables.

use crate::renderer::SketchRenderer;
use crate::surface::Surface;
use sketchpad_core::{Drawable, ExportConfig};

/// Paint `drawables` onto an offscreen `surface`, scaled by `config.scale`.
///
/// Only committed drawables are exported; previews never are. The surface's
/// state is restored afterwards.
pub fn render_export(surface: &mut dyn Surface, drawables: &[Drawable], config: &ExportConfig) {
    let renderer = SketchRenderer::new();

    surface.save();
    surface.clear();
    surface.scale(config.scale, config.scale);
    for drawable in drawables {
        renderer.render_drawable(surface, drawable);
    }
    surface.restore();

    log::info!(
        "Rendered {} drawables for export at {}x{} (scale {})",
        drawables.len(),
        config.width,
        config.height,
        config.scale
    );
}
