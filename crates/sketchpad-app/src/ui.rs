//! Toolbar model shared by every platform shell.

use sketchpad_core::{ExportConfig, Sticker, StickerCatalog, ToolKind};

/// Actions that can be triggered from the toolbar or keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Clear,
    Undo,
    Redo,
    SelectTool(ToolKind),
    /// Ask the user for a glyph and register it as a sticker.
    CustomSticker,
    /// Render the drawing offscreen and download it.
    Export,
}

/// Side of the canvas a button lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Left,
    Right,
}

/// A toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub label: String,
    pub action: UiAction,
    pub panel: Panel,
    /// Sticker buttons get larger glyph styling.
    pub is_sticker: bool,
}

impl ToolbarButton {
    pub fn new(label: impl Into<String>, action: UiAction, panel: Panel) -> Self {
        Self {
            label: label.into(),
            action,
            panel,
            is_sticker: false,
        }
    }

    /// Button selecting `sticker`, labelled with its glyph.
    pub fn sticker(sticker: &Sticker) -> Self {
        Self {
            label: sticker.text.clone(),
            action: UiAction::SelectTool(ToolKind::Sticker(sticker.name.clone())),
            panel: Panel::Right,
            is_sticker: true,
        }
    }
}

/// Build the toolbar: commands and widths on the left, stickers,
/// custom sticker and export on the right.
pub fn toolbar(catalog: &StickerCatalog, export: &ExportConfig) -> Vec<ToolbarButton> {
    let mut buttons = vec![
        ToolbarButton::new("Clear", UiAction::Clear, Panel::Left),
        ToolbarButton::new("Undo", UiAction::Undo, Panel::Left),
        ToolbarButton::new("Redo", UiAction::Redo, Panel::Left),
        ToolbarButton::new("Thin", UiAction::SelectTool(ToolKind::Thin), Panel::Left),
        ToolbarButton::new("Thick", UiAction::SelectTool(ToolKind::Thick), Panel::Left),
    ];
    buttons.extend(catalog.iter().map(ToolbarButton::sticker));
    buttons.push(ToolbarButton::new("Custom Sticker", UiAction::CustomSticker, Panel::Right));
    buttons.push(ToolbarButton::new(
        format!("Export ({}x{})", export.width, export.height),
        UiAction::Export,
        Panel::Right,
    ));
    buttons
}
