//! Sticker definitions and the catalog they are registered in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Font used for stickers unless configured otherwise.
pub const DEFAULT_STICKER_FONT: &str = "24px Arial";

/// Horizontal text alignment, mirroring the canvas `textAlign` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    #[default]
    Center,
    Start,
    End,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Start => "start",
            TextAlign::End => "end",
        }
    }
}

/// Vertical text anchoring, mirroring the canvas `textBaseline` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    #[default]
    Middle,
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Ideographic => "ideographic",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// A named glyph that can be stamped onto the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    /// Unique key within a catalog.
    pub name: String,
    /// Glyph text drawn on the surface.
    pub text: String,
    /// CSS font shorthand.
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default)]
    pub baseline: TextBaseline,
}

fn default_font() -> String {
    DEFAULT_STICKER_FONT.to_string()
}

impl Sticker {
    /// A centred sticker using the default font.
    pub fn emoji(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            font: default_font(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        }
    }

    /// Pixel size parsed from the font string (e.g. `24` for `"24px Arial"`).
    ///
    /// Falls back to 24 when the font has no `px` size.
    pub fn font_size(&self) -> f64 {
        self.font
            .split_whitespace()
            .find_map(|part| part.strip_suffix("px"))
            .and_then(|size| size.parse::<f64>().ok())
            .unwrap_or(24.0)
    }
}

/// Catalog errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Sticker text is empty")]
    EmptyGlyph,
    #[error("Unknown sticker: {0}")]
    UnknownSticker(String),
    #[error("Duplicate sticker name: {0}")]
    DuplicateName(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Ordered set of sticker definitions, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerCatalog {
    stickers: Vec<Sticker>,
    /// Font applied to stickers registered at runtime.
    custom_font: String,
}

impl Default for StickerCatalog {
    fn default() -> Self {
        Self::new(Self::builtin())
    }
}

impl StickerCatalog {
    /// Create a catalog from an initial list. Later duplicates of a name are dropped.
    pub fn new(stickers: Vec<Sticker>) -> Self {
        let mut catalog = Self {
            stickers: Vec::with_capacity(stickers.len()),
            custom_font: default_font(),
        };
        for sticker in stickers {
            if let Err(e) = catalog.insert(sticker) {
                log::warn!("Skipping sticker: {}", e);
            }
        }
        catalog
    }

    /// The stickers every sketchpad starts with.
    pub fn builtin() -> Vec<Sticker> {
        vec![
            Sticker::emoji("skull", "💀"),
            Sticker::emoji("pumpkin", "🎃"),
            Sticker::emoji("ghost", "👻"),
        ]
    }

    /// Set the font used for stickers registered with [`register_custom`](Self::register_custom).
    pub fn set_custom_font(&mut self, font: impl Into<String>) {
        self.custom_font = font.into();
    }

    /// Add a definition under its own name.
    pub fn insert(&mut self, sticker: Sticker) -> CatalogResult<&Sticker> {
        if sticker.text.trim().is_empty() {
            return Err(CatalogError::EmptyGlyph);
        }
        if self.contains(&sticker.name) {
            return Err(CatalogError::DuplicateName(sticker.name));
        }
        self.stickers.push(sticker);
        Ok(&self.stickers[self.stickers.len() - 1])
    }

    /// Register a user-supplied glyph. The glyph doubles as the name; if the
    /// name is taken a ` (n)` suffix is appended.
    pub fn register_custom(&mut self, input: &str) -> CatalogResult<&Sticker> {
        let text = input.trim();
        if text.is_empty() {
            return Err(CatalogError::EmptyGlyph);
        }

        let name = self.unique_name(text);
        let sticker = Sticker {
            name,
            text: text.to_string(),
            font: self.custom_font.clone(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        };
        log::info!("Registered custom sticker {:?}", sticker.name);
        self.insert(sticker)
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{} ({})", base, n))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Look up a sticker by name.
    pub fn get(&self, name: &str) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.name == name)
    }

    /// Look up a sticker by name, failing for unknown names.
    pub fn require(&self, name: &str) -> CatalogResult<&Sticker> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownSticker(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Stickers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Sticker> {
        self.stickers.iter()
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = StickerCatalog::default();
        let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["skull", "pumpkin", "ghost"]);
        assert_eq!(catalog.get("pumpkin").map(|s| s.text.as_str()), Some("🎃"));
    }

    #[test]
    fn test_register_custom() {
        let mut catalog = StickerCatalog::default();
        let sticker = catalog.register_custom("⭐").unwrap();
        assert_eq!(sticker.name, "⭐");
        assert_eq!(sticker.text, "⭐");
        assert_eq!(sticker.font, DEFAULT_STICKER_FONT);
        assert_eq!(sticker.align, TextAlign::Center);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_register_custom_makes_names_unique() {
        let mut catalog = StickerCatalog::default();
        catalog.register_custom("hi").unwrap();
        assert_eq!(catalog.register_custom("hi").unwrap().name, "hi (2)");
        assert_eq!(catalog.register_custom("hi").unwrap().name, "hi (3)");
        assert_eq!(catalog.register_custom("skull").unwrap().name, "skull (2)");
    }

    #[test]
    fn test_register_custom_rejects_blank() {
        let mut catalog = StickerCatalog::default();
        assert_eq!(catalog.register_custom("   "), Err(CatalogError::EmptyGlyph));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_require_unknown() {
        let catalog = StickerCatalog::default();
        assert_eq!(
            catalog.require("unicorn"),
            Err(CatalogError::UnknownSticker("unicorn".to_string()))
        );
    }

    #[test]
    fn test_new_drops_duplicates() {
        let catalog = StickerCatalog::new(vec![
            Sticker::emoji("a", "A"),
            Sticker::emoji("a", "B"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").map(|s| s.text.as_str()), Some("A"));
    }

    #[test]
    fn test_font_size() {
        let mut sticker = Sticker::emoji("x", "x");
        assert_eq!(sticker.font_size(), 24.0);
        sticker.font = "bold 40px serif".to_string();
        assert_eq!(sticker.font_size(), 40.0);
        sticker.font = "large serif".to_string();
        assert_eq!(sticker.font_size(), 24.0);
    }
}
