//! Sketchpad configuration.

use crate::shapes::SerializableColor;
use crate::sticker::{DEFAULT_STICKER_FONT, Sticker, StickerCatalog};
use crate::tools::{THICK_WIDTH, THIN_WIDTH};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Export settings for the offscreen image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    /// Multiplier applied to surface coordinates.
    pub scale: f64,
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            scale: 4.0,
            file_name: "drawing-export.png".to_string(),
        }
    }
}

/// Sketchpad configuration. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub thin_width: f64,
    pub thick_width: f64,
    /// Marker width before any tool is picked.
    pub default_width: f64,
    pub stroke_color: SerializableColor,
    pub sticker_font: String,
    pub stickers: Vec<Sticker>,
    pub export: ExportConfig,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            title: "D2 Sketchpad".to_string(),
            canvas_width: 256,
            canvas_height: 256,
            thin_width: THIN_WIDTH,
            thick_width: THICK_WIDTH,
            default_width: THIN_WIDTH,
            stroke_color: SerializableColor::black(),
            sticker_font: DEFAULT_STICKER_FONT.to_string(),
            stickers: StickerCatalog::builtin(),
            export: ExportConfig::default(),
        }
    }
}

impl SketchpadConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that sizes are usable and sticker names are unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, width) in [
            ("thin_width", self.thin_width),
            ("thick_width", self.thick_width),
            ("default_width", self.default_width),
        ] {
            if !(width.is_finite() && width > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, width)));
            }
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid("canvas size must be non-zero".to_string()));
        }
        if self.export.width == 0 || self.export.height == 0 {
            return Err(ConfigError::Invalid("export size must be non-zero".to_string()));
        }
        if !(self.export.scale.is_finite() && self.export.scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "export scale must be positive, got {}",
                self.export.scale
            )));
        }

        let mut seen = HashSet::new();
        for sticker in &self.stickers {
            if sticker.name.is_empty() || sticker.text.is_empty() {
                return Err(ConfigError::Invalid("stickers need a name and text".to_string()));
            }
            if !seen.insert(sticker.name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate sticker name {:?}", sticker.name)));
            }
        }
        Ok(())
    }

    /// Build the sticker catalog described by this config.
    pub fn catalog(&self) -> StickerCatalog {
        let mut catalog = StickerCatalog::new(self.stickers.clone());
        catalog.set_custom_font(self.sticker_font.clone());
        catalog
    }
}
