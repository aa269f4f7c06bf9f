//! Drawing tools: markers and stickers.

use serde::{Deserialize, Serialize};

use crate::{Drawable, Point, SketchError, SketchResult, StrokeStyle};

/// Default sticker glyph size in pixels.
pub const DEFAULT_STICKER_SIZE: f32 = 24.0;

/// The currently selected drawing tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "data")]
pub enum Tool {
    /// Freehand marker with the given stroke attributes.
    Marker(StrokeStyle),

    /// Emoji sticker stamp.
    Sticker {
        /// The glyph to stamp (any non-empty string).
        glyph: String,
        /// Glyph size in pixels.
        size: f32,
    },
}

impl Tool {
    /// The thin marker tool.
    #[must_use]
    pub fn thin_marker() -> Self {
        Self::Marker(StrokeStyle::thin())
    }

    /// The thick marker tool.
    #[must_use]
    pub fn thick_marker() -> Self {
        Self::Marker(StrokeStyle::thick())
    }

    /// A sticker tool for the given glyph.
    ///
    /// Custom glyphs are accepted as arbitrary strings so user-supplied emoji
    /// work; only empty input is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidGlyph`] if the glyph is empty or
    /// whitespace-only.
    pub fn sticker(glyph: impl Into<String>) -> SketchResult<Self> {
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            return Err(SketchError::InvalidGlyph(glyph));
        }
        Ok(Self::Sticker {
            glyph,
            size: DEFAULT_STICKER_SIZE,
        })
    }

    /// Begin a new drawable for this tool at the given point.
    #[must_use]
    pub fn begin_at(&self, point: Point) -> Drawable {
        match self {
            Self::Marker(style) => Drawable::stroke_at(point, style.clone()),
            Self::Sticker { glyph, size } => Drawable::sticker_at(point, glyph.clone(), *size),
        }
    }
}

impl Default for Tool {
    fn default() -> Self {
        Self::thin_marker()
    }
}
