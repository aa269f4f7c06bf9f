//! Drawables - the replayable draw commands recorded in the display list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableId(Uuid);

impl DrawableId {
    /// Create a new unique drawable ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position (pixels from left).
    pub x: f32,
    /// Y position (pixels from top).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Marker stroke attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Line thickness in pixels.
    pub thickness: f32,
    /// Stroke color as hex (e.g. `#000000`).
    pub color: String,
}

impl StrokeStyle {
    /// The thin marker preset.
    #[must_use]
    pub fn thin() -> Self {
        Self {
            thickness: 1.0,
            color: "#000000".to_string(),
        }
    }

    /// The thick marker preset.
    #[must_use]
    pub fn thick() -> Self {
        Self {
            thickness: 5.0,
            color: "#000000".to_string(),
        }
    }

    /// Set the stroke color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::thin()
    }
}

/// A replayable draw command.
///
/// Strokes accumulate points while the pointer is dragged; stickers are a
/// single position that dragging replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Drawable {
    /// A freehand marker stroke: an ordered multi-point path.
    Stroke {
        /// Unique identifier.
        id: DrawableId,
        /// Path points in drag order.
        points: Vec<Point>,
        /// Marker attributes.
        style: StrokeStyle,
    },

    /// An emoji sticker stamped at a single position.
    Sticker {
        /// Unique identifier.
        id: DrawableId,
        /// Center position on the canvas.
        position: Point,
        /// The emoji glyph (any non-empty string).
        glyph: String,
        /// Glyph size in pixels.
        size: f32,
    },
}

impl Drawable {
    /// Begin a new stroke at the given point.
    #[must_use]
    pub fn stroke_at(point: Point, style: StrokeStyle) -> Self {
        Self::Stroke {
            id: DrawableId::new(),
            points: vec![point],
            style,
        }
    }

    /// Place a new sticker at the given point.
    #[must_use]
    pub fn sticker_at(point: Point, glyph: impl Into<String>, size: f32) -> Self {
        Self::Sticker {
            id: DrawableId::new(),
            position: point,
            glyph: glyph.into(),
            size,
        }
    }

    /// Get the drawable's unique identifier.
    #[must_use]
    pub const fn id(&self) -> DrawableId {
        match self {
            Self::Stroke { id, .. } | Self::Sticker { id, .. } => *id,
        }
    }

    /// Extend the drawable to the given point.
    ///
    /// Strokes append the point to their path; stickers are repositioned
    /// (dragging never accumulates points).
    pub fn drag(&mut self, point: Point) {
        match self {
            Self::Stroke { points, .. } => points.push(point),
            Self::Sticker { position, .. } => *position = point,
        }
    }

    /// Number of recorded points (always 1 for stickers).
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Stroke { points, .. } => points.len(),
            Self::Sticker { .. } => 1,
        }
    }
}
