//! Pointer events driving the sketchpad.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Pointer pressed (button down).
    Press,
    /// Pointer moved.
    Move,
    /// Pointer released (button up).
    Release,
    /// Pointer left the canvas.
    Leave,
}

/// A pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: PointerPhase,
    /// X position in canvas coordinates.
    pub x: f32,
    /// Y position in canvas coordinates.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    /// Shorthand for a press event.
    #[must_use]
    pub const fn press(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Press, x, y)
    }

    /// Shorthand for a move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// Shorthand for a release event.
    #[must_use]
    pub const fn release(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Release, x, y)
    }

    /// Shorthand for a leave event.
    #[must_use]
    pub const fn leave(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Leave, x, y)
    }

    /// The event position as a [`Point`].
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_json_round_trip() {
        let event = PointerEvent::press(12.5, 34.0);
        let json = serde_json::to_string(&event).expect("serialize");
        let back: PointerEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(event, back);
        assert_eq!(back.phase, PointerPhase::Press);
    }
}
