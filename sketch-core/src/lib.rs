//! # Sketch Core
//!
//! Core logic for the sticker sketchpad: user input is recorded as replayable
//! draw commands in a display list instead of being painted directly into a
//! pixel buffer. That indirection is what makes non-destructive undo/redo and
//! preview-before-commit possible.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                sketch-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Display List    │  Input Handler           │
//! │  - Drawables     │  - Pointer events        │
//! │  - Redo stack    │  - Stroke sessions       │
//! │  - Linear undo   │  - Sticker dragging      │
//! ├─────────────────────────────────────────────┤
//! │  Tools           │  Sketchpad State         │
//! │  - Marker styles │  - In-progress preview   │
//! │  - Stickers      │  - JSON snapshots        │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod display_list;
pub mod drawable;
pub mod error;
pub mod event;
pub mod state;
pub mod tool;

pub use display_list::DisplayList;
pub use drawable::{Drawable, DrawableId, Point, StrokeStyle};
pub use error::{SketchError, SketchResult};
pub use event::{PointerEvent, PointerPhase};
pub use state::Sketchpad;
pub use tool::Tool;

/// Sketch core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
