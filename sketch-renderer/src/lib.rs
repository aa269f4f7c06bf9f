//! # Sketch Renderer
//!
//! Replays a [`sketch_core`] display list against a 2D drawing surface and
//! exports the result as PNG, JPEG, or SVG.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Surface Trait                  │
//! ├─────────────────────────────────────────────┤
//! │ SvgSurface (SVG document string)            │
//! └──────────────────┬──────────────────────────┘
//!                    │ usvg / resvg
//!                    ▼
//!            tiny-skia Pixmap ──► PNG / JPEG
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;
pub mod surface;

pub use error::{RenderError, RenderResult};
pub use export::{ExportConfig, ExportFormat, SketchExporter, HI_RES_EXPORT_SCALE};
pub use surface::{render_display_list, render_sketchpad, Surface, SvgSurface};
