//! Sketchpad state management.
//!
//! [`Sketchpad`] is the whole application state made explicit: the display
//! list, the active tool, and the in-progress drawable, passed to a render
//! function instead of living in globals.

use serde::{Deserialize, Serialize};

use crate::{
    DisplayList, Drawable, Point, PointerEvent, PointerPhase, SketchError, SketchResult, Tool,
};

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f32 = 256.0;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 256.0;

/// The complete sketchpad state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sketchpad {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Committed drawables and redo history.
    display_list: DisplayList,
    /// The active drawing tool.
    tool: Tool,
    /// Drawable under construction, rendered as a preview until committed.
    in_progress: Option<Drawable>,
    /// Last known pointer position while not drawing (tool preview ghost).
    hover: Option<Point>,
}

impl Sketchpad {
    /// Create a new empty sketchpad with the given canvas size.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidOperation`] if either dimension is not
    /// strictly positive.
    pub fn new(width: f32, height: f32) -> SketchResult<Self> {
        validate_canvas_size(width, height)?;
        Ok(Self {
            width,
            height,
            display_list: DisplayList::new(),
            tool: Tool::default(),
            in_progress: None,
            hover: None,
        })
    }

    /// Process a pointer event.
    ///
    /// - `Press` begins a new drawable for the active tool (committing any
    ///   drawable still in progress first) and discards the redo stack.
    /// - `Move` extends the in-progress stroke or repositions the pending
    ///   sticker; with nothing in progress it only records the hover position.
    /// - `Release` commits the in-progress drawable.
    /// - `Leave` commits like a release and clears the hover preview.
    ///
    /// Move events outside a press/release pair never mutate the lists.
    pub fn process_event(&mut self, event: &PointerEvent) {
        let point = event.point();
        match event.phase {
            PointerPhase::Press => {
                tracing::debug!("Press at ({}, {})", point.x, point.y);
                self.commit_in_progress();
                self.display_list.begin_history_entry();
                self.in_progress = Some(self.tool.begin_at(point));
                self.hover = None;
            }
            PointerPhase::Move => {
                if let Some(drawable) = &mut self.in_progress {
                    drawable.drag(point);
                } else {
                    self.hover = Some(point);
                }
            }
            PointerPhase::Release => {
                tracing::debug!("Release at ({}, {})", point.x, point.y);
                self.commit_in_progress();
                self.hover = Some(point);
            }
            PointerPhase::Leave => {
                tracing::debug!("Pointer left canvas");
                self.commit_in_progress();
                self.hover = None;
            }
        }
    }

    /// Commit the in-progress drawable, if any, to the display list.
    fn commit_in_progress(&mut self) {
        if let Some(drawable) = self.in_progress.take() {
            self.display_list.commit(drawable);
        }
    }

    /// Undo the most recently committed drawable.
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.display_list.undo()
    }

    /// Redo the most recently undone drawable.
    ///
    /// Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.display_list.redo()
    }

    /// Clear the canvas: empties both history stacks and drops any drawable
    /// in progress.
    pub fn clear_canvas(&mut self) {
        tracing::debug!("Clear canvas");
        self.display_list.clear();
        self.in_progress = None;
    }

    /// Select the active drawing tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The active drawing tool.
    #[must_use]
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// The committed display list.
    #[must_use]
    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// The drawable under construction, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&Drawable> {
        self.in_progress.as_ref()
    }

    /// The hover position for the tool preview ghost, if known.
    #[must_use]
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Serialize the sketchpad state to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> SketchResult<String> {
        serde_json::to_string(self).map_err(SketchError::Serialization)
    }

    /// Deserialize a sketchpad state from JSON.
    ///
    /// Snapshots are held to the same canvas-size validation as
    /// [`Sketchpad::new`].
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the snapshot carries a
    /// non-positive canvas size.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let pad: Self = serde_json::from_str(json).map_err(SketchError::Serialization)?;
        validate_canvas_size(pad.width, pad.height)?;
        Ok(pad)
    }
}

/// Reject degenerate canvas dimensions.
fn validate_canvas_size(width: f32, height: f32) -> SketchResult<()> {
    if width <= 0.0 || height <= 0.0 {
        return Err(SketchError::InvalidOperation(format!(
            "canvas size must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            display_list: DisplayList::new(),
            tool: Tool::default(),
            in_progress: None,
            hover: None,
        }
    }
}
