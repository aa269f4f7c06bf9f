//! The 2D drawing surface abstraction and its SVG implementation.
//!
//! A [`Surface`] is anything a [`Drawable`] can be replayed against. Repaints
//! replay the whole display list in insertion order, then the in-progress
//! drawable, then the tool preview ghost.

use std::fmt::Write;

use sketch_core::{Drawable, Point, Sketchpad, StrokeStyle};

/// Opacity used for the tool preview ghost.
pub const GHOST_OPACITY: f32 = 0.5;

/// A 2D drawing surface that drawables render against.
pub trait Surface {
    /// Fill the whole surface with the background color (RGBA bytes).
    fn clear(&mut self, background: [u8; 4]);

    /// Stroke a multi-point path. A single-point path renders as a dot.
    fn stroke_path(&mut self, points: &[Point], style: &StrokeStyle, opacity: f32);

    /// Draw a text glyph centered at the given position.
    fn draw_glyph(&mut self, position: Point, glyph: &str, size: f32, opacity: f32);
}

/// Replay a single drawable against a surface.
pub fn replay(surface: &mut dyn Surface, drawable: &Drawable, opacity: f32) {
    match drawable {
        Drawable::Stroke { points, style, .. } => surface.stroke_path(points, style, opacity),
        Drawable::Sticker {
            position,
            glyph,
            size,
            ..
        } => surface.draw_glyph(*position, glyph, *size, opacity),
    }
}

/// Replay the committed display list only (no preview), as export does.
pub fn render_display_list(surface: &mut dyn Surface, pad: &Sketchpad, background: [u8; 4]) {
    surface.clear(background);
    for drawable in pad.display_list() {
        replay(surface, drawable, 1.0);
    }
}

/// Full repaint: committed drawables, then the in-progress drawable, then the
/// tool preview ghost at the hover position.
pub fn render_sketchpad(surface: &mut dyn Surface, pad: &Sketchpad, background: [u8; 4]) {
    render_display_list(surface, pad, background);

    if let Some(drawable) = pad.in_progress() {
        replay(surface, drawable, 1.0);
    } else if let Some(hover) = pad.hover() {
        let ghost = pad.tool().begin_at(hover);
        replay(surface, &ghost, GHOST_OPACITY);
    }
}

/// A [`Surface`] that builds an SVG document string.
///
/// The viewBox stays in canvas coordinates; the output width/height carry the
/// scale factor, so exports at any scale render identical content.
#[derive(Debug)]
pub struct SvgSurface {
    body: String,
    width: f32,
    height: f32,
    scale: f32,
}

impl SvgSurface {
    /// Create a surface for a canvas of the given size at the given scale.
    #[must_use]
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            body: String::with_capacity(4096),
            width,
            height,
            scale,
        }
    }

    /// Output width in pixels (canvas width times scale).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn output_width(&self) -> u32 {
        ((self.width * self.scale).max(1.0)) as u32
    }

    /// Output height in pixels (canvas height times scale).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn output_height(&self) -> u32 {
        ((self.height * self.scale).max(1.0)) as u32
    }

    /// Finish the document and return the SVG XML string.
    #[must_use]
    pub fn finish(self) -> String {
        let (out_w, out_h) = (self.output_width(), self.output_height());
        let mut svg = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_w}\" height=\"{out_h}\" viewBox=\"0 0 {} {}\">",
            self.width, self.height,
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, background: [u8; 4]) {
        self.body.clear();
        let alpha = f32::from(background[3]) / 255.0;
        let _ = write!(
            self.body,
            "<rect width=\"100%\" height=\"100%\" fill=\"rgba({},{},{},{alpha})\"/>",
            background[0], background[1], background[2],
        );
    }

    fn stroke_path(&mut self, points: &[Point], style: &StrokeStyle, opacity: f32) {
        let color = escape_xml(&style.color);
        match points {
            [] => {}
            // A dot: polylines need two points to produce ink.
            [p] => {
                let radius = (style.thickness / 2.0).max(0.5);
                let _ = write!(
                    self.body,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{color}\" opacity=\"{opacity}\"/>",
                    p.x, p.y,
                );
            }
            _ => {
                let mut coords = String::with_capacity(points.len() * 12);
                for point in points {
                    let _ = write!(coords, "{},{} ", point.x, point.y);
                }
                let _ = write!(
                    self.body,
                    "<polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" opacity=\"{opacity}\"/>",
                    coords.trim_end(),
                    style.thickness,
                );
            }
        }
    }

    fn draw_glyph(&mut self, position: Point, glyph: &str, size: f32, opacity: f32) {
        let escaped = escape_xml(glyph);
        let _ = write!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"{size}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"sans-serif\" opacity=\"{opacity}\">{escaped}</text>",
            position.x, position.y,
        );
    }
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
