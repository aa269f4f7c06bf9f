//! Sketchpad export to image formats.
//!
//! Renders the committed display list to PNG, JPEG, or SVG using an SVG
//! intermediate representation and the resvg/tiny-skia rasterization
//! pipeline. The in-progress drawable and tool preview are never exported.

use std::sync::{Arc, OnceLock};

use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use sketch_core::Sketchpad;

use crate::error::{RenderError, RenderResult};
use crate::surface::{render_display_list, SvgSurface};

/// The scale the sketchpad's hi-res PNG export uses (256 → 1024).
pub const HI_RES_EXPORT_SCALE: f32 = 4.0;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// SVG vector graphics (returns the SVG XML string as UTF-8 bytes).
    Svg,
}

/// Configuration for sketchpad export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Scale factor applied to the canvas size (e.g. 4.0 for the hi-res PNG).
    pub scale: f32,
    /// Background color as RGBA bytes.
    pub background: [u8; 4],
    /// JPEG quality 1-100.
    pub jpeg_quality: u8,
}

impl ExportConfig {
    /// Configuration for the 4x hi-res export.
    #[must_use]
    pub fn hi_res() -> Self {
        Self {
            scale: HI_RES_EXPORT_SCALE,
            ..Self::default()
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: [255, 255, 255, 255],
            jpeg_quality: 85,
        }
    }
}

/// Exports a [`Sketchpad`] to image formats.
pub struct SketchExporter {
    config: ExportConfig,
}

impl SketchExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export a sketchpad to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the display list cannot be rendered or encoded.
    pub fn export(&self, pad: &Sketchpad, format: ExportFormat) -> RenderResult<Vec<u8>> {
        match format {
            ExportFormat::Png => self.render_to_png(pad),
            ExportFormat::Jpeg => self.render_to_jpeg(pad),
            ExportFormat::Svg => Ok(self.render_to_svg(pad).into_bytes()),
        }
    }

    /// Render the committed display list to an SVG string.
    #[must_use]
    pub fn render_to_svg(&self, pad: &Sketchpad) -> String {
        let mut surface = SvgSurface::new(pad.width, pad.height, self.config.scale);
        render_display_list(&mut surface, pad, self.config.background);
        surface.finish()
    }

    /// Render the committed display list to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    pub fn render_to_png(&self, pad: &Sketchpad) -> RenderResult<Vec<u8>> {
        let svg = self.render_to_svg(pad);
        let pixmap = rasterize_svg(&svg)?;
        tracing::debug!(
            "Rasterized {}x{} pixmap for PNG export",
            pixmap.width(),
            pixmap.height()
        );

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Render the committed display list to JPEG bytes.
    ///
    /// JPEG has no alpha channel, so the pixmap is composited over the
    /// configured background first.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_to_jpeg(&self, pad: &Sketchpad) -> RenderResult<Vec<u8>> {
        let svg = self.render_to_svg(pad);
        let pixmap = rasterize_svg(&svg)?;

        let (width, height) = (pixmap.width(), pixmap.height());
        let bg = &self.config.background;
        let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in pixmap.data().chunks_exact(4) {
            let alpha = f32::from(pixel[3]) / 255.0;
            let inv = 1.0 - alpha;
            rgb_data.push((f32::from(pixel[0]).mul_add(alpha, f32::from(bg[0]) * inv)) as u8);
            rgb_data.push((f32::from(pixel[1]).mul_add(alpha, f32::from(bg[1]) * inv)) as u8);
            rgb_data.push((f32::from(pixel[2]).mul_add(alpha, f32::from(bg[2]) * inv)) as u8);
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, self.config.jpeg_quality);
        encoder
            .write_image(&rgb_data, width, height, image::ColorType::Rgb8.into())
            .map_err(|e| RenderError::Export(format!("JPEG encoding failed: {e}")))?;

        Ok(buf.into_inner())
    }
}

/// System font database used to shape sticker glyphs, loaded once.
///
/// Without fonts, the `<text>` elements stickers render as would be dropped
/// during rasterization and every PNG/JPEG export would silently lose them.
/// When the host has no fonts at all, exports still succeed with stroke
/// content only and a warning is logged.
fn sticker_fonts() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            if db.faces().next().is_none() {
                tracing::warn!("No system fonts found; sticker glyphs will not rasterize");
            } else {
                tracing::debug!("Loaded {} font faces for glyph shaping", db.len());
            }
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG string to a tiny-skia pixmap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rasterize_svg(svg: &str) -> RenderResult<tiny_skia::Pixmap> {
    let opt = usvg::Options {
        fontdb: sticker_fonts(),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| RenderError::Export(format!("SVG parsing failed: {e}")))?;

    let px_w = tree.size().width() as u32;
    let px_h = tree.size().height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
        .ok_or_else(|| RenderError::Surface("Failed to create pixmap".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(pixmap)
}
