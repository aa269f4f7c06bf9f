//! Integration tests for sketchpad export (sketch-renderer).
//!
//! Covers the scaled hi-res export, preview exclusion, and larger display
//! lists.

use sketch_core::{PointerEvent, Sketchpad, Tool};
use sketch_renderer::{ExportConfig, ExportFormat, SketchExporter};

/// Draw a committed stroke from one corner to another.
fn draw_stroke(pad: &mut Sketchpad, from: (f32, f32), to: (f32, f32)) {
    pad.process_event(&PointerEvent::press(from.0, from.1));
    pad.process_event(&PointerEvent::moved(to.0, to.1));
    pad.process_event(&PointerEvent::release(to.0, to.1));
}

/// Decode a PNG and count pixels that differ from the white background.
fn ink_pixel_count(png: &[u8]) -> usize {
    let decoded = image::load_from_memory(png).expect("decode png").to_rgba8();
    decoded
        .pixels()
        .filter(|p| p.0[0] != 255 || p.0[1] != 255 || p.0[2] != 255)
        .count()
}

/// Read the width/height out of a PNG IHDR chunk.
fn png_dimensions(png: &[u8]) -> (u32, u32) {
    assert!(png.len() > 24, "PNG too short");
    assert_eq!(&png[0..4], &[137, 80, 78, 71], "not a PNG");
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (width, height)
}

#[test]
fn test_hi_res_png_is_4x_canvas_size() {
    let mut pad = Sketchpad::default();
    draw_stroke(&mut pad, (10.0, 10.0), (200.0, 200.0));

    let exporter = SketchExporter::new(ExportConfig::hi_res());
    let png = exporter.render_to_png(&pad).expect("png");
    assert_eq!(png_dimensions(&png), (1024, 1024));
}

#[test]
fn test_scaled_export_has_same_content() {
    let mut pad = Sketchpad::default();
    draw_stroke(&mut pad, (10.0, 10.0), (50.0, 120.0));
    pad.set_tool(Tool::sticker("🎨").expect("glyph"));
    pad.process_event(&PointerEvent::press(150.0, 150.0));
    pad.process_event(&PointerEvent::release(150.0, 150.0));

    let at_1x = SketchExporter::with_defaults().render_to_svg(&pad);
    let at_4x = SketchExporter::new(ExportConfig::hi_res()).render_to_svg(&pad);

    // Only the svg header (output size) differs; every drawn element is
    // identical because the viewBox stays in canvas coordinates.
    let body_1x = at_1x.split_once('>').expect("header").1;
    let body_4x = at_4x.split_once('>').expect("header").1;
    assert_eq!(body_1x, body_4x);
    assert!(at_1x.contains("width=\"256\""));
    assert!(at_4x.contains("width=\"1024\""));
}

#[test]
fn test_stroke_leaves_ink_in_png() {
    let mut pad = Sketchpad::default();
    pad.set_tool(Tool::thick_marker());
    draw_stroke(&mut pad, (10.0, 10.0), (200.0, 200.0));

    let png = SketchExporter::with_defaults().render_to_png(&pad).expect("png");
    assert!(
        ink_pixel_count(&png) > 0,
        "stroke rendered no ink: PNG is entirely background"
    );
}

#[test]
fn test_sticker_glyph_leaves_ink_in_png() {
    let mut pad = Sketchpad::default();
    pad.set_tool(Tool::sticker("X").expect("glyph"));
    pad.process_event(&PointerEvent::press(128.0, 128.0));
    pad.process_event(&PointerEvent::release(128.0, 128.0));
    assert_eq!(pad.display_list().len(), 1);

    let png = SketchExporter::with_defaults().render_to_png(&pad).expect("png");
    assert!(
        ink_pixel_count(&png) > 0,
        "sticker glyph rendered no ink: PNG is entirely background"
    );
}

#[test]
fn test_empty_sketchpad_png_has_no_ink() {
    let png = SketchExporter::with_defaults()
        .render_to_png(&Sketchpad::default())
        .expect("png");
    assert_eq!(ink_pixel_count(&png), 0);
}

#[test]
fn test_export_excludes_preview() {
    let mut pad = Sketchpad::default();
    draw_stroke(&mut pad, (10.0, 10.0), (20.0, 20.0));
    // Leave a second stroke in progress.
    pad.process_event(&PointerEvent::press(100.0, 100.0));
    pad.process_event(&PointerEvent::moved(110.0, 110.0));

    let svg = SketchExporter::with_defaults().render_to_svg(&pad);
    assert!(svg.contains("10,10 20,20"));
    assert!(!svg.contains("100,100"));
}

#[test]
fn test_export_reflects_undo() {
    let mut pad = Sketchpad::default();
    draw_stroke(&mut pad, (10.0, 10.0), (20.0, 20.0));
    draw_stroke(&mut pad, (30.0, 30.0), (40.0, 40.0));

    pad.undo();
    let svg = SketchExporter::with_defaults().render_to_svg(&pad);
    assert!(svg.contains("10,10 20,20"));
    assert!(!svg.contains("30,30 40,40"));

    pad.redo();
    let svg = SketchExporter::with_defaults().render_to_svg(&pad);
    assert!(svg.contains("30,30 40,40"));
}

#[test]
fn test_large_display_list_png_export() {
    let mut pad = Sketchpad::default();
    for i in 0..100 {
        let offset = (i as f32) * 2.0;
        draw_stroke(&mut pad, (offset, 0.0), (offset, 256.0));
    }
    assert_eq!(pad.display_list().len(), 100);

    let exporter = SketchExporter::with_defaults();
    let png = exporter.render_to_png(&pad).expect("png");
    assert_eq!(&png[0..4], &[137, 80, 78, 71]);
    assert!(png.len() > 1000, "Expected > 1KB, got {} bytes", png.len());
}

#[test]
fn test_mixed_content_export_all_formats() {
    let mut pad = Sketchpad::default();
    pad.set_tool(Tool::thick_marker());
    draw_stroke(&mut pad, (10.0, 10.0), (200.0, 30.0));
    pad.set_tool(Tool::sticker("🚀").expect("glyph"));
    pad.process_event(&PointerEvent::press(128.0, 128.0));
    pad.process_event(&PointerEvent::release(128.0, 128.0));

    let exporter = SketchExporter::with_defaults();
    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Svg] {
        let bytes = exporter.export(&pad, format).expect("export");
        assert!(!bytes.is_empty(), "{format:?} export was empty");
    }
}
