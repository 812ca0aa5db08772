// File: crates/chart-render/src/raster.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use anyhow::{anyhow, Result};
use chart_core::scene::{DrawCommand, TextAnchor, TextBaseline};
use chart_core::theme::{parse_hex_color, Rgba, Theme};
use chart_core::Scene;
use skia_safe as skia;
use tracing::trace;

#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Rasterize `scene` and encode it as PNG bytes.
    pub fn render_png(&self, scene: &Scene) -> Result<Vec<u8>> {
        let width = scene.width.round().max(1.0) as i32;
        let height = scene.height.round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(color(&scene.background));

        let mut font = skia::Font::default();
        for cmd in &scene.commands {
            match cmd {
                DrawCommand::Line { from, to, color: c, width } => {
                    let paint = stroke_paint(c, *width);
                    canvas.draw_line(pt(*from), pt(*to), &paint);
                }
                DrawCommand::Polyline { points, color: c, width } => {
                    let Some((first, rest)) = points.split_first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to(pt(*first));
                    for &p in rest {
                        path.line_to(pt(p));
                    }
                    canvas.draw_path(&path, &stroke_paint(c, *width));
                }
                DrawCommand::Circle { center, radius, fill } => {
                    canvas.draw_circle(pt(*center), *radius as f32, &fill_paint(fill));
                }
                DrawCommand::Rect { rect, fill } => {
                    let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
                    canvas.draw_rect(r, &fill_paint(fill));
                }
                DrawCommand::Text { pos, text, color: c, size, anchor, baseline } => {
                    font.set_size(*size as f32);
                    let paint = fill_paint(c);
                    let (advance, _) = font.measure_str(text, Some(&paint));
                    let x = match anchor {
                        TextAnchor::Start => pos.0 as f32,
                        TextAnchor::Middle => pos.0 as f32 - advance / 2.0,
                        TextAnchor::End => pos.0 as f32 - advance,
                    };
                    // approximate cap height from the font size
                    let y = match baseline {
                        TextBaseline::Alphabetic => pos.1 as f32,
                        TextBaseline::Middle => pos.1 as f32 + *size as f32 * 0.35,
                        TextBaseline::Top => pos.1 as f32 + *size as f32 * 0.8,
                    };
                    canvas.draw_str(text, (x, y), &font, &paint);
                }
            }
        }
        trace!(commands = scene.commands.len(), width, height, "scene rasterized");

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

fn pt((x, y): (f64, f64)) -> (f32, f32) {
    (x as f32, y as f32)
}

/// Parse a scene color; unparseable colors fall back to the light theme's axis color.
fn color(text: &str) -> skia::Color {
    let rgba = parse_hex_color(text)
        .or_else(|| parse_hex_color(&Theme::light().axis_line))
        .unwrap_or(Rgba { r: 0, g: 0, b: 0, a: 255 });
    skia::Color::from_argb(rgba.a, rgba.r, rgba.g, rgba.b)
}

fn stroke_paint(c: &str, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(color(c));
    paint
}

fn fill_paint(c: &str) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}
