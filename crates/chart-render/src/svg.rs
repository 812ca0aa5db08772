// File: crates/chart-render/src/svg.rs
// Summary: SVG backend. One element per draw command, in scene order.

use std::fmt::{self, Write};

use chart_core::scene::{DrawCommand, TextAnchor, TextBaseline};
use chart_core::Scene;

#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full document.
    pub fn render(&self, scene: &Scene) -> String {
        let mut svg = String::new();
        // fmt::Write for String never fails
        let _ = self.write_to(&mut svg, scene);
        svg
    }

    pub fn write_to<W: Write>(&self, svg: &mut W, scene: &Scene) -> fmt::Result {
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}" font-family="{}">"#,
            scene.width,
            scene.height,
            scene.width,
            scene.height,
            escape_xml(&scene.font_family)
        )?;
        writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, escape_xml(&scene.background))?;

        for cmd in &scene.commands {
            match cmd {
                DrawCommand::Line { from, to, color, width } => writeln!(
                    svg,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}"/>"#,
                    from.0,
                    from.1,
                    to.0,
                    to.1,
                    escape_xml(color),
                    width
                )?,
                DrawCommand::Polyline { points, color, width } => {
                    let pts = points
                        .iter()
                        .map(|(x, y)| format!("{x:.2},{y:.2}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(
                        svg,
                        r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.2}" stroke-linejoin="round"/>"#,
                        pts,
                        escape_xml(color),
                        width
                    )?
                }
                DrawCommand::Circle { center, radius, fill } => writeln!(
                    svg,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                    center.0,
                    center.1,
                    radius,
                    escape_xml(fill)
                )?,
                DrawCommand::Rect { rect, fill } => writeln!(
                    svg,
                    r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    escape_xml(fill)
                )?,
                DrawCommand::Text { pos, text, color, size, anchor, baseline } => writeln!(
                    svg,
                    r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="{}" font-size="{:.2}" fill="{}">{}</text>"#,
                    pos.0,
                    pos.1,
                    anchor_attr(*anchor),
                    baseline_attr(*baseline),
                    size,
                    escape_xml(color),
                    escape_xml(text)
                )?,
            }
        }

        writeln!(svg, "</svg>")
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn baseline_attr(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "hanging",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
