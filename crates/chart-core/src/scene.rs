// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral draw commands produced by the layout engine.

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: (f64, f64), to: (f64, f64), color: String, width: f64 },
    Polyline { points: Vec<(f64, f64)>, color: String, width: f64 },
    Circle { center: (f64, f64), radius: f64, fill: String },
    Rect { rect: Rect, fill: String },
    Text {
        pos: (f64, f64),
        text: String,
        color: String,
        size: f64,
        anchor: TextAnchor,
        baseline: TextBaseline,
    },
}

/// One full frame. Renderers clear to `background` and then replay `commands` in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub font_family: String,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: impl Into<String>, font_family: impl Into<String>) -> Self {
        Self { width, height, background: background.into(), font_family: font_family.into(), commands: Vec::new() }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &str)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, fill } => Some((rect, fill.as_str())),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
