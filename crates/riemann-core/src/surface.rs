// File: crates/riemann-core/src/surface.rs
// Summary: Drawing-surface trait the renderers call into, plus a recording implementation.

use crate::color::Rgba;
use crate::geometry::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub colour: Rgba,
    pub style: PaintStyle,
}

impl Paint {
    pub const fn fill(colour: Rgba) -> Self {
        Self { colour, style: PaintStyle::Fill }
    }

    pub const fn stroke(colour: Rgba, width: f64) -> Self {
        Self { colour, style: PaintStyle::Stroke { width } }
    }
}

/// Vertical anchoring of text relative to the `at` point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// Centre of the ink box on `at.y`.
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub colour: Rgba,
    pub baseline: TextBaseline,
}

/// Immediate-mode 2D target in pixel coordinates.
///
/// `set_alpha` is a global multiplier on everything drawn afterwards, like a canvas
/// `globalAlpha`; it stays in effect until set again.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self, rect: Rect, colour: Rgba);
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
    fn draw_line(&mut self, from: Vec2, to: Vec2, paint: &Paint);
    /// Open polyline when stroked, closed polygon when filled.
    fn draw_path(&mut self, points: &[Vec2], paint: &Paint);
    fn draw_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
    fn set_alpha(&mut self, alpha: f32);
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { rect: Rect, colour: Rgba },
    Rect { rect: Rect, paint: Paint },
    Line { from: Vec2, to: Vec2, paint: Paint },
    Path { points: Vec<Vec2>, paint: Paint },
    Text { text: String, at: Vec2, style: TextStyle },
    Alpha(f32),
}

/// Display-list surface: stores every call in order instead of rasterizing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self { size, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Replay the recorded calls onto another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Clear { rect, colour } => target.clear(*rect, *colour),
                DrawCommand::Rect { rect, paint } => target.draw_rect(*rect, paint),
                DrawCommand::Line { from, to, paint } => target.draw_line(*from, *to, paint),
                DrawCommand::Path { points, paint } => target.draw_path(points, paint),
                DrawCommand::Text { text, at, style } => target.draw_text(text, *at, style),
                DrawCommand::Alpha(a) => target.set_alpha(*a),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, rect: Rect, colour: Rgba) {
        self.commands.push(DrawCommand::Clear { rect, colour });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::Rect { rect, paint: *paint });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, paint: &Paint) {
        self.commands.push(DrawCommand::Line { from, to, paint: *paint });
    }

    fn draw_path(&mut self, points: &[Vec2], paint: &Paint) {
        self.commands.push(DrawCommand::Path { points: points.to_vec(), paint: *paint });
    }

    fn draw_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }
}
