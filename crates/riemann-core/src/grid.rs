// File: crates/riemann-core/src/grid.rs
// Summary: Grid line layout at multiples of a frequency, and the x-axis, under the current transform.

use crate::config::{AxisConfig, GridLine};
use crate::geometry::{Axis, Vec2};
use crate::surface::{Paint, Surface};
use crate::transform::Transform;

/// Round `x` to the nearest multiple of `n`, halves rounding up.
pub fn round_to_multiple(x: f64, n: f64) -> f64 {
    (x / n + 0.5).floor() * n
}

/// Upper bound on lines per family; a denser grid is skipped rather than drawn.
pub const MAX_GRID_LINES: usize = 10_000;

/// Multiples of `frequency` from `round(low)` through `round(high)`.
/// Empty when the range holds more than [`MAX_GRID_LINES`] of them.
pub fn multiples_in(low: f64, high: f64, frequency: f64) -> Vec<f64> {
    let first = round_to_multiple(low, frequency);
    let last = round_to_multiple(high, frequency);
    let count = ((last - first) / frequency).round();
    if !(count >= 0.0) {
        return Vec::new();
    }
    if count >= MAX_GRID_LINES as f64 {
        log::debug!("skipping grid at frequency {frequency}: {count} lines in [{low}, {high}]");
        return Vec::new();
    }
    (0..=count as usize).map(|k| first + k as f64 * frequency).collect()
}

/// Real-space positions of the grid lines currently on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// Real x of each vertical line.
    pub vertical: Vec<f64>,
    /// Real y of each horizontal line.
    pub horizontal: Vec<f64>,
}

pub fn grid_lines(t: &Transform, frequency: f64) -> GridLines {
    let (x_lo, x_hi) = t.visible_range(Axis::X);
    let (y_lo, y_hi) = t.visible_range(Axis::Y);
    GridLines {
        vertical: multiples_in(x_lo, x_hi, frequency),
        horizontal: multiples_in(y_lo, y_hi, frequency),
    }
}

pub fn draw_grid(surface: &mut dyn Surface, t: &Transform, line: &GridLine) {
    let size = surface.size();
    let paint = Paint::stroke(line.colour, line.line_width);
    let lines = grid_lines(t, line.frequency);
    for x in lines.vertical {
        let px = t.to_screen(x, Axis::X);
        surface.draw_line(Vec2::new(px, 0.0), Vec2::new(px, size.y), &paint);
    }
    for y in lines.horizontal {
        let py = t.to_screen(y, Axis::Y);
        surface.draw_line(Vec2::new(0.0, py), Vec2::new(size.x, py), &paint);
    }
}

/// The horizontal axis at real y = 0, spanning the canvas width.
pub fn draw_axis(surface: &mut dyn Surface, t: &Transform, cfg: &AxisConfig) {
    let width = surface.size().x;
    let py = t.to_screen(0.0, Axis::Y);
    surface.draw_line(Vec2::new(0.0, py), Vec2::new(width, py), &Paint::stroke(cfg.colour, cfg.line_width));
}
