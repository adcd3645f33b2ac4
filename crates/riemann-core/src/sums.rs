// File: crates/riemann-core/src/sums.rs
// Summary: Riemann upper/lower sums: per-sub-interval extrema, totals, layered rectangles and labels.

use crate::color::Rgba;
use crate::config::SumsConfig;
use crate::function::PlotFunction;
use crate::geometry::{Axis, Interval, Rect, Vec2};
use crate::partition::Partition;
use crate::sample::min_max;
use crate::surface::{Paint, Surface, TextBaseline, TextStyle};
use crate::transform::Transform;

/// Padding and swatch size of the estimate overlay, in pixels.
const LABEL_PADDING: f64 = 10.0;
const SWATCH_SIZE: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SumKind {
    Upper,
    Lower,
}

/// Which rectangle kinds get drawn. Totals are computed regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumToggles {
    pub upper: bool,
    pub lower: bool,
}

impl SumToggles {
    pub fn from_config(cfg: &SumsConfig) -> Self {
        Self { upper: cfg.upper, lower: cfg.lower }
    }

    pub fn is_shown(&self, kind: SumKind) -> bool {
        match kind {
            SumKind::Upper => self.upper,
            SumKind::Lower => self.lower,
        }
    }

    pub fn set(&mut self, kind: SumKind, shown: bool) {
        match kind {
            SumKind::Upper => self.upper = shown,
            SumKind::Lower => self.lower = shown,
        }
    }

    pub fn toggle(&mut self, kind: SumKind) {
        self.set(kind, !self.is_shown(kind));
    }
}

/// One bar from the x-axis up (or down) to `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SumRect {
    pub interval: Interval,
    pub height: f64,
    pub kind: SumKind,
    pub colour: Rgba,
}

impl SumRect {
    /// Screen-space geometry under `t`.
    pub fn screen_rect(&self, t: &Transform) -> Rect {
        Rect::from_ltrb(
            t.to_screen(self.interval.start, Axis::X),
            t.to_screen(0.0, Axis::Y),
            t.to_screen(self.interval.end, Axis::X),
            t.to_screen(self.height, Axis::Y),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SumEstimate {
    pub lower: f64,
    pub upper: f64,
}

/// Extrema of one sub-interval and its rectangles in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub interval: Interval,
    pub min: f64,
    pub max: f64,
    pub rects: Vec<SumRect>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RiemannSums {
    pub estimate: SumEstimate,
    pub cells: Vec<Cell>,
}

/// Rectangles for one sub-interval in the order they must be painted.
///
/// Upper goes first so the shorter lower bar stays visible on top. When `max < 0`
/// both bars hang below the axis and the upper one is the shorter, so the order flips.
pub fn draw_order(
    interval: Interval,
    min: f64,
    max: f64,
    toggles: SumToggles,
    cfg: &SumsConfig,
) -> Vec<SumRect> {
    let mut rects = Vec::with_capacity(2);
    if toggles.upper {
        rects.push(SumRect { interval, height: max, kind: SumKind::Upper, colour: cfg.upper_colour });
    }
    if toggles.lower {
        rects.push(SumRect { interval, height: min, kind: SumKind::Lower, colour: cfg.lower_colour });
    }
    if max < 0.0 {
        rects.reverse();
    }
    rects
}

/// Full recomputation of both sums over `partition`, sampling each sub-interval at `f.delta()`.
pub fn compute_sums(
    f: &PlotFunction,
    partition: &Partition,
    toggles: SumToggles,
    cfg: &SumsConfig,
) -> RiemannSums {
    let mut estimate = SumEstimate::default();
    let mut cells = Vec::with_capacity(partition.len());
    for interval in partition.subintervals() {
        let (min, max) = min_max(f.evaluator(), interval, f.delta());
        estimate.lower += min * interval.width();
        estimate.upper += max * interval.width();
        let rects = draw_order(interval, min, max, toggles, cfg);
        cells.push(Cell { interval, min, max, rects });
    }
    log::debug!(
        "sums over {} sub-intervals: lower={} upper={}",
        cells.len(),
        estimate.lower,
        estimate.upper
    );
    RiemannSums { estimate, cells }
}

/// Paint every rectangle: fill first, then its outline with the same geometry.
/// Alpha is left to the caller so the rectangles and labels share one setting.
pub fn draw_sum_rects(surface: &mut dyn Surface, t: &Transform, sums: &RiemannSums, cfg: &SumsConfig) {
    let border = Paint::stroke(cfg.border_colour, cfg.border_width);
    for rect in sums.cells.iter().flat_map(|c| c.rects.iter()) {
        let geom = rect.screen_rect(t);
        surface.draw_rect(geom, &Paint::fill(rect.colour));
        surface.draw_rect(geom, &border);
    }
}

pub fn format_estimate(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("≈ {value:.p$}"),
        None => format!("≈ {value}"),
    }
}

/// Estimate labels in fixed screen space: a swatch then "≈ value", lower first.
pub fn draw_sum_labels(surface: &mut dyn Surface, estimate: &SumEstimate, cfg: &SumsConfig) {
    let rows = [(cfg.lower_colour, estimate.lower), (cfg.upper_colour, estimate.upper)];
    for (i, (colour, value)) in rows.into_iter().enumerate() {
        let i = i as f64;
        let top = (i + 1.0) * LABEL_PADDING + i * SWATCH_SIZE;
        let swatch = Rect::from_origin_extent(LABEL_PADDING, top, SWATCH_SIZE, SWATCH_SIZE);
        surface.draw_rect(swatch, &Paint::fill(colour));
        let at = Vec2::new(2.0 * LABEL_PADDING + SWATCH_SIZE, top + 0.5 * SWATCH_SIZE);
        let style = TextStyle {
            size: cfg.font_size,
            colour: cfg.font_colour.unwrap_or(colour),
            baseline: TextBaseline::Middle,
        };
        surface.draw_text(&format_estimate(value, cfg.precision), at, &style);
    }
}
