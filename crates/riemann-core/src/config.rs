// File: crates/riemann-core/src/config.rs
// Summary: Immutable plotter configuration (sizes, colours, grid, sums, zoom limits) with JSON loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::ConfigError;
use crate::geometry::Vec2;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 900.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 600.0;

/// One family of grid lines: a line every `frequency` real units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub frequency: f64,
    pub line_width: f64,
    pub colour: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub on: bool,
    pub lines: Vec<GridLine>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            on: true,
            lines: vec![
                GridLine { frequency: 1.0, line_width: 0.5, colour: Rgba::rgb(0x77, 0x77, 0x77) },
                GridLine { frequency: 5.0, line_width: 1.0, colour: Rgba::rgb(0x55, 0x55, 0x55) },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub on: bool,
    pub colour: Rgba,
    pub line_width: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self { on: true, colour: Rgba::BLACK, line_width: 3.0 }
    }
}

/// Stroke used for the function curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub line_width: f64,
    pub colour: Rgba,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { line_width: 2.0, colour: Rgba::BLACK }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumsConfig {
    /// Initial visibility of the upper-sum rectangles.
    pub upper: bool,
    /// Initial visibility of the lower-sum rectangles.
    pub lower: bool,
    /// Global alpha of the sum layer (rectangles and labels), never the curve.
    pub opacity: f32,
    pub border_colour: Rgba,
    pub border_width: f64,
    pub upper_colour: Rgba,
    pub lower_colour: Rgba,
    pub font_size: f64,
    /// Label text colour; `None` draws each label in its swatch colour.
    pub font_colour: Option<Rgba>,
    /// Decimal places for the estimate labels; `None` prints the full value.
    pub precision: Option<usize>,
}

impl Default for SumsConfig {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            opacity: 0.8,
            border_colour: Rgba::BLACK,
            border_width: 3.0,
            upper_colour: Rgba::rgb(0xC2, 0x23, 0x26),
            lower_colour: Rgba::rgb(0x02, 0x78, 0x78),
            font_size: 15.0,
            font_colour: None,
            precision: None,
        }
    }
}

/// Frame drawn around the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub on: bool,
    pub width: f64,
    pub colour: Rgba,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self { on: true, width: 5.0, colour: Rgba::BLACK }
    }
}

/// Everything the plotter needs that does not change while the user interacts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// Sampling step for the curve and the per-sub-interval extrema.
    pub delta: f64,
    pub size: Vec2,
    pub background: Rgba,
    pub grid: GridConfig,
    pub axis: AxisConfig,
    pub graph: GraphConfig,
    /// Starting pixels-per-unit; y is negative so up is positive.
    pub scale: Vec2,
    pub min_scale: f64,
    /// Scale change per unit of wheel delta. Lower zooms more slowly.
    pub zoom_factor: f64,
    pub sums: SumsConfig,
    pub border: BorderConfig,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            delta: 0.01,
            size: Vec2::new(WIDTH, HEIGHT),
            background: Rgba::WHITE,
            grid: GridConfig::default(),
            axis: AxisConfig::default(),
            graph: GraphConfig::default(),
            scale: Vec2::new(70.0, -70.0),
            min_scale: 10.0,
            zoom_factor: 0.08,
            sums: SumsConfig::default(),
            border: BorderConfig::default(),
        }
    }
}

impl PlotterConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_json_str(&text)?;
        log::info!("loaded plotter config from {}", path.display());
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the renderers and view controller rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if !(self.delta > 0.0 && self.delta.is_finite()) {
            return invalid(format!("delta must be positive, got {}", self.delta));
        }
        if !(self.size.x >= 1.0 && self.size.y >= 1.0) {
            return invalid(format!("size must be at least 1x1, got {}x{}", self.size.x, self.size.y));
        }
        if !(self.min_scale > 0.0) {
            return invalid(format!("min_scale must be positive, got {}", self.min_scale));
        }
        if self.scale.x < self.min_scale || -self.scale.y < self.min_scale {
            return invalid(format!(
                "scale ({}, {}) must satisfy x >= min_scale and y <= -min_scale ({})",
                self.scale.x, self.scale.y, self.min_scale
            ));
        }
        if let Some(line) = self.grid.lines.iter().find(|l| !(l.frequency > 0.0)) {
            return invalid(format!("grid frequency must be positive, got {}", line.frequency));
        }
        if !(0.0..=1.0).contains(&self.sums.opacity) {
            return invalid(format!("sums.opacity must be within [0, 1], got {}", self.sums.opacity));
        }
        Ok(())
    }
}
