// File: crates/riemann-core/src/lib.rs
// Summary: Core library entry point; exports the transform, sampling, Riemann sums, grid and view API.

pub mod animate;
pub mod color;
pub mod config;
pub mod error;
pub mod function;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod partition;
pub mod plotter;
pub mod sample;
pub mod surface;
pub mod sums;
pub mod transform;
pub mod view;

pub use animate::PartitionAnimation;
pub use color::Rgba;
pub use config::PlotterConfig;
pub use error::{ColorParseError, ConfigError, InputError};
pub use function::{BuiltinFunction, PlotFunction};
pub use geometry::{Axis, Interval, Rect, Vec2};
pub use input::PlotRequest;
pub use partition::{uniform_partition, Partition};
pub use plotter::{Plotter, Scene};
pub use sample::{min_max, sample};
pub use surface::{DrawCommand, Paint, PaintStyle, RecordingSurface, Surface, TextBaseline, TextStyle};
pub use sums::{compute_sums, RiemannSums, SumEstimate, SumKind, SumRect, SumToggles};
pub use transform::Transform;
pub use view::{Interaction, PointerEvent, ViewController, ViewState};
