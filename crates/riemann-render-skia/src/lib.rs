// File: crates/riemann-render-skia/src/lib.rs
// Summary: Skia renderer crate: canvas-backed drawing surface and CPU raster output.

mod render;
mod surface;

pub use render::{Rgba8Frame, SkiaRenderer};
pub use surface::SkiaSurface;
