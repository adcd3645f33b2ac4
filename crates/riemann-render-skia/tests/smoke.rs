// File: crates/riemann-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use riemann_core::{BuiltinFunction, PlotRequest, Plotter, PlotterConfig};
use riemann_render_skia::SkiaRenderer;

#[test]
fn render_smoke_png() {
    let req = PlotRequest::new(BuiltinFunction::Sin, -4.0, 4.0, 8).expect("request");
    let plotter = Plotter::with_request(PlotterConfig::default(), &req);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    SkiaRenderer::new().render_png(&plotter, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = SkiaRenderer::new().render_png_bytes(&plotter).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
