// File: crates/riemann-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and a few pixels of a rendered frame.

use riemann_core::{BuiltinFunction, PlotRequest, Plotter, PlotterConfig, Vec2};
use riemann_render_skia::SkiaRenderer;

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn plotter(function: BuiltinFunction, start: f64, end: f64, n: usize) -> Plotter {
    let mut cfg = PlotterConfig::default();
    cfg.size = Vec2::new(200.0, 120.0);
    cfg.grid.on = false;
    let req = PlotRequest::new(function, start, end, n).expect("request");
    Plotter::with_request(cfg, &req)
}

#[test]
fn render_rgba8_buffer() {
    let p = plotter(BuiltinFunction::Abs, -1.0, 1.0, 2);
    let (px, w, h, stride) = SkiaRenderer::new().render_rgba8(&p).expect("rgba render");
    assert_eq!((w, h), (200, 120));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Border in the top-left corner is opaque black
    assert_eq!(pixel(&px, stride, 0, 0), [0, 0, 0, 255]);
    // Far right, mid-height, outside any rectangle: white background
    assert_eq!(pixel(&px, stride, 190, 20), [255, 255, 255, 255]);
}

#[test]
fn upper_rect_tinted_above_axis() {
    // |x| on [-1, 1]: upper bars reach y = 1, lower bars reach y = 0 on each half.
    let p = plotter(BuiltinFunction::Abs, -1.0, 1.0, 2);
    let (px, _, _, stride) = SkiaRenderer::new().render_rgba8(&p).expect("rgba render");
    // Centre (100, 60) is the real origin at 70 px/unit; (80, 45) is about (-0.29, 0.21)
    let [r, g, b, a] = pixel(&px, stride, 80, 45);
    assert_eq!(a, 255);
    assert!(r > g && r > b, "expected upper colour tint, got {:?}", (r, g, b));
}

#[test]
fn negative_cell_paints_upper_over_lower() {
    // 0.2x^3 on [-3, -1.5], one cell: upper height ~ -0.675, lower height -5.4.
    let mut cfg = PlotterConfig::default();
    cfg.size = Vec2::new(200.0, 200.0);
    cfg.scale = Vec2::new(40.0, -40.0);
    cfg.grid.on = false;
    let req = PlotRequest::new(BuiltinFunction::Cubic, -3.0, -1.5, 1).expect("request");
    let p = Plotter::with_request(cfg, &req);
    let (px, _, _, stride) = SkiaRenderer::new().render_rgba8(&p).expect("rgba render");

    // Anchor (-2.25, 0) sits at (100, 100); the cell spans x 70..130,
    // the upper bar y 100..127 and the lower bar y 100..200 (clipped).
    let [r, g, b, _] = pixel(&px, stride, 100, 113);
    assert!(r > g && r > b, "upper colour should be on top near the axis, got {:?}", (r, g, b));
    let [r, g, b, _] = pixel(&px, stride, 100, 160);
    assert!(g > r && b > r, "lower colour expected below the upper bar, got {:?}", (r, g, b));
}

#[test]
fn scene_matches_direct_render() {
    let p = plotter(BuiltinFunction::Sin, -2.0, 2.0, 4);
    let renderer = SkiaRenderer::new();
    let (direct, ..) = renderer.render_rgba8(&p).expect("direct");
    let (composed, ..) = renderer.render_scene_rgba8(&p.scene()).expect("scene");
    assert_eq!(direct, composed);
}
