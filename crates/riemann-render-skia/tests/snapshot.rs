// File: crates/riemann-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small plots to PNG bytes, with label text made transparent.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Always checks frame invariants (size, opaque border, background) on the decoded render.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note after the invariant checks.

use riemann_core::{BuiltinFunction, PlotRequest, Plotter, PlotterConfig, Rgba, Vec2};
use riemann_render_skia::SkiaRenderer;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

const SIZE: (u32, u32) = (320, 200);

fn check_frame(bytes: &[u8]) -> image::RgbaImage {
    let img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    assert_eq!(img.dimensions(), SIZE);
    let (w, h) = SIZE;
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(img.get_pixel(x, y).0, [0, 0, 0, 255], "border at ({x}, {y})");
    }
    img
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let got_img = check_frame(bytes);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(function: BuiltinFunction, start: f64, end: f64, n: usize) -> Vec<u8> {
    let mut cfg = PlotterConfig::default();
    cfg.size = Vec2::new(SIZE.0 as f64, SIZE.1 as f64);
    cfg.scale = Vec2::new(40.0, -40.0);
    // transparent text keeps glyph rasterization out of the comparison
    cfg.sums.font_colour = Some(Rgba::TRANSPARENT);
    let req = PlotRequest::new(function, start, end, n).expect("request");
    let plotter = Plotter::with_request(cfg, &req);
    SkiaRenderer::new().render_png_bytes(&plotter).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_sin() {
    write_or_compare(&snapshot_path("sin.png"), &render_bytes(BuiltinFunction::Sin, -3.0, 3.0, 6));
}

#[test]
fn golden_negative_cubic() {
    write_or_compare(&snapshot_path("cubic_negative.png"), &render_bytes(BuiltinFunction::Cubic, -2.5, 0.0, 5));
}

#[test]
fn golden_reciprocal() {
    write_or_compare(&snapshot_path("reciprocal.png"), &render_bytes(BuiltinFunction::Reciprocal, -2.0, 2.0, 4));
}
