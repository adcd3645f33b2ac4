// File: crates/riemann-render-skia/src/render.rs
// Summary: Headless rendering pipeline using Skia CPU raster surfaces (RGBA8 buffers and PNG).

use anyhow::{anyhow, Result};
use riemann_core::{Plotter, Scene, Surface, Vec2};
use skia_safe as skia;

use crate::surface::SkiaSurface;

/// Raw RGBA8 frame: `(pixels, width, height, stride)`.
pub type Rgba8Frame = (Vec<u8>, i32, i32, usize);

/// CPU raster renderer for plotter frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Rasterize whatever `draw` paints onto a fresh surface of `size` pixels.
    pub fn rasterize(&self, size: Vec2, draw: impl FnOnce(&mut dyn Surface)) -> Result<skia::Surface> {
        let (w, h) = pixel_size(size);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        {
            let mut target = SkiaSurface::new(surface.canvas(), Vec2::new(w as f64, h as f64));
            draw(&mut target);
        }
        Ok(surface)
    }

    pub fn render_rgba8(&self, plotter: &Plotter) -> Result<Rgba8Frame> {
        let mut surface = self.rasterize(plotter.view().size(), |s| plotter.draw(s))?;
        read_rgba8(&mut surface)
    }

    /// Rasterize an arbitrary draw closure and read it back as RGBA8.
    pub fn draw_rgba8(&self, size: Vec2, draw: impl FnOnce(&mut dyn Surface)) -> Result<Rgba8Frame> {
        let mut surface = self.rasterize(size, draw)?;
        read_rgba8(&mut surface)
    }

    /// Compose a pre-recorded scene: back layer first, fixed overlay on top.
    pub fn render_scene_rgba8(&self, scene: &Scene) -> Result<Rgba8Frame> {
        let mut surface = self.rasterize(scene.back.size(), |s| scene.compose(s))?;
        read_rgba8(&mut surface)
    }

    pub fn render_png_bytes(&self, plotter: &Plotter) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(plotter.view().size(), |s| plotter.draw(s))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_png(&self, plotter: &Plotter, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(plotter)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

fn pixel_size(size: Vec2) -> (i32, i32) {
    (size.x.round().max(1.0) as i32, size.y.round().max(1.0) as i32)
}

fn read_rgba8(surface: &mut skia::Surface) -> Result<Rgba8Frame> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("reading back {w}x{h} pixels failed"));
    }
    Ok((pixels, w, h, stride))
}
