// File: crates/riemann-render-skia/src/surface.rs
// Summary: Skia canvas adapter implementing the core `Surface` trait.

use riemann_core::{Paint, PaintStyle, Rect, Rgba, Surface, TextBaseline, TextStyle, Vec2};
use skia_safe as skia;

pub(crate) fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn to_point(p: Vec2) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// Resolve a default typeface once; falls back to Skia's empty font when the system has none.
fn default_font() -> skia::Font {
    let mgr = skia::FontMgr::default();
    match mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::default()) {
        Some(typeface) => skia::Font::from_typeface(typeface, 15.0),
        None => {
            log::warn!("no default typeface available; labels may not render");
            skia::Font::default()
        }
    }
}

/// Borrowed canvas plus the global alpha currently in effect.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    size: Vec2,
    alpha: f32,
    font: skia::Font,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, size: Vec2) -> Self {
        Self { canvas, size, alpha: 1.0, font: default_font() }
    }

    fn paint(&self, p: &Paint) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_color(p.colour.with_opacity(self.alpha)));
        match p.style {
            PaintStyle::Fill => {
                paint.set_style(skia::paint::Style::Fill);
            }
            PaintStyle::Stroke { width } => {
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(width as f32);
            }
        }
        paint
    }
}

impl Surface for SkiaSurface<'_> {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, rect: Rect, colour: Rgba) {
        self.canvas.save();
        self.canvas.clip_rect(to_rect(rect), None, None);
        self.canvas.clear(to_color(colour));
        self.canvas.restore();
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.canvas.draw_rect(to_rect(rect), &self.paint(paint));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, paint: &Paint) {
        self.canvas.draw_line(to_point(from), to_point(to), &self.paint(paint));
    }

    fn draw_path(&mut self, points: &[Vec2], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to(to_point(*first));
        for p in rest {
            path.line_to(to_point(*p));
        }
        if paint.style == PaintStyle::Fill {
            path.close();
        }
        self.canvas.draw_path(&path, &self.paint(paint));
    }

    fn draw_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        let mut font = self.font.clone();
        font.set_size(style.size as f32);
        let y = match style.baseline {
            TextBaseline::Middle => {
                // ascent is negative; centre the ink box on `at.y`
                let (_, metrics) = font.metrics();
                at.y as f32 - (metrics.ascent + metrics.descent) * 0.5
            }
        };
        let paint = self.paint(&Paint::fill(style.colour));
        self.canvas.draw_str(text, (at.x as f32, y), &font, &paint);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}
