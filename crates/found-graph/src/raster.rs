use crate::surface::{MinimapSurface, Stroke};
use anyhow::Result;
use found_core::{Color, Point};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Software rasterizer backing a minimap with an RGBA image.
///
/// Shapes are antialiased by pixel coverage and blended source-over.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    background: Color,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::TRANSPARENT)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width, height),
            background,
        };
        surface.clear();
        surface
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Some(Color::rgba(r, g, b, a))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!("Wrote minimap image to {:?}", path);
        Ok(())
    }

    /// Blends `color` into every pixel whose center is within `reach` of
    /// the shape, as measured by `distance`.
    fn paint<F>(&mut self, min: Point, max: Point, reach: f64, color: Color, distance: F)
    where
        F: Fn(Point) -> f64,
    {
        if !(min.is_finite() && max.is_finite() && reach.is_finite()) {
            return;
        }
        let (w, h) = (self.image.width() as f64, self.image.height() as f64);
        let x0 = (min.x - reach - 1.0).floor().clamp(0.0, w) as u32;
        let x1 = (max.x + reach + 1.0).ceil().clamp(0.0, w) as u32;
        let y0 = (min.y - reach - 1.0).floor().clamp(0.0, h) as u32;
        let y1 = (max.y + reach + 1.0).ceil().clamp(0.0, h) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let coverage = (reach + 0.5 - distance(center)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let pixel = self.image.get_pixel_mut(x, y);
                    *pixel = blend(*pixel, color, coverage);
                }
            }
        }
    }
}

fn blend(dst: Rgba<u8>, src: Color, coverage: f64) -> Rgba<u8> {
    let src_a = src.opacity() * coverage;
    let [dr, dg, db, da] = dst.0;
    let dst_a = f64::from(da) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| {
        let value = (f64::from(s) * src_a + f64::from(d) * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(src.r, dr),
        channel(src.g, dg),
        channel(src.b, db),
        (out_a * 255.0).round() as u8,
    ])
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

impl MinimapSurface for RasterSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
        self.clear();
    }

    fn clear(&mut self) {
        let (r, g, b, a) = self.background.to_tuple();
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, a]);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        let min = Point::new(from.x.min(to.x), from.y.min(to.y));
        let max = Point::new(from.x.max(to.x), from.y.max(to.y));
        self.paint(min, max, stroke.width / 2.0, stroke.color, |p| {
            segment_distance(p, from, to)
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.paint(center, center, radius, color, |p| p.distance(center));
    }

    fn stroke_rect(&mut self, corner_a: Point, corner_b: Point, stroke: Stroke) {
        let top_right = Point::new(corner_b.x, corner_a.y);
        let bottom_left = Point::new(corner_a.x, corner_b.y);
        self.stroke_line(corner_a, top_right, stroke);
        self.stroke_line(top_right, corner_b, stroke);
        self.stroke_line(corner_b, bottom_left, stroke);
        self.stroke_line(bottom_left, corner_a, stroke);
    }
}
