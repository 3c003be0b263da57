use std::ops::Range;

use egui::{Color32, Pos2, Rect, Stroke};
use image::RgbaImage;

use crate::background::Background;
use crate::geometry;
use crate::renderer::{Surface, ellipse_segments};

/// Software surface used when exporting the canvas to an image file
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// A `width`x`height` surface filled with `fill`
    pub fn new(width: u32, height: u32, fill: Color32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, image::Rgba(fill.to_srgba_unmultiplied())),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Surface for RasterSurface {
    fn background(&mut self, background: &Background) {
        let width = background.width().min(self.image.width());
        let height = background.height().min(self.image.height());
        for y in 0..height {
            for x in 0..width {
                self.composite(x, y, background.pixels().get_pixel(x, y).0);
            }
        }
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.stroke_path(&[from, to], stroke);
    }

    fn polyline(&mut self, points: &[Pos2], stroke: Stroke) {
        self.stroke_path(points, stroke);
    }

    fn rect_outline(&mut self, rect: Rect, stroke: Stroke) {
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        self.stroke_path(&corners, stroke);
    }

    fn ellipse_outline(&mut self, rect: Rect, stroke: Stroke) {
        let mut points = geometry::ellipse_points(rect, ellipse_segments(rect));
        if let Some(&first) = points.first() {
            points.push(first);
        }
        self.stroke_path(&points, stroke);
    }
}

impl RasterSurface {
    /// Walk each segment of `points` one pixel step at a time, stamping a
    /// round brush of the stroke's width
    fn stroke_path(&mut self, points: &[Pos2], stroke: Stroke) {
        let color = stroke.color.to_srgba_unmultiplied();
        let radius = (stroke.width / 2.0).max(0.5);

        for pair in points.windows(2) {
            let (from, delta) = (pair[0], pair[1] - pair[0]);
            let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
            for step in 0..=steps {
                self.stamp(from + delta * (step as f32 / steps as f32), radius, color);
            }
        }
    }

    fn stamp(&mut self, center: Pos2, radius: f32, color: [u8; 4]) {
        let (width, height) = self.image.dimensions();
        let columns = pixel_span(center.x, radius, width);

        for y in pixel_span(center.y, radius, height) {
            for x in columns.clone() {
                let offset = Pos2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if offset.length_sq() > radius * radius {
                    continue;
                }
                // Opaque stamps overwrite so overlaps along a path stay uniform
                if color[3] == u8::MAX {
                    self.image.put_pixel(x, y, image::Rgba(color));
                } else {
                    self.composite(x, y, color);
                }
            }
        }
    }

    /// Straight-alpha "over" of `src` onto the pixel at (`x`, `y`)
    fn composite(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let src_alpha = f32::from(src[3]) / 255.0;
        if src_alpha == 0.0 {
            return;
        }

        let dst = &mut self.image.get_pixel_mut(x, y).0;
        let dst_weight = f32::from(dst[3]) / 255.0 * (1.0 - src_alpha);
        let alpha = src_alpha + dst_weight;
        for channel in 0..3 {
            let mixed = f32::from(src[channel]) * src_alpha + f32::from(dst[channel]) * dst_weight;
            dst[channel] = (mixed / alpha).round().min(255.0) as u8;
        }
        dst[3] = (alpha * 255.0).round() as u8;
    }
}

/// Pixel indices along one axis within `radius` of `center`, clipped to `0..len`
fn pixel_span(center: f32, radius: f32, len: u32) -> Range<u32> {
    let first = (center - radius).floor().max(0.0) as u32;
    let end = ((center + radius).ceil() + 1.0).clamp(0.0, len as f32) as u32;
    first..end.max(first)
}
