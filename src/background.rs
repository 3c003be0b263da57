use egui::{ColorImage, Pos2, Rect, Vec2};
use image::RgbaImage;
use std::sync::atomic::{AtomicUsize, Ordering};

// Static counter for generating unique IDs
static NEXT_BACKGROUND_ID: AtomicUsize = AtomicUsize::new(1);

/// Raster drawn beneath all shapes, anchored at the canvas origin and never scaled
#[derive(Clone)]
pub struct Background {
    id: usize,
    pixels: RgbaImage,
}

// Custom Debug implementation to keep pixel data out of log output
impl std::fmt::Debug for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Background")
            .field("id", &self.id)
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl Background {
    pub fn new(pixels: RgbaImage) -> Self {
        let id = NEXT_BACKGROUND_ID.fetch_add(1, Ordering::SeqCst);
        Self { id, pixels }
    }

    /// Unique per loaded image; used to tell when a cached texture is stale
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.pixels.width() as f32, self.pixels.height() as f32)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }

    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.pixels.width() as usize, self.pixels.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, self.pixels.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_background_gets_a_new_id() {
        let a = Background::new(RgbaImage::new(2, 2));
        let b = Background::new(RgbaImage::new(2, 2));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_rect_is_anchored_at_origin() {
        let background = Background::new(RgbaImage::new(30, 20));
        assert_eq!(background.rect().min, Pos2::ZERO);
        assert_eq!(background.rect().size(), Vec2::new(30.0, 20.0));
        assert_eq!(background.to_color_image().size, [30, 20]);
    }
}
