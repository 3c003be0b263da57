use egui::{Context, TextureHandle, TextureOptions};

use crate::background::Background;

/// Keeps the GPU texture for the current background image.
///
/// The texture is uploaded once per loaded image and reused on every frame
/// until a different background is shown.
#[derive(Default)]
pub struct TextureManager {
    background: Option<(usize, TextureHandle)>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the texture for `background`.
    ///
    /// Returns `None` when the image exceeds the backend's texture size limit.
    pub fn background_texture(
        &mut self,
        ctx: &Context,
        background: &Background,
    ) -> Option<&TextureHandle> {
        if self.cached_background_id() != Some(background.id()) {
            self.background = None;
        }

        let max_side = ctx.input(|i| i.max_texture_side);
        let (width, height) = (background.width(), background.height());
        if width as usize > max_side || height as usize > max_side {
            log::warn!("Background {width}x{height} exceeds texture limit {max_side}, not drawn");
            return None;
        }

        let (_, handle) = self.background.get_or_insert_with(|| {
            log::debug!("Uploading background texture {:?}", background);
            let handle = ctx.load_texture(
                format!("background-{}", background.id()),
                background.to_color_image(),
                TextureOptions::default(),
            );
            (background.id(), handle)
        });
        Some(handle)
    }

    /// Drop the cached texture (e.g. after the canvas was cleared)
    pub fn release(&mut self) {
        self.background = None;
    }

    pub fn cached_background_id(&self) -> Option<usize> {
        self.background.as_ref().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_texture_reused_until_background_changes() {
        let ctx = Context::default();
        let mut textures = TextureManager::new();
        let first = Background::new(RgbaImage::new(4, 4));

        let id = textures.background_texture(&ctx, &first).unwrap().id();
        assert_eq!(textures.background_texture(&ctx, &first).unwrap().id(), id);
        assert_eq!(textures.cached_background_id(), Some(first.id()));

        let second = Background::new(RgbaImage::new(4, 4));
        textures.background_texture(&ctx, &second);
        assert_eq!(textures.cached_background_id(), Some(second.id()));

        textures.release();
        assert_eq!(textures.cached_background_id(), None);
    }

    #[test]
    fn test_oversized_background_is_not_uploaded() {
        let ctx = Context::default();
        let max_side = ctx.input(|i| i.max_texture_side);
        let mut textures = TextureManager::new();
        let wide = Background::new(RgbaImage::new(max_side as u32 + 1, 16));

        assert!(textures.background_texture(&ctx, &wide).is_none());
        assert_eq!(textures.cached_background_id(), None);
    }
}
