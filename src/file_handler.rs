use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::background::Background;
use crate::controller::CanvasController;
use crate::error::{FileError, Result};
use crate::raster::RasterSurface;
use crate::renderer::Renderer;

/// Extensions the exporter writes as-is; anything else gets `.png` appended
pub const SAVE_EXTENSIONS: &[&str] = &["png", "bmp", "tif", "tiff"];

/// Extensions offered in the open dialog
pub const LOAD_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// Append `.png` unless the file name already ends in a supported image extension
pub fn with_image_extension(path: &Path) -> PathBuf {
    let has_image_ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SAVE_EXTENSIONS.contains(&ext.as_str()));

    if has_image_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Rasterize the background and all finalized shapes (never the preview)
pub fn export_canvas(controller: &CanvasController, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(FileError::EmptyCanvas { width, height });
    }

    let config = controller.config();
    let mut surface = RasterSurface::new(width, height, config.canvas_color);
    Renderer::new(*config).render_scene(&mut surface, controller.background(), controller.scene());
    Ok(surface.into_image())
}

/// Encode `image` to `path` (with `.png` appended if needed) and return the
/// path that was actually written
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<PathBuf> {
    let path = with_image_extension(path);
    image.save(&path).map_err(|source| FileError::Encode {
        path: path.clone(),
        source,
    })?;
    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(path)
}

/// Render the canvas and write it to `path`
pub fn save_canvas(
    controller: &CanvasController,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<PathBuf> {
    let image = export_canvas(controller, width, height)?;
    save_image(&image, path)
}

/// Decode an image file into a new background.
///
/// Images with a side longer than `max_side` are rejected, since they could
/// not be uploaded as a single texture.
pub fn load_background(path: &Path, max_side: usize) -> Result<Background> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Processing image from path: {} ({} bytes)", path.display(), bytes.len());

    let img = image::load_from_memory(&bytes).map_err(|source| FileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Successfully decoded image: {}x{}", img.width(), img.height());

    if img.width() as usize > max_side || img.height() as usize > max_side {
        return Err(FileError::TooLarge {
            path: path.to_path_buf(),
            width: img.width(),
            height: img.height(),
            max_side,
        });
    }

    Ok(Background::new(img.to_rgba8()))
}
