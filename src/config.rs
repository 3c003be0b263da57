use egui::Color32;

/// Distance (in canvas units) within which a click closes an open polygon
pub const CLOSE_DISTANCE: f32 = 10.0;

/// egui's texture side limit until the backend reports the real one
pub const DEFAULT_MAX_TEXTURE_SIDE: usize = 2048;

/// Fixed drawing parameters for the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Clicks this close to the first polygon vertex finalize the polygon
    pub close_distance: f32,
    /// Colour of finalized shapes
    pub shape_color: Color32,
    /// Colour of the in-progress gesture preview
    pub preview_color: Color32,
    /// Outline thickness for shapes and previews
    pub stroke_width: f32,
    /// Fill colour of the canvas behind the background image
    pub canvas_color: Color32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            close_distance: CLOSE_DISTANCE,
            shape_color: Color32::BLACK,
            preview_color: Color32::RED,
            stroke_width: 2.0,
            canvas_color: Color32::WHITE,
        }
    }
}

impl CanvasConfig {
    pub fn shape_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.stroke_width, self.shape_color)
    }

    pub fn preview_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.stroke_width, self.preview_color)
    }
}
