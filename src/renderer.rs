use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::background::Background;
use crate::config::CanvasConfig;
use crate::controller::CanvasController;
use crate::geometry;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::texture_manager::TextureManager;
use crate::tools::{Gesture, Mode};

/// Drawing primitives the renderer replays onto.
///
/// All coordinates are canvas-local; the surface maps them to its own space.
pub trait Surface {
    /// Draw the background raster at the canvas origin, unscaled
    fn background(&mut self, background: &Background);

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    /// Open path through `points`
    fn polyline(&mut self, points: &[Pos2], stroke: Stroke);

    fn rect_outline(&mut self, rect: Rect, stroke: Stroke);

    fn ellipse_outline(&mut self, rect: Rect, stroke: Stroke);
}

/// Replays the canvas contents in a fixed order: background, shapes, preview
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: CanvasConfig,
}

impl Renderer {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    /// Everything the user sees: background, finalized shapes, then the live preview
    pub fn render(&self, surface: &mut dyn Surface, controller: &CanvasController) {
        self.render_scene(surface, controller.background(), controller.scene());
        self.render_preview(surface, controller.mode(), controller.gesture());
    }

    /// Background and finalized shapes only
    pub fn render_scene(
        &self,
        surface: &mut dyn Surface,
        background: Option<&Background>,
        scene: &Scene,
    ) {
        if let Some(background) = background {
            surface.background(background);
        }

        let stroke = self.config.shape_stroke();
        for shape in scene.shapes() {
            self.draw_shape(surface, shape, stroke);
        }
    }

    pub fn draw_shape(&self, surface: &mut dyn Surface, shape: &Shape, stroke: Stroke) {
        match shape {
            Shape::Rectangle { start, end } => {
                surface.rect_outline(geometry::normalized_rect(*start, *end), stroke);
            }
            Shape::Circle { start, end } => {
                surface.ellipse_outline(geometry::normalized_rect(*start, *end), stroke);
            }
            Shape::Line { start, end } => surface.line(*start, *end, stroke),
            Shape::Polygon { vertices } => {
                for [from, to] in Shape::polygon_edges(vertices) {
                    surface.line(from, to, stroke);
                }
            }
            Shape::Freehand { points } => {
                if points.len() >= 2 {
                    surface.polyline(points, stroke);
                }
            }
        }
    }

    /// The in-progress gesture, drawn on top of everything else
    pub fn render_preview(&self, surface: &mut dyn Surface, mode: Mode, gesture: &Gesture) {
        let stroke = self.config.preview_stroke();
        match gesture {
            Gesture::Idle => {}
            Gesture::Drag { anchor, current } => match mode {
                Mode::Rectangle => {
                    surface.rect_outline(geometry::normalized_rect(*anchor, *current), stroke);
                }
                Mode::Circle => {
                    surface.ellipse_outline(geometry::normalized_rect(*anchor, *current), stroke);
                }
                Mode::Line => surface.line(*anchor, *current, stroke),
                Mode::Polygon | Mode::Pencil => {}
            },
            Gesture::Freehand { points } => {
                if points.len() >= 2 {
                    surface.polyline(points, stroke);
                }
            }
            Gesture::Polygon { vertices, pointer } => {
                if vertices.len() >= 2 {
                    surface.polyline(vertices, stroke);
                }
                if let (Some(last), Some(pointer)) = (vertices.last(), pointer) {
                    surface.line(*last, *pointer, stroke);
                }
            }
        }
    }
}

/// Draws onto an egui painter whose canvas starts at `origin` in screen space
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
    textures: &'a mut TextureManager,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, textures: &'a mut TextureManager) -> Self {
        Self {
            painter,
            origin: canvas_rect.min.to_vec2(),
            textures,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin
    }
}

impl Surface for PainterSurface<'_> {
    fn background(&mut self, background: &Background) {
        let rect = background.rect().translate(self.origin);
        let Some(texture) = self.textures.background_texture(self.painter.ctx(), background) else {
            return;
        };
        self.painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn polyline(&mut self, points: &[Pos2], stroke: Stroke) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::line(points, stroke));
    }

    fn rect_outline(&mut self, rect: Rect, stroke: Stroke) {
        self.painter.rect_stroke(rect.translate(self.origin), 0.0, stroke);
    }

    fn ellipse_outline(&mut self, rect: Rect, stroke: Stroke) {
        let points = geometry::ellipse_points(rect.translate(self.origin), ellipse_segments(rect));
        self.painter.add(egui::Shape::closed_line(points, stroke));
    }
}

/// Enough segments for a smooth outline without wasting vertices on tiny ellipses
pub(crate) fn ellipse_segments(rect: Rect) -> usize {
    let circumference = std::f32::consts::PI * (rect.width() + rect.height()) / 2.0;
    (circumference / 4.0).ceil().clamp(16.0, 256.0) as usize
}
