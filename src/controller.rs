use egui::Pos2;
use log::{debug, info};

use crate::background::Background;
use crate::config::CanvasConfig;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::tools::{Gesture, Mode};

/// Owns everything the canvas shows and turns pointer events into shapes.
///
/// Pointer positions are canvas-local. Every mutation happens in response to
/// a single dispatched event on the UI thread.
#[derive(Debug, Default)]
pub struct CanvasController {
    mode: Mode,
    gesture: Gesture,
    scene: Scene,
    background: Option<Background>,
    config: CanvasConfig,
}

impl CanvasController {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Switch tools, dropping any unfinished gesture
    pub fn set_mode(&mut self, mode: Mode) {
        if !self.gesture.is_idle() {
            debug!("Discarding {} gesture on switch to {}", self.gesture.state_name(), mode.name());
        }
        self.mode = mode;
        self.gesture = Gesture::Idle;
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        let close_distance = self.config.close_distance;
        if let Some(shape) = self.gesture.on_pointer_down(self.mode, pos, close_distance) {
            self.commit(shape);
        }
    }

    pub fn on_pointer_drag(&mut self, pos: Pos2) {
        self.gesture.on_pointer_drag(pos);
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) {
        self.gesture.on_pointer_move(pos);
    }

    pub fn on_pointer_up(&mut self, pos: Pos2) {
        if let Some(shape) = self.gesture.on_pointer_up(self.mode, pos) {
            self.commit(shape);
        }
    }

    /// Remove all shapes, the background and any unfinished gesture
    pub fn clear(&mut self) {
        info!("Clearing canvas ({} shapes)", self.scene.len());
        self.scene.clear();
        self.gesture = Gesture::Idle;
        self.background = None;
    }

    /// Replace the background image; shapes are kept
    pub fn set_background(&mut self, background: Background) {
        info!("Background set: {}x{}", background.width(), background.height());
        self.background = Some(background);
    }

    fn commit(&mut self, shape: Shape) {
        info!("Finalized {} #{}", shape.name(), self.scene.len() + 1);
        self.scene.push(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;
    use image::RgbaImage;

    fn drag(controller: &mut CanvasController, from: Pos2, to: Pos2) {
        controller.on_pointer_down(from);
        controller.on_pointer_drag(to);
        controller.on_pointer_up(to);
    }

    #[test]
    fn test_default_mode_is_line() {
        let controller = CanvasController::default();
        assert_eq!(controller.mode(), Mode::Line);
        assert!(controller.gesture().is_idle());
    }

    #[test]
    fn test_rectangle_end_to_end() {
        let mut controller = CanvasController::default();
        controller.set_mode(Mode::Rectangle);
        drag(&mut controller, Pos2::new(10.0, 10.0), Pos2::new(50.0, 50.0));

        let shapes = controller.scene().shapes();
        assert_eq!(shapes.len(), 1);
        let rect = shapes[0].bounding_box().unwrap();
        assert_eq!(rect.min, Pos2::new(10.0, 10.0));
        assert_eq!(rect.size(), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_set_mode_keeps_finalized_shapes() {
        let mut controller = CanvasController::default();
        drag(&mut controller, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));

        controller.on_pointer_down(Pos2::new(1.0, 1.0));
        controller.set_mode(Mode::Circle);
        controller.on_pointer_up(Pos2::new(9.0, 9.0));

        assert_eq!(controller.scene().len(), 1);
        assert!(controller.gesture().is_idle());
    }

    #[test]
    fn test_set_background_keeps_scene() {
        let mut controller = CanvasController::default();
        drag(&mut controller, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));

        controller.set_background(Background::new(RgbaImage::new(4, 4)));
        let first = controller.background().unwrap().id();
        controller.set_background(Background::new(RgbaImage::new(8, 8)));

        assert_ne!(controller.background().unwrap().id(), first);
        assert_eq!(controller.background().unwrap().width(), 8);
        assert_eq!(controller.scene().len(), 1);
    }
}
