use std::path::Path;

use crate::config::{CanvasConfig, DEFAULT_MAX_TEXTURE_SIDE};
use crate::controller::CanvasController;
use crate::file_handler;
use crate::input::InputHandler;
use crate::notice::Notice;
use crate::panels::{self, ToolbarAction};
use crate::renderer::Renderer;
use crate::texture_manager::TextureManager;

pub struct PaintApp {
    controller: CanvasController,
    renderer: Renderer,
    textures: TextureManager,
    input: InputHandler,
    canvas_rect: egui::Rect,
    // Largest background side the backend can upload
    max_texture_side: usize,
    // Blocking message shown after save/load
    notice: Option<Notice>,
}

impl Default for PaintApp {
    fn default() -> Self {
        let config = CanvasConfig::default();
        Self {
            controller: CanvasController::new(config),
            renderer: Renderer::new(config),
            textures: TextureManager::new(),
            input: InputHandler::new(),
            canvas_rect: egui::Rect::NOTHING,
            max_texture_side: DEFAULT_MAX_TEXTURE_SIDE,
            notice: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            max_texture_side: cc.egui_ctx.input(|i| i.max_texture_side),
            ..Self::default()
        }
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CanvasController {
        &mut self.controller
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_canvas_rect(&mut self, rect: egui::Rect) {
        self.canvas_rect = rect;
    }

    /// Canvas size in whole pixels, as used for export
    pub fn canvas_size(&self) -> (u32, u32) {
        if !self.canvas_rect.is_positive() {
            return (0, 0);
        }
        (
            self.canvas_rect.width().round() as u32,
            self.canvas_rect.height().round() as u32,
        )
    }

    /// Split borrows for drawing the canvas
    pub(crate) fn render_parts(
        &mut self,
    ) -> (&CanvasController, &Renderer, &mut TextureManager) {
        (&self.controller, &self.renderer, &mut self.textures)
    }

    pub fn clear(&mut self) {
        self.controller.clear();
        self.textures.release();
    }

    /// Write the current canvas to `path` and report the outcome as a notice
    pub fn save_to(&mut self, path: &Path) {
        let (width, height) = self.canvas_size();
        let notice = match file_handler::save_canvas(&self.controller, width, height, path) {
            Ok(written) => {
                let shown = std::path::absolute(&written).unwrap_or(written);
                Notice::info(format!("Image saved: {}", shown.display()))
            }
            Err(err) => {
                log::error!("{err}");
                Notice::error(format!("Save failed: {err}"))
            }
        };
        self.notice = Some(notice);
    }

    /// Replace the background with the image at `path`; on failure the old
    /// background stays and an error notice is shown
    pub fn load_from(&mut self, path: &Path) {
        match file_handler::load_background(path, self.max_texture_side) {
            Ok(background) => self.controller.set_background(background),
            Err(err) => {
                log::error!("{err}");
                self.notice = Some(Notice::error(format!("Load failed: {err}")));
            }
        }
    }

    fn save_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("Image", file_handler::SAVE_EXTENSIONS)
            .set_file_name("drawing.png")
            .save_file();

        match picked {
            Some(path) => self.save_to(&path),
            None => log::debug!("Save cancelled"),
        }
    }

    fn load_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Image", file_handler::LOAD_EXTENSIONS)
            .pick_file();

        match picked {
            Some(path) => self.load_from(&path),
            None => log::debug!("Load cancelled"),
        }
    }

    /// Apply a toolbar command; ignored while a notice is open
    pub fn handle_action(&mut self, action: ToolbarAction) {
        if self.notice.is_some() {
            log::debug!("Ignoring {action:?} while a notice is open");
            return;
        }

        match action {
            ToolbarAction::SelectTool(mode) => {
                log::info!("Tool selected from UI: {}", mode.name());
                self.controller.set_mode(mode);
            }
            ToolbarAction::Clear => self.clear(),
            ToolbarAction::Save => self.save_dialog(),
            ToolbarAction::Load => self.load_dialog(),
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.max_texture_side = ctx.input(|i| i.max_texture_side);

        if let Some(action) = panels::tools_panel(self, ctx) {
            self.handle_action(action);
        }

        panels::central_panel(self, ctx);

        if let Some(notice) = &self.notice {
            if notice.show(ctx) {
                self.notice = None;
            }
        }
    }
}
