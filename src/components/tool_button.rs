use egui::{Align2, FontId, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::tools::Mode;

const SIZE: Vec2 = Vec2::new(32.0, 32.0);
const ROUNDING: f32 = 4.0;

/// Square toolbar button showing a tool's icon, highlighted while selected.
///
/// Colours come from the active egui visuals, so the button follows the
/// light/dark theme and greys out inside a disabled toolbar.
pub struct ToolButton {
    mode: Mode,
    selected: bool,
}

impl ToolButton {
    pub fn new(mode: Mode, selected: bool) -> Self {
        Self { mode, selected }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        ui.add(self)
    }
}

impl Widget for ToolButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(SIZE, Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let (fill, text_color) = if self.selected {
                (visuals.selection.bg_fill, visuals.strong_text_color())
            } else {
                let widget = ui.style().interact(&response);
                (widget.weak_bg_fill, widget.text_color())
            };

            let painter = ui.painter();
            painter.rect_filled(rect, ROUNDING, fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.mode.icon(),
                FontId::proportional(20.0),
                text_color,
            );
            if self.selected {
                let outline = Stroke::new(2.0, visuals.selection.stroke.color);
                painter.rect_stroke(rect, ROUNDING, outline);
            }
        }

        response.on_hover_text(self.mode.name())
    }
}
