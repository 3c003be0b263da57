use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message that blocks the canvas until the user dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Done",
            NoticeKind::Error => "Error",
        }
    }

    /// Show the notice as a centered window; returns true once dismissed
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        // Dim everything behind the notice
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("notice_backdrop"),
        ));
        painter.rect_filled(ctx.screen_rect(), 0.0, egui::Color32::from_black_alpha(96));

        egui::Window::new(self.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let text = match self.kind {
                    NoticeKind::Info => egui::RichText::new(&self.message),
                    NoticeKind::Error => {
                        egui::RichText::new(&self.message).color(ui.visuals().error_fg_color)
                    }
                };
                ui.label(text);
                ui.add_space(8.0);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismissed = true;
                }
            });

        dismissed
    }
}
