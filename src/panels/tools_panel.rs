use crate::PaintApp;
use crate::components::ToolButton;
use crate::tools::Mode;

/// Commands issued from the toolbar, applied by [`PaintApp::handle_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Clicking a tool, including the one already active, drops any unfinished gesture
    SelectTool(Mode),
    Clear,
    Save,
    Load,
}

pub fn tools_panel(app: &PaintApp, ctx: &egui::Context) -> Option<ToolbarAction> {
    let mut action = None;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            // Nothing on the toolbar reacts while a notice is waiting to be dismissed
            ui.add_enabled_ui(app.notice().is_none(), |ui| {
                let active = app.controller().mode();
                for mode in Mode::ALL {
                    if ToolButton::new(mode, active == mode).show(ui).clicked() {
                        action = Some(ToolbarAction::SelectTool(mode));
                    }
                }

                ui.separator();

                if ui.button("🗑 Clear").clicked() {
                    action = Some(ToolbarAction::Clear);
                }
                if ui.button("💾 Save").clicked() {
                    action = Some(ToolbarAction::Save);
                }
                if ui.button("📂 Load").clicked() {
                    action = Some(ToolbarAction::Load);
                }
            });

            ui.separator();

            let controller = app.controller();
            ui.label(format!(
                "{} ({})",
                controller.mode().name(),
                controller.gesture().state_name()
            ));
            ui.label(format!("Shapes: {}", controller.scene().len()));
        });
        ui.add_space(4.0);
    });

    action
}
