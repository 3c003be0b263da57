use crate::PaintApp;
use crate::input;
use crate::renderer::PainterSurface;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none().fill(app.controller().config().canvas_color);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let canvas_rect = response.rect;
        app.set_canvas_rect(canvas_rect);

        // Input is suspended while a notice is open
        if app.notice().is_none() {
            let events = app.input_mut().process_input(ctx, canvas_rect);
            for event in events {
                input::route_event(event, app.controller_mut());
            }
        } else {
            app.input_mut().reset();
        }

        let painter = painter.with_clip_rect(canvas_rect);
        let (controller, renderer, textures) = app.render_parts();
        let mut surface = PainterSurface::new(&painter, canvas_rect, textures);
        renderer.render(&mut surface, controller);
    });
}
