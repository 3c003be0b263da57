use egui::{Context, PointerButton, Pos2, Rect};

use crate::controller::CanvasController;

/// Canvas pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved while the press that started on the canvas is held
    PointerDrag(Pos2),
    /// Pointer moved over the canvas with no button held
    PointerMove(Pos2),
    /// Primary button released after a canvas press
    PointerUp(Pos2),
}

/// Pointer state for one frame, as read from egui
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub any_down: bool,
    pub moved: bool,
}

impl PointerSnapshot {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            any_down: input.pointer.any_down(),
            moved: input.pointer.delta() != egui::Vec2::ZERO,
        })
    }
}

/// Handles converting raw egui input into canvas events
#[derive(Debug, Default)]
pub struct InputHandler {
    /// A primary press started on the canvas and has not been released yet
    tracking: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Forget any press in progress (e.g. while a dialog has focus)
    pub fn reset(&mut self) {
        self.tracking = false;
    }

    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        self.translate(PointerSnapshot::from_context(ctx), canvas_rect)
    }

    /// Turn one frame of pointer state into events relative to `canvas_rect`
    pub fn translate(&mut self, snapshot: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(pos) = snapshot.pos else {
            return events;
        };
        let local = (pos - canvas_rect.min).to_pos2();
        let moved = snapshot.moved || self.last_pos.is_some_and(|last| last != pos);
        self.last_pos = Some(pos);

        if snapshot.pressed && !self.tracking && canvas_rect.contains(pos) {
            self.tracking = true;
            events.push(InputEvent::PointerDown(local));
        } else if self.tracking && moved {
            events.push(InputEvent::PointerDrag(local));
        }

        if snapshot.released && self.tracking {
            self.tracking = false;
            events.push(InputEvent::PointerUp(local));
        } else if !self.tracking && !snapshot.any_down && moved && canvas_rect.contains(pos) {
            events.push(InputEvent::PointerMove(local));
        }

        events
    }
}

/// Dispatch a canvas event to the controller
pub fn route_event(event: InputEvent, controller: &mut CanvasController) {
    match event {
        InputEvent::PointerDown(pos) => controller.on_pointer_down(pos),
        InputEvent::PointerDrag(pos) => controller.on_pointer_drag(pos),
        InputEvent::PointerMove(pos) => controller.on_pointer_move(pos),
        InputEvent::PointerUp(pos) => controller.on_pointer_up(pos),
    }
}
