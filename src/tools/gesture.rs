use egui::Pos2;
use log::debug;

use super::Mode;
use crate::geometry;
use crate::shape::Shape;

/// Transient pointer interaction that has not been turned into a shape yet.
///
/// Only one gesture exists at a time. Each handler returns the finalized
/// shape when the interaction completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Rectangle, circle or line being dragged out from `anchor`
    Drag { anchor: Pos2, current: Pos2 },
    /// Pencil path recorded so far
    Freehand { points: Vec<Pos2> },
    /// Polygon vertices committed so far, plus the last known pointer position
    /// for the rubber-band segment
    Polygon {
        vertices: Vec<Pos2>,
        pointer: Option<Pos2>,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drag { .. } => "Dragging",
            Self::Freehand { .. } => "Drawing",
            Self::Polygon { .. } => "Placing vertices",
        }
    }

    pub fn on_pointer_down(&mut self, mode: Mode, pos: Pos2, close_distance: f32) -> Option<Shape> {
        match mode {
            Mode::Rectangle | Mode::Circle | Mode::Line => {
                *self = Self::Drag {
                    anchor: pos,
                    current: pos,
                };
                None
            }
            Mode::Pencil => {
                *self = Self::Freehand { points: vec![pos] };
                None
            }
            Mode::Polygon => self.place_vertex(pos, close_distance),
        }
    }

    fn place_vertex(&mut self, pos: Pos2, close_distance: f32) -> Option<Shape> {
        if let Self::Polygon { vertices, pointer } = self {
            let closes = vertices
                .first()
                .is_some_and(|&first| geometry::within_distance(pos, first, close_distance));
            if closes {
                let vertices = std::mem::take(vertices);
                *self = Self::Idle;
                return Some(Shape::Polygon { vertices });
            }
            vertices.push(pos);
            *pointer = Some(pos);
            debug!("Polygon vertex {} at {:?}", vertices.len(), pos);
        } else {
            *self = Self::Polygon {
                vertices: vec![pos],
                pointer: Some(pos),
            };
            debug!("Polygon started at {:?}", pos);
        }
        None
    }

    pub fn on_pointer_drag(&mut self, pos: Pos2) {
        match self {
            Self::Drag { current, .. } => *current = pos,
            Self::Freehand { points } => points.push(pos),
            Self::Polygon { pointer, .. } => *pointer = Some(pos),
            Self::Idle => {}
        }
    }

    /// Pointer motion with no button held
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if let Self::Polygon { vertices, pointer } = self {
            if !vertices.is_empty() {
                *pointer = Some(pos);
            }
        }
    }

    pub fn on_pointer_up(&mut self, mode: Mode, pos: Pos2) -> Option<Shape> {
        match std::mem::take(self) {
            Self::Drag { anchor: start, .. } => {
                let end = pos;
                match mode {
                    Mode::Rectangle => Some(Shape::Rectangle { start, end }),
                    Mode::Circle => Some(Shape::Circle { start, end }),
                    Mode::Line => Some(Shape::Line { start, end }),
                    Mode::Polygon | Mode::Pencil => None,
                }
            }
            Self::Freehand { points } => {
                if points.len() >= 2 {
                    Some(Shape::Freehand { points })
                } else {
                    debug!("Discarding pencil click without movement");
                    None
                }
            }
            polygon @ Self::Polygon { .. } => {
                *self = polygon;
                None
            }
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSE: f32 = 10.0;

    #[test]
    fn test_drag_tracks_current_point() {
        let mut gesture = Gesture::default();
        gesture.on_pointer_down(Mode::Line, Pos2::new(1.0, 2.0), CLOSE);
        gesture.on_pointer_drag(Pos2::new(5.0, 6.0));

        assert_eq!(
            gesture,
            Gesture::Drag {
                anchor: Pos2::new(1.0, 2.0),
                current: Pos2::new(5.0, 6.0),
            }
        );
    }

    #[test]
    fn test_up_without_down_is_ignored() {
        let mut gesture = Gesture::default();
        assert!(gesture.on_pointer_up(Mode::Rectangle, Pos2::new(3.0, 3.0)).is_none());
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_polygon_release_keeps_vertices() {
        let mut gesture = Gesture::default();
        gesture.on_pointer_down(Mode::Polygon, Pos2::new(0.0, 0.0), CLOSE);
        assert!(gesture.on_pointer_up(Mode::Polygon, Pos2::new(0.0, 0.0)).is_none());

        match gesture {
            Gesture::Polygon { vertices, .. } => assert_eq!(vertices, vec![Pos2::new(0.0, 0.0)]),
            other => panic!("unexpected gesture {other:?}"),
        }
    }

    #[test]
    fn test_hover_moves_rubber_band_only_for_polygons() {
        let mut gesture = Gesture::default();
        gesture.on_pointer_move(Pos2::new(4.0, 4.0));
        assert!(gesture.is_idle());

        gesture.on_pointer_down(Mode::Polygon, Pos2::new(0.0, 0.0), CLOSE);
        gesture.on_pointer_move(Pos2::new(40.0, 30.0));
        match gesture {
            Gesture::Polygon { pointer, .. } => assert_eq!(pointer, Some(Pos2::new(40.0, 30.0))),
            other => panic!("unexpected gesture {other:?}"),
        }
    }

    #[test]
    fn test_polygon_closes_at_threshold() {
        let mut gesture = Gesture::default();
        gesture.on_pointer_down(Mode::Polygon, Pos2::new(0.0, 0.0), CLOSE);
        gesture.on_pointer_down(Mode::Polygon, Pos2::new(50.0, 0.0), CLOSE);

        let shape = gesture.on_pointer_down(Mode::Polygon, Pos2::new(6.0, 8.0), CLOSE);
        let vertices = vec![Pos2::new(0.0, 0.0), Pos2::new(50.0, 0.0)];
        assert_eq!(shape, Some(Shape::Polygon { vertices }));
        assert!(gesture.is_idle());
    }
}
