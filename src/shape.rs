use egui::{Pos2, Rect};

use crate::geometry;

/// A finalized drawing on the canvas.
///
/// Shapes are plain data and never change once they have been added to a
/// [`Scene`](crate::Scene). All coordinates are canvas-local.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle outline spanned by two opposite corners
    Rectangle { start: Pos2, end: Pos2 },
    /// Ellipse outline inscribed in the box spanned by two opposite corners
    Circle { start: Pos2, end: Pos2 },
    /// Straight segment
    Line { start: Pos2, end: Pos2 },
    /// Closed outline through the vertices in click order
    Polygon { vertices: Vec<Pos2> },
    /// Open path through the recorded pointer positions
    Freehand { points: Vec<Pos2> },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
            Self::Polygon { .. } => "polygon",
            Self::Freehand { .. } => "freehand",
        }
    }

    /// Normalized bounding box for rectangles and circles
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Self::Rectangle { start, end } | Self::Circle { start, end } => {
                Some(geometry::normalized_rect(*start, *end))
            }
            _ => None,
        }
    }

    /// Segments connecting consecutive points of a polygon, closing the loop.
    ///
    /// Fewer than two vertices yield nothing, so no closing edge is drawn.
    pub fn polygon_edges(vertices: &[Pos2]) -> Vec<[Pos2; 2]> {
        if vertices.len() < 2 {
            return Vec::new();
        }
        (0..vertices.len())
            .map(|i| [vertices[i], vertices[(i + 1) % vertices.len()]])
            .collect()
    }
}
