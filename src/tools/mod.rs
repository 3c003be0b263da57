mod gesture;

pub use gesture::Gesture;

/// The drawing tool selected in the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Rectangle,
    Circle,
    #[default]
    Line,
    Polygon,
    Pencil,
}

impl Mode {
    /// Toolbar order
    pub const ALL: [Mode; 5] = [
        Mode::Rectangle,
        Mode::Circle,
        Mode::Line,
        Mode::Polygon,
        Mode::Pencil,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Line => "Line",
            Self::Polygon => "Polygon",
            Self::Pencil => "Pencil",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rectangle => "▭",
            Self::Circle => "◯",
            Self::Line => "╱",
            Self::Polygon => "⬠",
            Self::Pencil => "✏",
        }
    }
}
