use crossterm::style::Color;

/// Color theme for the terminal output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Board borders and frame characters
    pub border: Color,
    /// Row and column number labels
    pub label: Color,
    /// Unvisited square placeholder
    pub unvisited: Color,
    /// Visited square step numbers (solution view)
    pub visited: Color,
    /// The knight's current square
    pub knight: Color,
    /// Squares the knight has already passed through
    pub trail: Color,
    /// Legal destination squares and their onward-move counts
    pub candidate: Color,
    /// Informational messages
    pub info: Color,
    /// Error messages ("No solution exists!")
    pub error: Color,
    /// Success messages (completed tour)
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            label: Color::Rgb { r: 160, g: 165, b: 185 },
            unvisited: Color::Rgb { r: 110, g: 115, b: 135 },
            visited: Color::Rgb { r: 80, g: 180, b: 255 },
            knight: Color::Rgb { r: 255, g: 210, b: 100 },
            trail: Color::Rgb { r: 140, g: 150, b: 180 },
            candidate: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme for pale terminal backgrounds
    pub fn light() -> Self {
        Self {
            border: Color::Rgb { r: 120, g: 125, b: 140 },
            label: Color::Rgb { r: 90, g: 95, b: 110 },
            unvisited: Color::Rgb { r: 150, g: 155, b: 170 },
            visited: Color::Rgb { r: 0, g: 90, b: 200 },
            knight: Color::Rgb { r: 180, g: 120, b: 0 },
            trail: Color::Rgb { r: 110, g: 115, b: 135 },
            candidate: Color::Rgb { r: 0, g: 140, b: 60 },
            info: Color::Rgb { r: 90, g: 95, b: 110 },
            error: Color::Rgb { r: 200, g: 40, b: 40 },
            success: Color::Rgb { r: 0, g: 140, b: 60 },
        }
    }
}
