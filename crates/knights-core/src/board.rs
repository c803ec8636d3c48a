use serde::{Deserialize, Serialize};
use std::fmt;

/// The 8 knight-move offsets, enumerated counterclockwise from (+2, +1).
///
/// The enumeration order is fixed: it determines the branching order of the
/// tour search and therefore which tour is found first.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// A square on the board, addressed by 1-based coordinates.
///
/// `x` runs from 1 (left) to the board width, `y` from 1 (bottom) to the
/// board height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position from 1-based coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error raised when constructing a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is not a positive integer
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A rectangular board tracking the order in which a knight visited squares.
///
/// Each cell is either unvisited or holds the 1-based step number at which
/// the knight landed on it. The board is mutated in place during search:
/// marked on entry into a square, unmarked again on backtrack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major cells, `Some(order)` = visited at that step
    cells: Vec<Option<u32>>,
    /// Running count of visited cells
    visited: u32,
}

impl Board {
    /// Create a board with all squares unvisited.
    ///
    /// Fails with [`BoardError::InvalidDimensions`] unless both dimensions
    /// are at least 1.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width < 1 || height < 1 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
            visited: 0,
        })
    }

    /// Board width
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of squares (width x height)
    pub fn square_count(&self) -> u32 {
        (self.width as u32) * (self.height as u32)
    }

    /// Number of visited squares
    pub fn visited_count(&self) -> u32 {
        self.visited
    }

    /// Whether `pos` lies on the board
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.x <= self.width && pos.y >= 1 && pos.y <= self.height
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {} outside {}x{} board",
            pos,
            self.width,
            self.height
        );
        ((pos.y - 1) as usize) * (self.width as usize) + ((pos.x - 1) as usize)
    }

    /// Whether the square at `pos` has been visited.
    ///
    /// Panics if `pos` is out of bounds.
    pub fn is_visited(&self, pos: Position) -> bool {
        self.cells[self.index(pos)].is_some()
    }

    /// The step number at which `pos` was visited, if it was.
    ///
    /// Panics if `pos` is out of bounds.
    pub fn visit_order(&self, pos: Position) -> Option<u32> {
        self.cells[self.index(pos)]
    }

    /// Mark the square at `pos` as visited at step `order`.
    ///
    /// Panics if `pos` is out of bounds.
    pub fn mark(&mut self, pos: Position, order: u32) {
        let idx = self.index(pos);
        if self.cells[idx].is_none() {
            self.visited += 1;
        }
        self.cells[idx] = Some(order);
    }

    /// Reset the square at `pos` to unvisited.
    ///
    /// Panics if `pos` is out of bounds.
    pub fn unmark(&mut self, pos: Position) {
        let idx = self.index(pos);
        if self.cells[idx].is_some() {
            self.visited -= 1;
        }
        self.cells[idx] = None;
    }

    /// Squares a knight on `from` can move to: the 8 knight offsets,
    /// filtered to squares that are on the board and not yet visited.
    ///
    /// The returned order follows the fixed offset enumeration, so the
    /// tour search is deterministic.
    pub fn legal_moves(&self, from: Position) -> Vec<Position> {
        KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| Position::new(from.x + dx, from.y + dy))
            .filter(|&pos| self.in_bounds(pos) && !self.is_visited(pos))
            .collect()
    }

    /// Width of a rendered cell: the digit count of the highest step number
    pub fn cell_width(&self) -> usize {
        self.square_count().to_string().len()
    }
}

impl fmt::Display for Board {
    /// Render the board as a text grid: dash borders, row numbers on the
    /// left (y decreasing top to bottom), column numbers underneath.
    /// Unvisited squares are underscores, visited squares show their step
    /// number right-aligned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_w = self.cell_width();
        let label_w = self.height.to_string().len();
        let border = "-".repeat((self.width as usize) * (cell_w + 1) + 3);

        writeln!(f, "{:>width$}", border, width = label_w + border.len())?;
        for y in (1..=self.height).rev() {
            let mut row = String::new();
            for x in 1..=self.width {
                if x > 1 {
                    row.push(' ');
                }
                match self.visit_order(Position::new(x, y)) {
                    Some(order) => row.push_str(&format!("{:>cell_w$}", order)),
                    None => row.push_str(&"_".repeat(cell_w)),
                }
            }
            writeln!(f, "{:>label_w$}| {} |", y, row)?;
        }
        writeln!(f, "{:>width$}", border, width = label_w + border.len())?;

        let mut footer = String::new();
        for x in 1..=self.width {
            footer.push_str(&format!("{:>width$}", x, width = cell_w + 1));
        }
        write!(
            f,
            "{:>width$}",
            footer,
            width = label_w + 1 + (self.width as usize) * (cell_w + 1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_dimensions() {
        assert!(Board::new(5, 5).is_ok());
        assert!(Board::new(1, 1).is_ok());

        for (w, h) in [(0, 5), (5, 0), (0, 0), (-3, 4), (4, -1)] {
            assert_eq!(
                Board::new(w, h),
                Err(BoardError::InvalidDimensions { width: w, height: h })
            );
        }
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::new(5, 3).unwrap();
        assert!(board.in_bounds(Position::new(1, 1)));
        assert!(board.in_bounds(Position::new(5, 3)));
        assert!(!board.in_bounds(Position::new(0, 1)));
        assert!(!board.in_bounds(Position::new(1, 0)));
        assert!(!board.in_bounds(Position::new(6, 1)));
        assert!(!board.in_bounds(Position::new(1, 4)));
        assert!(!board.in_bounds(Position::new(0, 0)));
    }

    #[test]
    fn test_mark_unmark_roundtrip() {
        let mut board = Board::new(4, 4).unwrap();
        let pos = Position::new(2, 3);

        assert!(!board.is_visited(pos));
        assert_eq!(board.visited_count(), 0);

        board.mark(pos, 7);
        assert!(board.is_visited(pos));
        assert_eq!(board.visit_order(pos), Some(7));
        assert_eq!(board.visited_count(), 1);

        board.unmark(pos);
        assert!(!board.is_visited(pos));
        assert_eq!(board.visit_order(pos), None);
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    fn test_mark_same_square_twice_counts_once() {
        let mut board = Board::new(3, 3).unwrap();
        let pos = Position::new(1, 1);
        board.mark(pos, 1);
        board.mark(pos, 2);
        assert_eq!(board.visited_count(), 1);
        assert_eq!(board.visit_order(pos), Some(2));
    }

    #[test]
    fn test_legal_moves_center() {
        let board = Board::new(5, 5).unwrap();
        let moves = board.legal_moves(Position::new(3, 3));
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_legal_moves_corner_order() {
        let board = Board::new(5, 5).unwrap();
        // From the corner only the first two offsets of the enumeration land
        // on the board.
        assert_eq!(
            board.legal_moves(Position::new(1, 1)),
            vec![Position::new(3, 2), Position::new(2, 3)]
        );
    }

    #[test]
    fn test_legal_moves_excludes_visited() {
        let mut board = Board::new(5, 5).unwrap();
        board.mark(Position::new(3, 2), 1);
        let moves = board.legal_moves(Position::new(1, 1));
        assert_eq!(moves, vec![Position::new(2, 3)]);
    }

    #[test]
    fn test_legal_moves_always_on_board_and_unvisited() {
        let mut board = Board::new(4, 3).unwrap();
        board.mark(Position::new(2, 2), 1);
        board.mark(Position::new(4, 3), 2);
        for y in 1..=3 {
            for x in 1..=4 {
                for mv in board.legal_moves(Position::new(x, y)) {
                    assert!(board.in_bounds(mv));
                    assert!(!board.is_visited(mv));
                }
            }
        }
    }

    #[test]
    fn test_display_empty_3x3() {
        let board = Board::new(3, 3).unwrap();
        let expected = [
            " ---------",
            "3| _ _ _ |",
            "2| _ _ _ |",
            "1| _ _ _ |",
            " ---------",
            "   1 2 3",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_marked_5x5() {
        let mut board = Board::new(5, 5).unwrap();
        board.mark(Position::new(1, 1), 1);
        board.mark(Position::new(3, 2), 2);
        board.mark(Position::new(5, 3), 10);
        let expected = [
            " ------------------",
            "5| __ __ __ __ __ |",
            "4| __ __ __ __ __ |",
            "3| __ __ __ __ 10 |",
            "2| __ __  2 __ __ |",
            "1|  1 __ __ __ __ |",
            " ------------------",
            "    1  2  3  4  5",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_wide_board_alignment() {
        let board = Board::new(12, 10).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        // 10 rows plus two borders and the column footer
        assert_eq!(lines.len(), 13);
        assert!(lines[0].ends_with("---"));
        assert!(lines[1].starts_with("10| ___"));
        assert!(lines[10].starts_with(" 1| ___"));
        assert!(lines[12].ends_with("  10  11  12"));
        // Every line up to the footer is the same width
        for line in &lines[..12] {
            assert_eq!(line.len(), lines[0].len());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut board = Board::new(3, 4).unwrap();
        board.mark(Position::new(2, 2), 1);
        board.mark(Position::new(3, 4), 2);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert_eq!(back.visited_count(), 2);
        assert_eq!(back.visit_order(Position::new(2, 2)), Some(1));
    }
}
