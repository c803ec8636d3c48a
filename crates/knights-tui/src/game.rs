use knights_core::{Board, BoardError, Position};
use std::time::{Duration, Instant};

/// State of one interactive puzzle attempt.
///
/// Holds the board, the chosen starting square, and the knight's current
/// location. The location is an explicit `Option`: until the knight is
/// placed there is no current position, and [`Session::available_moves`]
/// returns nothing.
pub struct Session {
    board: Board,
    start: Position,
    current: Option<Position>,
    move_count: u32,
    started_at: Instant,
}

impl Session {
    /// Create a session on a fresh board.
    ///
    /// `start` must be in bounds; dimensions are validated by the board.
    pub fn new(width: i32, height: i32, start: Position) -> Result<Self, BoardError> {
        let board = Board::new(width, height)?;
        Ok(Self {
            board,
            start,
            current: None,
            move_count: 0,
            started_at: Instant::now(),
        })
    }

    /// The board in its current state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The chosen starting square
    pub fn start(&self) -> Position {
        self.start
    }

    /// Where the knight is, if it has been placed
    pub fn current(&self) -> Option<Position> {
        self.current
    }

    /// Number of moves made so far, counting the initial placement
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Time since the session was created
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Put the knight on its starting square as step 1.
    pub fn place_knight(&mut self) {
        assert!(self.current.is_none(), "knight already placed");
        self.board.mark(self.start, 1);
        self.current = Some(self.start);
        self.move_count = 1;
    }

    /// Squares the knight can move to right now.
    ///
    /// Empty before the knight is placed, and empty once the knight is
    /// stuck.
    pub fn available_moves(&self) -> Vec<Position> {
        match self.current {
            Some(pos) => self.board.legal_moves(pos),
            None => Vec::new(),
        }
    }

    /// Move the knight to `dest` if that is currently a legal move.
    ///
    /// Returns whether the move was applied.
    pub fn try_move(&mut self, dest: Position) -> bool {
        if !self.available_moves().contains(&dest) {
            return false;
        }
        self.move_count += 1;
        self.board.mark(dest, self.move_count);
        self.current = Some(dest);
        true
    }

    /// Number of squares visited so far
    pub fn squares_visited(&self) -> u32 {
        self.board.visited_count()
    }

    /// Total number of squares on the board
    pub fn total_squares(&self) -> u32 {
        self.board.square_count()
    }

    /// Whether every square has been visited
    pub fn is_complete(&self) -> bool {
        self.board.visited_count() == self.board.square_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_moves_before_placement() {
        let session = Session::new(5, 5, Position::new(1, 1)).unwrap();
        assert!(session.available_moves().is_empty());
        assert_eq!(session.current(), None);
        assert_eq!(session.squares_visited(), 0);
    }

    #[test]
    fn test_place_knight_marks_step_one() {
        let mut session = Session::new(5, 5, Position::new(1, 1)).unwrap();
        session.place_knight();
        assert_eq!(session.current(), Some(Position::new(1, 1)));
        assert_eq!(session.board().visit_order(Position::new(1, 1)), Some(1));
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_try_move_accepts_only_legal_moves() {
        let mut session = Session::new(5, 5, Position::new(1, 1)).unwrap();
        session.place_knight();

        assert!(!session.try_move(Position::new(2, 2)));
        assert!(!session.try_move(Position::new(1, 1)));
        assert_eq!(session.move_count(), 1);

        assert!(session.try_move(Position::new(3, 2)));
        assert_eq!(session.current(), Some(Position::new(3, 2)));
        assert_eq!(session.board().visit_order(Position::new(3, 2)), Some(2));
        assert_eq!(session.move_count(), 2);

        // Can't revisit the starting square
        assert!(!session.try_move(Position::new(1, 1)));
    }

    #[test]
    fn test_stuck_knight_has_no_moves() {
        // On 3x3 the center square has no knight moves at all.
        let mut session = Session::new(3, 3, Position::new(2, 2)).unwrap();
        session.place_knight();
        assert!(session.available_moves().is_empty());
        assert!(!session.is_complete());
        assert_eq!(session.squares_visited(), 1);
    }

    #[test]
    fn test_complete_on_1x1() {
        let mut session = Session::new(1, 1, Position::new(1, 1)).unwrap();
        session.place_knight();
        assert!(session.is_complete());
        assert!(session.available_moves().is_empty());
    }
}
