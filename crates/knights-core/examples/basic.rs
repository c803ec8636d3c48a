//! Basic example of using the Knight's Tour engine

use knights_core::{Board, Position, Solver};

fn main() {
    // A standard chessboard, starting in the corner
    let board = Board::new(8, 8).expect("valid dimensions");
    let start = Position::new(1, 1);

    println!("Searching for a knight's tour on 8x8 from {}...\n", start);
    let solver = Solver::new();
    match solver.solve(&board, start) {
        Some(solution) => {
            println!("Found a tour:");
            println!("{}", solution);
        }
        None => println!("No solution exists!"),
    }

    // Small boards have no complete tour
    println!("\nSearching on 3x3 from (1, 1)...");
    let small = Board::new(3, 3).expect("valid dimensions");
    match solver.solve(&small, Position::new(1, 1)) {
        Some(solution) => println!("{}", solution),
        None => println!("No solution exists!"),
    }

    // The board model answers move-legality queries directly
    let mut board = Board::new(5, 5).expect("valid dimensions");
    board.mark(Position::new(1, 1), 1);
    println!("\nLegal moves from (1, 1) on an otherwise empty 5x5 board:");
    for mv in board.legal_moves(Position::new(1, 1)) {
        println!("  {}", mv);
    }
}
