//! Core Knight's Tour engine.
//!
//! The engine is split into a board model ([`Board`], [`Position`]) that
//! tracks which squares a knight has visited and in what order, and a
//! backtracking [`Solver`] that searches for a complete tour (a path
//! visiting every square exactly once).
//!
//! The crate does no I/O; rendering and interaction live in the front end.

mod board;
mod solver;

pub use board::{Board, BoardError, Position};
pub use solver::Solver;
