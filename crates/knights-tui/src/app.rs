use crate::game::Session;
use crate::input;
use crate::render;
use crate::stats::{AttemptOutcome, StatsManager};
use crate::theme::Theme;
use crate::Cli;
use knights_core::{Board, Position, Solver};
use rand::Rng;
use std::io::{self, Write};

/// The application: wires the CLI, the prompts, the solver and the
/// persisted statistics together.
pub struct App {
    theme: Theme,
    solver: Solver,
    stats: StatsManager,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            solver: Solver::new(),
            stats: StatsManager::load(),
        }
    }

    /// Run one puzzle: gather dimensions and starting square, check a tour
    /// exists, then either play interactively or print the solution.
    pub fn run(&mut self, cli: &Cli) -> io::Result<()> {
        let mut stdout = io::stdout();

        let board = self.resolve_board(cli)?;
        let start = self.resolve_start(cli, &board)?;

        let play = if cli.solve {
            false
        } else {
            input::ask_yes_no("Do you want to try the puzzle? (y/n): ")?
        };

        // The puzzle is only playable when a full tour is possible.
        match self.solver.solve(&board, start) {
            None => render::say(&mut stdout, self.theme.error, "No solution exists!")?,
            Some(solution) => {
                if play {
                    self.play(&mut stdout, board.width(), board.height(), start)?;
                } else {
                    render::say(&mut stdout, self.theme.info, "Here's the solution!")?;
                    render::render_board(&mut stdout, &solution, &self.theme)?;
                }
            }
        }
        Ok(())
    }

    /// Board dimensions from the CLI, or prompted for when absent.
    fn resolve_board(&self, cli: &Cli) -> io::Result<Board> {
        match (cli.width, cli.height) {
            (Some(width), Some(height)) => Board::new(width, height)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string())),
            (None, None) => {
                let (width, height) = input::ask_dimensions()?;
                Ok(Board::new(width, height).expect("prompt only accepts valid dimensions"))
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--width and --height must be given together",
            )),
        }
    }

    /// Starting square from the CLI, at random, or prompted for.
    fn resolve_start(&self, cli: &Cli, board: &Board) -> io::Result<Position> {
        if cli.random_start {
            let mut rng = rand::thread_rng();
            return Ok(Position::new(
                rng.gen_range(1..=board.width()),
                rng.gen_range(1..=board.height()),
            ));
        }
        if let Some(coords) = &cli.start {
            let pos = Position::new(coords[0], coords[1]);
            if !board.in_bounds(pos) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("starting position {} is not on the board", pos),
                ));
            }
            return Ok(pos);
        }
        input::ask_start(board)
    }

    /// The interactive mode: show legal moves with onward-move counts,
    /// apply the player's moves until the knight is stuck.
    fn play(
        &mut self,
        stdout: &mut io::Stdout,
        width: i32,
        height: i32,
        start: Position,
    ) -> io::Result<()> {
        let mut session =
            Session::new(width, height, start).expect("dimensions validated earlier");
        session.place_knight();

        loop {
            render::say(stdout, self.theme.info, "Here are the possible moves:")?;
            render::render_session(stdout, &session, &self.theme)?;
            if session.available_moves().is_empty() {
                break;
            }
            let mv = input::ask_move(&session)?;
            session.try_move(mv);
        }

        render::say(stdout, self.theme.info, "No more possible moves!")?;
        let visited = session.squares_visited();
        if session.is_complete() {
            render::say(
                stdout,
                self.theme.success,
                &format!(
                    "Congratulations, you managed to visit all {} squares in one knight's tour!",
                    visited
                ),
            )?;
        } else {
            render::say(
                stdout,
                self.theme.info,
                &format!("Your knight visited {} squares!", visited),
            )?;
        }

        self.stats.record_attempt(
            width,
            height,
            start,
            visited,
            session.total_squares(),
            session.elapsed().as_secs(),
        );
        self.stats.save();
        Ok(())
    }

    /// Print a summary of the persisted attempt history.
    pub fn print_stats(&self) -> io::Result<()> {
        let mut stdout = io::stdout();

        if self.stats.total_attempts() == 0 {
            writeln!(stdout, "No attempts recorded yet.")?;
            return Ok(());
        }

        writeln!(stdout, "Attempts: {}", self.stats.total_attempts())?;
        writeln!(stdout, "Full tours: {}", self.stats.full_tours())?;
        if let Some(best) = self.stats.best_coverage() {
            writeln!(stdout, "Best coverage: {:.1}%", best)?;
        }

        writeln!(stdout, "\nRecent attempts:")?;
        for record in self.stats.history.iter().take(10) {
            let outcome = match record.outcome {
                AttemptOutcome::FullTour => "full tour",
                AttemptOutcome::Partial => "partial",
            };
            writeln!(
                stdout,
                "  {}x{} from {}: {}/{} squares ({}) in {}s",
                record.width,
                record.height,
                record.start,
                record.squares_visited,
                record.total_squares,
                outcome,
                record.duration_secs,
            )?;
        }
        Ok(())
    }
}
