mod app;
mod game;
mod input;
mod render;
mod stats;
mod theme;

use app::App;
use clap::{Parser, ValueEnum};
use std::io;
use theme::Theme;

/// Knight's Tour puzzle: find a tour for any board, or try one yourself
#[derive(Parser)]
#[command(name = "knights", version, about)]
pub struct Cli {
    /// Board width (prompted for when absent)
    #[arg(long)]
    pub width: Option<i32>,

    /// Board height (prompted for when absent)
    #[arg(long)]
    pub height: Option<i32>,

    /// Starting square as 1-based coordinates
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub start: Option<Vec<i32>>,

    /// Pick the starting square at random
    #[arg(long, conflicts_with = "start")]
    pub random_start: bool,

    /// Print the solution instead of offering the interactive puzzle
    #[arg(long)]
    pub solve: bool,

    /// Show attempt statistics and exit
    #[arg(long)]
    pub stats: bool,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: ThemeChoice,
}

/// Selectable color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let mut app = App::new(cli.theme.theme());

    let result = if cli.stats { app.print_stats() } else { app.run(&cli) };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}
