use crate::game::Session;
use knights_core::{Board, Position};
use std::io::{self, BufRead, Write};

/// Print `prompt` without a trailing newline and read one input line.
fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line)
}

/// Parse a line of exactly two whitespace-separated integers.
fn parse_int_pair(line: &str) -> Option<(i32, i32)> {
    let mut values = line.split_whitespace().map(str::parse::<i32>);
    match (values.next(), values.next(), values.next()) {
        (Some(Ok(a)), Some(Ok(b)), None) => Some((a, b)),
        _ => None,
    }
}

/// Ask for board dimensions until the user supplies two positive integers.
pub fn ask_dimensions() -> io::Result<(i32, i32)> {
    loop {
        let line = prompt_line("Enter your board dimensions: ")?;
        match parse_int_pair(&line) {
            Some((width, height)) if width > 0 && height > 0 => return Ok((width, height)),
            _ => println!("Invalid dimensions!"),
        }
    }
}

/// Ask for the starting square until the user supplies one on the board.
pub fn ask_start(board: &Board) -> io::Result<Position> {
    loop {
        let line = prompt_line("Enter the knight's starting position: ")?;
        match parse_int_pair(&line) {
            Some((x, y)) if board.in_bounds(Position::new(x, y)) => {
                return Ok(Position::new(x, y))
            }
            _ => println!("Invalid position!"),
        }
    }
}

/// Ask for the next move until the user supplies a currently legal one.
pub fn ask_move(session: &Session) -> io::Result<Position> {
    loop {
        let line = prompt_line("Enter your next move: ")?;
        match parse_int_pair(&line) {
            Some((x, y)) if session.available_moves().contains(&Position::new(x, y)) => {
                return Ok(Position::new(x, y))
            }
            _ => println!("Invalid move!"),
        }
    }
}

/// Ask a y/n question until the user answers it.
pub fn ask_yes_no(prompt: &str) -> io::Result<bool> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Invalid input!"),
        }
    }
}
