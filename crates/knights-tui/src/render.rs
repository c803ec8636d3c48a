use crate::game::Session;
use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use knights_core::{Board, Position};
use std::collections::HashMap;
use std::io::{self, Write};

/// Text and color for one square of the rendered frame
struct CellView {
    text: String,
    color: Color,
}

/// Print the board with visited squares shown as step numbers.
///
/// Used for the solved board; the frame layout matches the board's plain
/// `Display` output.
pub fn render_board(stdout: &mut io::Stdout, board: &Board, theme: &Theme) -> io::Result<()> {
    draw_frame(stdout, board, theme, |pos| match board.visit_order(pos) {
        Some(order) => CellView {
            text: order.to_string(),
            color: theme.visited,
        },
        None => CellView {
            text: "_".repeat(board.cell_width()),
            color: theme.unvisited,
        },
    })
}

/// Print the board as the player sees it mid-attempt: the knight as `X`,
/// its trail as `*`, and every legal destination annotated with the number
/// of onward moves it would have.
pub fn render_session(stdout: &mut io::Stdout, session: &Session, theme: &Theme) -> io::Result<()> {
    let board = session.board();
    let mut onward_counts: HashMap<Position, usize> = HashMap::new();
    for mv in session.available_moves() {
        onward_counts.insert(mv, board.legal_moves(mv).len());
    }

    draw_frame(stdout, board, theme, |pos| {
        if session.current() == Some(pos) {
            CellView {
                text: "X".to_string(),
                color: theme.knight,
            }
        } else if board.is_visited(pos) {
            CellView {
                text: "*".to_string(),
                color: theme.trail,
            }
        } else if let Some(count) = onward_counts.get(&pos) {
            CellView {
                text: count.to_string(),
                color: theme.candidate,
            }
        } else {
            CellView {
                text: "_".repeat(board.cell_width()),
                color: theme.unvisited,
            }
        }
    })
}

/// Emit the bordered frame, delegating square content to `cell`.
fn draw_frame(
    stdout: &mut io::Stdout,
    board: &Board,
    theme: &Theme,
    cell: impl Fn(Position) -> CellView,
) -> io::Result<()> {
    let cell_w = board.cell_width();
    let label_w = board.height().to_string().len();
    let border = "-".repeat((board.width() as usize) * (cell_w + 1) + 3);

    queue!(
        stdout,
        SetForegroundColor(theme.border),
        Print(format!("{:>width$}\n", border, width = label_w + border.len()))
    )?;

    for y in (1..=board.height()).rev() {
        queue!(
            stdout,
            SetForegroundColor(theme.label),
            Print(format!("{:>label_w$}", y)),
            SetForegroundColor(theme.border),
            Print("| ")
        )?;
        for x in 1..=board.width() {
            if x > 1 {
                queue!(stdout, Print(" "))?;
            }
            let view = cell(Position::new(x, y));
            queue!(
                stdout,
                SetForegroundColor(view.color),
                Print(format!("{:>cell_w$}", view.text))
            )?;
        }
        queue!(stdout, SetForegroundColor(theme.border), Print(" |\n"))?;
    }

    queue!(
        stdout,
        Print(format!("{:>width$}\n", border, width = label_w + border.len()))
    )?;

    let mut footer = String::new();
    for x in 1..=board.width() {
        footer.push_str(&format!("{:>width$}", x, width = cell_w + 1));
    }
    queue!(
        stdout,
        SetForegroundColor(theme.label),
        Print(format!(
            "{:>width$}\n",
            footer,
            width = label_w + 1 + (board.width() as usize) * (cell_w + 1)
        )),
        ResetColor
    )?;

    stdout.flush()
}

/// Print a one-line message in the given color.
pub fn say(stdout: &mut io::Stdout, color: Color, message: &str) -> io::Result<()> {
    queue!(
        stdout,
        SetForegroundColor(color),
        Print(message),
        ResetColor,
        Print("\n")
    )?;
    stdout.flush()
}
