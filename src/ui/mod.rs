//! Text rendering for the terminal shell
//!
//! Pure string building: the caller decides when to render and where to print.

pub mod palette;

use std::fmt::Write;

use crate::consts::{BOARD_SIZE, TARGET_TILE};
use crate::sim::{Board, GameSession};

pub use palette::{Rgb, tile_color, text_color};

/// Width of one cell, in characters
const CELL_WIDTH: usize = 6;

/// Rules shown under the board
pub const RULES: &str =
    "Use the arrow keys (w/a/s/d or h/j/k/l) to slide the tiles. Equal tiles merge. Reach 2048!";

/// Shown once when the target tile first appears
pub fn win_message() -> String {
    format!("Congratulations, you made a {} tile! Keep going.", TARGET_TILE)
}

/// Shown when no move is left
pub fn game_over_message(final_score: u64) -> String {
    format!("Game over! Final score: {}. Play again? (y/n)", final_score)
}

/// Render the whole session: header, board and rules
pub fn render<S, R>(session: &GameSession<S, R>, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}Score: {:>7}   Best: {:>7}",
        TARGET_TILE,
        session.score(),
        session.high_score()
    );
    out.push_str(&render_board(session.board(), color));
    out.push_str(RULES);
    out.push('\n');
    out
}

/// Render a board as a framed grid
pub fn render_board(board: &Board, color: bool) -> String {
    let border = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(BOARD_SIZE));
    let border = paint_frame(&border, color);
    let bar = paint_frame("|", color);

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in board.rows() {
        out.push_str(&bar);
        for &value in row {
            out.push_str(&render_cell(value, color));
            out.push_str(&bar);
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// Grid lines on the frame background
fn paint_frame(text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", palette::FRAME.ansi_bg(), text, palette::ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn render_cell(value: u32, color: bool) -> String {
    let label = if value == 0 {
        String::new()
    } else {
        value.to_string()
    };
    let text = format!("{:^width$}", label, width = CELL_WIDTH);

    if color {
        format!(
            "{}{}{}{}",
            tile_color(value).ansi_bg(),
            text_color(value).ansi_fg(),
            text,
            palette::ANSI_RESET
        )
    } else {
        text
    }
}
