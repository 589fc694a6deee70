use crossterm::{
    style::Stylize,
    terminal,
};
use itertools::Itertools;

use crate::{
    board::{Board, Multiplier},
    direction::Pos,
    game::{Game, COMPUTER, HUMAN},
    tile::{letter_points, BLANK},
    BOARD_SIZE,
};

const CELL_WIDTH: usize = 4;

/// Renders the board, racks, scores and difficulty banner, centered to the
/// detected terminal width.
pub fn render(game: &Game) {
    let width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
    let grid_width = BOARD_SIZE * CELL_WIDTH + 3;
    let margin = " ".repeat(width.saturating_sub(grid_width) / 2);

    println!();
    println!(
        "{margin}{}",
        format!("WORDRACK [{}]", game.difficulty.banner()).bold()
    );
    println!(
        "{margin}   {}",
        (0..BOARD_SIZE)
            .map(|col| format!("{col:^width$}", width = CELL_WIDTH))
            .join("")
    );
    for row in 0..BOARD_SIZE {
        let cells: String = (0..BOARD_SIZE)
            .map(|col| styled_cell(&game.board, Pos::new(row, col)))
            .collect();
        println!("{margin}{row:>2} {cells}");
    }

    let rack = game.racks[HUMAN]
        .iter()
        .map(|&ch| {
            if ch == BLANK {
                "_ 0".to_string()
            } else {
                format!("{ch} {}", letter_points(ch))
            }
        })
        .join(" | ");
    println!("{margin}Your rack: {rack}");
    println!(
        "{margin}You {} pts | Computer {} pts ({} tiles) | {} in the bag",
        game.scores[HUMAN],
        game.scores[COMPUTER],
        game.racks[COMPUTER].len(),
        game.bag_len(),
    );
}

fn styled_cell(board: &Board, pos: Pos) -> String {
    let cell = board.cell(pos);
    if let Some(tile) = cell.tile() {
        // blanks show lowercase so their worthlessness stays visible
        let shown = if tile.points == 0 {
            tile.letter.to_ascii_lowercase()
        } else {
            tile.letter
        };
        return format!("{}", format!("[{shown} ]").bold());
    }
    match cell.mult() {
        Some(mult) => {
            let text = format!("[{mult}]");
            let styled = match mult {
                Multiplier::Dl => text.black().on_dark_blue(),
                Multiplier::Tl => text.black().on_blue(),
                Multiplier::Dw => text.black().on_dark_red(),
                Multiplier::Tw => text.black().on_red(),
            };
            format!("{styled}")
        }
        None => "[  ]".to_string(),
    }
}
