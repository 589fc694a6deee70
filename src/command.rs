use std::str::FromStr;

use crate::{
    direction::{Axis, Pos},
    error::ParseMoveError,
    BOARD_SIZE,
};

/// One line of player input: `WORD X Y DIR` or `PASS`.
/// X is the 0-based column, Y the 0-based row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place { word: String, start: Pos, dir: Axis },
    Pass,
}

impl FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [pass] if pass.eq_ignore_ascii_case("pass") => Ok(Self::Pass),
            [word, x, y, dir] => {
                let word = word.to_ascii_uppercase();
                if !word.chars().all(|ch| ch.is_ascii_uppercase()) {
                    return Err(ParseMoveError::BadWord(word));
                }
                let col = parse_coord(x)?;
                let row = parse_coord(y)?;
                let dir = if dir.eq_ignore_ascii_case("a") {
                    Axis::Across
                } else if dir.eq_ignore_ascii_case("d") {
                    Axis::Down
                } else {
                    return Err(ParseMoveError::BadDirection(dir.to_string()));
                };
                Ok(Self::Place {
                    word,
                    start: Pos::new(row, col),
                    dir,
                })
            }
            _ => Err(ParseMoveError::BadShape),
        }
    }
}

fn parse_coord(token: &str) -> Result<usize, ParseMoveError> {
    token
        .parse::<usize>()
        .ok()
        .filter(|&v| v < BOARD_SIZE)
        .ok_or_else(|| ParseMoveError::BadCoordinate(token.to_string()))
}
