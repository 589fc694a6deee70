use std::fmt;

use crate::BOARD_SIZE;

/// The center square, where the first word must land.
pub const CENTER: Pos = Pos { row: 7, col: 7 };

/// Axis a word is laid along. Cross-words form along the perpendicular.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Across,
    Down,
}

impl Axis {
    pub fn perp(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Across => 0,
            Self::Down => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Across => "across",
            Self::Down => "down",
        })
    }
}

/// A board coordinate, row and column both 0-14.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step forward along `axis`, `None` past the edge.
    pub fn step(self, axis: Axis) -> Option<Self> {
        self.offset(axis, 1)
    }

    /// One step backward along `axis`, `None` past the edge.
    pub fn step_back(self, axis: Axis) -> Option<Self> {
        match axis {
            Axis::Across => (self.col > 0).then(|| Self::new(self.row, self.col - 1)),
            Axis::Down => (self.row > 0).then(|| Self::new(self.row - 1, self.col)),
        }
    }

    /// `n` steps forward along `axis`, `None` if that leaves the grid.
    pub fn offset(self, axis: Axis, n: usize) -> Option<Self> {
        match axis {
            Axis::Across => {
                (self.col + n < BOARD_SIZE).then(|| Self::new(self.row, self.col + n))
            }
            Axis::Down => (self.row + n < BOARD_SIZE).then(|| Self::new(self.row + n, self.col)),
        }
    }

    /// The coordinate that varies along `axis`.
    pub fn coord(self, axis: Axis) -> usize {
        match axis {
            Axis::Across => self.col,
            Axis::Down => self.row,
        }
    }

    /// This position with the `axis` coordinate replaced.
    pub fn with_coord(self, axis: Axis, v: usize) -> Self {
        match axis {
            Axis::Across => Self::new(self.row, v),
            Axis::Down => Self::new(v, self.col),
        }
    }

    /// In-grid 4-neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        let Pos { row, col } = self;
        [
            row.checked_sub(1).map(|r| Pos::new(r, col)),
            (row + 1 < BOARD_SIZE).then(|| Pos::new(row + 1, col)),
            col.checked_sub(1).map(|c| Pos::new(row, c)),
            (col + 1 < BOARD_SIZE).then(|| Pos::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stepping_respects_edges() {
        assert_eq!(Pos::new(0, 14).step(Axis::Across), None);
        assert_eq!(Pos::new(0, 14).step(Axis::Down), Some(Pos::new(1, 14)));
        assert_eq!(Pos::new(0, 0).step_back(Axis::Down), None);
        assert_eq!(Pos::new(3, 3).offset(Axis::Across, 11), Some(Pos::new(3, 14)));
        assert_eq!(Pos::new(3, 3).offset(Axis::Across, 12), None);
    }

    #[test]
    fn corner_has_two_neighbors() {
        assert_eq!(Pos::new(0, 0).neighbors().count(), 2);
        assert_eq!(CENTER.neighbors().count(), 4);
    }

    #[test]
    fn coord_round_trips() {
        let p = Pos::new(3, 9);
        assert_eq!(p.coord(Axis::Across), 9);
        assert_eq!(p.coord(Axis::Down), 3);
        assert_eq!(p.with_coord(Axis::Across, 1), Pos::new(3, 1));
        assert_eq!(p.with_coord(Axis::Down, 1), Pos::new(1, 9));
    }
}
