use std::collections::HashSet;

use log::debug;

use crate::{
    board::Board,
    dict::{Dict, Node},
    direction::{Axis, Pos, CENTER},
    tile::{letter_index, rack_counts, BLANK_INDEX},
    BOARD_SIZE,
};

/// A legal-looking placement found by the generator, keyed by word, start
/// square and direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub word: String,
    pub start: Pos,
    pub dir: Axis,
}

/// Anchor-driven move generation after Appel and Jacobson,
/// The World's Fastest Scrabble Program (1988).
///
/// Left parts are built from the rack over cells no existing tile
/// constrains, then extended rightward through the trie, the rack and the
/// cross masks at once.
pub struct Solver<'game> {
    board: &'game Board,
    dict: &'game Dict,
    rack: [u8; 27],
    found: HashSet<Candidate>,
}

impl<'game> Solver<'game> {
    pub fn new(board: &'game Board, dict: &'game Dict, rack: &[char]) -> Self {
        Self {
            board,
            dict,
            rack: rack_counts(rack),
            found: HashSet::new(),
        }
    }

    /// Every distinct candidate reachable from the rack.
    pub fn moves(mut self) -> Vec<Candidate> {
        for anchor in self.anchors() {
            for dir in [Axis::Across, Axis::Down] {
                self.from_anchor(anchor, dir);
            }
        }
        debug!("generated {} candidates", self.found.len());
        self.found.into_iter().collect()
    }

    fn anchors(&self) -> Vec<Pos> {
        if self.board.is_empty() {
            return vec![CENTER];
        }
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
            .filter(|&pos| self.is_anchor(pos))
            .collect()
    }

    fn is_anchor(&self, pos: Pos) -> bool {
        if self.board.is_empty() {
            return pos == CENTER;
        }
        self.board.cell(pos).is_empty()
            && pos.neighbors().any(|n| !self.board.cell(n).is_empty())
    }

    fn from_anchor(&mut self, anchor: Pos, dir: Axis) {
        match anchor.step_back(dir) {
            Some(prev) if !self.board.cell(prev).is_empty() => {
                // the left side is fixed by what is already on the board
                let prefix = self.board.prefix(anchor, dir);
                if let Some(node) = self.dict.node_for_prefix(&prefix) {
                    let mut partial = prefix;
                    self.extend_right(Some(anchor), anchor, dir, &mut partial, node);
                }
            }
            _ => {
                let limit = self.left_limit(anchor, dir);
                let mut partial = String::new();
                self.left_part(anchor, dir, &mut partial, self.dict.root(), limit);
            }
        }
    }

    /// Empty non-anchor cells before `anchor`; stopping at the previous
    /// anchor keeps overlapping windows from re-enumerating placements.
    fn left_limit(&self, anchor: Pos, dir: Axis) -> usize {
        let mut limit = 0;
        let mut cur = anchor;
        while let Some(prev) = cur.step_back(dir) {
            if !self.board.cell(prev).is_empty() || self.is_anchor(prev) {
                break;
            }
            limit += 1;
            cur = prev;
        }
        limit
    }

    fn left_part(
        &mut self,
        anchor: Pos,
        dir: Axis,
        partial: &mut String,
        node: Node,
        limit: usize,
    ) {
        self.extend_right(Some(anchor), anchor, dir, partial, node);
        if limit == 0 {
            return;
        }
        let edges: Vec<(char, Node)> = self.dict.children(node).collect();
        for (letter, next) in edges {
            let Some(slot) = self.take_from_rack(letter) else {
                continue;
            };
            partial.push(letter);
            self.left_part(anchor, dir, partial, next, limit - 1);
            partial.pop();
            self.rack[slot] += 1;
        }
    }

    fn extend_right(
        &mut self,
        pos: Option<Pos>,
        anchor: Pos,
        dir: Axis,
        partial: &mut String,
        node: Node,
    ) {
        let Some(pos) = pos else {
            // ran off the edge; off-grid counts as vacant for recording
            self.record(None, anchor, dir, partial, node);
            return;
        };
        match self.board.letter_at(pos) {
            Some(letter) => {
                // walk through the board tile without touching the rack
                if let Some(next) = self.dict.child(node, letter) {
                    partial.push(letter);
                    self.extend_right(pos.step(dir), anchor, dir, partial, next);
                    partial.pop();
                }
            }
            None => {
                self.record(Some(pos), anchor, dir, partial, node);
                let edges: Vec<(char, Node)> = self.dict.children(node).collect();
                for (letter, next) in edges {
                    if !self.board.cell(pos).valid_cross(letter, dir) {
                        continue;
                    }
                    let Some(slot) = self.take_from_rack(letter) else {
                        continue;
                    };
                    partial.push(letter);
                    self.extend_right(pos.step(dir), anchor, dir, partial, next);
                    partial.pop();
                    self.rack[slot] += 1;
                }
            }
        }
    }

    /// Consumes `letter` from the rack, preferring the natural tile and
    /// falling back to a blank. Returns the slot to restore.
    fn take_from_rack(&mut self, letter: char) -> Option<usize> {
        let ix = letter_index(letter)?;
        let slot = if self.rack[ix] > 0 {
            ix
        } else if self.rack[BLANK_INDEX] > 0 {
            BLANK_INDEX
        } else {
            return None;
        };
        self.rack[slot] -= 1;
        Some(slot)
    }

    /// Records `partial` if it is a word ending just before `after` (or the
    /// edge) with at least one tile laid at or past the anchor.
    fn record(&mut self, after: Option<Pos>, anchor: Pos, dir: Axis, partial: &str, node: Node) {
        let len = partial.chars().count();
        if len == 0 || !self.dict.is_terminal(node) {
            return;
        }
        let after_coord = after.map_or(BOARD_SIZE, |p| p.coord(dir));
        if after_coord <= anchor.coord(dir) {
            return;
        }
        let start = anchor.with_coord(dir, after_coord - len);
        self.found.insert(Candidate {
            word: partial.to_string(),
            start,
            dir,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tile::BLANK;

    fn dict(words: &[&str]) -> Dict {
        Dict::from_words(words.iter().copied()).unwrap()
    }

    fn has(cands: &[Candidate], word: &str, start: Pos, dir: Axis) -> bool {
        cands.iter().any(|c| c.word == word && c.start == start && c.dir == dir)
    }

    #[test]
    fn empty_board_enumerates_through_center() {
        let d = dict(&["at", "ta"]);
        let board = Board::new();
        let cands = Solver::new(&board, &d, &['A', 'T']).moves();
        // each word in both directions, shifted so it still covers center
        assert_eq!(cands.len(), 8);
        assert!(has(&cands, "AT", Pos::new(7, 6), Axis::Across));
        assert!(has(&cands, "AT", Pos::new(7, 7), Axis::Across));
        assert!(has(&cands, "TA", Pos::new(6, 7), Axis::Down));
        assert!(has(&cands, "TA", Pos::new(7, 7), Axis::Down));
        for c in &cands {
            assert!(board.score_placement(&d, &c.word, c.start, c.dir, &['A', 'T']).is_ok());
        }
    }

    #[test]
    fn hooks_and_crosses_on_an_occupied_board() {
        let d = dict(&["cat", "cats", "as"]);
        let mut board = Board::new();
        let mut rack = vec!['C', 'A', 'T'];
        board.place(&d, "CAT", CENTER, Axis::Across, &mut rack).unwrap();
        board.recompute_cross_masks(&d);

        let cands = Solver::new(&board, &d, &['S']).moves();
        assert!(has(&cands, "CATS", Pos::new(7, 7), Axis::Across));
        assert!(has(&cands, "AS", Pos::new(7, 8), Axis::Down));
        assert_eq!(cands.len(), 2);
        for c in &cands {
            assert!(board.score_placement(&d, &c.word, c.start, c.dir, &['S']).is_ok());
        }
    }

    #[test]
    fn blank_stands_in_for_missing_letters() {
        let d = dict(&["cat", "cats", "as"]);
        let mut board = Board::new();
        let mut rack = vec!['C', 'A', 'T'];
        board.place(&d, "CAT", CENTER, Axis::Across, &mut rack).unwrap();
        board.recompute_cross_masks(&d);

        let cands = Solver::new(&board, &d, &[BLANK]).moves();
        assert!(has(&cands, "CATS", Pos::new(7, 7), Axis::Across));
        assert!(has(&cands, "AS", Pos::new(7, 8), Axis::Down));
    }

    #[test]
    fn cross_masks_prune_bad_hooks() {
        // QI across leaves no legal letter under the I
        let d = dict(&["qi"]);
        let mut board = Board::new();
        let mut rack = vec!['Q', 'I'];
        board.place(&d, "QI", CENTER, Axis::Across, &mut rack).unwrap();
        board.recompute_cross_masks(&d);

        let cands = Solver::new(&board, &d, &['Q', 'I']).moves();
        for c in &cands {
            assert!(
                board.score_placement(&d, &c.word, c.start, c.dir, &['Q', 'I']).is_ok(),
                "generator emitted an illegal candidate: {c:?}"
            );
        }
    }

    #[test]
    fn empty_rack_generates_nothing() {
        let d = dict(&["cat"]);
        let board = Board::new();
        assert!(Solver::new(&board, &d, &[]).moves().is_empty());
    }
}
