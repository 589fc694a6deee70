use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde_derive::Deserialize;

use crate::{
    bag::TileBag,
    board::Board,
    dict::Dict,
    direction::{Axis, Pos},
    error::IllegalMove,
    solver::{Candidate, Solver},
    tile::letter_points,
    RACK_SIZE,
};

pub const HUMAN: usize = 0;
pub const COMPUTER: usize = 1;

/// How much of the candidate set the computer considers each turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
    #[default]
    Impossible,
}

impl Difficulty {
    pub fn sample_share(self) -> f64 {
        match self {
            Self::Easy => 0.25,
            Self::Hard => 0.5,
            Self::Impossible => 1.0,
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Hard => "HARD",
            Self::Impossible => "IMPOSSIBLE",
        }
    }
}

/// One game: board, bag, two racks and the turn bookkeeping.
pub struct Game {
    pub board: Board,
    dict: Dict,
    bag: TileBag,
    pub racks: [Vec<char>; 2],
    pub scores: [i32; 2],
    pub difficulty: Difficulty,
    rng: StdRng,
    passes: usize,
}

impl Game {
    pub fn new(dict: Dict, difficulty: Difficulty) -> Self {
        Self::with_rng(dict, difficulty, StdRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn from_seed(dict: Dict, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(dict, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dict: Dict, difficulty: Difficulty, mut rng: StdRng) -> Self {
        let mut bag = TileBag::new(&mut rng);
        let mut racks = [Vec::new(), Vec::new()];
        for rack in &mut racks {
            bag.draw(rack, RACK_SIZE);
        }
        Self {
            board: Board::new(),
            dict,
            bag,
            racks,
            scores: [0; 2],
            difficulty,
            rng,
            passes: 0,
        }
    }

    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// Commits a human placement, then refills the rack and refreshes the
    /// cross masks. Errors leave everything untouched for a re-prompt.
    pub fn human_move(&mut self, word: &str, start: Pos, dir: Axis) -> Result<u32, IllegalMove> {
        let score = self
            .board
            .place(&self.dict, word, start, dir, &mut self.racks[HUMAN])?;
        self.scores[HUMAN] += score as i32;
        self.after_commit(HUMAN);
        Ok(score)
    }

    pub fn pass(&mut self) {
        self.passes += 1;
    }

    /// Enumerates, samples by difficulty, commits the best candidate.
    /// `None` means the computer passes.
    pub fn computer_move(&mut self) -> Option<(Candidate, u32)> {
        let candidates = Solver::new(&self.board, &self.dict, &self.racks[COMPUTER]).moves();
        if candidates.is_empty() {
            self.passes += 1;
            return None;
        }
        let share = self.difficulty.sample_share();
        let k = ((candidates.len() as f64 * share).ceil() as usize).clamp(1, candidates.len());
        debug!("considering {k} of {} candidates", candidates.len());
        let best = candidates
            .choose_multiple(&mut self.rng, k)
            .filter_map(|c| {
                self.board
                    .score_placement(&self.dict, &c.word, c.start, c.dir, &self.racks[COMPUTER])
                    .ok()
                    .map(|eval| (c, eval.score))
            })
            .max_by_key(|&(_, score)| score);
        let Some((chosen, _)) = best else {
            self.passes += 1;
            return None;
        };
        let chosen = chosen.clone();
        match self
            .board
            .place(&self.dict, &chosen.word, chosen.start, chosen.dir, &mut self.racks[COMPUTER])
        {
            Ok(score) => {
                self.scores[COMPUTER] += score as i32;
                self.after_commit(COMPUTER);
                Some((chosen, score))
            }
            Err(_) => {
                self.passes += 1;
                None
            }
        }
    }

    fn after_commit(&mut self, player: usize) {
        self.passes = 0;
        let need = RACK_SIZE.saturating_sub(self.racks[player].len());
        self.bag.draw(&mut self.racks[player], need);
        self.board.recompute_cross_masks(&self.dict);
    }

    /// Over when the bag has run dry and someone played out, or when both
    /// sides passed in the same round.
    pub fn is_over(&self) -> bool {
        self.passes >= 2 || (self.bag.is_empty() && self.racks.iter().any(|r| r.is_empty()))
    }

    /// Leftover rack values move from their owner to the opponent.
    pub fn final_scores(&self) -> [i32; 2] {
        let leftover: [i32; 2] = [
            self.racks[HUMAN].iter().map(|&ch| letter_points(ch) as i32).sum(),
            self.racks[COMPUTER].iter().map(|&ch| letter_points(ch) as i32).sum(),
        ];
        [
            self.scores[HUMAN] - leftover[HUMAN] + leftover[COMPUTER],
            self.scores[COMPUTER] - leftover[COMPUTER] + leftover[HUMAN],
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::direction::CENTER;
    use crate::tile::BLANK;

    fn dict(words: &[&str]) -> Dict {
        Dict::from_words(words.iter().copied()).unwrap()
    }

    fn total_tiles(game: &Game) -> usize {
        game.bag_len() + game.racks[0].len() + game.racks[1].len() + game.board.occupied_count()
    }

    #[test]
    fn initial_deal_fills_both_racks() {
        let game = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 1);
        assert_eq!(game.racks[HUMAN].len(), RACK_SIZE);
        assert_eq!(game.racks[COMPUTER].len(), RACK_SIZE);
        assert_eq!(game.bag_len(), 86);
        assert_eq!(total_tiles(&game), 100);
    }

    #[test]
    fn human_move_scores_refills_and_conserves_tiles() {
        let mut game = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 2);
        game.racks[HUMAN] = vec!['C', 'A', 'T'];
        let before = total_tiles(&game);
        let score = game.human_move("CAT", CENTER, Axis::Across).unwrap();
        assert_eq!(score, 10);
        assert_eq!(game.scores[HUMAN], 10);
        assert_eq!(game.racks[HUMAN].len(), RACK_SIZE);
        assert_eq!(total_tiles(&game), before);
    }

    #[test]
    fn illegal_human_move_changes_nothing() {
        let mut game = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 3);
        game.racks[HUMAN] = vec!['C', 'A', 'T'];
        let err = game.human_move("CAT", Pos::new(0, 0), Axis::Across).unwrap_err();
        assert_eq!(err, IllegalMove::CenterRequired);
        assert_eq!(game.scores[HUMAN], 0);
        assert_eq!(game.racks[HUMAN], vec!['C', 'A', 'T']);
        assert_eq!(game.board.occupied_count(), 0);
    }

    #[test]
    fn impossible_computer_plays_the_best_candidate() {
        let mut game = Game::from_seed(dict(&["cat", "at", "ta"]), Difficulty::Impossible, 4);
        game.racks[COMPUTER] = vec!['C', 'A', 'T'];
        let (mv, score) = game.computer_move().unwrap();
        // every CAT placement through center doubles to 10, beating AT/TA
        assert_eq!(mv.word, "CAT");
        assert_eq!(score, 10);
        assert_eq!(game.scores[COMPUTER], 10);
        assert_eq!(game.board.occupied_count(), 3);
        assert_eq!(game.racks[COMPUTER].len(), RACK_SIZE);
    }

    #[test]
    fn computer_with_no_move_passes() {
        let mut game = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 5);
        game.racks[COMPUTER] = vec!['Z', 'Z'];
        assert!(game.computer_move().is_none());
        assert!(!game.is_over());
        game.pass();
        assert!(game.is_over());
    }

    #[test]
    fn passes_reset_on_a_commit() {
        let mut game = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 6);
        game.pass();
        game.racks[HUMAN] = vec!['C', 'A', 'T'];
        game.human_move("CAT", CENTER, Axis::Across).unwrap();
        game.pass();
        assert!(!game.is_over());
    }

    #[test]
    fn leftover_tiles_swing_the_final_score() {
        let mut game = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 7);
        game.scores = [20, 30];
        game.racks[HUMAN] = vec!['Q', BLANK];
        game.racks[COMPUTER] = vec!['E'];
        // human gives up 10, gains 1; blank is worth nothing
        assert_eq!(game.final_scores(), [11, 39]);
    }

    #[test]
    fn seeded_games_replay_identically() {
        let a = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 9);
        let b = Game::from_seed(dict(&["cat"]), Difficulty::Impossible, 9);
        assert_eq!(a.racks, b.racks);
    }
}
