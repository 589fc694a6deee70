use rand::{seq::SliceRandom, Rng};

use crate::tile::BLANK;

/// Canonical English distribution, 100 tiles including two blanks.
const DISTRIBUTION: &[(char, usize)] = &[
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
    (BLANK, 2),
];

/// The shuffled pool of undrawn tiles. Draws come off the front.
pub struct TileBag {
    tiles: Vec<char>,
}

impl TileBag {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut tiles: Vec<char> = DISTRIBUTION
            .iter()
            .flat_map(|&(ch, n)| std::iter::repeat(ch).take(n))
            .collect();
        tiles.shuffle(rng);
        Self { tiles }
    }

    /// Moves up to `n` tiles into `rack`. Drawing from an empty bag is fine
    /// and simply yields fewer tiles.
    pub fn draw(&mut self, rack: &mut Vec<char>, n: usize) {
        let take = n.min(self.tiles.len());
        rack.extend(self.tiles.drain(0..take));
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn holds_the_full_distribution() {
        let mut bag = TileBag::new(&mut StdRng::seed_from_u64(1));
        assert_eq!(bag.len(), 100);
        let mut all = Vec::new();
        bag.draw(&mut all, 100);
        assert!(bag.is_empty());
        assert_eq!(all.iter().filter(|&&ch| ch == 'E').count(), 12);
        assert_eq!(all.iter().filter(|&&ch| ch == 'Q').count(), 1);
        assert_eq!(all.iter().filter(|&&ch| ch == BLANK).count(), 2);
    }

    #[test]
    fn draws_refill_and_respect_emptiness() {
        let mut bag = TileBag::new(&mut StdRng::seed_from_u64(2));
        let mut rack = Vec::new();
        bag.draw(&mut rack, 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 93);

        let mut rest = Vec::new();
        bag.draw(&mut rest, 200);
        assert_eq!(rest.len(), 93);
        bag.draw(&mut rest, 7);
        assert_eq!(rest.len(), 93);
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        TileBag::new(&mut StdRng::seed_from_u64(3)).draw(&mut a, 100);
        TileBag::new(&mut StdRng::seed_from_u64(3)).draw(&mut b, 100);
        assert_eq!(a, b);
    }
}
