/// The blank tile. It has no letter of its own until placed.
pub const BLANK: char = ' ';

/// Slot for blanks in a 27-entry rack tally.
pub const BLANK_INDEX: usize = 26;

/// Face value of a letter under standard English scoring.
pub fn letter_points(letter: char) -> u32 {
    match letter {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Index 0-25 for A-Z, `None` for anything else (including the blank).
pub fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| letter as usize - 'A' as usize)
}

/// Tallies a rack into 27 counts, A-Z plus the blank.
pub fn rack_counts(rack: &[char]) -> [u8; 27] {
    let mut counts = [0u8; 27];
    for &ch in rack {
        match letter_index(ch) {
            Some(i) => counts[i] += 1,
            None if ch == BLANK => counts[BLANK_INDEX] += 1,
            None => {}
        }
    }
    counts
}

/// A tile as committed to the board. Tiles derived from a blank keep the
/// letter they impersonate but stay worth zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub points: u32,
}

impl Tile {
    pub fn natural(letter: char) -> Self {
        Self {
            letter,
            points: letter_points(letter),
        }
    }

    pub fn from_blank(letter: char) -> Self {
        Self { letter, points: 0 }
    }
}
