use std::{error, fmt, io};

/// Why the board rejected a requested placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds,
    UnknownWord,
    RackInsufficient,
    CrossConflict,
    NoContact,
    CenterRequired,
    NoTilesPlaced,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfBounds => "the word does not fit on the board",
            Self::UnknownWord => "that is not a word in the dictionary",
            Self::RackInsufficient => "your rack cannot supply those letters",
            Self::CrossConflict => "it conflicts with tiles already on the board",
            Self::NoContact => "the word must connect to existing tiles",
            Self::CenterRequired => "the first word must cover the center square",
            Self::NoTilesPlaced => "it would place no new tiles",
        })
    }
}

impl error::Error for IllegalMove {}

/// A move line that could not be understood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    BadShape,
    BadWord(String),
    BadCoordinate(String),
    BadDirection(String),
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadShape => write!(f, "expected `WORD X Y DIR` or `PASS`"),
            Self::BadWord(w) => write!(f, "not a playable word: {w}"),
            Self::BadCoordinate(t) => write!(f, "coordinates run 0-14: {t}"),
            Self::BadDirection(t) => write!(f, "direction is A (across) or D (down): {t}"),
        }
    }
}

impl error::Error for ParseMoveError {}

/// Fatal startup failures.
#[derive(Debug)]
pub enum Error {
    DictionaryLoad(io::Error),
    DictionaryBuild(fst::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryLoad(e) => write!(f, "reading word list: {e}"),
            Self::DictionaryBuild(e) => write!(f, "building dictionary: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::DictionaryLoad(e) => Some(e),
            Self::DictionaryBuild(e) => Some(e),
        }
    }
}
