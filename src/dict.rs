use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use fst::raw::CompiledAddr;
use log::{debug, info};

use crate::error::Error;

// newtype compiledaddr to stop misuse
// (compiledaddr is just a type alias for usize)
#[derive(Clone, Copy)]
pub struct Node {
    addr: CompiledAddr,
}

/// The word list, stored as an fst and walked like a trie: every state is a
/// prefix, final states are words.
#[derive(Clone)]
pub struct Dict {
    set: fst::Set<Vec<u8>>,
}

impl Dict {
    /// Builds the dictionary from arbitrary words. Lines that are empty or
    /// contain anything but A-Z (after uppercasing) are dropped.
    pub fn from_words<I, S>(words: I) -> Result<Self, fst::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        entries.sort_unstable();
        entries.dedup();
        Ok(Self {
            set: fst::Set::from_iter(entries)?,
        })
    }

    /// Loads `path`, one word per line.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path).map_err(Error::DictionaryLoad)?);
        let mut words = Vec::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            match normalize(&line.map_err(Error::DictionaryLoad)?) {
                Some(word) => words.push(word),
                None => skipped += 1,
            }
        }
        words.sort_unstable();
        words.dedup();
        let set = fst::Set::from_iter(words).map_err(Error::DictionaryBuild)?;
        if skipped > 0 {
            debug!("skipped {skipped} unusable lines in {}", path.display());
        }
        info!("dictionary holds {} words", set.len());
        Ok(Self { set })
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Case-insensitive membership. The empty word is never contained.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.set.contains(word.to_ascii_uppercase().as_bytes())
    }

    pub fn root(&self) -> Node {
        Node {
            addr: self.set.as_fst().root().addr(),
        }
    }

    /// Follows one letter edge, if present.
    pub fn child(&self, node: Node, letter: char) -> Option<Node> {
        let current = self.set.as_fst().node(node.addr);
        current
            .find_input(letter.to_ascii_uppercase() as u8)
            .map(|i| Node {
                addr: current.transition_addr(i),
            })
    }

    /// Whether a word ends at this node.
    pub fn is_terminal(&self, node: Node) -> bool {
        self.set.as_fst().node(node.addr).is_final()
    }

    /// Follows every letter of `letters` from `node`.
    pub fn walk(&self, node: Node, letters: &str) -> Option<Node> {
        letters.chars().try_fold(node, |n, ch| self.child(n, ch))
    }

    /// The node reached by a prefix, which need not be a full word.
    pub fn node_for_prefix(&self, prefix: &str) -> Option<Node> {
        self.walk(self.root(), prefix)
    }

    /// All outgoing letter edges of `node`.
    pub fn children(&self, node: Node) -> impl Iterator<Item = (char, Node)> + '_ {
        let current = self.set.as_fst().node(node.addr);
        (0..current.len()).map(move |i| {
            let t = current.transition(i);
            (t.inp as char, Node { addr: t.addr })
        })
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}
