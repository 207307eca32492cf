//! Splitting text into digraphs.
//!
//! Text is read left to right and cut into letter pairs. A pair never holds
//! the same letter twice: when the next letter repeats the current one, the
//! current letter is padded with [`FILLER`] and the repeated letter starts the
//! following pair. A trailing single letter is padded the same way.

use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// Letter inserted to complete a digraph.
pub const FILLER: char = 'X';

/// Filler used when the letter to pad is [`FILLER`] itself.
pub const FALLBACK_FILLER: char = 'Q';

/// An ordered pair of letters processed as one substitution unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph {
    pub first: char,
    pub second: char,
    /// `second` was synthesized and did not come from the input.
    pub padded: bool,
}

impl Digraph {
    /// Build a digraph from two input letters, upper-cased.
    pub fn new(first: char, second: char) -> Self {
        Digraph {
            first: first.to_ascii_uppercase(),
            second: second.to_ascii_uppercase(),
            padded: false,
        }
    }

    fn with_filler(first: char) -> Self {
        let second = if first == FILLER {
            FALLBACK_FILLER
        } else {
            FILLER
        };
        Digraph {
            first,
            second,
            padded: true,
        }
    }

    /// Number of input letters this digraph consumed.
    #[inline]
    pub fn consumed(&self) -> usize {
        if self.padded {
            1
        } else {
            2
        }
    }
}

/// Lazy iterator over the digraphs of a text.
///
/// Cloning forks the iterator at its current state; call [`digraphs`] again
/// to start over.
#[derive(Debug, Clone)]
pub struct Digraphs<'a> {
    letters: Peekable<Chars<'a>>,
}

/// Pair up `text` according to the Playfair doubling and padding rules.
///
/// # Example
///
/// ```
/// use playfair_core::digraph::digraphs;
///
/// let pairs: Vec<String> = digraphs("balloon")
///     .map(|d| format!("{}{}", d.first, d.second))
///     .collect();
/// assert_eq!(pairs, ["BA", "LX", "LO", "ON"]);
/// ```
pub fn digraphs(text: &str) -> Digraphs<'_> {
    Digraphs {
        letters: text.chars().peekable(),
    }
}

impl Iterator for Digraphs<'_> {
    type Item = Digraph;

    fn next(&mut self) -> Option<Digraph> {
        let first = self.letters.next()?.to_ascii_uppercase();

        let digraph = match self.letters.peek() {
            Some(next) if next.to_ascii_uppercase() != first => {
                let second = next.to_ascii_uppercase();
                self.letters.next();
                Digraph {
                    first,
                    second,
                    padded: false,
                }
            }
            // repeated letter stays unconsumed, or input ran out
            _ => Digraph::with_filler(first),
        };

        Some(digraph)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.letters.size_hint();
        // each digraph consumes one or two letters
        (lower.div_ceil(2), upper)
    }
}

impl FusedIterator for Digraphs<'_> {}
