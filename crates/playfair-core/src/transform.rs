//! Playfair substitution of digraphs and whole messages.
//!
//! Each digraph is replaced by looking at where its two letters sit in the
//! key matrix:
//!
//! - same row: both letters move one column (right to encrypt, left to decrypt)
//! - same column: both letters move one row (down to encrypt, up to decrypt)
//! - otherwise: the letters swap columns, which is its own inverse

use log::{debug, trace};

use crate::digraph::{digraphs, Digraph};
use crate::error::{PlayfairError, Result};
use crate::matrix::{KeyMatrix, Position, SIZE};

/// Which way the substitution runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Forward offset along a row or column, modulo the matrix size.
    #[inline]
    fn step(self) -> usize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => SIZE - 1,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}

/// Substitute a single digraph.
///
/// # Returns
/// * `Err(PlayfairError::NotInAlphabet)` if a letter is not in the matrix
/// * `Err(PlayfairError::RepeatedLetter)` if both letters are the same
pub fn transform(
    digraph: Digraph,
    matrix: &KeyMatrix,
    direction: Direction,
) -> Result<(char, char)> {
    let a = matrix.lookup(digraph.first)?;
    let b = matrix.lookup(digraph.second)?;

    if a == b {
        return Err(PlayfairError::RepeatedLetter(digraph.first));
    }

    let (a, b) = if a.row == b.row {
        (a.shifted_col(direction.step()), b.shifted_col(direction.step()))
    } else if a.col == b.col {
        (a.shifted_row(direction.step()), b.shifted_row(direction.step()))
    } else {
        (
            Position { row: a.row, col: b.col },
            Position { row: b.row, col: a.col },
        )
    };

    Ok((matrix.letter_at(a), matrix.letter_at(b)))
}

/// Pair `text` and substitute every digraph in order.
///
/// The output is never shorter than the input; it grows by one letter for
/// every padded digraph. Empty input gives empty output.
pub fn transform_text(text: &str, matrix: &KeyMatrix, direction: Direction) -> Result<String> {
    let pairs = digraphs(text);
    let mut output = String::with_capacity(pairs.size_hint().0 * 2);
    let mut padded = 0usize;

    for digraph in pairs {
        let (first, second) = transform(digraph, matrix, direction)?;
        trace!(
            "{:?} {}{} -> {}{}",
            direction,
            digraph.first,
            digraph.second,
            first,
            second
        );
        padded += usize::from(digraph.padded);
        output.push(first);
        output.push(second);
    }

    debug!(
        "{:?}: {} letters in, {} letters out, {} padded digraphs",
        direction,
        text.chars().count(),
        output.len(),
        padded
    );

    Ok(output)
}

/// Encrypt `plaintext` with `matrix`.
///
/// # Example
///
/// ```
/// use playfair_core::{build_matrix, encrypt};
///
/// let matrix = build_matrix();
/// assert_eq!(encrypt("HA", &matrix).unwrap(), "DK");
/// ```
pub fn encrypt(plaintext: &str, matrix: &KeyMatrix) -> Result<String> {
    transform_text(plaintext, matrix, Direction::Encrypt)
}

/// Decrypt `ciphertext` with `matrix`.
///
/// Fillers inserted during encryption stay in the result.
pub fn decrypt(ciphertext: &str, matrix: &KeyMatrix) -> Result<String> {
    transform_text(ciphertext, matrix, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(pair: &str, direction: Direction) -> Result<String> {
        let mut letters = pair.chars();
        let digraph = Digraph::new(letters.next().unwrap(), letters.next().unwrap());
        let (a, b) = transform(digraph, &KeyMatrix::new(), direction)?;
        Ok(format!("{a}{b}"))
    }

    #[test]
    fn test_rectangle() {
        assert_eq!(apply("HA", Direction::Encrypt).unwrap(), "DK");
        assert_eq!(apply("DK", Direction::Decrypt).unwrap(), "HA");
        // swapping columns twice is the identity
        assert_eq!(apply("DK", Direction::Encrypt).unwrap(), "HA");
    }

    #[test]
    fn test_same_row() {
        assert_eq!(apply("KU", Direction::Encrypt).unwrap(), "UL");
        assert_eq!(apply("UL", Direction::Decrypt).unwrap(), "KU");
    }

    #[test]
    fn test_same_row_wraps() {
        // I(0,3) A(0,4)
        assert_eq!(apply("IA", Direction::Encrypt).unwrap(), "AK");
        assert_eq!(apply("AK", Direction::Decrypt).unwrap(), "IA");
    }

    #[test]
    fn test_same_column() {
        assert_eq!(apply("KH", Direction::Encrypt).unwrap(), "HE");
        assert_eq!(apply("HE", Direction::Decrypt).unwrap(), "KH");
    }

    #[test]
    fn test_same_column_wraps() {
        // K(0,0) V(4,0)
        assert_eq!(apply("KV", Direction::Encrypt).unwrap(), "HK");
        assert_eq!(apply("HK", Direction::Decrypt).unwrap(), "KV");
    }

    #[test]
    fn test_repeated_letter_is_rejected() {
        assert_eq!(
            apply("LL", Direction::Encrypt),
            Err(PlayfairError::RepeatedLetter('L'))
        );
    }

    #[test]
    fn test_unknown_letter_is_rejected() {
        assert_eq!(
            apply("JA", Direction::Encrypt),
            Err(PlayfairError::NotInAlphabet('J'))
        );
        assert_eq!(
            apply("A1", Direction::Decrypt),
            Err(PlayfairError::NotInAlphabet('1'))
        );
    }

    #[test]
    fn test_direction_inverse() {
        assert_eq!(Direction::Encrypt.inverse(), Direction::Decrypt);
        assert_eq!(Direction::Decrypt.inverse(), Direction::Encrypt);
    }

    #[test]
    fn test_text_with_padding() {
        let m = KeyMatrix::new();
        assert_eq!(encrypt("HELLO", &m).unwrap(), "EORLKQ");
        assert_eq!(decrypt("EORLKQ", &m).unwrap(), "HELXLO");
    }

    #[test]
    fn test_empty_text() {
        let m = KeyMatrix::new();
        assert_eq!(encrypt("", &m).unwrap(), "");
        assert_eq!(decrypt("", &m).unwrap(), "");
    }

    #[test]
    fn test_text_error_is_not_dropped() {
        let m = KeyMatrix::new();
        assert_eq!(
            encrypt("HARI KAMIS", &m),
            Err(PlayfairError::NotInAlphabet(' '))
        );
    }
}
