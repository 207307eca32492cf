//! Key matrix for the Playfair cipher.
//!
//! The matrix is a 5×5 grid holding 25 distinct uppercase letters. One letter
//! of the Latin alphabet is left out (`J` for the fixed grid). Letter lookups go
//! through a table built once at construction time, so every lookup is O(1).

use std::fmt;
use std::sync::OnceLock;

use crate::error::{PlayfairError, Result};

/// Number of rows and columns of the key matrix.
pub const SIZE: usize = 5;

/// The fixed grid every cipher operation uses unless a caller supplies its own.
pub const FIXED_ROWS: [[char; SIZE]; SIZE] = [
    ['K', 'U', 'L', 'I', 'A'],
    ['H', 'B', 'R', 'C', 'D'],
    ['E', 'F', 'G', 'M', 'N'],
    ['O', 'P', 'Q', 'S', 'T'],
    ['V', 'W', 'X', 'Y', 'Z'],
];

const ALPHABET_LEN: usize = 26;

/// Location of a letter inside the key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Same column, row moved down by `step` with wrap-around.
    #[inline]
    pub fn shifted_row(self, step: usize) -> Self {
        Position {
            row: (self.row + step) % SIZE,
            col: self.col,
        }
    }

    /// Same row, column moved right by `step` with wrap-around.
    #[inline]
    pub fn shifted_col(self, step: usize) -> Self {
        Position {
            row: self.row,
            col: (self.col + step) % SIZE,
        }
    }
}

/// Immutable 5×5 Playfair key matrix.
///
/// # Example
///
/// ```
/// use playfair_core::{KeyMatrix, Position};
///
/// let matrix = KeyMatrix::new();
/// assert_eq!(matrix.lookup('A').unwrap(), Position { row: 0, col: 4 });
/// assert!(matrix.lookup('J').is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    rows: [[char; SIZE]; SIZE],
    /// positions[letter - 'A'], `None` for the omitted letter.
    positions: [Option<Position>; ALPHABET_LEN],
}

impl KeyMatrix {
    /// Create the fixed key matrix.
    pub fn new() -> Self {
        Self::index(FIXED_ROWS)
    }

    /// Process-wide fixed key matrix, built on first use and shared read-only afterwards.
    pub fn shared() -> &'static KeyMatrix {
        static SHARED: OnceLock<KeyMatrix> = OnceLock::new();
        SHARED.get_or_init(KeyMatrix::new)
    }

    /// Create a key matrix from an explicit grid.
    ///
    /// # Returns
    /// * `Err(PlayfairError::InvalidMatrixLetter)` if a cell is not `A`-`Z`
    /// * `Err(PlayfairError::DuplicateMatrixLetter)` if a letter appears twice
    pub fn from_rows(rows: [[char; SIZE]; SIZE]) -> Result<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &letter in rows.iter().flatten() {
            let slot = alphabet_index(letter).ok_or(PlayfairError::InvalidMatrixLetter(letter))?;
            if seen[slot] {
                return Err(PlayfairError::DuplicateMatrixLetter(letter));
            }
            seen[slot] = true;
        }
        Ok(Self::index(rows))
    }

    fn index(rows: [[char; SIZE]; SIZE]) -> Self {
        let mut positions = [None; ALPHABET_LEN];
        for (row, letters) in rows.iter().enumerate() {
            for (col, &letter) in letters.iter().enumerate() {
                if let Some(slot) = alphabet_index(letter) {
                    positions[slot] = Some(Position { row, col });
                }
            }
        }
        KeyMatrix { rows, positions }
    }

    /// Find where `letter` sits in the matrix.
    ///
    /// Lookup is exact: lowercase letters are not part of the matrix.
    #[inline]
    pub fn lookup(&self, letter: char) -> Result<Position> {
        alphabet_index(letter)
            .and_then(|slot| self.positions[slot])
            .ok_or(PlayfairError::NotInAlphabet(letter))
    }

    /// Letter stored at `position`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below [`SIZE`].
    #[inline]
    pub fn letter_at(&self, position: Position) -> char {
        self.rows[position.row][position.col]
    }

    /// The uppercase letter that has no place in the matrix.
    pub fn omitted(&self) -> char {
        ('A'..='Z')
            .find(|&letter| self.lookup(letter).is_err())
            .unwrap_or('J')
    }

    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.rows
    }
}

impl Default for KeyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows with letters separated by a space, one row per line.
impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[inline]
fn alphabet_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}
