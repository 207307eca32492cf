//! # Playfair Core
//!
//! The Playfair cipher substitutes pairs of letters (digraphs) using their
//! positions in a 5×5 key matrix of 25 letters.
//!
//! ```text
//! text ──► digraph::digraphs ──► transform::transform ──► text
//!                 (pairing)         (row / column / rectangle rule)
//!                                          ▲
//!                               matrix::KeyMatrix (read-only)
//! ```
//!
//! The key matrix is fixed:
//!
//! ```text
//! K U L I A
//! H B R C D
//! E F G M N
//! O P Q S T
//! V W X Y Z
//! ```
//!
//! # Usage Examples
//!
//! ## Encrypt and decrypt a message
//!
//! ```rust
//! use playfair_core::{build_matrix, decrypt, encrypt};
//!
//! let matrix = build_matrix();
//!
//! let ciphertext = encrypt("HARIKAMISLIBURNASIONAL", &matrix).unwrap();
//! assert_eq!(ciphertext, "DKCLUKSCQIUCLBTDYCTEKI");
//!
//! let plaintext = decrypt(&ciphertext, &matrix).unwrap();
//! assert_eq!(plaintext, "HARIKAMISLIBURNASIONAL");
//! ```
//!
//! ## Prepare free text first
//!
//! Characters outside the matrix are an error, nothing is skipped silently.
//!
//! ```rust
//! use playfair_core::{build_matrix, encrypt, PlayfairError, TextOptions};
//!
//! let matrix = build_matrix();
//! let text = "Hari Kamis";
//!
//! assert_eq!(encrypt(text, &matrix), Err(PlayfairError::NotInAlphabet(' ')));
//!
//! let prepared = TextOptions::default().prepare(text);
//! assert_eq!(encrypt(&prepared, &matrix).unwrap(), "DKCLUKSCQY");
//! ```

#![warn(clippy::redundant_else)]

pub mod digraph;
pub mod error;
pub mod matrix;
pub mod options;
pub mod transform;

pub use digraph::{digraphs, Digraph, Digraphs, FALLBACK_FILLER, FILLER};
pub use error::{PlayfairError, Result};
pub use matrix::{KeyMatrix, Position};
pub use options::TextOptions;
pub use transform::{decrypt, encrypt, transform, transform_text, Direction};

/// Build the fixed key matrix.
pub fn build_matrix() -> KeyMatrix {
    KeyMatrix::new()
}
