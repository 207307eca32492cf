use proptest::prelude::*;

use playfair_core::matrix::FIXED_ROWS;
use playfair_core::{decrypt, encrypt, transform, Digraph, Direction, KeyMatrix};

fn letter() -> impl Strategy<Value = char> {
    prop::sample::select(FIXED_ROWS.iter().flatten().copied().collect::<Vec<_>>())
}

fn distinct_pair() -> impl Strategy<Value = (char, char)> {
    (letter(), letter()).prop_filter("letters must differ", |(a, b)| a != b)
}

proptest! {
    #[test]
    fn digraph_round_trips((a, b) in distinct_pair()) {
        let matrix = KeyMatrix::shared();
        let (x, y) = transform(Digraph::new(a, b), matrix, Direction::Encrypt).unwrap();
        let back = transform(Digraph::new(x, y), matrix, Direction::Decrypt).unwrap();
        prop_assert_eq!(back, (a, b));
    }

    #[test]
    fn rectangle_is_self_inverse((a, b) in distinct_pair()) {
        let matrix = KeyMatrix::shared();
        let pa = matrix.lookup(a).unwrap();
        let pb = matrix.lookup(b).unwrap();
        prop_assume!(pa.row != pb.row && pa.col != pb.col);

        let (x, y) = transform(Digraph::new(a, b), matrix, Direction::Encrypt).unwrap();
        let twice = transform(Digraph::new(x, y), matrix, Direction::Encrypt).unwrap();
        prop_assert_eq!(twice, (a, b));
    }

    #[test]
    fn message_of_distinct_pairs_round_trips(pairs in prop::collection::vec(distinct_pair(), 0..40)) {
        let matrix = KeyMatrix::shared();
        let text: String = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();

        let ciphertext = encrypt(&text, matrix).unwrap();
        prop_assert_eq!(ciphertext.len(), text.len());
        prop_assert_eq!(decrypt(&ciphertext, matrix).unwrap(), text);
    }

    #[test]
    fn output_is_even_and_never_shorter(letters in prop::collection::vec(letter(), 0..40)) {
        let matrix = KeyMatrix::shared();
        let text: String = letters.into_iter().collect();

        let ciphertext = encrypt(&text, matrix).unwrap();
        prop_assert!(ciphertext.len() >= text.len());
        prop_assert_eq!(ciphertext.len() % 2, 0);
    }
}
