pub mod decrypt;
pub mod encrypt;

use playfair_core::KeyMatrix;

pub fn print_matrix(matrix: &KeyMatrix) {
    println!("Matrix Key:");
    println!("{matrix}");
}
