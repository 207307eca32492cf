use clap::Args;
use playfair_core::{decrypt, KeyMatrix, TextOptions};

use crate::CliResult;

/// Decrypts a ciphertext message
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Text to decrypt
    #[arg(short, long, value_name = "ciphertext")]
    pub text: String,
}

impl DecryptArgs {
    pub fn run(self, matrix: &KeyMatrix, options: &TextOptions) -> CliResult<()> {
        let prepared = options.prepare(&self.text);
        log::info!("decrypting {} letters", prepared.len());

        let plaintext = decrypt(&prepared, matrix)?;

        println!("Ciphertext: {}", self.text);
        super::print_matrix(matrix);
        println!("Decrypted Text: {plaintext}");
        Ok(())
    }
}
