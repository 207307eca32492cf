use clap::Args;
use playfair_core::{encrypt, KeyMatrix, TextOptions};

use crate::CliResult;

/// Encrypts a plaintext message
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Text to encrypt
    #[arg(short, long, value_name = "plaintext")]
    pub text: String,
}

impl EncryptArgs {
    pub fn run(self, matrix: &KeyMatrix, options: &TextOptions) -> CliResult<()> {
        let prepared = options.prepare(&self.text);
        log::info!("encrypting {} letters", prepared.len());

        let ciphertext = encrypt(&prepared, matrix)?;

        println!("Plaintext: {}", self.text);
        super::print_matrix(matrix);
        println!("Encrypted Text: {ciphertext}");
        Ok(())
    }
}
