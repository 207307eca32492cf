use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Keep spaces, digits and punctuation instead of removing them before pairing
    #[arg(long, global = true)]
    pub keep_non_letters: bool,

    /// Replace every J with I before pairing
    #[arg(long, global = true)]
    pub merge_j: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encrypt(encrypt::EncryptArgs),
    Decrypt(decrypt::DecryptArgs),
    /// Prints the key matrix
    Matrix,
}
