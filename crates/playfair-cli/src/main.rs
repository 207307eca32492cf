use clap::Parser;

use playfair_core::{KeyMatrix, PlayfairError, TextOptions};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, PlayfairError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = TextOptions::default()
        .with_strip_non_alphabetic(!args.keep_non_letters)
        .with_merge_j_into_i(args.merge_j);
    let matrix = KeyMatrix::shared();

    match args.command {
        Commands::Encrypt(encrypt) => encrypt.run(matrix, &options),
        Commands::Decrypt(decrypt) => decrypt.run(matrix, &options),
        Commands::Matrix => {
            commands::print_matrix(matrix);
            Ok(())
        }
    }
}
