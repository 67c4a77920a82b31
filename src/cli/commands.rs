// src/cli/commands.rs
use clap::Subcommand;

use crate::history::HISTORY_CAPACITY;
use crate::models::MAX_PASSWORD_LENGTH;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and add it to the recent list
    Generate {
        /// Password length (5 to 1024)
        #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(..=MAX_PASSWORD_LENGTH as u64))]
        length: Option<usize>,

        /// Leave digits out
        #[arg(long)]
        no_numbers: bool,

        /// Leave letters out
        #[arg(long)]
        no_letters: bool,

        /// Leave special characters out
        #[arg(long)]
        no_special: bool,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List recent passwords, newest first
    History,

    /// Copy a recent password to the clipboard
    Copy {
        /// Position in the recent list, 1 being the newest
        #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..=HISTORY_CAPACITY as u64))]
        position: u64,
    },
}
