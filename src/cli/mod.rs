// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// File holding the recent password list
    #[arg(long, env = "PASSFORGE_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Keep recent passwords in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Command to execute; the interactive form runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let args = Args::try_parse_from([
            "passforge", "--json", "generate", "-l", "12", "--no-special", "--copy",
        ])
        .unwrap();

        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate { length, no_numbers, no_letters, no_special, copy }) => {
                assert_eq!(length, Some(12));
                assert!(!no_numbers);
                assert!(!no_letters);
                assert!(no_special);
                assert!(copy);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn generate_length_is_capped() {
        assert!(Args::try_parse_from(["passforge", "generate", "-l", "18446744073709551615"]).is_err());
        assert!(Args::try_parse_from(["passforge", "generate", "-l", "1025"]).is_err());

        let args = Args::try_parse_from(["passforge", "generate", "-l", "1024"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Generate { length: Some(1024), .. })));

        // Short lengths still reach the form so it can show its validation message
        let args = Args::try_parse_from(["passforge", "generate", "-l", "4"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Generate { length: Some(4), .. })));
    }

    #[test]
    fn copy_position_starts_at_one() {
        assert!(Args::try_parse_from(["passforge", "copy", "0"]).is_err());
        let args = Args::try_parse_from(["passforge", "copy", "5"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Copy { position: 5 })));
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["passforge", "--ephemeral"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.ephemeral);
    }
}
