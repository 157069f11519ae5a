//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (3 for the classic game)
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=9))]
    pub dims: u8,

    /// Path to the effects config (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Log file (the terminal is busy with the UI)
    #[arg(long, default_value = "rewind.log")]
    pub log_file: PathBuf,

    /// Disable the terminal bell on win and draw
    #[arg(long)]
    pub no_sound: bool,

    /// Disable the confetti burst on win
    #[arg(long)]
    pub no_confetti: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.dims, 3);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
        assert!(!cli.no_sound);
        assert!(!cli.no_confetti);
    }

    #[test]
    fn test_dims_range() {
        assert_eq!(Cli::try_parse_from(["rewind", "--dims", "5"]).unwrap().dims, 5);
        assert!(Cli::try_parse_from(["rewind", "--dims", "2"]).is_err());
        assert!(Cli::try_parse_from(["rewind", "-d", "10"]).is_err());
    }

    #[test]
    fn test_effect_flags() {
        let cli = Cli::try_parse_from(["rewind", "--no-sound", "--no-confetti"]).unwrap();
        assert!(cli.no_sound);
        assert!(cli.no_confetti);
    }
}
