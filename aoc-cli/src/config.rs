//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use log::LevelFilter;

/// What the run does once the registry is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print the registered solvers matching the filters
    List,
    /// Solve one day on stdin, all parts unless `part` is set
    Solve { day: u8, part: Option<u8> },
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub year: u16,
    pub mode: RunMode,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    pub quiet: bool,
    /// Default log level when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, rejecting contradictory flags
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = match (args.list, args.day) {
            (true, None) if args.part.is_some() => {
                return Err(CliError::Config(
                    "--part has no effect with --list".to_string(),
                ));
            }
            (true, None) => RunMode::List,
            (true, Some(_)) => {
                return Err(CliError::Config(
                    "--list lists whole years; drop --day".to_string(),
                ));
            }
            (false, Some(day)) => RunMode::Solve {
                day,
                part: args.part,
            },
            (false, None) => {
                return Err(CliError::Config(
                    "--day is required unless --list is given".to_string(),
                ));
            }
        };

        Ok(Config {
            year: args.year,
            mode,
            tags: args.tags,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        })
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap();
        Config::from_args(args)
    }

    #[test]
    fn solve_mode_needs_a_day() {
        assert_eq!(
            config(&["-d", "7", "-p", "2"]).unwrap().mode,
            RunMode::Solve {
                day: 7,
                part: Some(2)
            }
        );
        assert!(matches!(config(&[]), Err(CliError::Config(_))));
        assert!(matches!(config(&["-p", "1"]), Err(CliError::Config(_))));
    }

    #[test]
    fn list_mode_takes_no_day_or_part() {
        let listing = config(&["--list", "-y", "2019", "-t", "fuel"]).unwrap();
        assert_eq!(listing.mode, RunMode::List);
        assert_eq!(listing.year, 2019);
        assert_eq!(listing.tags, ["fuel"]);
        assert!(matches!(config(&["--list", "-d", "1"]), Err(CliError::Config(_))));
        assert!(matches!(config(&["--list", "-p", "1"]), Err(CliError::Config(_))));
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(config(&["-d", "1"]).unwrap().log_level, LevelFilter::Warn);
        assert_eq!(config(&["-d", "1", "-v"]).unwrap().log_level, LevelFilter::Debug);
        assert_eq!(config(&["-d", "1", "-vvv"]).unwrap().log_level, LevelFilter::Trace);
    }
}
