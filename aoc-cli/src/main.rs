//! AOC CLI - run one day's solver on the puzzle input piped to stdin

mod cli;
mod config;
mod error;
mod executor;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::{Config, RunMode};
use error::CliError;
use executor::Executor;
use log::debug;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let registry = build_registry(&config.tags)?;
    debug!("{} solver(s) registered", registry.len());
    let executor = Executor::new(registry);
    let formatter = OutputFormatter::new(config.quiet);

    match config.mode {
        RunMode::List => {
            formatter.print_listing(&executor.solvers_for_year(config.year));
            Ok(())
        }
        RunMode::Solve { day, part } => {
            let parts = executor.parts_for(config.year, day, part).ok_or_else(|| {
                CliError::NoMatchingSolver {
                    year: config.year,
                    day,
                    tags: config.tags.join(","),
                }
            })?;
            let input = executor::read_input(std::io::stdin().lock())?;
            let day_run = executor.run(config.year, day, parts, &input)?;

            formatter.print_input_stats(&day_run.input_stats);
            for result in &day_run.results {
                formatter.print_result(result);
            }
            formatter.print_summary(&day_run.results);

            match day_run.failures() {
                0 => Ok(()),
                failed => Err(CliError::PartsFailed {
                    failed,
                    total: day_run.results.len(),
                }),
            }
        }
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
