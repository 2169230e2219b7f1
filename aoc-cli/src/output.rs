//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::{FactoryInfo, InputStat};
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print the derived input counts, skipped in quiet mode
    pub fn print_input_stats(&self, stats: &[InputStat]) {
        if self.quiet {
            return;
        }
        for stat in stats {
            println!("{}", stat);
        }
    }

    /// Format and print a single result; errors go to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", result_prefix(result), e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Parse time: {}", format_duration(total_parse_time));
        println!("Solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }

    /// Print registered solvers grouped by year
    pub fn print_listing(&self, solvers: &[FactoryInfo]) {
        if solvers.is_empty() {
            println!("No solvers found matching the specified filters.");
            return;
        }
        print!("{}", format_listing(solvers));
    }
}

fn result_prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `2025/07 Part 1: 21 (parse: 12µs, solve: 3.10ms)`
fn format_result(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or("?");
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        result_prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

fn format_listing(solvers: &[FactoryInfo]) -> String {
    let mut out = String::new();
    for (year, group) in &solvers.iter().chunk_by(|info| info.year) {
        out.push_str(&format!("{}\n", year));
        for info in group {
            let tags = if info.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", info.tags.iter().join(", "))
            };
            out.push_str(&format!(
                "  day {:02}: {} part(s){}\n",
                info.day, info.parts, tags
            ));
        }
    }
    out
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    match TimeDelta::from_std(d) {
        Ok(delta) => format_duration(delta),
        Err(_) => "N/A".to_string(),
    }
}
