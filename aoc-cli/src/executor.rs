//! Sequential executor for one day's solver

use crate::error::CliError;
use aoc_solver::{FactoryInfo, InputStat, SolveError, SolverRegistry};
use chrono::TimeDelta;
use log::debug;
use std::io::Read;
use std::ops::RangeInclusive;

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolveError>,
    /// Set on the first part only; later parts reuse the parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Everything one run produced, in part order
#[derive(Debug)]
pub struct DayRun {
    pub input_stats: Vec<InputStat>,
    pub results: Vec<SolverResult>,
}

impl DayRun {
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| r.answer.is_err()).count()
    }
}

/// Runs solvers from a registry already narrowed by tags
pub struct Executor {
    registry: SolverRegistry,
}

impl Executor {
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    /// Registered solvers of `year`, in day order
    pub fn solvers_for_year(&self, year: u16) -> Vec<FactoryInfo> {
        self.registry
            .iter_info()
            .filter(|info| info.year == year)
            .collect()
    }

    /// Parts to run: the requested one, or every part the solver declares.
    ///
    /// A requested part above the solver's count is kept so that the solver
    /// itself reports it out of range.
    pub fn parts_for(&self, year: u16, day: u8, part: Option<u8>) -> Option<RangeInclusive<u8>> {
        let info = self.registry.get_info(year, day)?;
        Some(match part {
            Some(p) => p..=p,
            None => 1..=info.parts,
        })
    }

    /// Parse `input` once and solve `parts` in order.
    ///
    /// A parse failure aborts the run. The first failing part stops the
    /// remaining ones; its error is kept in the results.
    pub fn run(
        &self,
        year: u16,
        day: u8,
        parts: RangeInclusive<u8>,
        input: &str,
    ) -> Result<DayRun, CliError> {
        let mut solver = self.registry.create_solver(year, day, input)?;
        let mut parse_duration = Some(solver.parse_duration());
        debug!("{}/{:02} parsed in {:?}", year, day, parse_duration);

        let input_stats = solver.input_stats();
        let mut results = Vec::with_capacity(parts.len());
        for part in parts {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(solved) => {
                    let duration = solved.duration();
                    (Ok(solved.answer), duration)
                }
                Err(e) => (Err(e), TimeDelta::zero()),
            };
            let failed = answer.is_err();
            results.push(SolverResult {
                year,
                day,
                part,
                answer,
                parse_duration: parse_duration.take(),
                solve_duration,
            });
            if failed {
                break;
            }
        }

        Ok(DayRun {
            input_stats,
            results,
        })
    }
}

/// Read the whole puzzle input, rejecting blank input
pub fn read_input(mut reader: impl Read) -> Result<String, CliError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    if input.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, Solver, SolverError, SolverRegistryBuilder};

    /// Sums or multiplies one number per line; a zero fails part 2
    struct Numbers;

    impl AocParser for Numbers {
        type SharedData<'a> = Vec<u64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                .collect()
        }

        fn input_stats(shared: &Self::SharedData<'_>) -> Vec<InputStat> {
            vec![InputStat::new("numbers", shared.len())]
        }
    }

    impl Solver for Numbers {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Vec<u64>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.iter().sum::<u64>().to_string()),
                2 if shared.contains(&0) => Err(SolveError::failed(std::fmt::Error)),
                2 => Ok(shared.iter().product::<u64>().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn executor() -> Executor {
        Executor::new(
            SolverRegistryBuilder::new()
                .register_solver::<Numbers>(2020, 3, &["arith"])
                .unwrap()
                .build(),
        )
    }

    #[test]
    fn runs_all_parts_and_times_the_parse_once() {
        let executor = executor();
        let parts = executor.parts_for(2020, 3, None).unwrap();
        assert_eq!(parts, 1..=2);

        let run = executor.run(2020, 3, parts, "2\n3\n4").unwrap();
        assert_eq!(run.input_stats, [InputStat::new("numbers", 3)]);
        let answers: Vec<_> = run
            .results
            .iter()
            .map(|r| r.answer.as_ref().unwrap().as_str())
            .collect();
        assert_eq!(answers, ["9", "24"]);
        assert!(run.results[0].parse_duration.is_some());
        assert!(run.results[1].parse_duration.is_none());
        assert_eq!(run.failures(), 0);
    }

    #[test]
    fn failing_part_is_kept_in_results() {
        let run = executor().run(2020, 3, 2..=2, "0\n5").unwrap();
        assert_eq!(run.results.len(), 1);
        assert!(matches!(run.results[0].answer, Err(SolveError::SolveFailed(_))));
        assert_eq!(run.failures(), 1);
    }

    #[test]
    fn out_of_range_part_is_reported_by_the_solver() {
        let executor = executor();
        let parts = executor.parts_for(2020, 3, Some(2)).unwrap();
        assert_eq!(parts, 2..=2);
        assert_eq!(executor.parts_for(2020, 4, None), None);

        let run = executor.run(2020, 3, 3..=3, "1").unwrap();
        assert!(matches!(run.results[0].answer, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn parse_failure_aborts_the_run() {
        assert!(matches!(
            executor().run(2020, 3, 1..=2, "1\nx"),
            Err(CliError::Solver(SolverError::ParseError(ParseError::InvalidFormat(_))))
        ));
    }

    #[test]
    fn lists_solvers_of_one_year() {
        let executor = executor();
        assert_eq!(executor.solvers_for_year(2020).len(), 1);
        assert!(executor.solvers_for_year(2021).is_empty());
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(read_input(" \n\n".as_bytes()), Err(CliError::EmptyInput)));
        assert_eq!(read_input("12\n".as_bytes()).unwrap(), "12\n");
    }
}
