use crate::utils::interval::Interval;
use anyhow::{Context, ensure};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

/// Largest id the divisor table covers: ten digits
const MAX_ID: u64 = 9_999_999_999;

/// `DIVISORS[len - 1][repeats - 2]` turns a `len`-digit block into the block
/// repeated `repeats` times, e.g. `987 * 1001001 = 987987987`.
const DIVISORS: [&[u64]; 5] = [
    &[11, 111, 1111, 11111, 111111, 1111111, 11111111, 111111111, 1111111111],
    &[101, 10101, 1010101, 101010101],
    &[1001, 1001001],
    &[10001],
    &[100001],
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["number-theory"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Interval>;

    /// One line of comma-separated ranges; only the line's own newline is
    /// dropped, so every comma must separate two ranges.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let line = input.strip_suffix('\n').unwrap_or(input);
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split(',')
            .enumerate()
            .map(|(idx, token)| {
                ensure!(!token.is_empty(), "range {} is empty", idx + 1);
                let range: Interval = token.parse().with_context(|| format!("range {}", idx + 1))?;
                ensure!(
                    range.end <= MAX_ID,
                    "range {} ends at {} but ids above {} are not supported",
                    idx + 1,
                    range.end,
                    MAX_ID
                );
                Ok(range)
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }

    fn input_stats(ranges: &Self::SharedData<'_>) -> Vec<InputStat> {
        let ids = ranges
            .iter()
            .filter_map(Interval::checked_len)
            .fold(0u64, u64::saturating_add);
        vec![InputStat::new("ranges", ranges.len()), InputStat::new("ids", ids)]
    }
}

impl PartSolver<1> for Solver {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(ranges, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(ranges, usize::MAX).to_string())
    }
}

fn sum_repeated(ranges: &[Interval], max_repeats: usize) -> u64 {
    let total: u64 = ranges
        .iter()
        .flat_map(|range| range.start..=range.end)
        .filter(|&id| is_repeated_block(id, max_repeats))
        .sum();
    debug!("repeats <= {}: {}", max_repeats, total);
    total
}

/// Whether `id` is some block of digits written 2 to `max_repeats` times
fn is_repeated_block(id: u64, max_repeats: usize) -> bool {
    let mut block_min = 1;
    for divisors in DIVISORS {
        let block_max = block_min * 10;
        let repeat_options = max_repeats.saturating_sub(1).min(divisors.len());
        for &divisor in &divisors[..repeat_options] {
            if id % divisor == 0 && (block_min..block_max).contains(&(id / divisor)) {
                return true;
            }
        }
        block_min = block_max;
    }
    false
}
