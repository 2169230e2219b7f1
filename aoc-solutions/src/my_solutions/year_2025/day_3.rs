use crate::utils::parse::parse_lines;
use crate::utils::top_digits::{digits_value, max_subsequence};
use anyhow::anyhow;
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["monotonic-stack"])]
pub struct Solver;

/// Battery banks, one joltage digit per battery
pub type Banks = Vec<Vec<u8>>;

impl AocParser for Solver {
    type SharedData<'a> = Banks;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    other => Err(anyhow!("battery {:?} is not a digit", other as char)),
                })
                .collect()
        })
    }

    fn input_stats(banks: &Self::SharedData<'_>) -> Vec<InputStat> {
        let batteries: usize = banks.iter().map(Vec::len).sum();
        vec![
            InputStat::new("battery banks", banks.len()),
            InputStat::new("batteries", batteries),
        ]
    }
}

impl PartSolver<1> for Solver {
    fn solve(banks: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(banks, 2)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(banks: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(banks, 12)?.to_string())
    }
}

/// Sum over banks of the largest number formed by turning on `batteries`
/// batteries, keeping their order
fn total_joltage(banks: &Banks, batteries: usize) -> Result<u64, SolveError> {
    banks.iter().try_fold(0u64, |total, bank| -> Result<u64, SolveError> {
        let joltage = digits_value(&max_subsequence(bank, batteries)?)?;
        Ok(total + joltage)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn example() {
        let mut banks = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut banks, 1).unwrap(), "357");
        assert_eq!(Solver::solve_part(&mut banks, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn short_bank_fails_only_the_longer_selection() {
        let mut banks = Solver::parse("12345\n").unwrap();
        assert_eq!(Solver::solve_part(&mut banks, 1).unwrap(), "45");
        assert!(matches!(
            Solver::solve_part(&mut banks, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Solver::parse("12a4\n").is_err());
    }
}
