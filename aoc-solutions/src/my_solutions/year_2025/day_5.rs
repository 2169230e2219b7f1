use crate::utils::interval::{Interval, covered_len, merge};
use crate::utils::parse::{number, parse_lines};
use anyhow::anyhow;
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    fresh: Vec<Interval>,
    ingredients: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (ranges, ids) = input.trim_start_matches('\n').split_once("\n\n").ok_or_else(|| {
            ParseError::MissingData("expected a blank line between ranges and ingredient ids".into())
        })?;
        let fresh = parse_lines(ranges, |line| line.parse::<Interval>())?;
        if fresh.is_empty() {
            return Err(ParseError::MissingData("no fresh ranges".into()));
        }
        let ingredients = parse_lines(ids, |line| {
            number(line).map_err(|e| anyhow!("ingredient id: {:#}", e))
        })?;
        Ok(Inventory { fresh, ingredients })
    }

    fn input_stats(inventory: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![
            InputStat::new("fresh ranges", inventory.fresh.len()),
            InputStat::new("ingredients", inventory.ingredients.len()),
        ]
    }
}

impl PartSolver<1> for Solver {
    fn solve(inventory: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let merged = merge(inventory.fresh.clone());
        let fresh = inventory
            .ingredients
            .iter()
            .filter(|&&id| {
                // first merged range ending at or after `id`
                let idx = merged.partition_point(|range| range.end < id);
                merged.get(idx).is_some_and(|range| range.contains(id))
            })
            .count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(inventory: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(covered_len(&inventory.fresh)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    #[test]
    fn example() {
        let mut inventory = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(inventory.fresh.len(), 4);
        assert_eq!(inventory.ingredients.len(), 6);
        assert_eq!(Solver::solve_part(&mut inventory, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut inventory, 2).unwrap(), "14");
    }

    #[test]
    fn sections_are_required() {
        assert!(matches!(Solver::parse("3-5\n1\n"), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("\n\n1\n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn whole_id_space_is_too_many_to_count() {
        let mut inventory = Solver::parse("0-18446744073709551615\n\n1\n").unwrap();
        assert_eq!(Solver::solve_part(&mut inventory, 1).unwrap(), "1");
        assert!(matches!(
            Solver::solve_part(&mut inventory, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            Solver::parse("5-3\n\n4\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
