use crate::utils::compressed_grid::{Point, largest_inner_rectangle, largest_rectangle};
use crate::utils::parse::parse_records;
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["coordinate-compression"])]
pub struct Solver;

impl AocParser for Solver {
    /// Red tiles in loop order
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_records(input)
    }

    fn input_stats(tiles: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![InputStat::new("red tiles", tiles.len())]
    }
}

impl PartSolver<1> for Solver {
    fn solve(tiles: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_rectangle(tiles)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(tiles: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_inner_rectangle(tiles)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn example() {
        let mut tiles = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(tiles.len(), 8);
        assert_eq!(Solver::solve_part(&mut tiles, 1).unwrap(), "50");
        assert_eq!(Solver::solve_part(&mut tiles, 2).unwrap(), "24");
    }

    #[test]
    fn diagonal_loop_fails_part_two() {
        let mut tiles = Solver::parse("0,0\n4,0\n0,4\n").unwrap();
        assert_eq!(Solver::solve_part(&mut tiles, 1).unwrap(), "25");
        assert!(Solver::solve_part(&mut tiles, 2).is_err());
    }

    #[test]
    fn far_apart_tiles_fail_instead_of_wrapping() {
        let mut tiles = Solver::parse("0,0\n4294967296,4294967296\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut tiles, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn rejects_malformed_tiles() {
        assert!(Solver::parse("7;1\n").is_err());
        assert!(Solver::parse("7,1,2\n").is_err());
        assert!(Solver::parse("7,x\n").is_err());
    }
}
