//! Expansion checks for `#[derive(AocSolver)]` and `#[derive(AutoRegisterSolver)]`

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver, SolverRegistryBuilder};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::fmt;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 3)]
#[aoc(year = 2018, day = 7, tags = ["macro-test"])]
struct ThreeParts;

#[derive(Debug)]
struct Odd(i32);

impl fmt::Display for Odd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is odd", self.0)
    }
}

impl std::error::Error for Odd {}

impl AocParser for ThreeParts {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
            .collect()
    }
}

impl PartSolver<1> for ThreeParts {
    fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for ThreeParts {
    fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

impl PartSolver<3> for ThreeParts {
    fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
        match shared.iter().find(|v| *v % 2 != 0) {
            Some(&odd) => Err(SolveError::failed(Odd(odd))),
            None => Ok("all even".to_string()),
        }
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<ThreeParts as Solver>::PARTS, 3);
}

#[test]
fn each_part_reaches_its_part_solver() {
    let mut shared = ThreeParts::parse("2 3 4").unwrap();
    assert_eq!(ThreeParts::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(ThreeParts::solve_part(&mut shared, 2).unwrap(), "24");

    let err = ThreeParts::solve_part(&mut shared, 3).unwrap_err();
    assert!(matches!(err, SolveError::SolveFailed(_)));
    assert_eq!(err.to_string(), "Solve failed: 3 is odd");
}

#[test]
fn unknown_parts_are_not_implemented() {
    let mut shared = ThreeParts::parse("2").unwrap();
    for part in [0u8, 4, 255] {
        assert!(matches!(
            ThreeParts::solve_part(&mut shared, part),
            Err(SolveError::PartNotImplemented(p)) if p == part
        ));
    }
}

#[test]
fn auto_registration_carries_year_day_and_tags() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    let info = registry.get_info(2018, 7).expect("plugin registered");
    assert_eq!(info.parts, 3);
    assert_eq!(info.tags, &["macro-test"]);

    let mut solver = registry.create_solver(2018, 7, "2 4 6").unwrap();
    assert_eq!(solver.solve(3).unwrap().answer, "all even");
}
