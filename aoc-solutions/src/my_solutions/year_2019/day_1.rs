use crate::utils::parse::{number, parse_lines};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 1, tags = ["fuel"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, number)
    }

    fn input_stats(masses: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![InputStat::new("modules", masses.len())]
    }
}

impl PartSolver<1> for Solver {
    fn solve(masses: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(masses.iter().map(|&mass| fuel_for(mass)).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(masses: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(masses.iter().map(|&mass| total_fuel_for(mass)).sum::<u64>().to_string())
    }
}

/// Zero for masses too light to need fuel
fn fuel_for(mass: u64) -> u64 {
    (mass / 3).saturating_sub(2)
}

/// Fuel for the module plus fuel for that fuel, until it weighs nothing
fn total_fuel_for(mut mass: u64) -> u64 {
    let mut total = 0;
    while mass >= 9 {
        mass = fuel_for(mass);
        total += mass;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn single_modules() {
        assert_eq!(fuel_for(12), 2);
        assert_eq!(fuel_for(1969), 654);
        assert_eq!(fuel_for(2), 0);
        assert_eq!(total_fuel_for(14), 2);
        assert_eq!(total_fuel_for(1969), 966);
        assert_eq!(total_fuel_for(100756), 50346);
    }

    #[test]
    fn both_parts() {
        let mut masses = Solver::parse("12\n14\n1969\n100756\n").unwrap();
        assert_eq!(Solver::solve_part(&mut masses, 1).unwrap(), "34241");
        assert_eq!(Solver::solve_part(&mut masses, 2).unwrap(), "51316");
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(Solver::parse("12\nfourteen\n").is_err());
        assert!(Solver::parse("-12\n").is_err());
    }
}
