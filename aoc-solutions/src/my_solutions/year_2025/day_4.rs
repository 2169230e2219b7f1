use crate::utils::parse::parse_bool_grid;
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid"])]
pub struct Solver;

/// Rolls of paper on a rectangular floor
#[derive(Debug, Clone)]
pub struct Floor {
    rows: usize,
    cols: usize,
    rolls: Vec<bool>,
}

impl Floor {
    fn has_roll(&self, row: usize, col: usize) -> bool {
        self.rolls[row * self.cols + col]
    }

    /// Indices of the rolls among the eight cells around `(row, col)`
    fn neighbour_rolls(&self, row: usize, col: usize) -> impl Iterator<Item = usize> + '_ {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        rows.flat_map(move |r| {
            (col.saturating_sub(1)..=(col + 1).min(self.cols - 1)).map(move |c| (r, c))
        })
        .filter(move |&(r, c)| (r, c) != (row, col) && self.has_roll(r, c))
        .map(|(r, c)| r * self.cols + c)
    }

    fn roll_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&(r, c)| self.has_roll(r, c))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Floor;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = parse_bool_grid(input, b'@', b'.')?;
        Ok(Floor {
            rows: grid.len(),
            cols: grid[0].len(),
            rolls: grid.into_iter().flatten().collect(),
        })
    }

    fn input_stats(floor: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![
            InputStat::new("grid size", format!("{} x {}", floor.rows, floor.cols)),
            InputStat::new("rolls", floor.rolls.iter().filter(|&&r| r).count()),
        ]
    }
}

impl PartSolver<1> for Solver {
    fn solve(floor: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let accessible = floor
            .roll_positions()
            .filter(|&(r, c)| floor.neighbour_rolls(r, c).count() < 4)
            .count();
        Ok(accessible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(floor: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(removable_rolls(floor).to_string())
    }
}

/// Rolls removed by repeatedly taking away any roll with at most three
/// neighbouring rolls left
fn removable_rolls(floor: &Floor) -> usize {
    let mut degree = vec![0usize; floor.rolls.len()];
    let mut present = floor.rolls.clone();
    let mut to_remove = Vec::new();
    for (r, c) in floor.roll_positions() {
        let idx = r * floor.cols + c;
        degree[idx] = floor.neighbour_rolls(r, c).count();
        if degree[idx] <= 3 {
            to_remove.push(idx);
        }
    }

    let mut removed = 0;
    while let Some(idx) = to_remove.pop() {
        if !present[idx] {
            continue;
        }
        present[idx] = false;
        removed += 1;
        let (r, c) = (idx / floor.cols, idx % floor.cols);
        for neighbour in floor.neighbour_rolls(r, c) {
            if present[neighbour] {
                degree[neighbour] -= 1;
                if degree[neighbour] == 3 {
                    to_remove.push(neighbour);
                }
            }
        }
    }
    debug!("{} rolls stay", present.iter().filter(|&&p| p).count());
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn example() {
        let mut floor = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut floor, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut floor, 2).unwrap(), "43");
    }

    #[test]
    fn solid_block_keeps_its_core() {
        // corners have 3 neighbours, then edges drop to 3, and so on inwards
        let mut floor = Solver::parse("@@@\n@@@\n@@@\n").unwrap();
        assert_eq!(Solver::solve_part(&mut floor, 1).unwrap(), "4");
        assert_eq!(Solver::solve_part(&mut floor, 2).unwrap(), "9");
    }

    #[test]
    fn rejects_ragged_or_unknown_cells() {
        assert!(Solver::parse("@@.\n@.\n").is_err());
        assert!(Solver::parse("@x.\n").is_err());
        assert!(Solver::parse("").is_err());
    }
}
