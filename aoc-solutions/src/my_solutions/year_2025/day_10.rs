use crate::utils::bitmask_bfs::fewest_toggles;
use crate::utils::ilp::{IntegerProgram, MicrolpSolver, minimise_integral};
use crate::utils::parse::{delimited, number, parse_records};
use anyhow::{bail, ensure};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Indicator lights per machine, at most
const MAX_LIGHTS: usize = 10;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["bfs", "ilp"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    lights: usize,
    /// Bit `i` set when light `i` must end up on
    target: u16,
    /// Each button as the mask of lights it toggles
    buttons: Vec<u16>,
    joltages: Vec<u32>,
}

impl FromStr for Machine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [first, middle @ .., last] = tokens.as_slice() else {
            bail!("expected lights, buttons and joltages");
        };

        let pattern = delimited(first, '[', ']')?;
        ensure!(
            (1..=MAX_LIGHTS).contains(&pattern.len()),
            "expected 1 to {} lights but got {}",
            MAX_LIGHTS,
            pattern.len()
        );
        let mut target = 0u16;
        for (idx, b) in pattern.bytes().enumerate() {
            match b {
                b'#' => target |= 1 << idx,
                b'.' => {}
                other => bail!("unexpected light {:?}", other as char),
            }
        }
        let lights = pattern.len();

        let buttons = middle
            .iter()
            .map(|token| {
                delimited(token, '(', ')')?.split(',').try_fold(0u16, |mask, idx| {
                    let idx: usize = number(idx)?;
                    ensure!(idx < lights, "button toggles light {} but there are only {}", idx, lights);
                    Ok(mask | (1 << idx))
                })
            })
            .collect::<anyhow::Result<Vec<u16>>>()?;

        let joltages = delimited(last, '{', '}')?
            .split(',')
            .map(number)
            .collect::<anyhow::Result<Vec<u32>>>()?;
        ensure!(
            joltages.len() == lights,
            "{} joltage requirements for {} lights",
            joltages.len(),
            lights
        );

        Ok(Machine {
            lights,
            target,
            buttons,
            joltages,
        })
    }
}

/// `[.##.] (3) (1,3) {3,5,4,7}`, button lights in ascending order
impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = |mask: u16, idx: usize| mask & (1 << idx) != 0;
        let pattern: String = (0..self.lights)
            .map(|idx| if lit(self.target, idx) { '#' } else { '.' })
            .collect();
        write!(f, "[{}]", pattern)?;
        for &button in &self.buttons {
            write!(f, " ({})", (0..self.lights).filter(|&idx| lit(button, idx)).join(","))?;
        }
        write!(f, " {{{}}}", self.joltages.iter().join(","))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_records(input)
    }

    fn input_stats(machines: &Self::SharedData<'_>) -> Vec<InputStat> {
        let buttons: usize = machines.iter().map(|m| m.buttons.len()).sum();
        vec![
            InputStat::new("machines", machines.len()),
            InputStat::new("buttons", buttons),
        ]
    }
}

impl PartSolver<1> for Solver {
    fn solve(machines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for machine in machines.iter() {
            total += u64::from(fewest_toggles(machine.lights as u32, machine.target, &machine.buttons)?);
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(machines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for (idx, machine) in machines.iter().enumerate() {
            let program = IntegerProgram::min_toggle_presses(&machine.joltages, &machine.buttons)?;
            let presses = minimise_integral(&MicrolpSolver, &program)?;
            debug!("machine {}: {} presses", idx + 1, presses);
            total += presses;
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn example() {
        let mut machines = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(machines.len(), 3);
        assert_eq!(Solver::solve_part(&mut machines, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut machines, 2).unwrap(), "33");
    }

    #[test]
    fn parses_masks() {
        let machine: Machine = "[.##.] (3) (1,3) {3,5,4,7}".parse().unwrap();
        assert_eq!(
            machine,
            Machine {
                lights: 4,
                target: 0b0110,
                buttons: vec![0b1000, 0b1010],
                joltages: vec![3, 5, 4, 7],
            }
        );
    }

    #[test]
    fn unreachable_lights_fail_part_one() {
        let mut machines = Solver::parse("[#.] (0,1) {1,1}\n").unwrap();
        assert!(Solver::solve_part(&mut machines, 1).is_err());
        assert_eq!(Solver::solve_part(&mut machines, 2).unwrap(), "1");
    }

    #[test]
    fn rejects_malformed_machines() {
        assert!(Solver::parse("[.#] (0) {1}\n").is_err());
        assert!(Solver::parse("[.#] (2) {1,1}\n").is_err());
        assert!(Solver::parse(".# (0) {1,1}\n").is_err());
        assert!(Solver::parse("[.x] (0) {1,1}\n").is_err());
        assert!(Solver::parse("[.#] (0 {1,1}\n").is_err());
        assert!(Solver::parse("[...........] (0) {1,1,1,1,1,1,1,1,1,1,1}\n").is_err());
    }

    #[test]
    fn machines_print_in_input_form() {
        let line = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}";
        assert_eq!(line.parse::<Machine>().unwrap().to_string(), line);
    }

    fn machine() -> impl Strategy<Value = Machine> {
        (1..=MAX_LIGHTS)
            .prop_flat_map(|lights| {
                let all = 1u16 << lights;
                (
                    Just(lights),
                    0..all,
                    prop::collection::vec(1..all, 0..8),
                    prop::collection::vec(any::<u32>(), lights),
                )
            })
            .prop_map(|(lights, target, buttons, joltages)| Machine {
                lights,
                target,
                buttons,
                joltages,
            })
    }

    proptest! {
        #[test]
        fn machines_print_as_parsed(machine in machine()) {
            prop_assert_eq!(machine.to_string().parse::<Machine>().unwrap(), machine);
        }
    }
}
