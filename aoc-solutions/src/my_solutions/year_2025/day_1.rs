use crate::utils::parse::{number, parse_records};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::fmt;
use std::str::FromStr;

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

impl FromStr for Rotation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let direction = chars.next().ok_or_else(|| anyhow!("empty rotation"))?;
        let clicks = number(chars.as_str())?;
        match direction {
            'L' => Ok(Rotation::Left(clicks)),
            'R' => Ok(Rotation::Right(clicks)),
            other => bail!("rotation must start with 'L' or 'R', got {:?}", other),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Left(clicks) => write!(f, "L{}", clicks),
            Rotation::Right(clicks) => write!(f, "R{}", clicks),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Rotation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_records(input)
    }

    fn input_stats(rotations: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![InputStat::new("rotations", rotations.len())]
    }
}

impl PartSolver<1> for Solver {
    fn solve(rotations: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut position = DIAL_START;
        let mut resting_on_zero = 0u32;
        for rotation in rotations.iter() {
            position = match *rotation {
                Rotation::Left(clicks) => (position + DIAL_SIZE - clicks % DIAL_SIZE) % DIAL_SIZE,
                Rotation::Right(clicks) => (position + clicks % DIAL_SIZE) % DIAL_SIZE,
            };
            if position == 0 {
                resting_on_zero += 1;
            }
        }
        Ok(resting_on_zero.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(rotations: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(clicks_through_zero(rotations).to_string())
    }
}

/// Every click that leaves the dial on 0, including ones mid-rotation
fn clicks_through_zero(rotations: &[Rotation]) -> u64 {
    let mut position = DIAL_START;
    let mut passes = 0u64;
    for rotation in rotations {
        let (Rotation::Left(clicks) | Rotation::Right(clicks)) = *rotation;
        passes += u64::from(clicks / DIAL_SIZE);
        let remaining = clicks % DIAL_SIZE;
        if remaining == 0 {
            continue;
        }
        // within one lap the dial crosses 0 at most once
        match rotation {
            Rotation::Left(_) => {
                if position > 0 && position <= remaining {
                    passes += 1;
                }
                position = (position + DIAL_SIZE - remaining) % DIAL_SIZE;
            }
            Rotation::Right(_) => {
                if position + remaining >= DIAL_SIZE {
                    passes += 1;
                }
                position = (position + remaining) % DIAL_SIZE;
            }
        }
    }
    passes
}
