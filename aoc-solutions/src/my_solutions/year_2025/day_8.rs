use crate::utils::AlgoError;
use crate::utils::parse::{fields, number, parse_records};
use crate::utils::union_find::DisjointSet;
use anyhow::ensure;
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use log::debug;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

const CONNECTIONS: usize = 1000;
const LARGEST_CIRCUITS: usize = 3;
/// Largest accepted `|coordinate|`; keeps squared distances and X products in range
const MAX_COORDINATE: i64 = 1 << 30;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["union-find"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionBox {
    x: i64,
    y: i64,
    z: i64,
}

impl JunctionBox {
    /// Squared euclidean distance, at most `3 * (2 * MAX_COORDINATE)^2 < 2^64`
    fn distance_to(&self, other: &JunctionBox) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx * dx + dy * dy + dz * dz
    }
}

impl FromStr for JunctionBox {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = fields::<3>(s, ',')?;
        let coordinate = |token: &str| -> anyhow::Result<i64> {
            let value: i64 = number(token)?;
            ensure!(
                (-MAX_COORDINATE..=MAX_COORDINATE).contains(&value),
                "coordinate {} is outside -{max}..={max}",
                value,
                max = MAX_COORDINATE
            );
            Ok(value)
        };
        Ok(JunctionBox {
            x: coordinate(x)?,
            y: coordinate(y)?,
            z: coordinate(z)?,
        })
    }
}

impl fmt::Display for JunctionBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<JunctionBox>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_records(input)
    }

    fn input_stats(boxes: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![InputStat::new("junction boxes", boxes.len())]
    }
}

impl PartSolver<1> for Solver {
    fn solve(boxes: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_circuits_product(boxes, CONNECTIONS, LARGEST_CIRCUITS)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(boxes: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(last_connection_product(boxes)?.to_string())
    }
}

/// `(distance, i, j)` with `i < j`, ordered by distance then indices
type Pair = (u64, usize, usize);

fn all_pairs(boxes: &[JunctionBox]) -> impl Iterator<Item = Pair> + '_ {
    boxes
        .iter()
        .enumerate()
        .tuple_combinations()
        .map(|((i, a), (j, b))| (a.distance_to(b), i, j))
}

/// Join the `connections` closest pairs, then multiply the sizes of the
/// `top_k` largest circuits.
fn largest_circuits_product(boxes: &[JunctionBox], connections: usize, top_k: usize) -> Result<u64, AlgoError> {
    // max-heap holding the closest pairs seen so far
    let mut closest: BinaryHeap<Pair> = BinaryHeap::with_capacity(connections + 1);
    for pair in all_pairs(boxes) {
        closest.push(pair);
        if closest.len() > connections {
            closest.pop();
        }
    }

    let mut circuits = DisjointSet::new(boxes.len());
    for (_, i, j) in closest {
        circuits.join(i, j);
    }
    debug!("{} circuits after {} connections", circuits.num_disjoint_sets(), connections);
    circuits.top_k_sizes_multiplied(top_k)
}

/// Join pairs closest first until every box is on one circuit; the product of
/// the X coordinates of the final pair.
fn last_connection_product(boxes: &[JunctionBox]) -> Result<i64, AlgoError> {
    let mut pairs: Vec<Pair> = all_pairs(boxes).collect();
    pairs.sort_unstable();

    let mut circuits = DisjointSet::new(boxes.len());
    for (joined, &(_, i, j)) in pairs.iter().enumerate() {
        if circuits.join(i, j) && circuits.num_disjoint_sets() == 1 {
            debug!("single circuit after {} connections", joined + 1);
            return Ok(boxes[i].x * boxes[j].x);
        }
    }
    Err(AlgoError::NoSolution(format!(
        "{} junction boxes never form a single circuit",
        boxes.len()
    )))
}
