use crate::utils::AlgoError;
use crate::utils::graph::{Graph, NodeId, count_paths, count_paths_via, topological_order};
use crate::utils::parse::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;
use std::collections::HashSet;

const YOU: NodeId = NodeId::new(*b"you");
const SERVER: NodeId = NodeId::new(*b"svr");
const OUT: NodeId = NodeId::new(*b"out");
const FFT: NodeId = NodeId::new(*b"fft");
const DAC: NodeId = NodeId::new(*b"dac");

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["graph", "topological-sort"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    devices: Graph<NodeId>,
    order: Option<Vec<NodeId>>,
}

impl SharedData {
    /// The devices and their topological order, computed on first use
    fn ordered(&mut self) -> Result<(&Graph<NodeId>, &[NodeId]), AlgoError> {
        if self.order.is_none() {
            let order = topological_order(&self.devices)?;
            debug!("topological order over {} devices", order.len());
            self.order = Some(order);
        }
        Ok((&self.devices, self.order.as_deref().unwrap_or_default()))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines = parse_lines(input, |line| {
            let (from, outputs) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected 'name: outputs' but got {:?}", line))?;
            let from: NodeId = from.trim().parse()?;
            let outputs = outputs
                .split_whitespace()
                .map(str::parse)
                .collect::<anyhow::Result<HashSet<NodeId>>>()?;
            Ok((from, outputs))
        })?;

        let mut devices = Graph::with_capacity(lines.len());
        for (from, outputs) in lines {
            if devices.insert(from, outputs).is_some() {
                return Err(ParseError::InvalidFormat(format!("device {} is listed twice", from)));
            }
        }
        Ok(SharedData {
            devices,
            order: None,
        })
    }

    fn input_stats(shared: &Self::SharedData<'_>) -> Vec<InputStat> {
        let edges: usize = shared.devices.values().map(HashSet::len).sum();
        vec![
            InputStat::new("devices with outputs", shared.devices.len()),
            InputStat::new("connections", edges),
        ]
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (devices, order) = shared.ordered()?;
        Ok(count_paths(devices, order, YOU, OUT)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (devices, order) = shared.ordered()?;
        Ok(count_paths_via(devices, order, SERVER, [FFT, DAC], OUT)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const YOU_EXAMPLE: &str = "aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const SERVER_EXAMPLE: &str = "svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn paths_from_you() {
        let mut shared = Solver::parse(YOU_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn paths_through_both_checkpoints() {
        let mut shared = Solver::parse(SERVER_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
    }

    #[test]
    fn cycle_fails_the_solve() {
        let mut shared = Solver::parse("you: aaa\naaa: bbb\nbbb: aaa out\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(Solver::parse("you bbb\n").is_err());
        assert!(Solver::parse("yo: bbb\n").is_err());
        assert!(Solver::parse("you: bbbb\n").is_err());
        assert!(Solver::parse("you: aaa\nyou: bbb\n").is_err());
    }
}
