use crate::utils::AlgoError;
use crate::utils::parse::{check_rectangular, content_lines};
use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    start: usize,
    /// `true` where a splitter sits
    splitters: Vec<Vec<bool>>,
    beam_result: Option<BeamResult>,
}

#[derive(Debug, Clone, Copy)]
pub struct BeamResult {
    splits: u64,
    /// `None` once the count no longer fits a `u64`
    timelines: Option<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manifold(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }

    fn input_stats(shared: &Self::SharedData<'_>) -> Vec<InputStat> {
        let width = shared.splitters.first().map_or(0, Vec::len);
        let splitters = shared.splitters.iter().flatten().filter(|&&s| s).count();
        vec![
            InputStat::new("start column", shared.start),
            InputStat::new("manifold size", format!("{} x {}", shared.splitters.len(), width)),
            InputStat::new("splitters", splitters),
        ]
    }
}

fn parse_manifold(input: &str) -> anyhow::Result<SharedData> {
    let mut lines = content_lines(input).map(str::trim_end);
    let first = lines.next().filter(|l| !l.is_empty()).ok_or_else(|| anyhow!("empty manifold"))?;
    ensure!(
        first.bytes().all(|b| b == b'.' || b == b'S') && first.bytes().filter(|&b| b == b'S').count() == 1,
        "first line must hold exactly one 'S' and otherwise '.'"
    );
    let start = first.bytes().position(|b| b == b'S').ok_or_else(|| anyhow!("no start"))?;

    let mut rows = vec![vec![false; first.len()]];
    for (idx, line) in lines.enumerate() {
        let row = line
            .bytes()
            .map(|b| match b {
                b'.' => Ok(false),
                b'^' => Ok(true),
                other => bail!("(line {}) unexpected {:?}", idx + 2, other as char),
            })
            .collect::<anyhow::Result<Vec<bool>>>()?;
        if let Some(col) = row.windows(2).position(|pair| pair[0] && pair[1]) {
            bail!("(line {}) neighbouring splitters at columns {} and {}", idx + 2, col + 1, col + 2);
        }
        rows.push(row);
    }
    check_rectangular(&rows)?;
    // the start line has no splitters
    rows.remove(0);

    Ok(SharedData {
        start,
        splitters: rows,
        beam_result: None,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run_beams(shared).splits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        run_beams(shared)
            .timelines
            .map(|timelines| timelines.to_string())
            .ok_or_else(|| AlgoError::Overflow("timeline count exceeds u64".to_string()).into())
    }
}

/// Push the beam down row by row, counting timelines per column. A splitter
/// hit by any timeline counts as one split.
///
/// Column counts saturate, so a lost timeline total never changes which
/// splitters are hit.
fn run_beams(shared: &mut SharedData) -> BeamResult {
    *shared.beam_result.get_or_insert_with(|| {
        let width = shared.splitters.first().map_or(shared.start + 1, Vec::len);
        let mut timelines = vec![0u64; width];
        timelines[shared.start] = 1;
        let mut splits = 0;
        let mut saturated = false;
        for row in &shared.splitters {
            let mut next = vec![0u64; width];
            for (col, &count) in timelines.iter().enumerate().filter(|&(_, &c)| c > 0) {
                if !row[col] {
                    saturated |= add_timelines(&mut next[col], count);
                    continue;
                }
                splits += 1;
                if col > 0 {
                    saturated |= add_timelines(&mut next[col - 1], count);
                }
                if col + 1 < width {
                    saturated |= add_timelines(&mut next[col + 1], count);
                }
            }
            timelines = next;
        }
        BeamResult {
            splits,
            timelines: timelines
                .iter()
                .try_fold(0u64, |total, &count| total.checked_add(count))
                .filter(|_| !saturated),
        }
    })
}

/// Add `count` to `slot`, saturating; returns whether it saturated
fn add_timelines(slot: &mut u64, count: u64) -> bool {
    match slot.checked_add(count) {
        Some(sum) => {
            *slot = sum;
            false
        }
        None => {
            *slot = u64::MAX;
            true
        }
    }
}
