use crate::utils::AlgoError;
use crate::utils::parse::{content_lines, number};
use anyhow::{Context, anyhow, bail, ensure};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

const SHAPE_SIZE: usize = 3;
const NUM_SHAPES: usize = 6;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["packing"])]
pub struct Solver;

/// Only the pixel count of a shape matters to the bounds used here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pixels: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: u64,
    height: u64,
    counts: [u64; NUM_SHAPES],
}

impl Region {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let (size, counts) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("expected 'WxH: counts' but got {:?}", line))?;
        let (width, height) = size
            .split_once('x')
            .ok_or_else(|| anyhow!("expected WxH but got {:?}", size))?;
        let counts: Vec<u64> = counts
            .split_whitespace()
            .map(number)
            .collect::<anyhow::Result<_>>()?;
        let counts: [u64; NUM_SHAPES] = counts
            .try_into()
            .map_err(|c: Vec<u64>| anyhow!("expected {} shape counts but got {}", NUM_SHAPES, c.len()))?;
        Ok(Region {
            width: number(width)?,
            height: number(height)?,
            counts,
        })
    }

    /// `Some(true)` when one shape per 3x3 block already fits, `Some(false)`
    /// when the pixels alone overflow the area, `None` otherwise.
    ///
    /// Areas and totals are summed in `u128`, which holds any product of two
    /// `u64`s and any sum of six of them.
    fn fits(&self, shapes: &[Shape; NUM_SHAPES]) -> Option<bool> {
        let size = SHAPE_SIZE as u128;
        let (width, height) = (u128::from(self.width), u128::from(self.height));
        let blocks = (width / size) * (height / size);
        if blocks >= self.counts.iter().copied().map(u128::from).sum::<u128>() {
            return Some(true);
        }
        let pixels: u128 = shapes
            .iter()
            .zip(&self.counts)
            .map(|(shape, &count)| u128::from(shape.pixels) * u128::from(count))
            .sum();
        if pixels > width * height {
            return Some(false);
        }
        None
    }
}

#[derive(Debug)]
pub struct Farm {
    shapes: [Shape; NUM_SHAPES],
    regions: Vec<Region>,
}

impl AocParser for Solver {
    type SharedData<'a> = Farm;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_farm(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }

    fn input_stats(farm: &Self::SharedData<'_>) -> Vec<InputStat> {
        let pixels = farm
            .shapes
            .iter()
            .map(|s| s.pixels.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            InputStat::new("shape pixels", pixels),
            InputStat::new("regions", farm.regions.len()),
        ]
    }
}

fn parse_farm(input: &str) -> anyhow::Result<Farm> {
    let mut lines = content_lines(input)
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut shapes = [Shape { pixels: 0 }; NUM_SHAPES];
    for (expected, shape) in shapes.iter_mut().enumerate() {
        let (line_no, header) = lines.next().ok_or_else(|| anyhow!("missing shape {}", expected))?;
        let index: usize = header
            .strip_suffix(':')
            .ok_or_else(|| anyhow!("(line {}) expected a shape header like '{}:'", line_no, expected))
            .and_then(|index| number(index).with_context(|| format!("line {}", line_no)))?;
        ensure!(index == expected, "(line {}) expected shape {} but got {}", line_no, expected, index);

        for _ in 0..SHAPE_SIZE {
            let (line_no, row) = lines.next().ok_or_else(|| anyhow!("shape {} is cut short", index))?;
            ensure!(
                row.len() == SHAPE_SIZE,
                "(line {}) shape rows are {} wide but got {:?}",
                line_no,
                SHAPE_SIZE,
                row
            );
            for b in row.bytes() {
                match b {
                    b'#' => shape.pixels += 1,
                    b'.' => {}
                    other => bail!("(line {}) unexpected {:?} in shape", line_no, other as char),
                }
            }
        }
    }

    let regions = lines
        .map(|(line_no, line)| Region::parse(line).with_context(|| format!("line {}", line_no)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Farm { shapes, regions })
}

impl PartSolver<1> for Solver {
    fn solve(farm: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut fitting = 0;
        for (idx, region) in farm.regions.iter().enumerate() {
            match region.fits(&farm.shapes) {
                Some(true) => fitting += 1,
                Some(false) => {}
                None => {
                    return Err(AlgoError::NoSolution(format!(
                        "region {} ({}x{}) needs an actual packing search",
                        idx + 1,
                        region.width,
                        region.height
                    ))
                    .into());
                }
            }
        }
        debug!("{} of {} regions fit", fitting, farm.regions.len());
        Ok(fitting.to_string())
    }
}
