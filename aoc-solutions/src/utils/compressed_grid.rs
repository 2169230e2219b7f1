//! Rectilinear polygons on a coordinate-compressed grid.
//!
//! Every distinct x and y of the polygon's vertices gets a dense 1-based rank.
//! Edges are drawn on a `(|X| + 2) × (|Y| + 2)` grid of ranks, the padding
//! ring is flood-filled as outside, and a prefix sum over "not outside" cells
//! answers rectangle containment in constant time.

use super::AlgoError;
use super::parse::{fields, number};
use log::debug;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Tiles covered by the rectangle with corners `self` and `other`, both
    /// inclusive, or `None` when the count does not fit a `u64`.
    pub fn rectangle_area_to(&self, other: &Point) -> Option<u64> {
        let width = self.x.abs_diff(other.x).checked_add(1)?;
        let height = self.y.abs_diff(other.y).checked_add(1)?;
        width.checked_mul(height)
    }

    fn checked_area_to(&self, other: &Point) -> Result<u64, AlgoError> {
        self.rectangle_area_to(other)
            .ok_or_else(|| AlgoError::Overflow(format!("area of rectangle {} to {}", self, other)))
    }
}

/// `x,y`
impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = fields::<2>(s, ',')?;
        Ok(Point::new(number(x)?, number(y)?))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Sorted, deduplicated coordinate values of one axis
#[derive(Debug, Clone)]
pub struct CompressedAxis {
    values: Vec<i64>,
}

impl CompressedAxis {
    pub fn new(raw: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = raw.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 1-based rank of a value present on the axis
    pub fn rank(&self, value: i64) -> Option<usize> {
        self.values.binary_search(&value).ok().map(|idx| idx + 1)
    }

    pub fn value(&self, rank: usize) -> Option<i64> {
        rank.checked_sub(1).and_then(|idx| self.values.get(idx)).copied()
    }

    /// Rank of the largest axis value `<= value`
    fn floor_rank(&self, value: i64) -> Option<usize> {
        match self.values.partition_point(|&v| v <= value) {
            0 => None,
            rank => Some(rank),
        }
    }

    /// Rank of the smallest axis value `>= value`
    fn ceil_rank(&self, value: i64) -> Option<usize> {
        let idx = self.values.partition_point(|&v| v < value);
        (idx < self.values.len()).then_some(idx + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Unknown,
    /// On an edge or enclosed by the polygon
    Inside,
    Outside,
}

#[derive(Debug, Clone)]
pub struct PolygonGrid {
    xs: CompressedAxis,
    ys: CompressedAxis,
    /// `prefix[x][y]` counts non-outside cells with rank `< x` and `< y`,
    /// stored row-major with `ys.len() + 3` columns
    prefix: Vec<u64>,
}

impl PolygonGrid {
    /// Rasterise the closed polygon through `vertices`, the last vertex
    /// connecting back to the first.
    pub fn new(vertices: &[Point]) -> Result<Self, AlgoError> {
        let xs = CompressedAxis::new(vertices.iter().map(|p| p.x));
        let ys = CompressedAxis::new(vertices.iter().map(|p| p.y));
        let (width, height) = (xs.len() + 2, ys.len() + 2);
        debug!("compressed grid: {} x {}", xs.len(), ys.len());

        let mut cells = vec![Cell::Unknown; width * height];
        let at = |x: usize, y: usize| x * height + y;

        let rank_of = |axis: &CompressedAxis, v: i64| {
            axis.rank(v)
                .ok_or_else(|| AlgoError::InvalidInput(format!("{v} is missing from its axis")))
        };
        for (start, end) in vertices.iter().zip(vertices.iter().cycle().skip(1)) {
            let (x1, y1) = (rank_of(&xs, start.x)?, rank_of(&ys, start.y)?);
            let (x2, y2) = (rank_of(&xs, end.x)?, rank_of(&ys, end.y)?);
            if x1 == x2 {
                for y in y1.min(y2)..=y1.max(y2) {
                    cells[at(x1, y)] = Cell::Inside;
                }
            } else if y1 == y2 {
                for x in x1.min(x2)..=x1.max(x2) {
                    cells[at(x, y1)] = Cell::Inside;
                }
            } else {
                return Err(AlgoError::UnsupportedGeometry(format!(
                    "edge ({}, {}) -> ({}, {}) is neither horizontal nor vertical",
                    start.x, start.y, end.x, end.y
                )));
            }
        }

        // the padding corner can never be on an edge
        let mut to_visit = VecDeque::from([(0usize, 0usize)]);
        cells[at(0, 0)] = Cell::Outside;
        while let Some((x, y)) = to_visit.pop_front() {
            let neighbours = [
                (x.checked_add(1), Some(y)),
                (x.checked_sub(1), Some(y)),
                (Some(x), y.checked_add(1)),
                (Some(x), y.checked_sub(1)),
            ];
            for (nx, ny) in neighbours {
                let (Some(nx), Some(ny)) = (nx, ny) else {
                    continue;
                };
                if nx < width && ny < height && cells[at(nx, ny)] == Cell::Unknown {
                    cells[at(nx, ny)] = Cell::Outside;
                    to_visit.push_back((nx, ny));
                }
            }
        }

        let stride = height + 1;
        let mut prefix = vec![0u64; (width + 1) * stride];
        for x in 1..=width {
            for y in 1..=height {
                let not_outside = u64::from(cells[at(x - 1, y - 1)] != Cell::Outside);
                prefix[x * stride + y] = prefix[(x - 1) * stride + y] + prefix[x * stride + y - 1]
                    - prefix[(x - 1) * stride + y - 1]
                    + not_outside;
            }
        }

        Ok(Self { xs, ys, prefix })
    }

    fn stride(&self) -> usize {
        self.ys.len() + 3
    }

    /// Non-outside cells with ranks in `x1..=x2` × `y1..=y2`
    fn inside_count(&self, (x1, y1): (usize, usize), (x2, y2): (usize, usize)) -> u64 {
        let stride = self.stride();
        let p = |x: usize, y: usize| self.prefix[x * stride + y];
        p(x2 + 1, y2 + 1) + p(x1, y1) - p(x1, y2 + 1) - p(x2 + 1, y1)
    }

    /// Whether every compressed cell of the rectangle with corners `a` and `b`
    /// (uncompressed coordinates, any order) is on or inside the polygon.
    ///
    /// Coordinates between axis values widen to the neighbouring ranks; a
    /// rectangle reaching past the polygon's extent is never contained.
    pub fn contains(&self, a: Point, b: Point) -> bool {
        let ranks = (
            self.xs.floor_rank(a.x.min(b.x)),
            self.ys.floor_rank(a.y.min(b.y)),
            self.xs.ceil_rank(a.x.max(b.x)),
            self.ys.ceil_rank(a.y.max(b.y)),
        );
        let (Some(x1), Some(y1), Some(x2), Some(y2)) = ranks else {
            return false;
        };
        let cell_count = ((x2 - x1 + 1) * (y2 - y1 + 1)) as u64;
        self.inside_count((x1, y1), (x2, y2)) == cell_count
    }
}

/// Largest tile area of a rectangle whose opposite corners are both vertices.
pub fn largest_rectangle(vertices: &[Point]) -> Result<u64, AlgoError> {
    let mut max_area = 0;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            max_area = max_area.max(a.checked_area_to(b)?);
        }
    }
    Ok(max_area)
}

/// Largest vertex-cornered rectangle lying entirely on or inside the polygon.
pub fn largest_inner_rectangle(vertices: &[Point]) -> Result<u64, AlgoError> {
    let grid = PolygonGrid::new(vertices)?;
    let mut max_area = 0;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            let area = a.checked_area_to(b)?;
            if area > max_area && grid.contains(*a, *b) {
                max_area = area;
            }
        }
    }
    Ok(max_area)
}
