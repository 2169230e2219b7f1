//! Closed integer intervals written as `start-end`.

use super::AlgoError;
use anyhow::{anyhow, ensure};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> anyhow::Result<Self> {
        ensure!(start <= end, "interval {}-{} ends before it starts", start, end);
        Ok(Interval { start, end })
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Number of integers covered; `None` only for `0-18446744073709551615`
    pub fn checked_len(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }
}

impl FromStr for Interval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("expected start-end but got {:?}", s))?;
        let parse = |token: &str| {
            token
                .parse::<u64>()
                .map_err(|e| anyhow!("invalid bound {:?} in {:?}: {}", token, s, e))
        };
        Interval::new(parse(start)?, parse(end)?)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Sort and sweep into disjoint intervals; overlapping and adjacent ones
/// (`3-5` and `6-8`) are joined.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable();
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Count of integers covered by at least one interval
pub fn covered_len(intervals: &[Interval]) -> Result<u64, AlgoError> {
    merge(intervals.to_vec())
        .iter()
        .try_fold(0u64, |total, interval| {
            interval.checked_len().and_then(|len| total.checked_add(len))
        })
        .ok_or_else(|| AlgoError::Overflow(format!("{} intervals cover more than u64::MAX integers", intervals.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn intervals(pairs: &[(u64, u64)]) -> Vec<Interval> {
        pairs
            .iter()
            .map(|&(start, end)| Interval::new(start, end).unwrap())
            .collect()
    }

    #[test]
    fn parses_and_prints() {
        let interval: Interval = "3-5".parse().unwrap();
        assert_eq!(interval, Interval { start: 3, end: 5 });
        assert_eq!(interval.to_string(), "3-5");
        assert!(interval.contains(3) && interval.contains(5) && !interval.contains(6));
        assert_eq!(interval.checked_len(), Some(3));
    }

    #[test]
    fn rejects_malformed_bounds() {
        assert!("5-3".parse::<Interval>().is_err());
        assert!("3:5".parse::<Interval>().is_err());
        assert!("3-".parse::<Interval>().is_err());
        assert!("-3-5".parse::<Interval>().is_err());
        assert!("7-7".parse::<Interval>().is_ok());
    }

    #[test]
    fn fresh_ingredient_ranges() {
        let ranges = intervals(&[(3, 5), (10, 14), (16, 20), (12, 18)]);
        assert_eq!(merge(ranges.clone()), intervals(&[(3, 5), (10, 20)]));
        assert_eq!(covered_len(&ranges), Ok(14));
    }

    #[test]
    fn adjacent_intervals_are_joined() {
        assert_eq!(merge(intervals(&[(6, 8), (3, 5)])), intervals(&[(3, 8)]));
        assert_eq!(merge(intervals(&[(3, 5), (7, 8)])), intervals(&[(3, 5), (7, 8)]));
        assert_eq!(covered_len(&[]), Ok(0));
    }

    #[test]
    fn full_u64_range_does_not_fit_its_length() {
        let everything = Interval::new(0, u64::MAX).unwrap();
        assert_eq!(everything.checked_len(), None);
        assert!(matches!(covered_len(&[everything]), Err(AlgoError::Overflow(_))));

        let almost = intervals(&[(1, u64::MAX)]);
        assert_eq!(covered_len(&almost), Ok(u64::MAX));
    }

    proptest! {
        #[test]
        fn merged_intervals_are_disjoint_and_cover_the_same_points(
            pairs in prop::collection::vec((0u64..60, 0u64..10), 0..12)
        ) {
            let input: Vec<Interval> = pairs
                .iter()
                .map(|&(start, width)| Interval::new(start, start + width).unwrap())
                .collect();
            let merged = merge(input.clone());
            for pair in merged.windows(2) {
                prop_assert!(pair[0].end + 1 < pair[1].start);
            }
            for point in 0..80 {
                prop_assert_eq!(
                    input.iter().any(|i| i.contains(point)),
                    merged.iter().any(|i| i.contains(point))
                );
            }
        }

        #[test]
        fn intervals_print_as_parsed(a in any::<u64>(), b in any::<u64>()) {
            let interval = Interval::new(a.min(b), a.max(b)).unwrap();
            prop_assert_eq!(interval.to_string().parse::<Interval>().unwrap(), interval);
        }
    }
}
