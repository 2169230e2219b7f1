//! Line and token parsing shared by the day parsers.
//!
//! Line-level helpers work in `anyhow` so a day can attach whatever context it
//! likes; [`parse_lines`] prefixes the 1-based line number and converts to
//! [`ParseError::InvalidFormat`] at the boundary.

use anyhow::{Context, anyhow, bail};
use aoc_solver::ParseError;
use std::str::FromStr;

/// Lines of `input` with a single trailing empty line dropped.
///
/// Leading and trailing spaces inside lines are kept, some grammars are
/// column-sensitive.
pub fn content_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .strip_suffix('\n')
        .unwrap_or(input)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parse every non-empty line of `input` with `parse_line`.
pub fn parse_lines<T, F>(input: &str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim()).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Parse one record per non-empty line through the record's `FromStr`.
pub fn parse_records<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr<Err = anyhow::Error>,
{
    parse_lines(input, |line| line.parse::<T>())
}

/// Split `s` on `delimiter` into exactly `N` fields.
pub fn fields<const N: usize>(s: &str, delimiter: char) -> anyhow::Result<[&str; N]> {
    let parts: Vec<&str> = s.split(delimiter).collect();
    <[&str; N]>::try_from(parts.as_slice()).map_err(|_| {
        anyhow!(
            "expected {} fields separated by '{}' but got {} in {:?}",
            N,
            delimiter,
            parts.len(),
            s
        )
    })
}

/// Parse a single trimmed numeric token.
pub fn number<T>(token: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = token.trim();
    token
        .parse()
        .with_context(|| format!("invalid number {:?}", token))
}

/// Strip `open` and `close` from the ends of `s`.
pub fn delimited(s: &str, open: char, close: char) -> anyhow::Result<&str> {
    s.strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(|| anyhow!("expected {:?} enclosed in '{}' and '{}'", s, open, close))
}

/// A rectangular grid of `on` (`true`) and `off` (`false`) cells.
///
/// Fails on any other byte, an empty grid or rows of differing width.
pub fn parse_bool_grid(input: &str, on: u8, off: u8) -> Result<Vec<Vec<bool>>, ParseError> {
    let grid = parse_lines(input, |line| {
        line.bytes()
            .map(|b| match b {
                _ if b == on => Ok(true),
                _ if b == off => Ok(false),
                other => bail!("unexpected cell {:?}", other as char),
            })
            .collect::<anyhow::Result<Vec<bool>>>()
    })?;
    check_rectangular(&grid).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    Ok(grid)
}

/// Fails unless `rows` is non-empty and every row has the width of the first.
pub fn check_rectangular<T>(rows: &[Vec<T>]) -> anyhow::Result<()> {
    let Some(first) = rows.first() else {
        bail!("grid is empty");
    };
    if let Some((idx, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != first.len())
    {
        bail!(
            "grid is not rectangular: row {} has width {} but row 1 has width {}",
            idx + 1,
            row.len(),
            first.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines_reports_line_numbers() {
        let err = parse_lines("1\n2\n\nx\n", |l| number::<u32>(l)).unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => {
                assert!(msg.starts_with("(line 4)"), "{msg}");
                assert!(msg.contains("\"x\""), "{msg}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_lines_skips_blank_lines() {
        assert_eq!(parse_lines("1\n\n 2 \n", |l| number::<u32>(l)).unwrap(), vec![1, 2]);
    }

    #[test]
    fn fields_requires_exact_count() {
        assert_eq!(fields::<3>("1,2,3", ',').unwrap(), ["1", "2", "3"]);
        assert!(fields::<3>("1,2", ',').is_err());
        assert!(fields::<2>("1,2,3", ',').is_err());
        assert!(fields::<2>("1;2", ',').is_err());
    }

    #[test]
    fn delimited_checks_both_ends() {
        assert_eq!(delimited("[.#]", '[', ']').unwrap(), ".#");
        assert!(delimited("[.#", '[', ']').is_err());
        assert!(delimited("(1)", '[', ']').is_err());
    }

    #[test]
    fn content_lines_keeps_inner_spaces() {
        let lines: Vec<_> = content_lines(" 1 2 \n3  \n").collect();
        assert_eq!(lines, vec![" 1 2 ", "3  "]);
    }

    #[test]
    fn bool_grid_must_be_rectangular() {
        let grid = parse_bool_grid("@.\n.@\n", b'@', b'.').unwrap();
        assert_eq!(grid, vec![vec![true, false], vec![false, true]]);
        assert!(parse_bool_grid("@.\n.\n", b'@', b'.').is_err());
        assert!(parse_bool_grid("@x\n..\n", b'@', b'.').is_err());
        assert!(parse_bool_grid("\n", b'@', b'.').is_err());
    }
}
