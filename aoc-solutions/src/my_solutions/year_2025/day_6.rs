use crate::utils::AlgoError;
use crate::utils::parse::{content_lines, number};
use crate::utils::top_digits::digits_value;
use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, InputStat, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

impl Operator {
    fn identity(self) -> u64 {
        match self {
            Operator::Add => 0,
            Operator::Multiply => 1,
        }
    }

    fn apply(self, acc: u64, operand: u64) -> Result<u64, AlgoError> {
        let result = match self {
            Operator::Add => acc.checked_add(operand),
            Operator::Multiply => acc.checked_mul(operand),
        };
        result.ok_or_else(|| AlgoError::Overflow(format!("{:?} of {} and {}", self, acc, operand)))
    }
}

fn checked_total(total: u64, result: u64) -> Result<u64, AlgoError> {
    total
        .checked_add(result)
        .ok_or_else(|| AlgoError::Overflow("grand total exceeds u64".to_string()))
}

/// Problem columns: operand lines above, operator line at the bottom.
///
/// The raw lines are kept because the right-to-left reading depends on the
/// exact column of every digit.
#[derive(Debug)]
pub struct Worksheet<'a> {
    operand_lines: Vec<&'a str>,
    /// Operator and the column it starts at
    operators: Vec<(Operator, usize)>,
    /// Whitespace separated operands, one row per operand line
    rows: Vec<Vec<u64>>,
    width: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_worksheet(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }

    fn input_stats(sheet: &Self::SharedData<'_>) -> Vec<InputStat> {
        vec![
            InputStat::new("problems", sheet.operators.len()),
            InputStat::new("operand rows", sheet.rows.len()),
        ]
    }
}

fn parse_worksheet(input: &str) -> anyhow::Result<Worksheet<'_>> {
    let mut lines: Vec<&str> = content_lines(input).collect();
    let operator_line = lines.pop().ok_or_else(|| anyhow!("empty worksheet"))?;
    ensure!(!lines.is_empty(), "expected operand lines above the operator line");
    let width = operator_line.len();

    let mut operators = Vec::new();
    for (col, b) in operator_line.bytes().enumerate() {
        let operator = match b {
            b'+' => Operator::Add,
            b'*' => Operator::Multiply,
            b' ' if col > 0 => continue,
            other => bail!("unexpected {:?} at column {} of the operator line", other as char, col + 1),
        };
        operators.push((operator, col));
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        ensure!(
            line.len() == width,
            "(line {}) is {} columns wide but the operator line has {}",
            idx + 1,
            line.len(),
            width
        );
        ensure!(
            line.bytes().all(|b| b == b' ' || b.is_ascii_digit()),
            "(line {}) may only contain digits and spaces",
            idx + 1
        );
        let row = line
            .split_whitespace()
            .map(number)
            .collect::<anyhow::Result<Vec<u64>>>()?;
        ensure!(
            row.len() == operators.len(),
            "(line {}) has {} operands for {} operators",
            idx + 1,
            row.len(),
            operators.len()
        );
        rows.push(row);
    }

    Ok(Worksheet {
        operand_lines: lines,
        operators,
        rows,
        width,
    })
}

impl PartSolver<1> for Solver {
    fn solve(sheet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (problem, &(operator, _)) in sheet.operators.iter().enumerate() {
            let result = sheet
                .rows
                .iter()
                .try_fold(operator.identity(), |acc, row| operator.apply(acc, row[problem]))?;
            total = checked_total(total, result)?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(sheet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(column_total(sheet)?.to_string())
    }
}

/// Each column's digits, read top to bottom, form one operand. A problem
/// spans from its operator's column up to the blank separator column before
/// the next operator.
fn column_total(sheet: &Worksheet<'_>) -> Result<u64, AlgoError> {
    let mut total = 0;
    for (idx, &(operator, start)) in sheet.operators.iter().enumerate() {
        let end = match sheet.operators.get(idx + 1) {
            Some(&(_, next_start)) => next_start - 1,
            None => sheet.width,
        };
        let mut result = operator.identity();
        for col in (start..end).rev() {
            let digits: Vec<u8> = sheet
                .operand_lines
                .iter()
                .filter_map(|line| line.as_bytes()[col].checked_sub(b'0').filter(|&d| d < 10))
                .collect();
            let operand = digits_value(&digits)?;
            if operand == 0 {
                return Err(AlgoError::InvalidInput(format!(
                    "column {} holds no operand",
                    col + 1
                )));
            }
            result = operator.apply(result, operand)?;
        }
        total = checked_total(total, result)?;
    }
    Ok(total)
}
