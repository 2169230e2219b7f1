//! Integer programs with equality constraints, solved by an external backend.
//!
//! [`IntegerProgram`] only describes the model. Solving goes through the
//! [`IntegerProgramSolver`] trait; [`MicrolpSolver`] hands the model to
//! `good_lp` with the pure-Rust `microlp` backend.

use super::AlgoError;
use good_lp::{
    Expression, ProblemVariables, Solution, SolverModel, Variable, constraint, microlp, variable,
};
use log::debug;

/// `Σ coefficient · x[variable] == rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityRow {
    pub terms: Vec<(usize, f64)>,
    pub rhs: f64,
}

/// Minimise `objective · x` subject to equality rows, with `x >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerProgram {
    objective: Vec<f64>,
    integral: Vec<bool>,
    rows: Vec<EqualityRow>,
}

impl IntegerProgram {
    /// One non-negative integer variable per objective coefficient, no rows yet
    pub fn new(objective: Vec<f64>) -> Self {
        let integral = vec![true; objective.len()];
        Self {
            objective,
            integral,
            rows: Vec::new(),
        }
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn rows(&self) -> &[EqualityRow] {
        &self.rows
    }

    pub fn set_integral(&mut self, variable: usize, integral: bool) -> Result<(), AlgoError> {
        let flag = self.integral.get_mut(variable).ok_or_else(|| {
            AlgoError::InvalidInput(format!("variable {variable} does not exist"))
        })?;
        *flag = integral;
        Ok(())
    }

    pub fn add_equality(&mut self, terms: Vec<(usize, f64)>, rhs: f64) -> Result<(), AlgoError> {
        if let Some(&(variable, _)) = terms.iter().find(|&&(v, _)| v >= self.num_variables()) {
            return Err(AlgoError::InvalidInput(format!(
                "row refers to variable {variable} but only {} exist",
                self.num_variables()
            )));
        }
        self.rows.push(EqualityRow { terms, rhs });
        Ok(())
    }

    /// Fewest total presses of `toggles` so that every dimension `j` is
    /// pressed exactly `targets[j]` times.
    ///
    /// Toggle `i` adds one to every dimension whose bit is set in
    /// `toggles[i]`. A dimension no toggle touches gets no row, but a
    /// non-zero target on it makes the model infeasible up front. Dimensions
    /// past `u16::BITS` are never touched.
    pub fn min_toggle_presses(targets: &[u32], toggles: &[u16]) -> Result<Self, AlgoError> {
        let mut program = Self::new(vec![1.0; toggles.len()]);
        for (dimension, &target) in targets.iter().enumerate() {
            let terms: Vec<(usize, f64)> = toggles
                .iter()
                .enumerate()
                .filter(|&(_, &mask)| dimension < u16::BITS as usize && mask & (1 << dimension) != 0)
                .map(|(variable, _)| (variable, 1.0))
                .collect();
            if terms.is_empty() {
                if target != 0 {
                    return Err(AlgoError::Infeasible(format!(
                        "dimension {dimension} needs {target} but no toggle reaches it"
                    )));
                }
                continue;
            }
            program.add_equality(terms, f64::from(target))?;
        }
        Ok(program)
    }
}

/// Backend seam: returns the optimal objective value.
pub trait IntegerProgramSolver {
    fn minimise(&self, program: &IntegerProgram) -> Result<f64, AlgoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl IntegerProgramSolver for MicrolpSolver {
    fn minimise(&self, program: &IntegerProgram) -> Result<f64, AlgoError> {
        debug!(
            "integer program: {} variables, {} rows",
            program.num_variables(),
            program.rows.len()
        );
        let mut problem = ProblemVariables::new();
        let variables: Vec<Variable> = program
            .integral
            .iter()
            .map(|&integral| {
                let definition = variable().min(0);
                problem.add(if integral { definition.integer() } else { definition })
            })
            .collect();

        let objective: Expression = program
            .objective
            .iter()
            .zip(&variables)
            .map(|(&coefficient, &x)| coefficient * x)
            .sum();

        let mut model = problem.minimise(objective).using(microlp);
        for row in &program.rows {
            let lhs: Expression = row
                .terms
                .iter()
                .map(|&(variable, coefficient)| coefficient * variables[variable])
                .sum();
            model = model.with(constraint!(lhs == row.rhs));
        }

        let solution = model
            .solve()
            .map_err(|e| AlgoError::Infeasible(e.to_string()))?;
        Ok(program
            .objective
            .iter()
            .zip(&variables)
            .map(|(&coefficient, &x)| coefficient * solution.value(x))
            .sum())
    }
}

/// Integer optimum of `program`, rounded to the nearest whole number.
pub fn minimise_integral<S: IntegerProgramSolver>(solver: &S, program: &IntegerProgram) -> Result<u64, AlgoError> {
    let value = solver.minimise(program)?;
    if !value.is_finite() || value < -0.5 {
        return Err(AlgoError::Infeasible(format!("objective value {value} is not a count")));
    }
    Ok(value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masks(toggles: &[&[u16]]) -> Vec<u16> {
        toggles
            .iter()
            .map(|bits| bits.iter().fold(0, |mask, &bit| mask | (1 << bit)))
            .collect()
    }

    #[test]
    fn model_skips_untouched_dimensions() {
        let toggles = masks(&[&[0], &[0, 2]]);
        let program = IntegerProgram::min_toggle_presses(&[3, 0, 1], &toggles).unwrap();
        assert_eq!(program.num_variables(), 2);
        assert_eq!(
            program.rows(),
            &[
                EqualityRow {
                    terms: vec![(0, 1.0), (1, 1.0)],
                    rhs: 3.0
                },
                EqualityRow {
                    terms: vec![(1, 1.0)],
                    rhs: 1.0
                },
            ]
        );
    }

    #[test]
    fn untouched_dimension_with_target_is_infeasible() {
        let toggles = masks(&[&[0]]);
        assert!(matches!(
            IntegerProgram::min_toggle_presses(&[1, 2], &toggles),
            Err(AlgoError::Infeasible(_))
        ));
    }

    #[test]
    fn dimensions_past_the_mask_width_are_untouched() {
        let mut targets = vec![1; u16::BITS as usize];
        targets.push(0);
        let program = IntegerProgram::min_toggle_presses(&targets, &[u16::MAX]).unwrap();
        assert_eq!(program.rows().len(), 16);

        targets.push(1);
        assert!(matches!(
            IntegerProgram::min_toggle_presses(&targets, &[u16::MAX]),
            Err(AlgoError::Infeasible(msg)) if msg.contains("dimension 17")
        ));
    }

    #[test]
    fn rows_must_refer_to_existing_variables() {
        let mut program = IntegerProgram::new(vec![1.0]);
        assert!(program.add_equality(vec![(1, 1.0)], 2.0).is_err());
        assert!(program.set_integral(3, false).is_err());
    }

    #[test]
    fn joltage_machines() {
        let machines: [(&[u32], Vec<u16>, u64); 3] = [
            (
                &[3, 5, 4, 7],
                masks(&[&[3], &[1, 3], &[2], &[2, 3], &[0, 2], &[0, 1]]),
                10,
            ),
            (
                &[7, 5, 12, 7, 2],
                masks(&[&[0, 2, 3, 4], &[2, 3], &[0, 4], &[0, 1, 2], &[1, 2, 3, 4]]),
                12,
            ),
            (
                &[10, 11, 11, 5, 10, 5],
                masks(&[&[0, 1, 2, 3, 4], &[0, 3, 4], &[0, 1, 2, 4, 5], &[1, 2]]),
                11,
            ),
        ];
        for (targets, toggles, expected) in machines {
            let program = IntegerProgram::min_toggle_presses(targets, &toggles).unwrap();
            assert_eq!(minimise_integral(&MicrolpSolver, &program).unwrap(), expected);
        }
    }

    #[test]
    fn conflicting_rows_are_infeasible() {
        // x0 == 1 and x0 == 2
        let toggles = masks(&[&[0, 1]]);
        let program = IntegerProgram::min_toggle_presses(&[1, 2], &toggles).unwrap();
        assert!(matches!(
            minimise_integral(&MicrolpSolver, &program),
            Err(AlgoError::Infeasible(_))
        ));
    }
}
