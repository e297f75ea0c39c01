//! The outcome of a solve call.

use corsat_formula::{Lit, Var};

/// The result of [`crate::solver::Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// The formula is satisfiable; carries a satisfying assignment.
    Sat(Model),
    /// The formula is unsatisfiable.
    Unsat,
}

impl SolveResult {
    /// The model, if the result is [`SolveResult::Sat`].
    pub fn model(&self) -> Option<&Model> {
        match self {
            SolveResult::Sat(model) => Some(model),
            SolveResult::Unsat => None,
        }
    }

    /// Whether the result is [`SolveResult::Sat`].
    pub fn is_sat(&self) -> bool {
        matches!(self, SolveResult::Sat(_))
    }

    /// Whether the result is [`SolveResult::Unsat`].
    pub fn is_unsat(&self) -> bool {
        matches!(self, SolveResult::Unsat)
    }
}

/// A satisfying assignment.
///
/// Indexed by 0-based variable index; `assignment[var.index()]` is the value assigned to `var`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    assignment: Vec<bool>,
}

impl Model {
    pub(crate) fn new(assignment: Vec<bool>) -> Model {
        Model { assignment }
    }

    /// The value assigned to `var`.
    pub fn value(&self, var: Var) -> bool {
        self.assignment[var.index()]
    }

    /// Whether `lit` is satisfied by this model.
    pub fn lit_is_true(&self, lit: Lit) -> bool {
        self.value(lit.var()) != lit.is_negative()
    }

    /// The full assignment, indexed by 0-based variable index.
    pub fn assignment(&self) -> &[bool] {
        &self.assignment
    }
}
