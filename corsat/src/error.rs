//! Errors raised at the public API boundary.

use corsat_formula::Lit;
use thiserror::Error;

/// Errors that [`crate::solver::Solver::add_clause`] can report.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// A literal's variable index was 0 or exceeded the solver's variable count.
    #[error("literal {literal} is out of range for a solver with {var_count} variables")]
    LitOutOfRange {
        /// The offending literal, as given by the caller.
        literal: isize,
        /// The number of variables the solver was built for.
        var_count: usize,
    },
    /// A literal was an actual zero rather than a valid DIMACS literal.
    ///
    /// Only reachable from an API that hands the solver raw integers directly rather than
    /// [`Lit`] values; the typed [`Lit`] API cannot construct a zero literal.
    #[error("literal value 0 is not a valid clause literal")]
    ZeroLiteral,
}

pub(crate) fn check_lit(lit: Lit, var_count: usize) -> Result<(), SolverError> {
    if lit.index() >= var_count {
        Err(SolverError::LitOutOfRange {
            literal: lit.to_dimacs(),
            var_count,
        })
    } else {
        Ok(())
    }
}
