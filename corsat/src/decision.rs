//! Decision heuristic: pick an unassigned variable and polarity uniformly at random (§4.8).
//!
//! No activity scores, no phase saving — a future extension, not a requirement.

use corsat_formula::Lit;
use rand::Rng;

use crate::solver::Solver;

/// Pick the next decision literal, or `None` if every variable is already assigned.
pub(crate) fn decide(solver: &mut Solver) -> Option<Lit> {
    let var_count = solver.vars.var_count();
    if var_count == 0 {
        return None;
    }
    let start = solver.rng.gen_range(0..var_count);
    let var = solver.vars.first_unassigned_from(start)?;
    let negative = solver.rng.gen();
    let lit = var.lit(negative);
    log::debug!("decide chose literal {} at level {}", lit.to_dimacs(), solver.dlevel);
    Some(lit)
}
