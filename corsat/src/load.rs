//! Installing clauses into a solver (§4.3).

use corsat_formula::Lit;

use crate::clause::ClauseRef;
use crate::solver::Solver;

/// Install a clause into `solver`, returning the clause's arena handle if it was long enough to
/// need one (length >= 2).
///
/// Unlike a preconditioning front end, this performs no simplification: duplicate literals and
/// tautologies are the caller's responsibility and are tolerated, not rejected or rewritten. BCP
/// handles an already-satisfied or already-contradicted clause correctly regardless.
pub(crate) fn add_clause(solver: &mut Solver, lits: &[Lit]) -> Option<ClauseRef> {
    match lits.len() {
        0 => {
            solver.state.set_empty();
            None
        }
        1 => {
            let lit = lits[0];
            let var = lit.var();
            let data = solver.vars.var_data_mut(var);
            if data.unit {
                if data.unit_sign != lit.is_negative() {
                    solver.state.set_empty();
                }
            } else {
                data.unit = true;
                data.unit_sign = lit.is_negative();
            }
            None
        }
        _ => {
            let cref = solver.clauses.add_clause(lits.to_vec());
            solver.watches.watch_clause(cref, [lits[0], lits[1]]);
            Some(cref)
        }
    }
}
