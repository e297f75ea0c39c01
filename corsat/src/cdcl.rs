//! Unit propagation (§4.5) and the top-level decision loop (§4.7).

use corsat_formula::Lit;

use crate::analyze_conflict;
use crate::clause::ClauseRef;
use crate::decision;
use crate::solver::Solver;

/// Run the full decision loop: initial unit propagation, then decide/propagate until every
/// variable is assigned (SAT) or a top-level conflict is reached (UNSAT).
pub(crate) fn run(solver: &mut Solver) -> bool {
    if solver.state.is_empty() {
        return false;
    }

    if !propagate_initial_units(solver) {
        return false;
    }

    loop {
        solver.dlevel += 1;
        match decision::decide(solver) {
            None => return true,
            Some(lit) => {
                if !propagate(solver, lit, None) {
                    return false;
                }
            }
        }
    }
}

/// Assert every recorded unit fact at decision level 0 (§4.7 step 3).
fn propagate_initial_units(solver: &mut Solver) -> bool {
    solver.dlevel = 0;
    let units: Vec<Lit> = solver
        .vars
        .iter()
        .filter_map(|var| {
            let data = solver.vars.var_data(var);
            if data.unit {
                Some(var.lit(data.unit_sign))
            } else {
                None
            }
        })
        .collect();

    for lit in units {
        if solver.vars.var_data(lit.var()).assigned {
            if !solver.vars.lit_is_true(lit) {
                return false;
            }
            continue;
        }
        if !propagate(solver, lit, None) {
            return false;
        }
    }
    true
}

/// Assign `seed_literal` with `seed_reason`, then drive the trail forward via watched literals
/// until quiescence or an unrecoverable conflict.
pub(crate) fn propagate(solver: &mut Solver, seed_literal: Lit, seed_reason: Option<ClauseRef>) -> bool {
    assign(solver, seed_literal, seed_reason);

    while let Some(l) = solver.trail.next_unprocessed() {
        let fl = !l;
        if let Some(confl) = scan_watch_list(solver, fl) {
            match analyze_conflict::analyze(solver, confl) {
                None => return false,
                Some((asserting, reason)) => {
                    assign(solver, asserting, reason);
                    let resume_at = solver.trail.len() - 1;
                    solver.trail.set_processed(resume_at);
                }
            }
        }
    }
    true
}

fn assign(solver: &mut Solver, lit: Lit, reason: Option<ClauseRef>) {
    let dlevel = solver.dlevel;
    let data = solver.vars.var_data_mut(lit.var());
    data.assigned = true;
    data.sign = lit.is_negative();
    data.dlevel = dlevel;
    data.reason = reason;
    solver.trail.push(lit);
    log::trace!("assign {} at level {} (reason {:?})", lit.to_dimacs(), dlevel, reason);
}

/// Rescan the watch list of the literal `fl` that just became false, permuting watched literals
/// and assigning implied literals along the way. Returns the conflicting clause, if any.
fn scan_watch_list(solver: &mut Solver, fl: Lit) -> Option<ClauseRef> {
    let w = solver.watches.take(fl);
    let mut kept = Vec::with_capacity(w.len());
    let mut i = 0;
    let mut conflict = None;

    while i < w.len() {
        let cref = w[i];
        let k = if solver.clauses.clause(cref).lits()[0] == fl { 0 } else { 1 };
        let other = solver.clauses.clause(cref).lits()[1 - k];

        if solver.vars.lit_value(other) == Some(true) {
            kept.push(cref);
            i += 1;
            continue;
        }

        let replacement = (2..solver.clauses.clause(cref).len())
            .find(|&j| !solver.vars.lit_is_false(solver.clauses.clause(cref).lits()[j]));

        if let Some(j) = replacement {
            let clause = solver.clauses.clause_mut(cref);
            clause.lits_mut().swap(k, j);
            let m = clause.lits()[k];
            solver.watches.add_watch(m, cref);
            i += 1;
            continue;
        }

        if solver.vars.lit_value(other).is_none() {
            if k == 0 {
                solver.clauses.clause_mut(cref).lits_mut().swap(0, 1);
            }
            assign(solver, other, Some(cref));
            kept.push(cref);
            i += 1;
            continue;
        }

        kept.push(cref);
        kept.extend_from_slice(&w[i + 1..]);
        conflict = Some(cref);
        break;
    }

    solver.watches.restore(fl, kept);
    conflict
}
