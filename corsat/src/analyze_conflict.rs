//! 1-UIP conflict analysis and backjumping (§4.6).

use corsat_formula::Lit;

use crate::clause::ClauseRef;
use crate::load;
use crate::solver::Solver;

/// Analyze a conflict found while `confl` had both watched literals false.
///
/// Returns `None` if the conflict is unrecoverable (it occurred at decision level 0), in which
/// case the caller should report UNSAT. Otherwise installs the learned clause, unwinds the trail
/// to the backjump level, and returns the literal the caller must assign next together with its
/// reason (the learned clause's handle, or `None` if the learned clause had length 1).
pub(crate) fn analyze(solver: &mut Solver, confl: ClauseRef) -> Option<(Lit, Option<ClauseRef>)> {
    if solver.dlevel == 0 {
        return None;
    }

    let current_level = solver.dlevel;
    let mut count = 0u32;
    let mut conflicts: Vec<Lit> = Vec::new();

    let mark = |solver: &mut Solver, lit: Lit, count: &mut u32, conflicts: &mut Vec<Lit>| {
        let data = solver.vars.var_data_mut(lit.var());
        if data.dlevel > 0 && !data.mark {
            data.mark = true;
            if data.dlevel == current_level {
                *count += 1;
            } else {
                conflicts.push(lit);
            }
        }
    };

    let confl_lits: Vec<Lit> = solver.clauses.clause(confl).lits().to_vec();
    for lit in confl_lits {
        mark(solver, lit, &mut count, &mut conflicts);
    }

    let uip = loop {
        let lit = solver.trail.pop().expect("conflict at dlevel > 0 implies a nonempty trail");
        let var = lit.var();
        solver.vars.var_data_mut(var).assigned = false;
        log::trace!("unassign {} while walking back from conflict", lit.to_dimacs());

        if !solver.vars.var_data(var).mark {
            continue;
        }
        solver.vars.var_data_mut(var).mark = false;
        count -= 1;
        if count == 0 {
            break lit;
        }

        let reason = solver.vars.var_data(var).reason;
        if let Some(cref) = reason {
            let reason_lits: Vec<Lit> = solver.clauses.clause(cref).lits()[1..].to_vec();
            for m in reason_lits {
                mark(solver, m, &mut count, &mut conflicts);
            }
        }
    };

    // Build the learned clause: [-uip, ...surviving conflicts], with the max-level literal
    // (if any) kept at position 1.
    let mut learned = vec![!uip];
    let mut blevel = 0u32;

    for &lit in &conflicts {
        if is_redundant(solver, lit) {
            continue;
        }
        let level = solver.vars.var_data(lit.var()).dlevel;
        learned.push(lit);
        if level > blevel {
            blevel = level;
            let last = learned.len() - 1;
            learned.swap(1, last);
        }
    }

    // Unwind further: pop everything still above the backjump level.
    while let Some(&top) = solver.trail.assignments().last() {
        if solver.vars.var_data(top.var()).dlevel <= blevel {
            break;
        }
        let lit = solver.trail.pop().unwrap();
        solver.vars.var_data_mut(lit.var()).assigned = false;
        log::trace!("unassign {} during backjump", lit.to_dimacs());
    }

    for &lit in &conflicts {
        solver.vars.var_data_mut(lit.var()).mark = false;
    }

    solver.dlevel = blevel;

    log::debug!(
        "conflict at level {}, learned clause of size {}, backjump to level {}",
        current_level,
        learned.len(),
        blevel
    );

    let asserting = learned[0];
    let reason = load::add_clause(solver, &learned);
    if solver.state.is_empty() {
        return None;
    }

    Some((asserting, reason))
}

/// Whether `lit` (a literal below the current decision level, already marked) can be dropped
/// from the learned clause: true when every non-asserting literal of its reason is also marked.
fn is_redundant(solver: &Solver, lit: Lit) -> bool {
    match solver.vars.var_data(lit.var()).reason {
        None => false,
        Some(cref) => solver.clauses.clause(cref).lits()[1..]
            .iter()
            .all(|m| solver.vars.var_data(m.var()).mark),
    }
}
