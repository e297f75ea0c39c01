//! The public solver handle (§6, "External interfaces").

use corsat_formula::Lit;
use rand::{rngs::StdRng, SeedableRng};

use crate::cdcl;
use crate::clause::ClauseAlloc;
use crate::config::SolverConfig;
use crate::error::{check_lit, SolverError};
use crate::load;
use crate::model::{Model, SolveResult};
use crate::prop::{Trail, Watchlists};
use crate::state::SolverState;
use crate::variables::Variables;

/// A one-shot CDCL solver instance.
///
/// Built for a fixed variable count, loaded with clauses via [`Solver::add_clause`], then
/// consumed by [`Solver::solve`]. There is no incremental re-solving: assumptions, push/pop, and
/// solving again after adding more clauses are all out of scope (§13 of SPEC_FULL.md).
pub struct Solver {
    pub(crate) config: SolverConfig,
    pub(crate) vars: Variables,
    pub(crate) clauses: ClauseAlloc,
    pub(crate) watches: Watchlists,
    pub(crate) trail: Trail,
    pub(crate) dlevel: u32,
    pub(crate) state: SolverState,
    pub(crate) rng: StdRng,
    var_count: usize,
}

impl Solver {
    /// Create a solver for `var_count` variables (1-based indices `1..=var_count` at the API
    /// boundary).
    pub fn new(var_count: usize, config: SolverConfig) -> Solver {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Solver {
            config,
            vars: Variables::with_var_count(var_count),
            clauses: ClauseAlloc::new(),
            watches: Watchlists::with_var_count(var_count),
            trail: Trail::new(),
            dlevel: 0,
            state: SolverState::new(),
            rng,
            var_count,
        }
    }

    /// The configuration the solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The number of variables the solver was built for.
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Install a clause (§4.3). An empty slice denotes the immediately-unsatisfiable clause.
    ///
    /// Duplicate literals and tautologies are tolerated, not rejected: the solver does not
    /// simplify clauses at load time.
    pub fn add_clause(&mut self, lits: &[Lit]) -> Result<(), SolverError> {
        for &lit in lits {
            check_lit(lit, self.var_count)?;
        }
        load::add_clause(self, lits);
        Ok(())
    }

    /// Install a clause given as signed DIMACS-style integers in `[-var_count, var_count] \ {0}`.
    pub fn add_clause_dimacs(&mut self, lits: &[isize]) -> Result<(), SolverError> {
        let mut converted = Vec::with_capacity(lits.len());
        for &number in lits {
            if number == 0 {
                return Err(SolverError::ZeroLiteral);
            }
            converted.push(Lit::from_dimacs(number));
        }
        self.add_clause(&converted)
    }

    /// Run the decision loop to completion and report SAT or UNSAT (§4.7).
    pub fn solve(mut self) -> SolveResult {
        let original_clauses = self.clauses.len();
        let sat = cdcl::run(&mut self);
        let learned_clauses = self.clauses.len() - original_clauses;

        log::info!(
            "solve finished: {}, {} variables, {} original clauses, {} learned clauses",
            if sat { "SAT" } else { "UNSAT" },
            self.var_count,
            original_clauses,
            learned_clauses,
        );

        if sat {
            let assignment = (0..self.var_count)
                .map(|index| {
                    let var = corsat_formula::Var::from_index(index);
                    !self.vars.var_data(var).sign
                })
                .collect();
            SolveResult::Sat(Model::new(assignment))
        } else {
            SolveResult::Unsat
        }
    }
}

/// Decide satisfiability of a CNF formula given as a variable count and a sequence of clauses
/// (§6, "External interfaces").
///
/// Each clause is a sequence of nonzero signed integers in `[-n, n]`; an empty clause denotes the
/// immediately-unsatisfiable clause.
pub fn solve(n: usize, clauses: &[Vec<isize>]) -> Result<SolveResult, SolverError> {
    let mut solver = Solver::new(n, SolverConfig::new());
    for clause in clauses {
        solver.add_clause_dimacs(clause)?;
    }
    Ok(solver.solve())
}
