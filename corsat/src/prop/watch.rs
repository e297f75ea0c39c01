//! Watchlists to detect clauses that became unit.
//!
//! Each clause of length >= 2 has watches pointing to it from two of its own literals (its first
//! two slots). Whenever the watches move to different literals, the clause's literals are
//! permuted so the watched literals stay in positions 0 and 1.
//!
//! A clause is filed in the watch list of the literal it watches directly, not its negation
//! (invariant I1/I3 of the design). When a literal becomes false, its watch list holds exactly
//! the clauses that might now be unit or conflicting, and BCP rescans only those.
//!
//! There is no need to update watchlists on backtracking, as unassigning variables cannot
//! invalidate the invariant.

use corsat_formula::Lit;

use crate::clause::ClauseRef;

/// Watchlists to detect clauses that became unit.
#[derive(Default)]
pub struct Watchlists {
    /// Indexed by `Lit::code()`.
    watches: Vec<Vec<ClauseRef>>,
}

impl Watchlists {
    /// Create watchlists sized for `count` variables.
    pub fn with_var_count(count: usize) -> Watchlists {
        Watchlists {
            watches: vec![vec![]; count * 2],
        }
    }

    /// Start watching a clause at its first two literals.
    ///
    /// `lits` have to be the first two literals of the given clause.
    pub fn watch_clause(&mut self, cref: ClauseRef, lits: [Lit; 2]) {
        self.watches[lits[0].code()].push(cref);
        self.watches[lits[1].code()].push(cref);
    }

    /// Take ownership of the watch list for `lit`, leaving an empty list in its place.
    ///
    /// Used by BCP to scan a watch list while still being able to append clauses to other
    /// watch lists (including possibly this same one) without violating borrowing rules.
    pub fn take(&mut self, lit: Lit) -> Vec<ClauseRef> {
        std::mem::take(&mut self.watches[lit.code()])
    }

    /// Replace the watch list for `lit`.
    pub fn restore(&mut self, lit: Lit, list: Vec<ClauseRef>) {
        self.watches[lit.code()] = list;
    }

    /// Append a clause to the watch list of `lit`.
    pub fn add_watch(&mut self, lit: Lit, cref: ClauseRef) {
        self.watches[lit.code()].push(cref);
    }

    /// The watch list for `lit`, for inspection (used by invariant checks in tests).
    pub fn watches(&self, lit: Lit) -> &[ClauseRef] {
        &self.watches[lit.code()]
    }
}
