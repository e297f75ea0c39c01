//! Variable store.

pub mod data;

use corsat_formula::{Lit, Var};

pub use data::VarData;

/// Indexed collection of per-variable state (§3, "Variable store").
#[derive(Default)]
pub struct Variables {
    var_data: Vec<VarData>,
}

impl Variables {
    /// Create a store sized for `count` variables, all unassigned.
    pub fn with_var_count(count: usize) -> Variables {
        Variables {
            var_data: vec![VarData::default(); count],
        }
    }

    /// Number of variables in the store.
    pub fn var_count(&self) -> usize {
        self.var_data.len()
    }

    /// Metadata for a variable.
    pub fn var_data(&self, var: Var) -> &VarData {
        &self.var_data[var.index()]
    }

    /// Mutable metadata for a variable.
    pub fn var_data_mut(&mut self, var: Var) -> &mut VarData {
        &mut self.var_data[var.index()]
    }

    /// Current value of a literal, if its variable is assigned.
    pub fn lit_value(&self, lit: Lit) -> Option<bool> {
        let data = self.var_data(lit.var());
        if data.assigned {
            Some(data.sign != lit.is_negative())
        } else {
            None
        }
    }

    /// Whether `lit` is currently false under the assignment (§4.1).
    pub fn lit_is_false(&self, lit: Lit) -> bool {
        let data = self.var_data(lit.var());
        data.assigned && data.sign != lit.is_negative()
    }

    /// Whether `lit` is currently true under the assignment (§4.1).
    pub fn lit_is_true(&self, lit: Lit) -> bool {
        let data = self.var_data(lit.var());
        data.assigned && data.sign == lit.is_negative()
    }

    /// Whether every variable has a value.
    pub fn all_assigned(&self) -> bool {
        self.var_data.iter().all(|data| data.assigned)
    }

    /// Index, with wraparound starting at `start`, of the first unassigned variable.
    ///
    /// Used by the decision heuristic (§4.8) to recover from picking an already-assigned
    /// variable without rescanning from the beginning every time.
    pub fn first_unassigned_from(&self, start: usize) -> Option<Var> {
        let n = self.var_data.len();
        if n == 0 {
            return None;
        }
        (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&index| !self.var_data[index].assigned)
            .map(Var::from_index)
    }

    /// Iterator over all variables in the store.
    pub fn iter(&self) -> impl Iterator<Item = Var> {
        (0..self.var_data.len()).map(Var::from_index)
    }
}
