//! Basic data types shared by the Corsat SAT solver.
#[macro_use]
pub mod lit;
pub mod cnf;

#[cfg(any(test, feature = "proptest-strategies", feature = "internal-testing"))]
pub mod test;

pub use cnf::CnfFormula;
pub use lit::{Lit, LitIdx, Var};
