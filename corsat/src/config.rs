//! Solver configuration.

/// Configuration accepted by [`crate::solver::Solver::new`].
///
/// Mirrors the shape of a richer configuration struct, trimmed to the one knob this core
/// actually has: restarts, clause deletion, and VSIDS tuning are all out of scope (§13 of
/// SPEC_FULL.md), leaving only the decision heuristic's source of randomness to configure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Seed for the decision heuristic's RNG.
    ///
    /// `None` seeds from system entropy, giving a different run each time. A fixed seed makes a
    /// run reproducible, which is useful for minimizing a failing input.
    pub seed: Option<u64>,
}

impl SolverConfig {
    /// Default configuration: unseeded randomness.
    pub fn new() -> SolverConfig {
        SolverConfig::default()
    }

    /// Configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> SolverConfig {
        SolverConfig { seed: Some(seed) }
    }
}
