// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for the configuration and dispatch boundaries.
///
/// The mapping engine itself has no failure path: degenerate inputs
/// collapse to an empty result instead.
#[derive(Error, Debug)]
pub enum HarmonicError {
    /// Persisted state could not be parsed or serialised.
    #[error("config error: {0}")]
    Config(String),

    /// Configuration violates the parameter contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// A newer configuration superseded this computation.
    #[error("computation cancelled: generation {generation} was superseded")]
    Cancelled { generation: u64 },
}

pub type HarmonicResult<T> = Result<T, HarmonicError>;
