//! Error types shared by every crate of the workspace.

/// Failures reported by the oracle (potential, integrator, sampler).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    #[error("orientation has zero length")]
    DegenerateOrientation,
    #[error("initial state is not finite")]
    NonFinite,
    #[error("invalid step size: {0} (must be positive and finite)")]
    InvalidStepSize(f64),
    #[error("no admissible planet layout after {draws} draws")]
    SamplingExhausted { draws: u32 },
}

/// Errors returned by registry, missile and clock operations.
///
/// Every operation that fails leaves its receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GravixError {
    #[error("index {index} out of range for {len} planets")]
    InvalidIndex { index: usize, len: usize },
    #[error(
        "position and orientation must both have 2 or 3 components (got {position} and {orientation})"
    )]
    InvalidArity { position: usize, orientation: usize },
    #[error("batch inputs differ in length: expected {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("missile is not initialized")]
    UninitializedMissile,
    #[error("oracle rejected request: {0}")]
    OracleRejected(#[from] OracleError),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("could not allocate storage for {count} planets")]
    Allocation { count: usize },
}
