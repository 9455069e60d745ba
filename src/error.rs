//! Error type shared by the catalog, solvers and verifier.

/// Errors raised by the planner.
///
/// Precondition violations (`DuplicateId`, `ZeroHours`, `HoursOverflow`,
/// `ImpactOverflow`, `InvalidCapacity`)
/// are caller bugs and are rejected before any table is built.
/// `SolverMismatch` is the only condition detected at run time and always
/// indicates a defect in one of the two solvers.
#[derive(Debug, thiserror::Error)]
pub enum KnapsackError {
    #[error("duplicate course id {id} at positions {first} and {second}")]
    DuplicateId { id: u32, first: usize, second: usize },

    #[error("course {id} has zero hours; hours must be positive")]
    ZeroHours { id: u32 },

    #[error("total hours overflow at course {id}")]
    HoursOverflow { id: u32 },

    #[error("total impact overflows a 64-bit score at course {id}")]
    ImpactOverflow { id: u32 },

    #[error("capacity must be a positive number of hours, got {capacity}")]
    InvalidCapacity { capacity: usize },

    #[error("at most {max} courses supported here, got {count}")]
    TooManyItems { count: usize, max: usize },

    #[error("table of {cells} cells exceeds the configured limit of {limit}")]
    TableTooLarge { cells: u128, limit: u128 },

    #[error("invalid solver configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("solvers diverged: memoized value {memoized}, tabulated value {tabulated}")]
    SolverMismatch { memoized: u64, tabulated: u64 },

    #[cfg(feature = "serde")]
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}
