//! Error types for KshetraPlan

use thiserror::Error;

/// KshetraPlan error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// Grid dimensions must both be non-zero before any cell is allocated.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlanningError>;
