//! Grid-level error type.
//!
//! Downstream crates wrap `PedError` as one variant of their own enums via
//! `#[from]`, so a bounds failure raised deep in `Grid` surfaces unchanged at
//! the simulation API.

use thiserror::Error;

/// The error type for `ped-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PedError {
    /// Coordinates are signed so that negative scenario input can be reported
    /// verbatim.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: i64, col: i64, rows: usize, cols: usize },

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid does not fit in memory")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("pedestrian roster is full ({0} pedestrians)")]
    RosterFull(usize),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ped-core`.
pub type PedResult<T> = Result<T, PedError>;
