//! Field-computation error type.

use thiserror::Error;

use ped_core::PedError;

/// Errors produced by `ped-field`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("potential field requested before a target was set")]
    NoTarget,

    #[error("penalty radius must be at least 1, got {0}")]
    InvalidRadius(u32),

    #[error(transparent)]
    Grid(#[from] PedError),
}

pub type FieldResult<T> = Result<T, FieldError>;
