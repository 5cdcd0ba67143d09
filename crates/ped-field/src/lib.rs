//! `ped-field` — the two cost surfaces pedestrians descend.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`potential`] | `PotentialSolver` trait, `DijkstraSolver`, `GridStepSolver` |
//! | [`penalty`]   | `PenaltyKernel`, `PenaltySign`                             |
//! | [`error`]     | `FieldError`, `FieldResult<T>`                             |
//!
//! Both fields are written straight into the [`ped_core::Grid`] cells
//! (`Cell::potential`, `Cell::penalty`); this crate holds no grid-sized state
//! of its own.

pub mod error;
pub mod penalty;
pub mod potential;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use penalty::{PenaltyKernel, PenaltySign};
pub use potential::{
    compute_potential, solver_for, DijkstraSolver, FieldStats, GridStepSolver, PotentialSolver,
};
