//! Transient crowding penalty.
//!
//! Every pedestrian at `P` raises the cost of each cell `C` with
//! `dist(P, C) < d_max` by the smooth bump
//!
//! ```text
//! exp( 1 / (dist(P,C)² − d_max²) )
//! ```
//!
//! which peaks at `P` (`exp(−1/d_max²)`) and decays to 0 at the radius.  The
//! kernel is singular at `dist == d_max`; the strict `<` test keeps it out.
//!
//! The simulation applies the penalty for all pedestrians, reads it while
//! choosing moves, then retracts it with the opposite sign.  Addition
//! commutes, so neither pass depends on pedestrian order, and a retraction
//! restores every cell to its previous value up to round-off.

use ped_core::{CellPos, Grid};

use crate::{FieldError, FieldResult};

/// Whether a pass adds or removes the penalty.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PenaltySign {
    Apply,
    Retract,
}

impl PenaltySign {
    #[inline]
    fn factor(self) -> f64 {
        match self {
            PenaltySign::Apply => 1.0,
            PenaltySign::Retract => -1.0,
        }
    }
}

/// The bump kernel for a fixed radius `d_max`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenaltyKernel {
    radius:    u32,
    radius_sq: f64,
}

impl PenaltyKernel {
    pub fn new(radius: u32) -> FieldResult<Self> {
        if radius == 0 {
            return Err(FieldError::InvalidRadius(radius));
        }
        let r = radius as f64;
        Ok(Self { radius, radius_sq: r * r })
    }

    /// Kernel value at squared distance `distance_sq`, or `None` at or
    /// beyond the radius.
    #[inline]
    pub fn weight(&self, distance_sq: f64) -> Option<f64> {
        (distance_sq < self.radius_sq).then(|| (1.0 / (distance_sq - self.radius_sq)).exp())
    }

    /// Add (or retract) the penalty of one pedestrian standing at `center`.
    pub fn add(&self, grid: &mut Grid, center: CellPos, sign: PenaltySign) {
        let r = self.radius as usize;
        let factor = sign.factor();
        let row_end = (center.row + r + 1).min(grid.rows());
        let col_end = (center.col + r + 1).min(grid.cols());

        for row in center.row.saturating_sub(r)..row_end {
            for col in center.col.saturating_sub(r)..col_end {
                let pos = CellPos::new(row, col);
                if let Some(w) = self.weight(center.distance_sq(pos)) {
                    grid.at_mut(pos).penalty += factor * w;
                }
            }
        }
    }

    /// Add (or retract) the penalty of every pedestrian on the grid.
    pub fn add_all(&self, grid: &mut Grid, sign: PenaltySign) {
        for i in 0..grid.pedestrian_count() {
            let center = grid.pedestrians()[i];
            self.add(grid, center, sign);
        }
    }
}
