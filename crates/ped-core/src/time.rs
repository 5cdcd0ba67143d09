//! Step counter and run configuration.
//!
//! Time is a bare, monotonically increasing `Tick`.  One tick is one
//! synchronous update of every pedestrian; there is no wall-clock mapping.

use std::fmt;

use crate::{PedError, PedResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }

    /// `true` on every `interval`-th tick.  An interval of 0 never matches.
    #[inline]
    pub fn is_every(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── PotentialMethod ───────────────────────────────────────────────────────────

/// Which static floor field to flood from the target.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PotentialMethod {
    /// Dijkstra with Euclidean edge weights (1 orthogonal, √2 diagonal).
    #[default]
    Dijkstra,
    /// Unit cost per Moore step, FIFO relaxation.  Kept to compare against
    /// historical runs.
    GridSteps,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run configuration.
///
/// Usually embedded in the scenario JSON under `"config"`; any missing key
/// takes its [`Default`] value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Ticks performed by `Sim::run`.
    pub total_ticks: u64,

    /// Radius `d_max` of the crowding penalty, in cells.  Must be positive.
    pub penalty_radius: u32,

    /// Floor-field algorithm.
    pub potential_method: PotentialMethod,

    /// Emit a grid snapshot to observers every N ticks.  0 disables
    /// snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn validate(&self) -> PedResult<()> {
        if self.penalty_radius == 0 {
            return Err(PedError::Config("penalty_radius must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           20,
            penalty_radius:        3,
            potential_method:      PotentialMethod::Dijkstra,
            output_interval_ticks: 1,
        }
    }
}
