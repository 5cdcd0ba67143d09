//! A single grid unit.

/// Occupancy of a cell.  Exactly one state at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellState {
    #[default]
    Empty,
    Pedestrian,
    Obstacle,
    Target,
}

impl CellState {
    /// States a pedestrian can never step into.
    pub const BLOCKING: [CellState; 2] = [CellState::Pedestrian, CellState::Obstacle];

    /// States the potential flood never crosses.
    pub const IMPASSABLE: [CellState; 1] = [CellState::Obstacle];
}

/// One grid cell: occupancy, distance-to-target potential, and the transient
/// crowding penalty.
///
/// `potential` starts at `f64::INFINITY`, meaning no known path to the
/// target.  It is written only by the potential solvers.
///
/// `state` is read-only outside this crate; only the `Grid` placement and
/// movement methods change it, so the grid rosters always agree with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub(crate) state: CellState,
    pub potential: f64,
    pub penalty:   f64,
}

impl Cell {
    pub const fn new() -> Self {
        Self {
            state:     CellState::Empty,
            potential: f64::INFINITY,
            penalty:   0.0,
        }
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// The floor-field value a pedestrian compares when picking a move.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.potential + self.penalty
    }

    /// `true` if some path to the target was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.potential.is_finite()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
