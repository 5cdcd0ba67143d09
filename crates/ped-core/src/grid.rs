//! The cell grid and its rosters.
//!
//! # Ownership
//!
//! `Grid` owns every [`Cell`] by value in one row-major `Vec`.  The target,
//! obstacle list, and pedestrian roster store [`CellPos`] values, never
//! references, and every state change goes through [`Grid::set_state`] so the
//! rosters cannot drift from the per-cell `state` flags:
//!
//! - a cell in `CellState::Pedestrian` appears exactly once in `pedestrians`,
//! - every `pedestrians` entry points at a `CellState::Pedestrian` cell,
//! - the same holds for `obstacles` and the single optional `target`.
//!
//! # Neighbour order
//!
//! [`Grid::neighbors`] enumerates the Moore neighbourhood in row-major delta
//! order (`MOORE_DELTAS`).  Movement tie-breaks depend on this order, so it is
//! part of the public contract.

use tracing::debug;

use crate::{Cell, CellPos, CellState, PedError, PedResult, PedestrianId};

/// Row-major `(d_row, d_col)` offsets of the 8 Moore neighbours.
pub const MOORE_DELTAS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A fixed-size `rows × cols` array of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    rows:        usize,
    cols:        usize,
    cells:       Vec<Cell>,
    target:      Option<CellPos>,
    obstacles:   Vec<CellPos>,
    /// Indexed by `PedestrianId`.
    pedestrians: Vec<CellPos>,
    /// Bumped whenever the target or an obstacle changes.  Potential fields
    /// record the revision they were computed against.
    layout_rev:  u64,
}

impl Grid {
    /// Create an all-empty grid.  Both dimensions must be positive, and the
    /// cell array must be allocatable.
    pub fn new(rows: usize, cols: usize) -> PedResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PedError::EmptyGrid { rows, cols });
        }
        let too_large = || PedError::GridTooLarge { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, Cell::new());

        Ok(Self {
            rows,
            cols,
            cells,
            target:      None,
            obstacles:   Vec::new(),
            pedestrians: Vec::new(),
            layout_rev:  0,
        })
    }

    // ── Dimensions & bounds ───────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Validate signed coordinates (e.g. from scenario input) into a position.
    pub fn pos(&self, row: i64, col: i64) -> PedResult<CellPos> {
        let out_of_bounds = || PedError::OutOfBounds { row, col, rows: self.rows, cols: self.cols };
        let r = usize::try_from(row).map_err(|_| out_of_bounds())?;
        let c = usize::try_from(col).map_err(|_| out_of_bounds())?;
        let pos = CellPos::new(r, c);
        self.check(pos)?;
        Ok(pos)
    }

    /// `Err(OutOfBounds)` unless `pos` lies inside the grid.
    pub fn check(&self, pos: CellPos) -> PedResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(PedError::OutOfBounds {
                row:  pos.row as i64,
                col:  pos.col as i64,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major index of an in-bounds position.
    #[inline]
    pub fn index(&self, pos: CellPos) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {}x{}", self.rows, self.cols);
        pos.row * self.cols + pos.col
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn pos_of(&self, index: usize) -> CellPos {
        CellPos::new(index / self.cols, index % self.cols)
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// Bounds-checked read access.
    pub fn cell(&self, pos: CellPos) -> PedResult<&Cell> {
        self.check(pos)?;
        Ok(&self.cells[self.index(pos)])
    }

    /// Unchecked read access for positions already known to be in bounds
    /// (roster entries, neighbour iteration).
    #[inline]
    pub fn at(&self, pos: CellPos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Mutable access to the numeric fields of an in-bounds cell.
    ///
    /// State changes must go through the placement methods; callers only
    /// touch `potential` and `penalty` here.
    #[inline]
    pub fn at_mut(&mut self, pos: CellPos) -> &mut Cell {
        let i = self.index(pos);
        &mut self.cells[i]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate one grid row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    // ── Rosters ───────────────────────────────────────────────────────────

    pub fn target(&self) -> Option<CellPos> {
        self.target
    }

    pub fn obstacles(&self) -> &[CellPos] {
        &self.obstacles
    }

    /// Current pedestrian positions, indexed by `PedestrianId`.
    pub fn pedestrians(&self) -> &[CellPos] {
        &self.pedestrians
    }

    pub fn pedestrian(&self, id: PedestrianId) -> Option<CellPos> {
        self.pedestrians.get(id.index()).copied()
    }

    pub fn pedestrian_count(&self) -> usize {
        self.pedestrians.len()
    }

    pub fn pedestrian_ids(&self) -> impl Iterator<Item = PedestrianId> + '_ {
        (0..self.pedestrians.len() as u32).map(PedestrianId)
    }

    /// Revision counter of the static layout (target + obstacles).
    pub fn layout_revision(&self) -> u64 {
        self.layout_rev
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Mark `pos` as the unique target.  A previous target reverts to
    /// `Empty`.
    pub fn set_target(&mut self, pos: CellPos) -> PedResult<()> {
        self.check(pos)?;
        if let Some(old) = self.target {
            self.set_state(old, CellState::Empty);
        }
        self.set_state(pos, CellState::Target);
        Ok(())
    }

    /// Place a pedestrian on `pos`, overwriting whatever was there.
    ///
    /// Placing onto a cell that already holds a pedestrian returns that
    /// pedestrian's id instead of registering a duplicate.
    pub fn add_pedestrian(&mut self, pos: CellPos) -> PedResult<PedestrianId> {
        self.check(pos)?;
        // Overwriting a non-pedestrian cell never touches the roster, so a
        // new pedestrian always lands in the next free slot.
        let slot = self
            .pedestrians
            .iter()
            .position(|&p| p == pos)
            .unwrap_or(self.pedestrians.len());
        let id = PedestrianId::try_from(slot).map_err(|_| PedError::RosterFull(slot))?;
        self.set_state(pos, CellState::Pedestrian);
        Ok(id)
    }

    /// Place an obstacle on `pos`, overwriting whatever was there.
    pub fn add_obstacle(&mut self, pos: CellPos) -> PedResult<()> {
        self.check(pos)?;
        self.set_state(pos, CellState::Obstacle);
        Ok(())
    }

    /// Change the state of an in-bounds cell and keep every roster in sync.
    ///
    /// Removing a pedestrian shifts the ids of later roster entries down by
    /// one; that only happens when a placement overwrites a pedestrian during
    /// ingestion, never during stepping.
    fn set_state(&mut self, pos: CellPos, new: CellState) {
        let i = self.index(pos);
        let old = self.cells[i].state;
        if old == new {
            return;
        }

        match old {
            CellState::Empty => {}
            CellState::Pedestrian => {
                self.pedestrians.retain(|&p| p != pos);
                debug!(%pos, ?new, "pedestrian overwritten");
            }
            CellState::Obstacle => {
                self.obstacles.retain(|&p| p != pos);
                self.layout_rev += 1;
            }
            CellState::Target => {
                self.target = None;
                self.layout_rev += 1;
            }
        }

        match new {
            CellState::Empty => {}
            CellState::Pedestrian => self.pedestrians.push(pos),
            CellState::Obstacle => {
                self.obstacles.push(pos);
                self.layout_rev += 1;
            }
            CellState::Target => {
                self.target = Some(pos);
                self.layout_rev += 1;
            }
        }

        self.cells[i].state = new;
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Move pedestrian `id` onto `dest` if `dest` is currently `Empty`.
    ///
    /// Returns `false` (and changes nothing) when the destination is taken,
    /// is the target, or the id is unknown.
    pub fn move_pedestrian(&mut self, id: PedestrianId, dest: CellPos) -> bool {
        let Some(src) = self.pedestrian(id) else {
            return false;
        };
        if !self.contains(dest) || self.at(dest).state != CellState::Empty {
            return false;
        }
        let (si, di) = (self.index(src), self.index(dest));
        self.cells[si].state = CellState::Empty;
        self.cells[di].state = CellState::Pedestrian;
        self.pedestrians[id.index()] = dest;
        true
    }

    // ── Neighbourhood ─────────────────────────────────────────────────────

    /// In-bounds Moore neighbours of `pos` whose state is not in `excluded`,
    /// in [`MOORE_DELTAS`] order.
    pub fn neighbors<'a>(
        &'a self,
        pos: CellPos,
        excluded: &'a [CellState],
    ) -> impl Iterator<Item = CellPos> + 'a {
        MOORE_DELTAS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let n = CellPos::new(row, col);
            (self.contains(n) && !excluded.contains(&self.at(n).state)).then_some(n)
        })
    }

    // ── Field resets ──────────────────────────────────────────────────────

    /// Set every potential back to `+∞`.
    pub fn reset_potentials(&mut self) {
        for cell in &mut self.cells {
            cell.potential = f64::INFINITY;
        }
    }
}
