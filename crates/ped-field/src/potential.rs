//! Static floor field: cost-to-target for every cell.
//!
//! # Pluggability
//!
//! `ped-sim` computes the field through the [`PotentialSolver`] trait.  Two
//! implementations ship here:
//!
//! | Solver             | Edge cost              | Status        |
//! |--------------------|------------------------|---------------|
//! | [`DijkstraSolver`] | Euclidean (1 / √2)     | authoritative |
//! | [`GridStepSolver`] | 1 per Moore step       | legacy        |
//!
//! Both flood outward from the target over the implicit 8-connected grid
//! graph; obstacle cells are never entered and never relaxed from.  Cells the
//! flood does not reach keep `potential = +∞`.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use tracing::info;

use ped_core::{CellPos, CellState, Grid, PotentialMethod};

use crate::{FieldError, FieldResult};

// ── FieldStats ────────────────────────────────────────────────────────────────

/// Summary of one potential computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    /// Cells (target included) with a finite potential.
    pub reachable: usize,
    /// Largest finite potential; 0 when only the target is reachable.
    pub max_potential: f64,
}

impl FieldStats {
    fn collect(grid: &Grid) -> Self {
        let mut reachable = 0;
        let mut max_potential: f64 = 0.0;
        for cell in grid.cells().iter().filter(|c| c.is_reachable()) {
            reachable += 1;
            max_potential = max_potential.max(cell.potential);
        }
        Self { reachable, max_potential }
    }
}

// ── PotentialSolver trait ─────────────────────────────────────────────────────

/// Fills `Cell::potential` for every cell of a grid.
pub trait PotentialSolver {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Reset every potential to `+∞` and flood from the grid's target.
    ///
    /// Fails with [`FieldError::NoTarget`] if the grid has no target; the
    /// potentials are left untouched in that case.
    fn compute(&self, grid: &mut Grid) -> FieldResult<FieldStats>;
}

/// Select the solver for a configured method.
pub fn solver_for(method: PotentialMethod) -> Box<dyn PotentialSolver> {
    match method {
        PotentialMethod::Dijkstra => Box::new(DijkstraSolver),
        PotentialMethod::GridSteps => Box::new(GridStepSolver),
    }
}

/// Compute the potential field with the configured method and log a summary.
pub fn compute_potential(grid: &mut Grid, method: PotentialMethod) -> FieldResult<FieldStats> {
    let solver = solver_for(method);
    let stats = solver.compute(grid)?;
    info!(
        solver = solver.name(),
        reachable = stats.reachable,
        cells = grid.len(),
        max_potential = stats.max_potential,
        "potential field computed"
    );
    Ok(stats)
}

// ── DijkstraSolver ────────────────────────────────────────────────────────────

/// Exact shortest-path costs with Euclidean edge weights.
pub struct DijkstraSolver;

/// Heap key: a tentative distance, totally ordered.
///
/// Cells are never ordered themselves; the queue holds `(Cost, cell index)`
/// and the index only breaks ties deterministically.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PotentialSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn compute(&self, grid: &mut Grid) -> FieldResult<FieldStats> {
        let target = grid.target().ok_or(FieldError::NoTarget)?;
        grid.reset_potentials();
        grid.at_mut(target).potential = 0.0;

        // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
        let mut heap: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();
        heap.push(Reverse((Cost(0.0), grid.index(target))));
        let mut buf: Vec<CellPos> = Vec::with_capacity(8);

        while let Some(Reverse((Cost(dist), index))) = heap.pop() {
            let pos = grid.pos_of(index);

            // Skip stale heap entries.
            if dist > grid.at(pos).potential {
                continue;
            }

            buf.clear();
            buf.extend(grid.neighbors(pos, &CellState::IMPASSABLE));
            for &next in &buf {
                let candidate = dist + pos.distance(next);
                let cell = grid.at_mut(next);
                if candidate < cell.potential {
                    cell.potential = candidate;
                    heap.push(Reverse((Cost(candidate), grid.index(next))));
                }
            }
        }

        Ok(FieldStats::collect(grid))
    }
}

// ── GridStepSolver ────────────────────────────────────────────────────────────

/// Legacy flood: every Moore step costs 1, so diagonals are as cheap as
/// orthogonal moves (Chebyshev distance around obstacles).
///
/// Relaxation runs in FIFO order and re-enqueues a cell whenever its value
/// improves, which converges to the same result as a plain BFS.
pub struct GridStepSolver;

impl PotentialSolver for GridStepSolver {
    fn name(&self) -> &'static str {
        "grid_steps"
    }

    fn compute(&self, grid: &mut Grid) -> FieldResult<FieldStats> {
        let target = grid.target().ok_or(FieldError::NoTarget)?;
        grid.reset_potentials();
        grid.at_mut(target).potential = 0.0;

        let mut queue = VecDeque::from([target]);
        let mut buf: Vec<CellPos> = Vec::with_capacity(8);

        while let Some(pos) = queue.pop_front() {
            let next_cost = grid.at(pos).potential + 1.0;
            buf.clear();
            buf.extend(grid.neighbors(pos, &CellState::IMPASSABLE));
            for &next in &buf {
                let cell = grid.at_mut(next);
                if next_cost < cell.potential {
                    cell.potential = next_cost;
                    queue.push_back(next);
                }
            }
        }

        Ok(FieldStats::collect(grid))
    }
}
