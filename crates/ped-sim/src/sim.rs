//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace, warn};

use ped_core::{CellPos, CellState, Grid, PedestrianId, SimConfig, Tick};
use ped_field::{compute_potential, FieldStats, PenaltyKernel, PenaltySign};

use crate::{SimError, SimObserver, SimResult};

// ── StepReport ────────────────────────────────────────────────────────────────

/// What happened to the pedestrians during one tick.
///
/// Every pedestrian is counted in exactly one field, so the four counts sum
/// to the roster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub tick: Tick,
    /// Moved to the chosen cell.
    pub moved: usize,
    /// Chose a cell that was no longer `Empty` at commit time: another
    /// pedestrian got there first, or the cell is the target.
    pub contended: usize,
    /// Had free neighbours, but none cheaper than the current cell.
    pub stayed: usize,
    /// Had no free neighbour at all.
    pub blocked: usize,
}

/// Per-pedestrian outcome of the decide phase.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Decision {
    Move(CellPos),
    Stay,
    Blocked,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Holds the grid (the only mutable shared state), the penalty kernel, and the
/// tick counter.  Build one directly with [`Sim::new`] and the placement
/// methods, or from a scenario via [`SimBuilder`][crate::SimBuilder].
///
/// The potential field is computed once with
/// [`compute_potential_field`][Self::compute_potential_field] after the target
/// and obstacles are placed.  Changing either afterwards leaves the field
/// stale; steps still run, against the stale values, and a warning is logged.
#[derive(Debug)]
pub struct Sim {
    /// Run configuration.
    pub config: SimConfig,

    grid:         Grid,
    kernel:       PenaltyKernel,
    current_tick: Tick,
    /// Layout revision the potential field was computed against.
    field_rev:    Option<u64>,
    warned_stale: bool,
}

impl Sim {
    /// Empty `rows × cols` grid with the default configuration.
    pub fn new(rows: usize, cols: usize) -> SimResult<Self> {
        Self::with_config(rows, cols, SimConfig::default())
    }

    pub fn with_config(rows: usize, cols: usize, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            grid:         Grid::new(rows, cols)?,
            kernel:       PenaltyKernel::new(config.penalty_radius)?,
            config,
            current_tick: Tick::ZERO,
            field_rev:    None,
            warned_stale: false,
        })
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    pub fn add_pedestrian(&mut self, row: usize, col: usize) -> SimResult<PedestrianId> {
        Ok(self.grid.add_pedestrian(CellPos::new(row, col))?)
    }

    pub fn add_obstacle(&mut self, row: usize, col: usize) -> SimResult<()> {
        Ok(self.grid.add_obstacle(CellPos::new(row, col))?)
    }

    pub fn set_target(&mut self, row: usize, col: usize) -> SimResult<()> {
        Ok(self.grid.set_target(CellPos::new(row, col))?)
    }

    /// Flood the static potential from the target with the configured
    /// method.  Fails with `NoTarget` if no target is set.
    pub fn compute_potential_field(&mut self) -> SimResult<FieldStats> {
        let stats = compute_potential(&mut self.grid, self.config.potential_method)?;
        self.field_rev = Some(self.grid.layout_revision());
        self.warned_stale = false;
        Ok(stats)
    }

    // ── Read-only view ────────────────────────────────────────────────────

    /// The grid: dimensions and per-cell state, penalty, and potential.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The tick the next [`step`][Self::step] will execute.
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// `true` if the potential field was computed against the current
    /// target and obstacles.
    pub fn potential_is_current(&self) -> bool {
        self.field_rev == Some(self.grid.layout_revision())
    }

    /// The free neighbour of pedestrian `id` with the lowest
    /// `potential + penalty`, reading whatever penalty the grid holds now.
    ///
    /// Ties go to the first candidate in neighbour order.  Fails with
    /// `NoCandidateMove` if every neighbour is blocked.
    pub fn choose_move(&self, id: PedestrianId) -> SimResult<CellPos> {
        let pos = self.grid.pedestrian(id).ok_or(SimError::UnknownPedestrian(id))?;
        let mut best: Option<(CellPos, f64)> = None;
        for next in self.grid.neighbors(pos, &CellState::BLOCKING) {
            let cost = self.grid.at(next).cost();
            if best.is_none_or(|(_, b)| cost < b) {
                best = Some((next, cost));
            }
        }
        best.map(|(next, _)| next).ok_or(SimError::NoCandidateMove(id))
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one tick.
    pub fn step(&mut self) -> StepReport {
        let tick = self.current_tick;
        self.warn_if_stale();

        // ── ① apply penalties for everyone before any decision ───────────
        self.kernel.add_all(&mut self.grid, PenaltySign::Apply);

        // ── ② decide from one snapshot ────────────────────────────────────
        let decisions: Vec<Decision> = self.grid.pedestrian_ids().map(|id| self.decide(id)).collect();

        // ── ③ retract so penalties never carry over ───────────────────────
        self.kernel.add_all(&mut self.grid, PenaltySign::Retract);

        // ── ④ commit in roster order ──────────────────────────────────────
        let mut report = StepReport { tick, ..StepReport::default() };
        for (slot, decision) in decisions.into_iter().enumerate() {
            let id = PedestrianId(slot as u32);
            match decision {
                Decision::Move(dest) if self.grid.move_pedestrian(id, dest) => report.moved += 1,
                Decision::Move(_) => report.contended += 1,
                Decision::Stay => report.stayed += 1,
                Decision::Blocked => report.blocked += 1,
            }
        }

        debug!(
            %tick,
            moved = report.moved,
            contended = report.contended,
            stayed = report.stayed,
            blocked = report.blocked,
            "step complete"
        );
        self.current_tick = tick.next();
        report
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `config.total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.current_tick);
    }

    /// Run from the current tick up to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            pedestrians = self.grid.pedestrian_count(),
            total_ticks = self.config.total_ticks,
            "simulation started"
        );
        while self.current_tick < self.config.end_tick() {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.current_tick);
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let report = self.step();
        observer.on_tick_end(now, &report);
        if now.is_every(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.grid);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Move only when the chosen cell is strictly cheaper than the cell the
    /// pedestrian stands on; an unreachable (`+∞`) field never qualifies.
    fn decide(&self, id: PedestrianId) -> Decision {
        let Some(here) = self.grid.pedestrian(id) else {
            return Decision::Blocked;
        };
        match self.choose_move(id) {
            Ok(dest) => {
                let (from, to) = (self.grid.at(here).cost(), self.grid.at(dest).cost());
                trace!(%id, %here, %dest, from, to, "candidate");
                if to < from { Decision::Move(dest) } else { Decision::Stay }
            }
            Err(err) => {
                trace!(%id, %here, %err, "no move");
                Decision::Blocked
            }
        }
    }

    fn warn_if_stale(&mut self) {
        if self.warned_stale || self.potential_is_current() {
            return;
        }
        if self.field_rev.is_none() {
            warn!("stepping without a potential field; pedestrians will not move");
        } else {
            warn!("target or obstacles changed since the potential field was computed");
        }
        self.warned_stale = true;
    }
}
