//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use ped_core::SimConfig;

use crate::{Scenario, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// Placement follows the scenario order: pedestrians, then obstacles, then
/// the target, so a later placement overwrites an earlier one on the same
/// cell.  [`build`][Self::build] either returns a `Sim` with its potential
/// field computed or an error; a partially built grid is never handed out.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(5, 5)
///     .pedestrians([[0, 0]])
///     .target(4, 4)
///     .build()?;
/// sim.step();
/// ```
#[derive(Debug, Clone)]
pub struct SimBuilder {
    rows:        usize,
    cols:        usize,
    config:      SimConfig,
    pedestrians: Vec<[i64; 2]>,
    obstacles:   Vec<[i64; 2]>,
    target:      Option<[i64; 2]>,
}

impl SimBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            config:      SimConfig::default(),
            pedestrians: Vec::new(),
            obstacles:   Vec::new(),
            target:      None,
        }
    }

    /// Seed the builder from a loaded scenario (config included).
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            rows:        scenario.rows,
            cols:        scenario.cols,
            config:      scenario.config.clone(),
            pedestrians: scenario.pedestrians.clone(),
            obstacles:   scenario.obstacles.clone(),
            target:      Some(scenario.target),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pedestrians(mut self, positions: impl IntoIterator<Item = [i64; 2]>) -> Self {
        self.pedestrians.extend(positions);
        self
    }

    pub fn obstacles(mut self, positions: impl IntoIterator<Item = [i64; 2]>) -> Self {
        self.obstacles.extend(positions);
        self
    }

    pub fn target(mut self, row: i64, col: i64) -> Self {
        self.target = Some([row, col]);
        self
    }

    /// Validate inputs, place everything, and compute the potential field.
    ///
    /// Fails on zero dimensions, an invalid config, any out-of-bounds
    /// position, or a missing target.
    pub fn build(self) -> SimResult<Sim> {
        let mut sim = Sim::with_config(self.rows, self.cols, self.config)?;

        for [row, col] in self.pedestrians {
            let pos = sim.grid().pos(row, col)?;
            sim.add_pedestrian(pos.row, pos.col)?;
        }
        for [row, col] in self.obstacles {
            let pos = sim.grid().pos(row, col)?;
            sim.add_obstacle(pos.row, pos.col)?;
        }
        if let Some([row, col]) = self.target {
            let pos = sim.grid().pos(row, col)?;
            sim.set_target(pos.row, pos.col)?;
        }

        let stats = sim.compute_potential_field()?;
        info!(
            rows = sim.grid().rows(),
            cols = sim.grid().cols(),
            pedestrians = sim.grid().pedestrian_count(),
            obstacles = sim.grid().obstacles().len(),
            reachable = stats.reachable,
            "scenario loaded"
        );
        Ok(sim)
    }
}
