//! Records produced from a running simulation, and the sink trait that
//! persists them.

use serde::Serialize;

use ped_core::{Grid, Tick};
use ped_sim::StepReport;

use crate::OutputResult;

/// Where pedestrian `pedestrian` stood at the end of `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionRecord {
    pub tick:       u64,
    pub pedestrian: u32,
    pub row:        usize,
    pub col:        usize,
}

impl PositionRecord {
    /// One record per roster slot, in id order.
    pub fn from_grid(tick: Tick, grid: &Grid) -> impl Iterator<Item = PositionRecord> + '_ {
        grid.pedestrian_ids().zip(grid.pedestrians()).map(move |(id, pos)| PositionRecord {
            tick:       tick.0,
            pedestrian: id.0,
            row:        pos.row,
            col:        pos.col,
        })
    }
}

/// Movement outcome counts of one tick; a flattened [`StepReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub tick:      u64,
    pub moved:     usize,
    pub contended: usize,
    pub stayed:    usize,
    pub blocked:   usize,
}

impl From<&StepReport> for StepRecord {
    fn from(r: &StepReport) -> Self {
        Self {
            tick:      r.tick.0,
            moved:     r.moved,
            contended: r.contended,
            stayed:    r.stayed,
            blocked:   r.blocked,
        }
    }
}

/// A sink for run output.
///
/// [`RunRecorder`][crate::RunRecorder] calls `record_step` after every tick,
/// `record_frame` on snapshot ticks, and `finish` once at the end of a run.
/// Anything recorded after `finish` fails with `OutputError::Finished`.
pub trait Recorder {
    /// Short name for logs and errors.
    fn name(&self) -> &'static str;

    fn record_step(&mut self, step: &StepRecord) -> OutputResult<()>;

    fn record_frame(&mut self, tick: Tick, grid: &Grid) -> OutputResult<()>;

    /// Flush everything.  Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
