//! Fan-out from the simulation's observer hooks to any number of recorders.

use tracing::{debug, warn};

use ped_core::{Grid, Tick};
use ped_sim::{SimObserver, StepReport};

use crate::{OutputError, OutputResult, Recorder, StepRecord};

/// A [`SimObserver`] that feeds every attached [`Recorder`].
///
/// Observer hooks cannot fail, so the first recorder error is kept for
/// [`take_error`][Self::take_error] and later ones are only logged.  A failing
/// recorder keeps receiving records; recorders are independent.
#[derive(Default)]
pub struct RunRecorder {
    recorders:   Vec<Box<dyn Recorder>>,
    first_error: Option<OutputError>,
}

impl RunRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a recorder.
    pub fn with(mut self, recorder: impl Recorder + 'static) -> Self {
        self.recorders.push(Box::new(recorder));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.recorders.is_empty()
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.first_error.take()
    }

    fn each(&mut self, mut f: impl FnMut(&mut dyn Recorder) -> OutputResult<()>) {
        for recorder in &mut self.recorders {
            if let Err(e) = f(recorder.as_mut()) {
                if self.first_error.is_none() {
                    warn!(recorder = recorder.name(), error = %e, "output failed");
                    self.first_error = Some(e);
                } else {
                    debug!(recorder = recorder.name(), error = %e, "output failed again");
                }
            }
        }
    }
}

impl SimObserver for RunRecorder {
    fn on_tick_end(&mut self, _tick: Tick, report: &StepReport) {
        let step = StepRecord::from(report);
        self.each(|r| r.record_step(&step));
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &Grid) {
        self.each(|r| r.record_frame(tick, grid));
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        self.each(|r| r.finish());
    }
}
