//! Text frame log: the state dump of every snapshot tick, one after another.
//!
//! ```text
//! T0
//! P....
//! ..O.T
//!
//! T1
//! .P...
//! ..O.T
//!
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ped_core::{Grid, Tick};

use crate::text::render_states;
use crate::{OutputError, OutputResult, Recorder, StepRecord};

pub struct FrameRecorder<W: Write> {
    out:      W,
    frames:   usize,
    finished: bool,
}

impl FrameRecorder<BufWriter<File>> {
    /// Log frames to a new file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> FrameRecorder<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0, finished: false }
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Recorder for FrameRecorder<W> {
    fn name(&self) -> &'static str {
        "frames"
    }

    /// Step counts are not part of the frame log.
    fn record_step(&mut self, _step: &StepRecord) -> OutputResult<()> {
        Ok(())
    }

    fn record_frame(&mut self, tick: Tick, grid: &Grid) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished("frames"));
        }
        writeln!(self.out, "{tick}")?;
        writeln!(self.out, "{}", render_states(grid))?;
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.out.flush()?;
        }
        Ok(())
    }
}
