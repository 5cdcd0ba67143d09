//! CSV records: `positions.csv` (one row per pedestrian per frame) and
//! `steps.csv` (one row per tick).  Column names come from the serde field
//! names of [`PositionRecord`] and [`StepRecord`].

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ped_core::{Grid, Tick};

use crate::{OutputError, OutputResult, PositionRecord, Recorder, StepRecord};

pub struct CsvRecorder {
    /// `None` once finished.
    files: Option<(Writer<File>, Writer<File>)>,
}

impl CsvRecorder {
    pub const POSITIONS_FILE: &'static str = "positions.csv";
    pub const STEPS_FILE: &'static str = "steps.csv";

    /// Create (truncating) both files inside the existing directory `dir`.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        let positions = Writer::from_path(dir.join(Self::POSITIONS_FILE))?;
        let steps = Writer::from_path(dir.join(Self::STEPS_FILE))?;
        Ok(Self { files: Some((positions, steps)) })
    }

    fn files(&mut self) -> OutputResult<&mut (Writer<File>, Writer<File>)> {
        self.files.as_mut().ok_or(OutputError::Finished("csv"))
    }
}

impl Recorder for CsvRecorder {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn record_step(&mut self, step: &StepRecord) -> OutputResult<()> {
        let (_, steps) = self.files()?;
        steps.serialize(step)?;
        Ok(())
    }

    fn record_frame(&mut self, tick: Tick, grid: &Grid) -> OutputResult<()> {
        let (positions, _) = self.files()?;
        for record in PositionRecord::from_grid(tick, grid) {
            positions.serialize(record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some((mut positions, mut steps)) = self.files.take() {
            positions.flush()?;
            steps.flush()?;
        }
        Ok(())
    }
}
