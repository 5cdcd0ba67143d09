//! `ped-output` — presentation and run records for rust_ped.
//!
//! [`text`] renders a grid as characters (`.` `P` `O` `T`) or as potential /
//! penalty tables.  The state→symbol mapping lives here, not in the
//! simulation core.
//!
//! A [`RunRecorder`] plugs into `Sim::run` and forwards to any mix of
//! recorders:
//!
//! | Recorder          | Output                                            |
//! |-------------------|---------------------------------------------------|
//! | [`FrameRecorder`] | the state dump of every snapshot tick, as text    |
//! | [`CsvRecorder`]   | `positions.csv` and `steps.csv`                   |
//!
//! ```rust,ignore
//! let mut recorder = RunRecorder::new()
//!     .with(CsvRecorder::create(Path::new("./out"))?)
//!     .with(FrameRecorder::create(Path::new("./out/frames.txt"))?);
//! sim.run(&mut recorder);
//! if let Some(e) = recorder.take_error() { eprintln!("{e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod frames;
pub mod observer;
pub mod record;
pub mod text;


pub use csv::CsvRecorder;
pub use error::{OutputError, OutputResult};
pub use frames::FrameRecorder;
pub use observer::RunRecorder;
pub use record::{PositionRecord, Recorder, StepRecord};
pub use text::{render_penalties, render_potentials, render_states, symbol};
