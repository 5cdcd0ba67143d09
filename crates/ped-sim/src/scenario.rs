//! JSON scenario loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "rows": 5,
//!   "cols": 5,
//!   "pedestrians": [[0, 0], [1, 3]],
//!   "obstacles":   [[2, 2]],
//!   "target":      [4, 4],
//!   "config":      { "penalty_radius": 3, "total_ticks": 25 }
//! }
//! ```
//!
//! Positions are `[row, col]` pairs.  They are kept signed here so that a
//! negative coordinate reaches [`SimBuilder`][crate::SimBuilder] and is
//! reported as `OutOfBounds` with the offending value, instead of failing as
//! an opaque parse error.  `pedestrians`, `obstacles`, and `config` may be
//! omitted.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ped_core::SimConfig;

use crate::SimResult;

/// A scenario record as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub pedestrians: Vec<[i64; 2]>,
    #[serde(default)]
    pub obstacles: Vec<[i64; 2]>,
    pub target: [i64; 2],
    #[serde(default)]
    pub config: SimConfig,
}

impl Scenario {
    /// Parse a scenario from a JSON string.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialise back to pretty JSON (used by scenario generators).
    pub fn to_json_string(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a scenario from a JSON file.
pub fn load_scenario_json(path: &Path) -> SimResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(std::io::BufReader::new(file))
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> SimResult<Scenario> {
    Ok(serde_json::from_reader(reader)?)
}
