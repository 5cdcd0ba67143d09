//! `ped-sim` — tick loop orchestrator for the rust_ped floor-field model.
//!
//! # One tick
//!
//! ```text
//! ① Apply    — every pedestrian adds its crowding penalty to the grid.
//! ② Decide   — each pedestrian picks the Moore neighbour (not Pedestrian,
//!              not Obstacle) with the lowest potential + penalty; the first
//!              minimum in neighbour order wins.
//! ③ Retract  — every penalty is removed again.
//! ④ Commit   — in roster order, a pedestrian moves iff its chosen cell is
//!              still Empty; otherwise it waits this tick.
//! ```
//!
//! All decisions read one snapshot taken before any commit, so two
//! pedestrians may pick the same cell; the one earlier in the roster gets it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ped_sim::{load_scenario_json, NoopObserver, SimBuilder};
//!
//! let scenario = load_scenario_json(Path::new("data/corridor.json"))?;
//! let mut sim = SimBuilder::from_scenario(&scenario).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scenario::{load_scenario_json, load_scenario_reader, Scenario};
pub use sim::{Sim, StepReport};
