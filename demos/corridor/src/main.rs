//! corridor — command-line driver for the rust_ped floor-field model.
//!
//! Loads a JSON scenario (default: the embedded `data/corridor.json`), runs
//! it for `config.total_ticks` ticks, and prints the grid before and after.
//!
//! ```text
//! corridor [SCENARIO.json] [--crowd N] [--seed S] [--ticks N] [--out DIR] [--frames] [--fields]
//! ```
//!
//! `--crowd N` replaces the scenario's pedestrians with N pedestrians
//! scattered over the empty cells left of the doorway (seeded by `--seed`).
//! `--out DIR` writes `positions.csv` and `steps.csv`, plus `frames.txt` with
//! `--frames`.  `--fields` also dumps the potential field.
//!
//! Set `RUST_LOG=debug` for per-tick summaries.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use ped_core::{Grid, Tick};
use ped_output::{CsvRecorder, FrameRecorder, RunRecorder, render_potentials, render_states};
use ped_sim::{Scenario, SimBuilder, SimObserver, StepReport, load_scenario_json};

const DEFAULT_SCENARIO: &str = include_str!("../data/corridor.json");
const DEFAULT_SEED: u64 = 42;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "corridor", version, about = "Run a rust_ped floor-field scenario")]
struct Args {
    /// Scenario JSON file.  Defaults to the embedded corridor scenario.
    scenario: Option<PathBuf>,

    /// Replace the scenario's pedestrians with N scattered pedestrians.
    #[arg(long, value_name = "N")]
    crowd: Option<usize>,

    /// Seed for `--crowd`.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Override `config.total_ticks`.
    #[arg(long, value_name = "N")]
    ticks: Option<u64>,

    /// Directory for CSV output.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// With `--out`, also log a text frame of every snapshot tick.
    #[arg(long, requires = "out")]
    frames: bool,

    /// Also print the potential field.
    #[arg(long)]
    fields: bool,
}

// ── Scenario preparation ──────────────────────────────────────────────────────

/// Replace the scenario's pedestrians with `count` pedestrians placed on
/// distinct free cells in the left half of the grid.
fn scatter_crowd(scenario: &mut Scenario, count: usize, seed: u64) -> Result<()> {
    let blocked: Vec<[i64; 2]> = scenario.obstacles.iter().copied().chain([scenario.target]).collect();
    let mut free: Vec<[i64; 2]> = (0..scenario.rows as i64)
        .flat_map(|r| (0..(scenario.cols / 2) as i64).map(move |c| [r, c]))
        .filter(|p| !blocked.contains(p))
        .collect();
    if count > free.len() {
        bail!("cannot place {count} pedestrians on {} free cells", free.len());
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    free.shuffle(&mut rng);
    free.truncate(count);
    free.sort_unstable();
    scenario.pedestrians = free;
    Ok(())
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies movement totals and forwards every hook to the recorders.
struct ProgressObserver {
    recorder:  RunRecorder,
    moved:     usize,
    contended: usize,
    idle_run:  u64,
}

impl ProgressObserver {
    fn new(recorder: RunRecorder) -> Self {
        Self { recorder, moved: 0, contended: 0, idle_run: 0 }
    }
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, report: &StepReport) {
        self.moved += report.moved;
        self.contended += report.contended;
        self.idle_run = if report.moved == 0 { self.idle_run + 1 } else { 0 };
        if self.idle_run == 1 {
            info!(%tick, "no pedestrian moved this tick");
        }
        self.recorder.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &Grid) {
        self.recorder.on_snapshot(tick, grid);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.recorder.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // 1. Scenario.
    let mut scenario = match &args.scenario {
        Some(path) => load_scenario_json(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::from_json_str(DEFAULT_SCENARIO)?,
    };
    if let Some(count) = args.crowd {
        scatter_crowd(&mut scenario, count, args.seed)?;
    }
    if let Some(ticks) = args.ticks {
        scenario.config.total_ticks = ticks;
    }

    // 2. Sim (potential field computed by the builder).
    let mut sim = SimBuilder::from_scenario(&scenario).build()?;
    println!("Initial state ({} pedestrians):", sim.grid().pedestrian_count());
    print!("{}", render_states(sim.grid()));
    if args.fields {
        println!("\nPotential field:");
        print!("{}", render_potentials(sim.grid()));
    }
    println!();

    // 3. Output.
    let mut recorder = RunRecorder::new();
    if let Some(dir) = &args.out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        recorder = recorder.with(CsvRecorder::create(dir)?);
        if args.frames {
            recorder = recorder.with(FrameRecorder::create(&dir.join("frames.txt"))?);
        }
    }
    let mut obs = ProgressObserver::new(recorder);

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.recorder.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulated {} ticks in {:.3} ms", scenario.config.total_ticks, elapsed.as_secs_f64() * 1e3);
    println!("  moves: {}  |  contended: {}", obs.moved, obs.contended);
    println!();
    print!("{}", render_states(sim.grid()));

    Ok(())
}
