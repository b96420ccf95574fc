//! terminal: live character-grid view of the mission simulation.
//!
//! Entities wander between random destinations, routing around `#`
//! obstacles.  Press Enter to stop: queued searches are discarded, running
//! ones are waited for, and the process exits.  Ctrl-C does the same.
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`) so they never tear the frame.

mod monitor;

use std::future::Future;
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::{Builder, Runtime};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ms_core::{PathAlgorithm, SimConfig, Size};
use ms_mission::WorkerPool;
use ms_sim::{SimBuilder, StopToken};

use monitor::Monitor;

const TITLE: &str = "Mission Path Finding Simulation";

/// Command-line arguments for the terminal front-end.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Grid columns.
    #[arg(long, value_name = "COLUMNS", default_value_t = 80, value_parser = clap::value_parser!(i32).range(1..=1_000))]
    width: i32,
    /// Grid rows.
    #[arg(long, value_name = "ROWS", default_value_t = 24, value_parser = clap::value_parser!(i32).range(1..=1_000))]
    height: i32,
    /// Number of wandering entities.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = SimConfig::DEFAULT_ENTITIES)]
    entities: usize,
    /// Number of random obstacles.  Defaults to one per ten cells.
    #[arg(short = 'o', long, value_name = "COUNT")]
    obstacles: Option<usize>,
    /// Search worker threads.  Defaults to one per logical core.
    #[arg(short = 't', long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    threads: Option<u32>,
    /// Target duration of one tick.
    #[arg(long = "tick-ms", value_name = "MILLISECONDS", default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..=60_000))]
    tick_ms: u64,
    /// Search algorithm: `astar` (or `1`) or `greedy` (or `0`).
    #[arg(short = 'a', long, value_name = "NAME", default_value_t = PathAlgorithm::AStar)]
    algorithm: PathAlgorithm,
    /// RNG seed.  Defaults to one derived from the clock.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Stop after this many ticks.  Zero runs until Enter is pressed.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    ticks: u64,
}

impl CliArgs {
    fn into_config(self) -> SimConfig {
        let bounds = Size::new(self.width, self.height);
        SimConfig {
            entity_count:   self.entities,
            obstacle_count: self.obstacles.unwrap_or_else(|| SimConfig::default_obstacles(bounds)),
            worker_threads: self.threads.map(|n| n as usize),
            tick_interval:  Duration::from_millis(self.tick_ms),
            algorithm:      self.algorithm,
            seed:           self.seed.unwrap_or_else(clock_seed),
            max_ticks:      (self.ticks > 0).then_some(self.ticks),
            ..SimConfig::new(bounds)
        }
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging();

    let config = args.into_config();
    let pool = WorkerPool::new(config.worker_threads).context("failed to start search workers")?;
    let mut sim = SimBuilder::new(config.clone())
        .build(pool)
        .context("failed to build simulation")?;

    let stop = StopToken::new();
    stop_on_enter(stop.clone()).context("failed to watch stdin")?;
    let signals = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start signal runtime")?;
    stop_on_signal(signals, tokio::signal::ctrl_c, stop.clone()).context("failed to watch for Ctrl-C")?;

    let mut monitor = Monitor::new(config.bounds, TITLE);
    let summary = sim.run(&mut monitor, &stop)?;
    monitor.take_error().context("failed to draw to the terminal")?;

    info!(?summary, "exiting");
    println!(
        "Exiting after {} ticks: {} missions assigned, {} searches found no route",
        summary.ticks, summary.assigned, summary.failed
    );
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Trip `stop` when a line arrives on stdin.  A closed stdin never stops the
/// run; `--ticks` or an interrupt does.
fn stop_on_enter(stop: StopToken) -> io::Result<()> {
    thread::Builder::new().name("stdin-stop".into()).spawn(move || {
        let mut line = String::new();
        if let Ok(n) = io::stdin().lock().read_line(&mut line) {
            if n > 0 {
                stop.stop();
            }
        }
    })?;
    Ok(())
}

/// Trip `stop` once `signal` resolves.  The future is created and awaited on
/// a dedicated thread driving `runtime`.
fn stop_on_signal<F, Fut>(runtime: Runtime, signal: F, stop: StopToken) -> io::Result<JoinHandle<()>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = io::Result<()>>,
{
    thread::Builder::new().name("signal-stop".into()).spawn(move || {
        match runtime.block_on(signal()) {
            Ok(()) => {
                info!("interrupt received; stopping");
                stop.stop();
            }
            Err(err) => warn!(%err, "cannot listen for Ctrl-C; press Enter to stop"),
        }
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
