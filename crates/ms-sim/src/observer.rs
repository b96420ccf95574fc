//! Observer hooks for front-ends.

use ms_core::{Point, SimConfig};
use ms_entity::Drawer;

use crate::{RunSummary, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations.  A front-end passed to
/// `run` implements both this and [`Drawer`]: the simulation paints into it
/// during the tick, then calls [`on_tick_end`](Self::on_tick_end) so it can
/// present the frame.
pub trait SimObserver {
    /// Called once before the obstacles are painted.
    fn on_run_start(&mut self, _config: &SimConfig, _obstacles: usize, _threads: usize) {}

    /// Called after each tick's render phase.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called once after the worker pool has been drained.
    fn on_shutdown(&mut self, _summary: &RunSummary) {}
}

/// Discards every pixel and callback.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopFrontend;

impl Drawer for NoopFrontend {
    fn set_pixel(&mut self, _point: Point, _glyph: char) {}
    fn clear_pixel(&mut self, _point: Point) {}
}

impl SimObserver for NoopFrontend {}
