//! The `Sim` struct and its tick loop.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use ms_core::{SimConfig, SimRng, Tick};
use ms_entity::{Drawer, EntityStore};
use ms_entity::shape::OBSTACLE_GLYPH;
use ms_mission::{Executor, MissionDispatcher};
use ms_path::ObstacleSet;

use crate::{RunSummary, SimObserver, SimResult, StopToken, TickReport, TickTimer};

/// The main simulation runner.
///
/// `Sim<E>` owns all entity state and drives the three-phase tick: advance,
/// dispatch, render.  Path searches run on the executor `E`; everything else
/// happens on the calling thread.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<E: Executor> {
    pub(crate) config:     SimConfig,
    pub(crate) store:      EntityStore,
    pub(crate) obstacles:  Arc<ObstacleSet>,
    pub(crate) dispatcher: MissionDispatcher,
    pub(crate) executor:   E,
    /// Destination stream.  Only touched on the tick thread.
    pub(crate) rng:        SimRng,
    /// The next tick to run.
    pub(crate) tick:       Tick,
    pub(crate) timer:      TickTimer,
}

impl<E: Executor> Sim<E> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `stop` trips or `config.max_ticks` ticks have run, then shut
    /// down the executor.
    ///
    /// Each tick is followed by [`SimObserver::on_tick_end`] and a sleep for
    /// the rest of `config.tick_interval`.  A tick that overruns the interval
    /// is not made up for.
    pub fn run<F>(&mut self, frontend: &mut F, stop: &StopToken) -> SimResult<RunSummary>
    where
        F: Drawer + SimObserver + ?Sized,
    {
        info!(
            interval_ms = self.config.tick_interval.as_millis() as u64,
            max_ticks   = ?self.config.max_ticks,
            "simulation starting"
        );
        frontend.on_run_start(&self.config, self.obstacles.len(), self.executor.thread_count());
        self.paint_obstacles(frontend);

        let mut ran = 0u64;
        while !stop.is_stopped() {
            if self.config.max_ticks.is_some_and(|max| ran >= max) {
                break;
            }

            let report = self.tick(frontend);
            frontend.on_tick_end(&report);
            ran += 1;

            if let Some(rest) = self.config.tick_interval.checked_sub(report.elapsed) {
                if !rest.is_zero() {
                    thread::sleep(rest);
                }
            }
        }

        let mut summary = self.shutdown();
        summary.stopped = stop.is_stopped();
        frontend.on_shutdown(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks without sleeping, returning each tick's report.
    ///
    /// Useful for tests and incremental stepping.  Obstacles are not painted
    /// and the executor is not shut down.
    pub fn run_ticks<F>(&mut self, n: u64, frontend: &mut F) -> Vec<TickReport>
    where
        F: Drawer + SimObserver + ?Sized,
    {
        (0..n)
            .map(|_| {
                let report = self.tick(frontend);
                frontend.on_tick_end(&report);
                report
            })
            .collect()
    }

    /// Run one tick: advance every entity, reconcile missions, render.
    pub fn tick<D: Drawer + ?Sized>(&mut self, drawer: &mut D) -> TickReport {
        let started = Instant::now();

        // ── Phase 1: advance ──────────────────────────────────────────────
        let wanting = self.store.advance();

        // ── Phase 2: dispatch ─────────────────────────────────────────────
        let dispatch = self.dispatcher.dispatch(
            &wanting,
            &mut self.store,
            &self.executor,
            &mut self.rng,
        );

        // ── Phase 3: render ───────────────────────────────────────────────
        self.store.render(drawer);

        let elapsed = started.elapsed();
        self.timer.record(elapsed);

        let report = TickReport {
            tick:     self.tick,
            entities: self.store.len(),
            moving:   self.store.moving_count(),
            wanting:  wanting.len(),
            pending:  self.dispatcher.pending_count(),
            dispatch,
            totals:   self.dispatcher.totals(),
            elapsed,
            average:  self.timer.average(),
        };
        self.tick = self.tick.next();
        report
    }

    /// Paint every obstacle.  Obstacles never move, so once per run is enough.
    pub fn paint_obstacles<D: Drawer + ?Sized>(&self, drawer: &mut D) {
        let bounds = self.config.bounds;
        for cell in self.obstacles.iter().filter(|p| p.within(bounds)) {
            drawer.set_pixel(cell, OBSTACLE_GLYPH);
        }
    }

    /// Discard queued searches, wait for running ones, and drop every pending
    /// handle.
    pub fn shutdown(&mut self) -> RunSummary {
        info!(pending = self.dispatcher.pending_count(), "shutting down search workers");
        self.executor.purge();
        self.executor.join();
        let discarded = self.dispatcher.abandon_pending();
        debug!(discarded, "pending searches dropped");

        let totals = self.dispatcher.totals();
        let summary = RunSummary {
            ticks:     self.tick.0,
            submitted: totals.submitted,
            assigned:  totals.assigned,
            failed:    totals.failed,
            abandoned: totals.abandoned,
            discarded,
            stopped:   false,
        };
        info!(
            ticks     = summary.ticks,
            submitted = summary.submitted,
            assigned  = summary.assigned,
            failed    = summary.failed,
            "simulation finished"
        );
        summary
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn dispatcher(&self) -> &MissionDispatcher {
        &self.dispatcher
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The tick the next call to [`tick`](Self::tick) will run.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }
}
