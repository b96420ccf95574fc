//! Per-tick and per-run summaries handed to observers.

use std::time::Duration;

use ms_core::Tick;
use ms_mission::DispatchReport;

/// State of the simulation after one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick:     Tick,
    pub entities: usize,
    /// Entities following a route after this tick's dispatch.
    pub moving:   usize,
    /// Entities idle after this tick's advance.
    pub wanting:  usize,
    /// Searches outstanding after dispatch.
    pub pending:  usize,
    /// What dispatch did this tick.
    pub dispatch: DispatchReport,
    /// Cumulative dispatch counts since the run began.
    pub totals:   DispatchReport,
    /// Time spent in advance, dispatch and render.
    pub elapsed:  Duration,
    pub average:  Duration,
}

impl TickReport {
    /// Searches that have delivered a result, routed or not.
    pub fn completed(&self) -> usize {
        self.totals.assigned + self.totals.failed
    }
}

/// What a run did, produced once at shutdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:     u64,
    pub submitted: usize,
    pub assigned:  usize,
    pub failed:    usize,
    pub abandoned: usize,
    /// Pending searches dropped at shutdown.
    pub discarded: usize,
    /// `true` if the stop token ended the run rather than the tick limit.
    pub stopped:   bool,
}
