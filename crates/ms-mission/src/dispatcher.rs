//! Mission dispatch: turn idle entities into path searches and install the
//! routes that come back.

use std::ops::AddAssign;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use ms_core::{EntityId, PathAlgorithm, SimRng, Size};
use ms_entity::EntityStore;
use ms_path::{ObstacleSet, Route, find_path};

use crate::executor::Executor;
use crate::task::{TaskHandle, TaskPoll};

/// What one [`MissionDispatcher::dispatch`] call did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Non-empty routes installed.
    pub assigned:  usize,
    /// Empty routes delivered; those entities stay idle.
    pub failed:    usize,
    /// New searches handed to the executor.
    pub submitted: usize,
    /// Idle entities whose search is still running.
    pub waiting:   usize,
    /// Searches that ended without a result and were dropped.
    pub abandoned: usize,
}

impl AddAssign for DispatchReport {
    fn add_assign(&mut self, rhs: Self) {
        self.assigned  += rhs.assigned;
        self.failed    += rhs.failed;
        self.submitted += rhs.submitted;
        self.waiting   += rhs.waiting;
        self.abandoned += rhs.abandoned;
    }
}

/// Owns the pending-search table.
///
/// At most one search is pending per entity.  An entity with a pending search
/// is idle and stationary, so the route it receives always starts next to its
/// current position.
pub struct MissionDispatcher {
    bounds:    Size,
    algorithm: PathAlgorithm,
    obstacles: Arc<ObstacleSet>,
    pending:   FxHashMap<EntityId, TaskHandle<Route>>,
    totals:    DispatchReport,
}

impl MissionDispatcher {
    pub fn new(bounds: Size, algorithm: PathAlgorithm, obstacles: Arc<ObstacleSet>) -> Self {
        Self {
            bounds,
            algorithm,
            obstacles,
            pending: FxHashMap::default(),
            totals:  DispatchReport::default(),
        }
    }

    /// Reconcile every entity in `wanting` with its pending search.
    ///
    /// Entities are visited in the order given.  Destinations are drawn from
    /// `rng` on the calling thread, so a fixed seed yields a fixed destination
    /// sequence regardless of which searches finish first.
    pub fn dispatch<E: Executor>(
        &mut self,
        wanting:  &[EntityId],
        store:    &mut EntityStore,
        executor: &E,
        rng:      &mut SimRng,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        for &id in wanting {
            if let Some(handle) = self.pending.get_mut(&id) {
                match handle.poll() {
                    TaskPoll::Pending => report.waiting += 1,

                    TaskPoll::Ready(route) => {
                        self.pending.remove(&id);
                        if route.is_empty() {
                            trace!(%id, "no route found; entity stays idle");
                            report.failed += 1;
                        } else {
                            trace!(%id, steps = route.len(), "route installed");
                            report.assigned += 1;
                        }
                        // An empty route leaves the entity idle for a retry.
                        store.assign_route(id, route);
                    }

                    TaskPoll::Abandoned => {
                        self.pending.remove(&id);
                        warn!(%id, "path search abandoned; resubmitting");
                        report.abandoned += 1;
                    }
                }
                continue;
            }

            let src  = store.position(id);
            let dest = rng.random_point(self.bounds);
            let obstacles = Arc::clone(&self.obstacles);
            let (bounds, algorithm) = (self.bounds, self.algorithm);

            trace!(%id, %src, %dest, %algorithm, "submitting path search");
            let handle = executor.submit(move || find_path(src, dest, bounds, &obstacles, algorithm));
            self.pending.insert(id, handle);
            report.submitted += 1;
        }

        if report.submitted + report.assigned + report.failed + report.abandoned > 0 {
            debug!(
                assigned  = report.assigned,
                failed    = report.failed,
                submitted = report.submitted,
                waiting   = report.waiting,
                abandoned = report.abandoned,
                pending   = self.pending.len(),
                "dispatch"
            );
        }

        self.totals += report;
        report
    }

    /// Drop every pending handle, returning how many there were.  Results
    /// that arrive later are discarded.
    pub fn abandon_pending(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: EntityId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Sum of every report returned so far.
    pub fn totals(&self) -> DispatchReport {
        self.totals
    }
}
