//! Core entity storage: `EntityStore` (SoA data) and per-tick movement.
//!
//! Every `Vec` field has exactly `len()` elements; the `EntityId` value is the
//! index into all of them.  Only the tick thread mutates the store.  Worker
//! tasks compute routes and hand them back; they never see entity state.

use std::collections::VecDeque;

use ms_core::{EntityId, Point, Size};
use ms_path::Route;

use crate::shape::{DESTINATION_GLYPH, ROUTE_GLYPH};
use crate::{Drawer, Shape};

/// Where an entity is in its mission cycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EntityState {
    /// No route; wants a new mission.
    Idle,
    /// Following a route; `cursor < route.len()`.
    Moving,
}

/// Structure-of-Arrays storage for all entity state.
pub struct EntityStore {
    bounds:         Size,
    trail_capacity: usize,

    shapes:    Vec<Shape>,
    positions: Vec<Point>,
    /// Installed route; empty means idle.
    routes:    Vec<Route>,
    /// Index into `routes[i]` of the next step.
    cursors:   Vec<usize>,
    /// Recently vacated positions, oldest at the front.
    trails:    Vec<VecDeque<Point>>,

    /// Trail entries evicted by the latest `advance`, cleared by `render`.
    vacated: Vec<Point>,
}

impl EntityStore {
    /// An empty store for a grid of `bounds`, remembering `trail_capacity`
    /// vacated cells per entity.
    pub fn new(bounds: Size, trail_capacity: usize) -> Self {
        assert!(trail_capacity > 0, "trail capacity must be at least 1");
        Self {
            bounds,
            trail_capacity,
            shapes:    Vec::new(),
            positions: Vec::new(),
            routes:    Vec::new(),
            cursors:   Vec::new(),
            trails:    Vec::new(),
            vacated:   Vec::new(),
        }
    }

    /// As [`new`](Self::new), with room for `count` entities.
    pub fn with_capacity(bounds: Size, trail_capacity: usize, count: usize) -> Self {
        let mut store = Self::new(bounds, trail_capacity);
        store.reserve(count);
        store
    }

    pub fn reserve(&mut self, additional: usize) {
        self.shapes.reserve(additional);
        self.positions.reserve(additional);
        self.routes.reserve(additional);
        self.cursors.reserve(additional);
        self.trails.reserve(additional);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Append an idle entity at `start`.
    ///
    /// # Panics
    /// Panics if `start` is outside the store's bounds.
    pub fn create(&mut self, start: Point, shape: Shape) -> EntityId {
        assert!(start.within(self.bounds), "entity spawned at {start} outside {}", self.bounds);
        let id = EntityId(u32::try_from(self.len()).unwrap_or(u32::MAX));
        assert_ne!(id, EntityId::INVALID, "entity store is full");

        self.shapes.push(shape);
        self.positions.push(start);
        self.routes.push(Route::new());
        self.cursors.push(0);
        self.trails.push(VecDeque::with_capacity(self.trail_capacity + 1));
        id
    }

    /// Install `route` on an idle entity and reset its cursor.
    ///
    /// An empty route is accepted and leaves the entity idle.
    ///
    /// # Panics
    /// Panics if `id` is unknown or the entity already has an active route;
    /// at most one mission may be in flight per entity.
    pub fn assign_route(&mut self, id: EntityId, route: Route) {
        let i = self.slot(id);
        assert!(self.routes[i].is_empty(), "{id} already has an active route");
        debug_assert!(
            route.iter().all(|p| p.within(self.bounds)),
            "route for {id} leaves {}",
            self.bounds
        );
        self.routes[i]  = route;
        self.cursors[i] = 0;
    }

    /// Move every entity with a route one step along it.
    ///
    /// The vacated cell joins the entity's trail; once the trail exceeds its
    /// capacity the oldest entry is evicted and recorded in
    /// [`vacated`](Self::vacated).  A route whose last step was just taken is
    /// cleared.
    ///
    /// Returns, in ascending order, every entity that is idle after this step:
    /// those that just arrived and those that had no route.
    pub fn advance(&mut self) -> Vec<EntityId> {
        self.vacated.clear();
        let capacity = self.trail_capacity;

        let mut wanting = Vec::new();
        let columns = self
            .positions
            .iter_mut()
            .zip(self.routes.iter_mut())
            .zip(self.cursors.iter_mut())
            .zip(self.trails.iter_mut())
            .enumerate();

        for (i, (((position, route), cursor), trail)) in columns {
            if !route.is_empty() {
                trail.push_back(*position);
                *position = route[*cursor];
                *cursor += 1;

                if *cursor == route.len() {
                    route.clear();
                    *cursor = 0;
                }

                if trail.len() > capacity {
                    self.vacated.extend(trail.pop_front());
                }
            }

            if route.is_empty() {
                wanting.push(EntityId(i as u32));
            }
        }
        wanting
    }

    /// Paint every entity: body at its position, trail glyph at its most
    /// recent trail cell, and the whole route (destination marked) on the
    /// tick it was installed.  Then clear the cells vacated this tick.
    pub fn render<D: Drawer + ?Sized>(&self, drawer: &mut D) {
        let bounds = self.bounds;

        for i in 0..self.len() {
            let shape = self.shapes[i];
            paint(drawer, bounds, self.positions[i], shape.body);

            if let Some(&last) = self.trails[i].back() {
                paint(drawer, bounds, last, shape.trail);
            }

            // A fresh route still has its cursor at zero after the apply
            // phase; every advanced route has moved past it.
            let route = &self.routes[i];
            if self.cursors[i] == 0 {
                if let Some(&dest) = route.last() {
                    for &cell in route {
                        paint(drawer, bounds, cell, ROUTE_GLYPH);
                    }
                    paint(drawer, bounds, dest, DESTINATION_GLYPH);
                }
            }
        }

        for &cell in &self.vacated {
            if cell.within(bounds) {
                drawer.clear_pixel(cell);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterator over all `EntityId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.len() as u32).map(EntityId)
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    #[inline]
    pub fn shape(&self, id: EntityId) -> Shape {
        self.shapes[self.slot(id)]
    }

    #[inline]
    pub fn position(&self, id: EntityId) -> Point {
        self.positions[self.slot(id)]
    }

    /// The installed route, including steps already taken.
    #[inline]
    pub fn route(&self, id: EntityId) -> &[Point] {
        &self.routes[self.slot(id)]
    }

    /// Steps not yet taken.
    pub fn remaining_route(&self, id: EntityId) -> &[Point] {
        let i = self.slot(id);
        &self.routes[i][self.cursors[i]..]
    }

    #[inline]
    pub fn cursor(&self, id: EntityId) -> usize {
        self.cursors[self.slot(id)]
    }

    #[inline]
    pub fn trail(&self, id: EntityId) -> &VecDeque<Point> {
        &self.trails[self.slot(id)]
    }

    pub fn state(&self, id: EntityId) -> EntityState {
        if self.routes[self.slot(id)].is_empty() {
            EntityState::Idle
        } else {
            EntityState::Moving
        }
    }

    /// Trail cells evicted by the most recent [`advance`](Self::advance).
    pub fn vacated(&self) -> &[Point] {
        &self.vacated
    }

    /// Number of entities currently following a route.
    pub fn moving_count(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Vec index for `id`, panicking on ids this store never issued.
    #[inline]
    fn slot(&self, id: EntityId) -> usize {
        let i = id.index();
        assert!(i < self.len(), "unknown entity {id}");
        i
    }
}

#[inline]
fn paint<D: Drawer + ?Sized>(drawer: &mut D, bounds: Size, point: Point, glyph: char) {
    if point.within(bounds) {
        drawer.set_pixel(point, glyph);
    }
}
