//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use tracing::info;

use ms_core::{Point, SimConfig, SimRng, Size, Tick};
use ms_entity::{EntityStore, Shape};
use ms_mission::{Executor, MissionDispatcher};
use ms_path::ObstacleSet;

use crate::{Sim, SimError, SimResult, TickTimer};

/// Seed offsets for the child RNG streams drawn from the master seed.
const OBSTACLE_STREAM: u64 = 1;
const SPAWN_STREAM: u64 = 2;

/// Fluent builder for [`Sim<E>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                              |
/// |-------------------|------------------------------------------------------|
/// | `.obstacles(set)` | `config.obstacle_count` random cells                 |
/// | `.shape(shape)`   | `Shape::default()` for every entity                  |
/// | `.spawns(points)` | `config.entity_count` random obstacle-free cells     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .shape(Shape::new('@', '.'))
///     .build(InlineExecutor)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    obstacles: Option<ObstacleSet>,
    shape:     Shape,
    spawns:    Option<Vec<Point>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            obstacles: None,
            shape:     Shape::default(),
            spawns:    None,
        }
    }

    /// Use a fixed obstacle set instead of generating one.
    pub fn obstacles(mut self, obstacles: ObstacleSet) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Glyphs for every entity.
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Explicit start cells, one per entity.  Must have `entity_count`
    /// in-bounds points.  Obstacle cells are accepted.
    pub fn spawns(mut self, spawns: Vec<Point>) -> Self {
        self.spawns = Some(spawns);
        self
    }

    /// Validate the configuration, place obstacles and entities, and return a
    /// ready-to-run [`Sim`].
    pub fn build<E: Executor>(self, executor: E) -> SimResult<Sim<E>> {
        let config = self.config;
        config.validate()?;
        let bounds = config.bounds;

        let mut rng = SimRng::new(config.seed);
        let obstacles = match self.obstacles {
            Some(set) => set,
            None => {
                let mut stream = rng.child(OBSTACLE_STREAM);
                ObstacleSet::generate(bounds, config.obstacle_count, &mut stream)
            }
        };

        let spawns = match self.spawns {
            Some(points) => {
                if points.len() != config.entity_count {
                    return Err(SimError::SpawnCountMismatch {
                        expected: config.entity_count,
                        got:      points.len(),
                    });
                }
                if let Some(&outside) = points.iter().find(|p| !p.within(bounds)) {
                    return Err(SimError::SpawnOutOfBounds(outside));
                }
                points
            }
            None => {
                let mut stream = rng.child(SPAWN_STREAM);
                random_free_cells(bounds, &obstacles, config.entity_count, &mut stream)?
            }
        };

        let mut store = EntityStore::with_capacity(bounds, config.trail_capacity, spawns.len());
        for start in spawns {
            store.create(start, self.shape);
        }

        let obstacles  = Arc::new(obstacles);
        let dispatcher = MissionDispatcher::new(bounds, config.algorithm, Arc::clone(&obstacles));

        info!(
            bounds    = %bounds,
            entities  = store.len(),
            obstacles = obstacles.len(),
            algorithm = %config.algorithm,
            threads   = executor.thread_count(),
            seed      = config.seed,
            "simulation built"
        );

        Ok(Sim {
            config,
            store,
            obstacles,
            dispatcher,
            executor,
            rng,
            tick: Tick::ZERO,
            timer: TickTimer::new(),
        })
    }
}

/// `count` cells drawn uniformly (with replacement) from the cells no
/// obstacle covers.
fn random_free_cells(
    bounds:    Size,
    obstacles: &ObstacleSet,
    count:     usize,
    rng:       &mut SimRng,
) -> SimResult<Vec<Point>> {
    let mut blocked = vec![false; bounds.area()];
    for cell in obstacles.iter().filter(|p| p.within(bounds)) {
        blocked[bounds.cell_index(cell)] = true;
    }
    let free: Vec<usize> = (0..blocked.len()).filter(|&i| !blocked[i]).collect();

    if free.is_empty() {
        return Err(SimError::NoFreeCell(bounds));
    }
    Ok((0..count)
        .map(|_| bounds.cell_at(free[rng.gen_range(0..free.len())]))
        .collect())
}
