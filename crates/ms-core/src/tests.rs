//! Unit tests for ms-core primitives.

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(EntityId::default(), EntityId::INVALID);
        assert_eq!(EntityId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, Size};

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 7);
        assert_eq!(Point::new(3, 4).distance(Point::new(0, 0)), 7);
        assert_eq!(Point::new(-2, 5).distance(Point::new(2, 1)), 8);
        let p = Point::new(9, 9);
        assert_eq!(p.distance(p), 0);
    }

    #[test]
    fn within_is_half_open() {
        let size = Size::new(10, 5);
        assert!(Point::new(0, 0).within(size));
        assert!(Point::new(9, 4).within(size));
        assert!(!Point::new(10, 4).within(size));
        assert!(!Point::new(9, 5).within(size));
        assert!(!Point::new(-1, 0).within(size));
        assert!(!Point::new(0, -1).within(size));
    }

    #[test]
    fn neighbors_expansion_order() {
        let n = Point::new(2, 2).neighbors();
        assert_eq!(
            n,
            [Point::new(2, 3), Point::new(3, 2), Point::new(2, 1), Point::new(1, 2)]
        );
        for p in n {
            assert_eq!(p.distance(Point::new(2, 2)), 1);
        }
    }

    #[test]
    fn area_and_cell_index() {
        let size = Size::new(4, 3);
        assert_eq!(size.area(), 12);
        assert_eq!(size.cell_index(Point::new(0, 0)), 0);
        assert_eq!(size.cell_index(Point::new(3, 0)), 3);
        assert_eq!(size.cell_index(Point::new(1, 2)), 9);
        assert_eq!(size.cell_at(9), Point::new(1, 2));
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, -1).is_empty());
        assert_eq!(Size::new(-3, 4).area(), 0);
        assert!(!Size::new(1, 1).is_empty());
    }
}

#[cfg(test)]
mod algorithm {
    use crate::{CoreError, PathAlgorithm};

    #[test]
    fn parse_names_and_codes() {
        assert_eq!("astar".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::AStar);
        assert_eq!("A*".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::AStar);
        assert_eq!("1".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::AStar);
        assert_eq!(" Greedy ".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::Greedy);
        assert_eq!("0".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::Greedy);
    }

    #[test]
    fn unknown_name_errors() {
        let err = "dijkstra".parse::<PathAlgorithm>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownAlgorithm(ref s) if s == "dijkstra"));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for algo in PathAlgorithm::ALL {
            assert_eq!(algo.to_string().parse::<PathAlgorithm>().unwrap(), algo);
        }
        assert_eq!(PathAlgorithm::default(), PathAlgorithm::AStar);
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, Size};

    #[test]
    fn same_seed_same_points() {
        let bounds = Size::new(50, 20);
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.random_point(bounds), b.random_point(bounds));
        }
    }

    #[test]
    fn random_points_stay_in_bounds() {
        let bounds = Size::new(3, 2);
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            assert!(rng.random_point(bounds).within(bounds));
        }
    }

    #[test]
    fn child_streams_differ() {
        let bounds = Size::new(1_000, 1_000);
        let mut root = SimRng::new(3);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let s1: Vec<_> = (0..8).map(|_| c1.random_point(bounds)).collect();
        let s2: Vec<_> = (0..8).map(|_| c2.random_point(bounds)).collect();
        assert_ne!(s1, s2);
    }

    #[test]
    #[should_panic(expected = "empty bounds")]
    fn empty_bounds_panics() {
        SimRng::new(0).random_point(Size::new(0, 5));
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{CoreError, PathAlgorithm, SimConfig, Size, Tick};

    #[test]
    fn defaults() {
        let cfg = SimConfig::new(Size::new(80, 24));
        assert_eq!(cfg.entity_count, 20);
        assert_eq!(cfg.obstacle_count, 80 * 24 / 10);
        assert_eq!(cfg.tick_interval, Duration::from_millis(20));
        assert_eq!(cfg.algorithm, PathAlgorithm::AStar);
        assert_eq!(cfg.trail_capacity, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_bounds() {
        let cfg = SimConfig::new(Size::new(0, 24));
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_grid_full_of_obstacles() {
        let mut cfg = SimConfig::new(Size::new(4, 4));
        cfg.obstacle_count = 16;
        assert!(cfg.validate().is_err());
        cfg.obstacle_count = 15;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_threads_and_trail() {
        let mut cfg = SimConfig::new(Size::new(10, 10));
        cfg.worker_threads = Some(0);
        assert!(cfg.validate().is_err());
        cfg.worker_threads = Some(2);
        cfg.trail_capacity = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn tick_helpers() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(4).offset(3), Tick(7));
        assert_eq!(Tick(12).to_string(), "T12");
    }
}
