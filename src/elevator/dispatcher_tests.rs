/*
 * Unit tests for the dispatcher
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_dispatcher_random_init
 * - test_dispatcher_same_seed_same_fleet
 * - test_dispatcher_rejects_empty_fleet
 * - test_dispatcher_rejects_floor_above_top
 * - test_dispatcher_tie_goes_to_lowest_index
 * - test_dispatcher_nearest_elevator
 * - test_dispatcher_tie_scenario
 * - test_dispatcher_already_at_call
 * - test_dispatcher_moves_down
 * - test_dispatcher_steps_match_distance
 * - test_dispatcher_sequential_calls
 * - test_dispatcher_history_append_only
 * - test_dispatcher_single_floor_building
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::elevator::{CallReport, Dispatcher, EngineError};
    use crate::shared::Snapshot;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_dispatcher_random_init() {
        // Purpose: Verify that the initial snapshot covers the fleet and stays inside the building

        for seed in 0..50 {
            // Arrange
            let mut rng = StdRng::seed_from_u64(seed);
            let n_floors = rng.gen_range(0..=20);
            let n_elevators = rng.gen_range(1..=8);

            // Act
            let dispatcher = Dispatcher::new(n_floors, n_elevators, &mut rng).unwrap();

            // Assert
            let positions = dispatcher.positions();
            assert_eq!(positions.len(), 1);
            assert_eq!(positions[0].len(), n_elevators);
            assert!(positions[0].floors.iter().all(|&f| f <= n_floors));
            assert_eq!(positions[0].floors, dispatcher.elevators());
        }
    }

    #[test]
    fn test_dispatcher_same_seed_same_fleet() {
        // Purpose: Verify that a seeded generator reproduces the initial fleet

        // Arrange
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        // Act
        let a = Dispatcher::new(10, 5, &mut rng_a).unwrap();
        let b = Dispatcher::new(10, 5, &mut rng_b).unwrap();

        // Assert
        assert_eq!(a.elevators(), b.elevators());
    }

    #[test]
    fn test_dispatcher_rejects_empty_fleet() {
        // Purpose: Verify that a fleet without elevators is refused at initialization

        // Arrange
        let mut rng = StdRng::seed_from_u64(1);

        // Act
        let random = Dispatcher::new(10, 0, &mut rng);
        let explicit = Dispatcher::with_floors(10, vec![]);

        // Assert
        assert_eq!(random.err(), Some(EngineError::NoElevators));
        assert_eq!(explicit.err(), Some(EngineError::NoElevators));
    }

    #[test]
    fn test_dispatcher_rejects_floor_above_top() {
        // Purpose: Verify that explicit starting floors must lie inside the building

        // Act
        let result = Dispatcher::with_floors(4, vec![1, 5, 2]);

        // Assert
        assert_eq!(
            result.err(),
            Some(EngineError::FloorOutOfRange {
                elevator: 1,
                floor: 5,
                n_floors: 4
            })
        );
    }

    #[test]
    fn test_dispatcher_tie_goes_to_lowest_index() {
        // Purpose: Verify that equidistant elevators resolve to the lowest index

        // Arrange
        let dispatcher = Dispatcher::with_floors(10, vec![2, 8]).unwrap();

        // Act
        let nearest = dispatcher.nearest_elevator(5);

        // Assert
        assert_eq!(nearest, 0);
    }

    #[test]
    fn test_dispatcher_nearest_elevator() {
        // Purpose: Verify that the closest elevator is chosen regardless of index

        // Arrange
        let dispatcher = Dispatcher::with_floors(10, vec![0, 9, 6, 6]).unwrap();

        // Act & Assert
        assert_eq!(dispatcher.nearest_elevator(7), 2);
        assert_eq!(dispatcher.nearest_elevator(10), 1);
        assert_eq!(dispatcher.nearest_elevator(1), 0);
        assert_eq!(dispatcher.nearest_elevator(3), 0);
    }

    #[test]
    fn test_dispatcher_tie_scenario() {
        // Purpose: Verify the tie scenario from floors [0, 10] with a call to floor 5

        // Arrange
        let mut dispatcher = Dispatcher::with_floors(10, vec![0, 10]).unwrap();

        // Act
        let reports = dispatcher.handle_calls(&[5]);

        // Assert
        assert_eq!(
            reports,
            vec![CallReport {
                call: 5,
                elevator: 0,
                from: 0,
                steps: 5
            }]
        );
        assert_eq!(dispatcher.positions().len(), 6);
        assert_eq!(dispatcher.elevators(), &[5, 10]);
        let expected: Vec<Snapshot> = (0..=5).map(|f| Snapshot::new(&[f, 10])).collect();
        assert_eq!(dispatcher.positions(), expected.as_slice());
    }

    #[test]
    fn test_dispatcher_already_at_call() {
        // Purpose: Verify that no snapshot is recorded when the elevator is already at the call

        // Arrange
        let mut dispatcher = Dispatcher::with_floors(5, vec![3]).unwrap();

        // Act
        let reports = dispatcher.handle_calls(&[3, 3]);

        // Assert
        assert_eq!(dispatcher.positions().len(), 1);
        assert!(reports.iter().all(|r| r.steps == 0));
        assert_eq!(dispatcher.elevators(), &[3]);
    }

    #[test]
    fn test_dispatcher_moves_down() {
        // Purpose: Verify that an elevator above the call travels downwards floor by floor

        // Arrange
        let mut dispatcher = Dispatcher::with_floors(8, vec![7, 0]).unwrap();

        // Act
        dispatcher.handle_call(5);

        // Assert
        let floors: Vec<u8> = dispatcher.positions().iter().map(|s| s.floors[0]).collect();
        assert_eq!(floors, vec![7, 6, 5]);
        assert!(dispatcher.positions().iter().all(|s| s.floors[1] == 0));
    }

    #[test]
    fn test_dispatcher_steps_match_distance() {
        // Purpose: Verify that each call ends on the called floor and appends one snapshot per floor travelled

        // Arrange
        let mut rng = StdRng::seed_from_u64(7);
        let n_floors = 15;
        let mut dispatcher = Dispatcher::new(n_floors, 4, &mut rng).unwrap();

        for _ in 0..40 {
            let call = rng.gen_range(0..=n_floors);
            let before = dispatcher.positions().len();
            let expected_elevator = dispatcher.nearest_elevator(call);
            let start = dispatcher.elevators()[expected_elevator];

            // Act
            let report = dispatcher.handle_call(call);

            // Assert
            assert_eq!(report.elevator, expected_elevator);
            assert_eq!(report.from, start);
            assert_eq!(dispatcher.elevators()[report.elevator], call);
            assert_eq!(
                dispatcher.positions().len() - before,
                start.abs_diff(call) as usize
            );
            assert_eq!(report.steps, start.abs_diff(call) as usize);
        }
    }

    #[test]
    fn test_dispatcher_sequential_calls() {
        // Purpose: Verify that a batch behaves exactly like its calls processed one by one

        // Arrange
        let mut batched = Dispatcher::with_floors(12, vec![4, 11, 0]).unwrap();
        let mut single = Dispatcher::with_floors(12, vec![4, 11, 0]).unwrap();

        // Act
        batched.handle_calls(&[9, 2, 12, 6]);
        for call in [9, 2, 12, 6] {
            single.handle_calls(&[call]);
        }

        // Assert
        assert_eq!(batched.elevators(), single.elevators());
        assert_eq!(batched.positions(), single.positions());
    }

    #[test]
    fn test_dispatcher_history_append_only() {
        // Purpose: Verify that recorded snapshots are never modified or removed

        // Arrange
        let mut dispatcher = Dispatcher::with_floors(10, vec![1, 9]).unwrap();
        let mut seen: Vec<Snapshot> = dispatcher.positions().to_vec();

        for call in [6, 0, 10, 3, 3, 8] {
            // Act
            dispatcher.handle_call(call);

            // Assert
            let positions = dispatcher.positions();
            assert!(positions.len() >= seen.len());
            assert_eq!(&positions[..seen.len()], seen.as_slice());
            seen = positions.to_vec();
        }
    }

    #[test]
    fn test_dispatcher_single_floor_building() {
        // Purpose: Verify that a building with only floor 0 never moves anything

        // Arrange
        let mut rng = StdRng::seed_from_u64(3);
        let mut dispatcher = Dispatcher::new(0, 3, &mut rng).unwrap();

        // Act
        dispatcher.handle_calls(&[0, 0]);

        // Assert
        assert_eq!(dispatcher.elevators(), &[0, 0, 0]);
        assert_eq!(dispatcher.positions().len(), 1);
    }
}
