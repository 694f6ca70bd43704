/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, trace};
use rand::Rng;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Snapshot};

/**
 * Dispatches floor calls to a fleet of elevators and records their movement.
 *
 * Every call is handed to the elevator closest to the called floor, the lowest
 * index winning a tie. The chosen elevator travels one floor at a time and a
 * snapshot of the whole fleet is appended to `positions` after each step.
 * Calls are served one after the other, an elevator finishes its journey
 * before the next call is assigned.
 *
 * # Fields
 * - `n_floors`:    Highest floor of the building, floors are `0..=n_floors`.
 * - `elevators`:   Current floor of each elevator, indexed by elevator id.
 * - `positions`:   Append-only snapshot history, entry 0 is the initial fleet.
 */
pub struct Dispatcher {
    n_floors: u8,
    elevators: Vec<u8>,
    positions: Vec<Snapshot>,
}

/// Outcome of a single dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallReport {
    pub call: u8,
    pub elevator: usize,
    pub from: u8,
    pub steps: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("the fleet needs at least one elevator")]
    NoElevators,
    #[error("elevator {elevator} is on floor {floor}, outside 0..={n_floors}")]
    FloorOutOfRange {
        elevator: usize,
        floor: u8,
        n_floors: u8,
    },
}

/***************************************/
/*             Public API              */
/***************************************/
impl Dispatcher {
    /// Creates a fleet of `n_elevators` elevators placed on uniformly random
    /// floors drawn from `rng`.
    pub fn new<R: Rng>(
        n_floors: u8,
        n_elevators: usize,
        rng: &mut R,
    ) -> Result<Dispatcher, EngineError> {
        if n_elevators == 0 {
            return Err(EngineError::NoElevators);
        }

        let elevators = (0..n_elevators)
            .map(|_| rng.gen_range(0..=n_floors))
            .collect();

        Ok(Dispatcher::from_fleet(n_floors, elevators))
    }

    /// Creates a fleet with the given starting floors.
    pub fn with_floors(n_floors: u8, floors: Vec<u8>) -> Result<Dispatcher, EngineError> {
        if floors.is_empty() {
            return Err(EngineError::NoElevators);
        }

        if let Some((elevator, &floor)) = floors.iter().enumerate().find(|&(_, &f)| f > n_floors) {
            return Err(EngineError::FloorOutOfRange {
                elevator,
                floor,
                n_floors,
            });
        }

        Ok(Dispatcher::from_fleet(n_floors, floors))
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn elevators(&self) -> &[u8] {
        &self.elevators
    }

    pub fn positions(&self) -> &[Snapshot] {
        &self.positions
    }

    /// Index of the elevator closest to `call`. Equal distances resolve to
    /// the lowest index.
    pub fn nearest_elevator(&self, call: u8) -> usize {
        self.elevators
            .iter()
            .enumerate()
            .min_by_key(|&(i, &floor)| (floor.abs_diff(call), i))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Sends the nearest elevator to `call`. The caller guarantees
    /// `call <= n_floors`.
    pub fn handle_call(&mut self, call: u8) -> CallReport {
        debug_assert!(
            call <= self.n_floors,
            "call {} above top floor {}",
            call,
            self.n_floors
        );

        let elevator = self.nearest_elevator(call);
        let from = self.elevators[elevator];
        info!(
            "Call to floor {}: elevator {} dispatched from floor {}",
            call, elevator, from
        );

        self.move_elevator(elevator, call);

        CallReport {
            call,
            elevator,
            from,
            steps: from.abs_diff(call) as usize,
        }
    }

    /// Serves `calls` in order, each seeing the fleet left by the previous one.
    pub fn handle_calls(&mut self, calls: &[u8]) -> Vec<CallReport> {
        let reports: Vec<CallReport> = calls.iter().map(|&call| self.handle_call(call)).collect();
        debug!(
            "Handled {} calls, {} snapshots recorded",
            reports.len(),
            self.positions.len()
        );
        reports
    }

    /***************************************/
    /*          Private functions          */
    /***************************************/
    fn from_fleet(n_floors: u8, elevators: Vec<u8>) -> Dispatcher {
        info!(
            "Fleet of {} elevators over floors 0..={}, initial floors {:?}",
            elevators.len(),
            n_floors,
            elevators
        );
        let positions = vec![Snapshot::new(&elevators)];
        Dispatcher {
            n_floors,
            elevators,
            positions,
        }
    }

    fn move_elevator(&mut self, elevator: usize, target: u8) {
        let direction = Direction::towards(self.elevators[elevator], target);
        while self.elevators[elevator] != target {
            self.elevators[elevator] = direction.step(self.elevators[elevator]);
            trace!(
                "Elevator {} moving {:?}, now at floor {}",
                elevator,
                direction,
                self.elevators[elevator]
            );
            self.positions.push(Snapshot::new(&self.elevators));
        }
    }
}
