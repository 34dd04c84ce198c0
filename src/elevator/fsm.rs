/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, trace, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::shared::{Behaviour, Clock, ElevatorSnapshot, SimEvent};

/**
 * A single elevator car and its control loop.
 *
 * The `Elevator` owns its position and its queue of target floors. The queue is
 * written by the dispatcher through `add_request` and consumed by the elevator's
 * own thread through `run`. Both go through one mutex per elevator; elevators
 * never share state with each other.
 *
 * # Fields
 * - `id`:              1-based identifier, assigned in fleet order.
 * - `n_floors`:        Number of floors the elevator can serve (floors are 1..=n_floors).
 * - `floor_travel`:    Time spent moving one floor.
 * - `dwell`:           Time spent holding at a served floor.
 * - `idle_poll`:       Pause between two iterations of the control loop.
 * - `state`:           Current floor, behaviour and target floor queue.
 * - `clock`:           Time source used for every wait.
 * - `event_tx`:        Sends position and arrival notifications.
 */
pub struct Elevator {
    id: u8,
    n_floors: u8,
    floor_travel: Duration,
    dwell: Duration,
    idle_poll: Duration,
    state: Mutex<ElevatorState>,
    clock: Arc<dyn Clock>,
    event_tx: cbc::Sender<SimEvent>,
}

struct ElevatorState {
    floor: u8,
    behaviour: Behaviour,
    target_floors: Vec<u8>,
}

impl Elevator {
    pub fn new(
        id: u8,
        n_floors: u8,
        config: &ElevatorConfig,
        clock: Arc<dyn Clock>,
        event_tx: cbc::Sender<SimEvent>,
    ) -> Elevator {
        Elevator {
            id,
            n_floors,
            floor_travel: config.floor_travel(),
            dwell: config.dwell(),
            idle_poll: config.idle_poll(),
            state: Mutex::new(ElevatorState {
                floor: 1,
                behaviour: Behaviour::Idle,
                target_floors: Vec::new(),
            }),
            clock,
            event_tx,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.state().floor
    }

    pub fn is_idle(&self) -> bool {
        self.state().target_floors.is_empty()
    }

    pub fn distance_to(&self, floor: u8) -> u8 {
        self.current_floor().abs_diff(floor)
    }

    /// True when the elevator's position is on the approach side of `floor` for
    /// the requested direction. Only looks at the position, not the queue.
    pub fn is_going_in_direction(&self, going_up: bool, floor: u8) -> bool {
        let current_floor = self.current_floor();
        if going_up {
            current_floor <= floor
        } else {
            current_floor >= floor
        }
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        let state = self.state();
        ElevatorSnapshot {
            id: self.id,
            floor: state.floor,
            behaviour: state.behaviour,
            target_floors: state.target_floors.clone(),
        }
    }

    /// Queues `floor` unless it is already queued, then re-sorts the whole queue
    /// ascending for an upward request and descending for a downward one.
    ///
    /// Returns false when the floor was already queued or is outside the building.
    pub fn add_request(&self, floor: u8, going_up: bool) -> bool {
        if floor == 0 || floor > self.n_floors {
            warn!("Elevator {} ignoring request for floor {}", self.id, floor);
            return false;
        }

        let mut state = self.state();
        if state.target_floors.contains(&floor) {
            return false;
        }

        state.target_floors.push(floor);
        if going_up {
            state.target_floors.sort_unstable();
        } else {
            state.target_floors.sort_unstable_by(|a, b| b.cmp(a));
        }
        debug!(
            "Elevator {} queue is now {:?}",
            self.id, state.target_floors
        );
        true
    }

    pub fn run(&self) {
        debug!("Elevator {} running from floor {}", self.id, self.current_floor());

        // Main loop
        loop {
            self.step();
        }
    }

    /// One iteration of the control loop. Serves the head of the queue if there
    /// is one and returns the served floor.
    pub fn step(&self) -> Option<u8> {
        let next_floor = self.state().target_floors.first().copied();

        if let Some(floor) = next_floor {
            self.serve(floor);
        }

        self.clock.sleep(self.idle_poll);
        next_floor
    }

    /// Steps one floor per travel tick until the elevator is at `floor`.
    pub fn move_to_floor(&self, floor: u8) {
        let floor = floor.clamp(1, self.n_floors);

        while self.current_floor() != floor {
            self.clock.sleep(self.floor_travel);

            let new_floor = {
                let mut state = self.state();
                if state.floor < floor {
                    state.floor += 1;
                } else {
                    state.floor -= 1;
                }
                state.floor
            };

            let _ = self.event_tx.send(SimEvent::PositionChanged {
                elevator_id: self.id,
                floor: new_floor,
            });
        }
    }

    fn serve(&self, floor: u8) {
        self.set_behaviour(Behaviour::Moving);
        self.move_to_floor(floor);

        // Remove by value, the queue may have been re-sorted during the trip
        {
            let mut state = self.state();
            state.target_floors.retain(|&f| f != floor);
            state.behaviour = Behaviour::Dwelling;
        }
        let _ = self.event_tx.send(SimEvent::Arrived {
            elevator_id: self.id,
            floor,
        });

        self.clock.sleep(self.dwell);

        let mut state = self.state();
        state.behaviour = if state.target_floors.is_empty() {
            Behaviour::Idle
        } else {
            Behaviour::Moving
        };
        trace!("Elevator {} done dwelling at floor {}", self.id, floor);
    }

    fn set_behaviour(&self, behaviour: Behaviour) {
        self.state().behaviour = behaviour;
    }

    fn state(&self) -> MutexGuard<'_, ElevatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
