/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::sync::Arc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{BuildingConfig, ElevatorConfig};
use crate::elevator::Elevator;
use crate::shared::{Clock, ConfigError, DispatchError, Request, SimEvent};

/**
 * The building and its fixed fleet of elevators.
 *
 * The `Building` decides which elevator serves a request and pushes the request
 * into that elevator's queue. The fleet is created once and never changes.
 *
 * # Fields
 * - `n_floors`:    Number of floors, numbered 1..=n_floors.
 * - `elevators`:   The fleet, in id order. Shared with the elevator threads.
 * - `event_tx`:    Sends assignment notifications.
 */
pub struct Building {
    n_floors: u8,
    elevators: Vec<Arc<Elevator>>,
    event_tx: cbc::Sender<SimEvent>,
}

impl Building {
    pub fn new(
        building: &BuildingConfig,
        elevator: &ElevatorConfig,
        clock: Arc<dyn Clock>,
        event_tx: cbc::Sender<SimEvent>,
    ) -> Result<Building, ConfigError> {
        if building.n_floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        if building.n_elevators == 0 {
            return Err(ConfigError::NoElevators);
        }
        if elevator.floor_travel_time == 0 {
            return Err(ConfigError::ZeroTravelTime);
        }

        let elevators = (1..=building.n_elevators)
            .map(|id| {
                Arc::new(Elevator::new(
                    id,
                    building.n_floors,
                    elevator,
                    clock.clone(),
                    event_tx.clone(),
                ))
            })
            .collect();

        Ok(Building {
            n_floors: building.n_floors,
            elevators,
            event_tx,
        })
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn elevators(&self) -> &[Arc<Elevator>] {
        &self.elevators
    }

    /// Picks the nearest elevator that is idle or positioned to approach `floor`
    /// in the requested direction. Ties on distance go to the first elevator in
    /// fleet order. Distance decides the order, the filter only skips.
    pub fn select_elevator(&self, floor: u8, going_up: bool) -> Option<&Arc<Elevator>> {
        // Distances are read once, a car may move while the fleet is ranked
        let mut candidates: Vec<(u8, &Arc<Elevator>)> = self
            .elevators
            .iter()
            .map(|elevator| (elevator.distance_to(floor), elevator))
            .collect();

        // Stable sort keeps fleet order among equal distances
        candidates.sort_by_key(|(distance, _)| *distance);

        candidates
            .into_iter()
            .map(|(_, elevator)| elevator)
            .find(|elevator| elevator.is_idle() || elevator.is_going_in_direction(going_up, floor))
    }

    /// Assigns the request to an elevator and returns its id. A floor the chosen
    /// elevator already has queued counts as assigned to it. When no elevator
    /// qualifies the request is dropped and `Ok(None)` is returned.
    pub fn dispatch(&self, floor: u8, going_up: bool) -> Result<Option<u8>, DispatchError> {
        if floor == 0 || floor > self.n_floors {
            return Err(DispatchError::FloorOutOfRange {
                floor,
                n_floors: self.n_floors,
            });
        }

        let request = Request::new(floor, going_up);
        match self.select_elevator(floor, going_up) {
            Some(elevator) => {
                if elevator.add_request(floor, going_up) {
                    let _ = self.event_tx.send(SimEvent::RequestAssigned {
                        elevator_id: elevator.id(),
                        request,
                    });
                    debug!("Assigned {} to {}", request, elevator.snapshot());
                } else {
                    debug!(
                        "Floor {} already queued on elevator {}",
                        floor,
                        elevator.id()
                    );
                }
                Ok(Some(elevator.id()))
            }
            None => {
                debug!("No elevator available, dropping request: {}", request);
                Ok(None)
            }
        }
    }
}
