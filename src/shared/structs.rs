/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Idle,
    Moving,
    Dwelling,
}

/// A call for an elevator to stop at `floor`. The direction only decides how
/// the receiving elevator orders its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: u8,
    pub going_up: bool,
}

impl Request {
    pub fn new(floor: u8, going_up: bool) -> Request {
        Request { floor, going_up }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.going_up { "up" } else { "down" };
        write!(f, "{} floor, going {}", self.floor, direction)
    }
}

/// Point-in-time copy of an elevator's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub id: u8,
    pub floor: u8,
    pub behaviour: Behaviour,
    pub target_floors: Vec<u8>,
}

impl fmt::Display for ElevatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let behaviour = match self.behaviour {
            Behaviour::Idle => "idle",
            Behaviour::Moving => "moving",
            Behaviour::Dwelling => "dwelling",
        };
        write!(
            f,
            "elevator {} at floor {}, {}, queue {:?}",
            self.id, self.floor, behaviour, self.target_floors
        )
    }
}

/// Notifications published by the simulation for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    RequestReceived(Request),
    RequestAssigned { elevator_id: u8, request: Request },
    PositionChanged { elevator_id: u8, floor: u8 },
    Arrived { elevator_id: u8, floor: u8 },
}
