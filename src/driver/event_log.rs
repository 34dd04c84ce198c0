/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::SimEvent;

/// Logs every event until all senders are gone.
pub fn log_events(event_rx: cbc::Receiver<SimEvent>) {
    for event in event_rx.iter() {
        match event {
            SimEvent::RequestAssigned { .. } => debug!("{}", describe(&event)),
            _ => info!("{}", describe(&event)),
        }
    }
    debug!("Event channel closed");
}

pub fn describe(event: &SimEvent) -> String {
    match event {
        SimEvent::RequestReceived(request) => format!("Request: {}", request),
        SimEvent::RequestAssigned { elevator_id, request } => {
            format!("Elevator {} assigned request: {}", elevator_id, request)
        }
        SimEvent::PositionChanged { elevator_id, floor } => {
            format!("Elevator {} is now on floor {}", elevator_id, floor)
        }
        SimEvent::Arrived { elevator_id, floor } => {
            format!("Elevator {} stopped at floor {}", elevator_id, floor)
        }
    }
}
