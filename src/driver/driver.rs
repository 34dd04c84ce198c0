/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::io;
use std::sync::Arc;
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::Building;
use crate::driver::RequestSource;
use crate::shared::{Clock, DispatchError, SimEvent};

/**
 * Feeds requests into the building.
 *
 * The `Driver` owns the building, starts one thread per elevator and then keeps
 * asking its request source for new requests, dispatching each one and waiting
 * the interval the source asks for.
 *
 * # Fields
 * - `building`:    The building and its elevator fleet.
 * - `source`:      Produces requests and the pause between them.
 * - `clock`:       Time source used between requests.
 * - `event_tx`:    Sends a notification for every received request.
 */
pub struct Driver<S: RequestSource> {
    building: Building,
    source: S,
    clock: Arc<dyn Clock>,
    event_tx: cbc::Sender<SimEvent>,
}

impl<S: RequestSource> Driver<S> {
    pub fn new(
        building: Building,
        source: S,
        clock: Arc<dyn Clock>,
        event_tx: cbc::Sender<SimEvent>,
    ) -> Driver<S> {
        Driver {
            building,
            source,
            clock,
            event_tx,
        }
    }

    #[cfg(test)]
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Spawns the control loop of every elevator on its own named thread.
    pub fn start_elevators(&self) -> io::Result<Vec<JoinHandle<()>>> {
        self.building
            .elevators()
            .iter()
            .map(|elevator| {
                let elevator = Arc::clone(elevator);
                Builder::new()
                    .name(format!("elevator_{}", elevator.id()))
                    .spawn(move || elevator.run())
            })
            .collect()
    }

    /// Generates and dispatches one request, then waits for the next one.
    pub fn tick(&mut self) -> Result<Option<u8>, DispatchError> {
        let request = self.source.next_request();
        let _ = self.event_tx.send(SimEvent::RequestReceived(request));

        let outcome = self.building.dispatch(request.floor, request.going_up);

        let interval = self.source.next_interval();
        debug!(
            "[{} ms] next request in {} ms",
            self.clock.elapsed().as_millis(),
            interval.as_millis()
        );
        self.clock.sleep(interval);

        outcome
    }

    pub fn run(mut self) -> io::Result<()> {
        let handles = self.start_elevators()?;
        info!(
            "Simulating {} elevators over {} floors",
            handles.len(),
            self.building.n_floors()
        );

        // Main loop
        loop {
            if let Err(e) = self.tick() {
                warn!("Rejected request: {}", e);
            }
        }
    }
}
