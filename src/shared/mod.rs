pub mod clock;
pub mod error;
pub mod macros;
pub mod structs;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::SimulatedClock;
pub use error::{ConfigError, DispatchError};
pub use structs::Behaviour;
pub use structs::ElevatorSnapshot;
pub use structs::Request;
pub use structs::SimEvent;
