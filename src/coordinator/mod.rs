pub mod coordinator;

pub use coordinator::Building;
