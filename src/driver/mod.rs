pub mod driver;
pub mod event_log;
pub mod generator;

pub use driver::Driver;
pub use event_log::log_events;
pub use generator::{RandomRequestGenerator, RequestSource};
