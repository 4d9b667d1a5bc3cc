pub mod dash;
pub mod delay;
pub mod event_bus;
pub mod flight;
pub mod frame;

pub use dash::*;
pub use delay::*;
pub use event_bus::*;
pub use flight::*;
pub use frame::*;
