pub mod clock;
pub mod emitter;

pub use clock::{SteadyClock, TickClock};
pub use emitter::{Emitter, TICK_PERIOD};
