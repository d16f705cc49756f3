pub mod bank;
pub mod channel;

pub use bank::ChannelBank;
pub use channel::{Channel, Shape};
