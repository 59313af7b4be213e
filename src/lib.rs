pub mod bus;
mod client;
mod config;
mod controller;
mod logging;
mod protocol;
mod session;
mod topic;

pub use bus::in_memory::{InMemoryBroker, InMemoryBus};
pub use bus::{BusMessage, MessageBus, ReplyTo};
pub use client::*;
pub use config::*;
pub use controller::*;
pub use logging::init_logging;
pub use protocol::*;
pub use session::*;
pub use topic::*;
