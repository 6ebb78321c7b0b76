pub mod bank;
pub mod command;
pub mod error;
pub mod parameters;
pub mod sink;
pub mod state;
pub mod timer;
