//! Command envelope and dispatch for the plugin boundary.

pub mod processor;
pub mod types;


pub use processor::CommandProcessor;
pub use types::{Command, CommandKind, Outcome, CHANNEL_NAME};
