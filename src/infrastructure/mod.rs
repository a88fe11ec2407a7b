//! Process-level wiring: configuration and logging.

pub mod config;
