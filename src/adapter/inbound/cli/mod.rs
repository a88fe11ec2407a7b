//! CLI module graph.

pub mod command;
pub mod input;
pub mod output;
pub mod session;
pub mod wizard;
