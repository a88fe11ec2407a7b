//! Configurator - interactive vehicle configuration with in-memory saved builds.
//!
//! A user walks a fixed four-step wizard (model, paint, wheels, Full
//! Self-Driving), the tool prices the result from a static table and keeps
//! it for the rest of the session. Saved builds can be listed by price or
//! deleted by exact description.
//!
//! # Modules
//!
//! - [`domain`] - Price table, builds and configurations
//! - [`application`] - The in-memory configuration store
//! - [`adapter::inbound::cli`] - Command line, prompts, rendering and the menu loop
//! - [`infrastructure`] - Runtime configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use configurator::adapter::inbound::cli::output::{Output, OutputConfig};
//! use configurator::adapter::inbound::cli::session::Session;
//!
//! let script = "1\n1\n2\n1\n1\n4\n";
//! let output = Output::new(Vec::new(), OutputConfig::default());
//! let mut session = Session::new(Cursor::new(script), output);
//! session.run().unwrap();
//!
//! let (store, _) = session.into_parts();
//! assert_eq!(store.len(), 1);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
