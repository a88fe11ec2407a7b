//! Application services over the domain types.

pub mod store;

pub use store::ConfigurationStore;
