//! Vehicle domain types: the price table and the configurations built from it.

pub mod catalog;
pub mod configuration;
pub mod money;

pub use catalog::{Model, Paint, SelfDriving, Selection, Wheels};
pub use configuration::{Build, Configuration};
pub use money::{format_price, Price};
