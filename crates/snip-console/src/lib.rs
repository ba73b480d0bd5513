//! Console front end for the snip URL registry.

pub mod menu;
pub mod telemetry;

pub use menu::{Console, MenuChoice};
pub use telemetry::LogFormat;
