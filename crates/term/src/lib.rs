//! Terminal presentation layer for game sessions.

pub mod screen;

pub use screen::{format_elapsed, Screen};
