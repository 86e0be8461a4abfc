//! Console input helpers: line prompts, yes/no questions, key waits.

pub mod prompt;

pub use prompt::{confirm, read_line, wait_any_key};
