//! TUI Reveal (workspace facade crate).
//!
//! This package keeps the `tui_reveal::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_reveal_core as core;
pub use tui_reveal_input as input;
pub use tui_reveal_term as term;
pub use tui_reveal_types as types;
