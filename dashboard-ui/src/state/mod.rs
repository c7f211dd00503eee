//! State Management
//!
//! Dashboard state shared with every component through context.

pub mod global;

pub use global::{provide_global_state, GlobalState};
