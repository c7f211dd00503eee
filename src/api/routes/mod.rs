//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dataset;
pub mod health;
