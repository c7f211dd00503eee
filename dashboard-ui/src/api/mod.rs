//! Dataset fetching

pub mod client;

pub use client::{dataset_url, fetch_records};
