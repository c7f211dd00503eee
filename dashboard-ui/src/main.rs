//! Salary Dashboard Frontend
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//!
//! # Architecture
//!
//! The page fetches `/data/salaries.json` once, hands the result to the
//! shared [`salary_dashboard::Dashboard`] state machine and renders its
//! presenters: the yearly table, the chart and the job-title drill-down.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
