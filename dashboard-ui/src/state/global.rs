//! Global Application State
//!
//! Wraps the dashboard state machine in a Leptos signal. Components read it
//! through `with` and change it only by dispatching events.

use leptos::*;
use salary_dashboard::{Dashboard, DashboardEvent, FetchResult, SalaryRecord};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The single dashboard instance
    pub dashboard: RwSignal<Dashboard>,
}

/// Provide global state to the component tree
pub fn provide_global_state(page_size: usize) {
    let state = GlobalState {
        dashboard: create_rw_signal(Dashboard::new(page_size)),
    };

    provide_context(state);
}

/// Get the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Apply the fetch outcome (Loading → Ready | Error)
    pub fn resolve(&self, result: FetchResult<Vec<SalaryRecord>>) {
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to load salary data: {}", e).into());
        }
        self.dashboard.update(|d| d.resolve(result));
    }

    /// Forward a user event to the dashboard
    pub fn dispatch(&self, event: DashboardEvent) {
        self.dashboard.update(|d| {
            d.dispatch(event);
        });
    }
}
