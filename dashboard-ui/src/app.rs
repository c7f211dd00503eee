//! App Root Component
//!
//! Fetches the dataset on mount and switches between the loading, error and
//! ready views.

use leptos::*;
use salary_dashboard::{LoadState, DEFAULT_PAGE_SIZE};

use crate::api;
use crate::components::{Chart, ErrorAlert, JobTitleTable, Loading, SummaryTable};
use crate::state::global::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state(DEFAULT_PAGE_SIZE);
    let state = use_global_state();

    // Single fetch on mount
    spawn_local(async move {
        let result = api::fetch_records(&api::dataset_url()).await;
        state.resolve(result);
    });

    let load_state = create_memo(move |_| state.dashboard.with(|d| d.state().clone()));

    view! {
        <main class="min-h-screen bg-gray-200 p-2 md:p-4 lg:p-8">
            {move || match load_state.get() {
                LoadState::Loading => view! { <Loading /> }.into_view(),
                LoadState::Error(message) => view! { <ErrorAlert message=message /> }.into_view(),
                LoadState::Ready => view! { <SalaryDashboard /> }.into_view(),
            }}
        </main>
    }
}

/// Ready view: yearly table and chart, plus the drill-down once a year is
/// selected
#[component]
fn SalaryDashboard() -> impl IntoView {
    let state = use_global_state();
    let selected_year = create_memo(move |_| state.dashboard.with(|d| d.selected_year()));

    view! {
        <div class="w-full flex flex-col md:flex-row gap-4 lg:gap-8">
            <div class="flex flex-col items-center gap-2 text-center w-full">
                <SummaryTable />
                <p class="text-xs">
                    "This table is based on the "
                    <a
                        class="text-blue-600 hover:text-black underline"
                        href="https://www.kaggle.com/datasets/chopper53/machine-learning-engineer-salary-in-2024/data"
                    >
                        "Salaries"
                    </a>
                    " dataset available on Kaggle."
                </p>
                <Chart />
            </div>

            {move || selected_year.get().map(|year| view! { <JobTitleTable year=year /> })}
        </div>
    }
}
