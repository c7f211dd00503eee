//! Job-Title Table
//!
//! Paginated job-title counts for the selected year.

use leptos::*;
use salary_dashboard::presenter::{job_table_title, JOB_TABLE_COLUMNS};
use salary_dashboard::DashboardEvent;

use crate::state::global::use_global_state;

/// Page sizes offered in the size selector
const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

#[component]
pub fn JobTitleTable(year: i32) -> impl IntoView {
    let state = use_global_state();

    let page_rows = create_memo(move |_| {
        state
            .dashboard
            .with(|d| d.job_table().page_rows().to_vec())
    });
    let current = create_memo(move |_| state.dashboard.with(|d| d.job_table().current_page()));
    let page_count = create_memo(move |_| state.dashboard.with(|d| d.job_table().page_count()));
    let total = create_memo(move |_| state.dashboard.with(|d| d.job_table().total()));
    let page_size = create_memo(move |_| state.dashboard.with(|d| d.pagination().page_size));

    let go_to = move |page: usize| {
        state.dispatch(DashboardEvent::PageChanged {
            page,
            page_size: Some(page_size.get_untracked()),
        });
    };

    let on_size_change = move |ev: ev::Event| {
        let size = event_target_value(&ev).parse::<usize>().ok();
        state.dispatch(DashboardEvent::PageChanged {
            page: current.get_untracked(),
            page_size: size,
        });
    };

    view! {
        <div class="bg-white rounded-lg shadow p-4 w-max">
            <div class="font-medium text-center text-2xl text-blue-600 mb-4">
                {job_table_title(year)}
            </div>

            {move || {
                if total.get() == 0 {
                    view! { <p class="text-gray-500 text-center py-4">"No data"</p> }.into_view()
                } else {
                    view! {
                        <table class="min-w-full text-left">
                            <thead>
                                <tr class="border-b">
                                    <th class="px-4 py-2">{JOB_TABLE_COLUMNS[0]}</th>
                                    <th class="px-4 py-2">{JOB_TABLE_COLUMNS[1]}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {page_rows
                                    .get()
                                    .into_iter()
                                    .map(|row| view! {
                                        <tr class="border-b">
                                            <td class="px-4 py-2">{row.job_title}</td>
                                            <td class="px-4 py-2">{row.count}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }
            }}

            <div class="flex items-center justify-end space-x-2 mt-4 text-sm">
                <button
                    class="px-3 py-1 rounded border disabled:opacity-40"
                    disabled=move || current.get() <= 1
                    on:click=move |_| go_to(current.get_untracked().saturating_sub(1))
                >
                    "‹"
                </button>
                <span>{move || format!("{} / {}", current.get(), page_count.get())}</span>
                <button
                    class="px-3 py-1 rounded border disabled:opacity-40"
                    disabled=move || current.get() >= page_count.get()
                    on:click=move |_| go_to(current.get_untracked() + 1)
                >
                    "›"
                </button>
                <select class="border rounded px-2 py-1" on:change=on_size_change>
                    {PAGE_SIZE_OPTIONS
                        .into_iter()
                        .map(|size| view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
