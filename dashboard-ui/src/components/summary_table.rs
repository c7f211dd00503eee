//! Yearly Summary Table
//!
//! Sortable by clicking a column header; clicking a row drills into that
//! year.

use leptos::*;
use salary_dashboard::presenter::{format_usd, YEAR_TABLE_TITLE};
use salary_dashboard::{DashboardEvent, YearColumn};

use crate::state::global::use_global_state;

#[component]
pub fn SummaryTable() -> impl IntoView {
    let state = use_global_state();

    let rows = create_memo(move |_| state.dashboard.with(|d| d.summaries()));
    let selected = create_memo(move |_| state.dashboard.with(|d| d.selected_year()));

    view! {
        <div class="bg-white rounded-lg shadow p-4 w-min md:w-max">
            <div class="font-medium text-2xl text-blue-600 mb-4">{YEAR_TABLE_TITLE}</div>
            <table class="min-w-full text-left">
                <thead>
                    <tr class="border-b">
                        {YearColumn::ALL
                            .into_iter()
                            .map(|column| view! { <SortHeader column=column /> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.year
                        children=move |row| {
                            let year = row.year;
                            let row_class = move || {
                                let base = "cursor-pointer border-b hover:bg-blue-50";
                                if selected.get() == Some(year) {
                                    format!("{} bg-blue-100", base)
                                } else {
                                    base.to_string()
                                }
                            };

                            view! {
                                <tr
                                    class=row_class
                                    on:click=move |_| state.dispatch(DashboardEvent::RowActivated(year))
                                >
                                    <td class="px-4 py-2">{row.year}</td>
                                    <td class="px-4 py-2">{row.number_of_jobs}</td>
                                    <td class="px-4 py-2">{format_usd(row.average_salary)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Clickable column header showing the active sort direction
#[component]
fn SortHeader(column: YearColumn) -> impl IntoView {
    let state = use_global_state();

    let indicator = move || {
        state.dashboard.with(|d| match d.sort() {
            Some(sort) if sort.column == column => sort.direction.indicator(),
            _ => "",
        })
    };

    view! {
        <th
            class="px-4 py-2 cursor-pointer select-none hover:bg-gray-100"
            on:click=move |_| state.dispatch(DashboardEvent::SortChanged(column))
        >
            {column.title()}
            " "
            <span class="text-xs text-gray-500">{indicator}</span>
        </th>
    }
}
