//! Error Alert Component
//!
//! Shown when the dataset fetch failed. The state is terminal, so there is
//! no retry control.

use leptos::*;

#[component]
pub fn ErrorAlert(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-3 bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded-lg">
            <span class="text-lg">"✕"</span>
            <div>
                <p class="font-semibold">"Error"</p>
                <p class="text-sm">{message}</p>
            </div>
        </div>
    }
}
