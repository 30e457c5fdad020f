//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `progress` percent
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-track" role="progressbar" aria-valuenow=move || progress.get().to_string()>
            <div class="progress-fill" style:width=move || format!("{}%", progress.get())></div>
        </div>
    }
}
