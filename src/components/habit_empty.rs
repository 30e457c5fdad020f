//! Empty Day Placeholder

use leptos::prelude::*;

use crate::context::{AppContext, Screen};

/// Shown instead of the checklist when a day has no habits
#[component]
pub fn HabitEmpty() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <p class="habit-empty">
            "Você ainda não está monitorando nenhum hábito. "
            <button class="link-btn" on:click=move |_| ctx.open(Screen::NewHabit)>
                "Comece cadastrando um."
            </button>
        </p>
    }
}
