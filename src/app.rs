//! Habits Frontend App
//!
//! Header navigation plus the active screen.

use chrono::Local;
use leptos::prelude::*;

use crate::components::{ApiSettingsForm, DayView, NewHabitForm};
use crate::context::{AppContext, Screen};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (screen, set_screen) = signal(Screen::Day);
    let (date, set_date) = signal(Local::now().date_naive());

    // Provide context to all children
    let ctx = AppContext::new(set_screen, set_date);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <button class="nav-btn" title="Dia anterior" on:click=move |_| ctx.shift_day(-1)>"‹"</button>
                <button class="nav-btn" on:click=move |_| ctx.open_today()>"Hoje"</button>
                <button class="nav-btn" title="Próximo dia" on:click=move |_| ctx.shift_day(1)>"›"</button>
                <span class="header-spacer"></span>
                <button class="nav-btn new-btn" on:click=move |_| ctx.open(Screen::NewHabit)>"+ Novo"</button>
                <button class="nav-btn" title="Configurações" on:click=move |_| ctx.open(Screen::Settings)>"⚙"</button>
            </header>

            <main class="main-content">
                // Remounting per date gives every day a fresh fetch
                {move || match screen.get() {
                    Screen::Day => {
                        let date = date.get().format("%Y-%m-%d").to_string();
                        view! { <DayView date=date /> }.into_any()
                    }
                    Screen::NewHabit => view! { <NewHabitForm /> }.into_any(),
                    Screen::Settings => view! { <ApiSettingsForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
