//! Day View Component
//!
//! Checklist of a date's habits with progress and the past-date lock.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BackButton, Checkbox, HabitEmpty, Loading, ProgressBar};
use crate::notify::AlertNotifier;
use crate::screens::day::{day_and_month, load_day, now, toggle_habit, weekday_label, DayBody, DayState};
use crate::service::TauriHabitService;

#[component]
pub fn DayView(#[prop(into)] date: String) -> impl IntoView {
    let state = RwSignal::new(DayState::new(&date));

    // Load on mount
    Effect::new(move |_| {
        let date = state.with_untracked(|s| s.date().to_string());
        spawn_local(async move {
            let result = load_day(&TauriHabitService, &AlertNotifier, &date).await;
            // No-op once the view is gone
            let _ = state.try_update(|s| s.apply_fetch(result));
        });
    });

    let on_toggle = move |habit_id: String| {
        let started = state
            .try_update(|s| s.begin_toggle(&habit_id, now()))
            .unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            let outcome = toggle_habit(&TauriHabitService, &AlertNotifier, &habit_id).await;
            let _ = state.try_update(|s| s.finish_toggle(&habit_id, outcome));
        });
    };

    let locked = move || state.with(|s| s.is_locked_at(now()));
    let loading = move || state.with(|s| s.loading);
    let progress = Signal::derive(move || state.with(|s| s.progress()));

    view! {
        <div class="screen day-screen">
            <BackButton />

            <Show when=move || !loading() fallback=|| view! { <Loading /> }>
                {move || state.with(|s| s.parsed_date()).map(|date| view! {
                    <p class="day-weekday">{weekday_label(date)}</p>
                    <h1 class="day-date">{day_and_month(date)}</h1>
                })}

                <ProgressBar progress=progress />

                <div class=move || if locked() { "habit-list locked" } else { "habit-list" }>
                    {move || match state.with(|s| s.body(now())) {
                        DayBody::Empty => view! { <HabitEmpty /> }.into_any(),
                        DayBody::Checklist(rows) => rows
                            .into_iter()
                            .map(|row| {
                                let id = row.id;
                                view! {
                                    <Checkbox
                                        title=row.title
                                        checked=row.checked
                                        disabled=row.disabled
                                        on_toggle=Callback::new(move |_| on_toggle(id.clone()))
                                    />
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </div>

                <Show when=locked>
                    <p class="locked-notice">"Você não pode editar hábitos de uma data passada."</p>
                </Show>
            </Show>
        </div>
    }
}
