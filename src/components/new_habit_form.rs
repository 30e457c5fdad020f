//! New Habit Form Component
//!
//! Title input, weekday picker and confirm button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BackButton, Checkbox};
use crate::notify::AlertNotifier;
use crate::screens::new_habit::{submit_habit, HabitDraft};
use crate::screens::WEEK_DAYS;
use crate::service::TauriHabitService;

#[component]
pub fn NewHabitForm() -> impl IntoView {
    let draft = RwSignal::new(HabitDraft::default());
    let submitting = RwSignal::new(false);

    let create_habit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        submitting.set(true);

        spawn_local(async move {
            let outcome = submit_habit(&TauriHabitService, &AlertNotifier, &current).await;
            let _ = draft.try_update(|d| d.apply_submit(&outcome));
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <form class="screen new-habit-form" on:submit=create_habit>
            <BackButton />

            <h1>"Criar hábito"</h1>

            <label class="field-label" for="habit-title">"Qual seu comprometimento?"</label>
            <input
                id="habit-title"
                type="text"
                placeholder="Exercícios, dormir bem, etc..."
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.set_title(value));
                }
            />

            <p class="field-label">"Qual a recorrência?"</p>
            <div class="weekday-list">
                {WEEK_DAYS.iter().enumerate().map(|(index, label)| {
                    let index = index as u8;
                    let label = *label;
                    view! {
                        {move || view! {
                            <Checkbox
                                title=label
                                checked=draft.with(|d| d.has_weekday(index))
                                on_toggle=Callback::new(move |_| draft.update(|d| d.toggle_weekday(index)))
                            />
                        }}
                    }
                }).collect_view()}
            </div>

            <button type="submit" class="confirm-btn" disabled=move || submitting.get()>
                "✓ Confirmar"
            </button>
        </form>
    }
}
