//! Checkbox Component
//!
//! Labelled checkbox row used by the day checklist and the weekday picker.

use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] title: String,
    checked: bool,
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let class = match (checked, disabled) {
        (true, true) => "checkbox checked disabled",
        (true, false) => "checkbox checked",
        (false, true) => "checkbox disabled",
        (false, false) => "checkbox",
    };

    view! {
        <label class=class>
            <input
                type="checkbox"
                prop:checked=checked
                disabled=disabled
                on:change=move |_| on_toggle.run(())
            />
            <span class="checkbox-title">{title}</span>
        </label>
    }
}
