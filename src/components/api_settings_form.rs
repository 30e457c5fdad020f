//! API Settings Form Component
//!
//! Edit the base URL of the remote habits API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::BackButton;
use crate::notify::{AlertNotifier, Notice, Notifier};

#[component]
pub fn ApiSettingsForm() -> impl IntoView {
    let (base_url, set_base_url) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Load current config
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_api_config().await {
                Ok(config) => {
                    let _ = set_base_url.try_set(config.base_url);
                }
                Err(e) => log::warn!("could not read API config: {}", e),
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = base_url.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            match commands::save_api_config(&url).await {
                Ok(config) => {
                    let _ = set_base_url.try_set(config.base_url);
                    AlertNotifier.notify(&Notice::config_saved());
                }
                Err(e) => {
                    log::error!("saving API config failed: {}", e);
                    AlertNotifier.notify(&Notice::config_failed(&e));
                }
            }
            let _ = set_saving.try_set(false);
        });
    };

    view! {
        <form class="screen settings-form" on:submit=save>
            <BackButton />

            <h1>"Configurações"</h1>

            <label class="field-label" for="api-url">"Endereço da API"</label>
            <input
                id="api-url"
                type="url"
                placeholder="http://localhost:3333"
                prop:value=move || base_url.get()
                on:input=move |ev| set_base_url.set(event_target_value(&ev))
            />

            <button type="submit" class="confirm-btn" disabled=move || saving.get()>
                "Salvar"
            </button>
        </form>
    }
}
