use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn BackButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button class="back-btn" title="Voltar" on:click=move |_| ctx.back()>"←"</button>
    }
}
