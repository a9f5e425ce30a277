//! Notice Banner Component

use leptos::prelude::*;

use crate::context::use_notices;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = use_notices();

    view! {
        {move || notices.success.get().map(|message| view! {
            <div class="alert alert-success">{message}</div>
        })}
        {move || notices.error.get().map(|message| view! {
            <div class="alert alert-error">
                <span>{message}</span>
                <button class="alert-close" on:click=move |_| notices.clear_error()>"×"</button>
            </div>
        })}
    }
}
