//! Add Field Page Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{FIELD_NAME_MAX_LEN, FIELD_RELOAD_DELAY_MS};
use crate::context::{use_client, use_notices};
use crate::controllers::RecordCreator;
use crate::error::ActionError;

#[component]
pub fn AddFieldPage() -> impl IntoView {
    let notices = use_notices();
    let creator = StoredValue::new_local(RecordCreator::new(use_client()));
    let field_name = RwSignal::new(String::new());
    let fields = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let load_fields = move || {
        let creator = creator.get_value();
        spawn_local(async move {
            match creator.current_fields().await {
                Ok(list) => fields.set(list),
                Err(e) => log::warn!("[AddFieldPage] Failed to load current fields: {}", e),
            }
        });
    };
    load_fields();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = field_name.get_untracked();
        let creator = creator.get_value();
        notices.clear();
        submitting.set(true);
        spawn_local(async move {
            let result = creator.add_field(&name).await;
            submitting.set(false);
            match result {
                Ok(message) => {
                    notices.success(message);
                    field_name.set(String::new());
                    TimeoutFuture::new(FIELD_RELOAD_DELAY_MS).await;
                    load_fields();
                }
                Err(ActionError::Invalid(e)) => notices.error(e.to_string()),
                Err(e) => notices.error(format!("Failed to add field: {}", e)),
            }
        });
    };

    view! {
        <form class="add-field-form" on:submit=submit>
            <div class="form-group">
                <label for="field-name">"Field Name *"</label>
                <input
                    type="text"
                    id="field-name"
                    maxlength=FIELD_NAME_MAX_LEN.to_string()
                    placeholder="e.g. Purchase Date"
                    prop:value=move || field_name.get()
                    on:input=move |ev| field_name.set(event_target_value(&ev))
                />
                <small class="form-hint">
                    {format!("Up to {} characters. Not allowed: / \\ ? * [ ] : ;", FIELD_NAME_MAX_LEN)}
                </small>
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Adding..." } else { "Add Field" }}
            </button>
        </form>

        <section class="current-fields">
            <h2>"Current Fields"</h2>
            {move || {
                let list = fields.get();
                if list.is_empty() {
                    view! { <p class="no-data">"No fields found"</p> }.into_any()
                } else {
                    view! {
                        <ul class="field-list">
                            {list.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
