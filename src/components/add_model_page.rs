//! Add Model Page Component
//!
//! Model name plus a series -> subseries cascade.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_client, use_notices};
use crate::controllers::{ModelDraft, RecordCreator};
use crate::error::ActionError;
use crate::models::DropdownOptions;

#[component]
pub fn AddModelPage() -> impl IntoView {
    let notices = use_notices();
    let creator = StoredValue::new_local(RecordCreator::new(use_client()));
    let options = RwSignal::new(DropdownOptions::default());
    let draft = RwSignal::new(ModelDraft::default());
    let submitting = RwSignal::new(false);

    // Options load once per page
    {
        let creator = creator.get_value();
        spawn_local(async move {
            match creator.load_options().await {
                Ok(loaded) => options.set(loaded),
                Err(e) => notices.error(format!("Failed to load dropdown options: {}", e)),
            }
        });
    }

    let choice = Memo::new(move |_| draft.with(|d| options.with(|o| d.subseries_choice(o))));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let creator = creator.get_value();
        notices.clear();
        submitting.set(true);
        spawn_local(async move {
            let result = creator.add_model(&current).await;
            submitting.set(false);
            match result {
                Ok(message) => {
                    notices.success(message);
                    draft.update(|d| d.reset());
                }
                Err(ActionError::Invalid(e)) => notices.error(e.to_string()),
                Err(e) => notices.error(format!("Failed to add model: {}", e)),
            }
        });
    };

    view! {
        <form class="add-model-form" on:submit=submit>
            <div class="form-group">
                <label for="model-name">"Model Name *"</label>
                <input
                    type="text"
                    id="model-name"
                    placeholder="e.g. Nissan Skyline GT-R"
                    prop:value=move || draft.with(|d| d.model_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.model_name = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="series">"Series *"</label>
                <select
                    id="series"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.select_series(value));
                    }
                >
                    <option value="" prop:selected=move || draft.with(|d| d.series.is_empty())>
                        "Select Series..."
                    </option>
                    {move || options
                        .with(|o| o.series_names())
                        .into_iter()
                        .map(|name| {
                            let current = name.clone();
                            let value = name.clone();
                            view! {
                                <option
                                    value=value
                                    prop:selected=move || draft.with(|d| d.series == current)
                                >
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="subseries">"Subseries *"</label>
                <select
                    id="subseries"
                    disabled=move || !choice.with(|c| c.enabled)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.subseries = value);
                    }
                >
                    <option value="" prop:selected=move || draft.with(|d| d.subseries.is_empty())>
                        {move || choice.with(|c| c.placeholder)}
                    </option>
                    {move || choice
                        .with(|c| c.options.clone())
                        .into_iter()
                        .map(|name| {
                            let current = name.clone();
                            let value = name.clone();
                            view! {
                                <option
                                    value=value
                                    prop:selected=move || draft.with(|d| d.subseries == current)
                                >
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| {
                        if let Err(e) = window().location().set_href("/") {
                            log::warn!("[AddModelPage] Navigation failed: {:?}", e);
                        }
                    }
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Adding..." } else { "Add Model" }}
                </button>
            </div>
        </form>
    }
}
