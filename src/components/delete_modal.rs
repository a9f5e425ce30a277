//! Delete Modal Component
//!
//! Summarizes the record and waits for the literal `DELETE`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Modal;
use crate::context::use_notices;
use crate::controllers::TableBrowser;
use crate::error::ActionError;
use crate::forms::DELETE_CONFIRMATION;
use crate::models::Record;
use crate::table::delete_summary;

#[component]
pub fn DeleteModal(
    record: Record,
    columns: Vec<String>,
    browser: StoredValue<TableBrowser, LocalStorage>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_deleted: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let summary = delete_summary(&record, &columns);
    let record = StoredValue::new(record);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let typed = confirmation.get_untracked();
        let record = record.get_value();
        let browser = browser.get_value();
        error.set(None);
        deleting.set(true);
        spawn_local(async move {
            let result = browser.delete(&record, &typed).await;
            deleting.set(false);
            match result {
                Ok(message) => {
                    notices.success(message);
                    on_deleted.run(());
                }
                Err(ActionError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(e) => error.set(Some(format!("Failed to delete model: {}", e))),
            }
        });
    };

    view! {
        <Modal title="Delete Model" on_close=on_close>
            <p class="delete-warning">"This permanently removes the following model:"</p>
            <dl class="delete-summary">
                {summary
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()}
            </dl>
            <form class="delete-form" on:submit=submit>
                <label for="delete-confirmation">
                    "Type " <strong>{DELETE_CONFIRMATION}</strong> " to confirm"
                </label>
                <input
                    type="text"
                    id="delete-confirmation"
                    autocomplete="off"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! {
                    <div class="alert alert-error">{message}</div>
                })}
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-danger" disabled=move || deleting.get()>
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
