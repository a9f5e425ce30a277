//! Edit Modal Component
//!
//! One text input per editable column; only changed columns are sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Modal;
use crate::context::use_notices;
use crate::controllers::TableBrowser;
use crate::error::ActionError;
use crate::forms::EditForm;
use crate::models::cell_text;
use crate::table::format_column_name;

#[component]
pub fn EditModal(
    form: EditForm,
    browser: StoredValue<TableBrowser, LocalStorage>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let inputs: Vec<_> = form
        .fields
        .fields()
        .iter()
        .map(|field| (field.clone(), RwSignal::new(field.original.clone())))
        .collect();
    let values = StoredValue::new(
        inputs
            .iter()
            .map(|(field, value)| (field.id.clone(), *value))
            .collect::<Vec<_>>(),
    );
    let title = format!("Edit Model #{}", cell_text(&form.serial));
    let form = StoredValue::new(form);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted: Vec<(String, String)> = values.with_value(|values| {
            values
                .iter()
                .map(|(id, value)| (id.clone(), value.get_untracked()))
                .collect()
        });
        let form = form.get_value();
        let browser = browser.get_value();
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = browser.save_edit(&form, &submitted).await;
            saving.set(false);
            match result {
                Ok(message) => {
                    notices.success(message);
                    on_saved.run(());
                }
                Err(ActionError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(e) => error.set(Some(format!("Failed to update model: {}", e))),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="edit-form" on:submit=submit>
                {inputs
                    .into_iter()
                    .map(|(field, value)| {
                        let id = field.id.clone();
                        view! {
                            <div class="form-group">
                                <label for=id.clone()>{format_column_name(&field.column)}</label>
                                <input
                                    type="text"
                                    id=id
                                    prop:value=move || value.get()
                                    on:input=move |ev| value.set(event_target_value(&ev))
                                />
                            </div>
                        }
                    })
                    .collect_view()}
                {move || error.get().map(|message| view! {
                    <div class="alert alert-error">{message}</div>
                })}
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
