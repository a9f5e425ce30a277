//! Preorder Modal Component
//!
//! Shared add/edit form; the hidden serial input decides create vs update.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Modal;
use crate::context::use_notices;
use crate::controllers::PreorderBoard;
use crate::error::ActionError;
use crate::forms::PreorderForm;
use crate::models::DeliveryStatus;

fn form_input(
    label: &'static str,
    id: &'static str,
    input_type: &'static str,
    draft: RwSignal<PreorderForm>,
    get: fn(&PreorderForm) -> String,
    set: fn(&mut PreorderForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|form| set(form, value));
                }
            />
        </div>
    }
}

#[component]
pub fn PreorderModal(
    form: PreorderForm,
    board: StoredValue<PreorderBoard, LocalStorage>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let title = form.title();
    let draft = RwSignal::new(form);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = draft.get_untracked();
        let board = board.get_value();
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = board.save(&form).await;
            saving.set(false);
            match result {
                Ok(message) => {
                    notices.success(message);
                    on_saved.run(());
                }
                Err(ActionError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(e) => error.set(Some(format!("Failed to save preorder: {}", e))),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="preorder-form" on:submit=submit>
                <input
                    type="hidden"
                    id="preorder-serial"
                    prop:value=move || draft.with(|f| f.serial.map(|s| s.to_string()).unwrap_or_default())
                />
                {form_input("Seller *", "preorder-seller", "text", draft, |f| f.seller.clone(), |f, v| f.seller = v)}
                {form_input("Models *", "preorder-models", "text", draft, |f| f.models.clone(), |f, v| f.models = v)}
                {form_input("ETA", "preorder-eta", "month", draft, |f| f.eta.clone(), |f, v| f.eta = v)}
                {form_input(
                    "Total Price",
                    "preorder-total-price",
                    "number",
                    draft,
                    |f| f.total_price.clone(),
                    |f, v| f.total_price = v,
                )}
                {form_input(
                    "PO Amount",
                    "preorder-po-amount",
                    "number",
                    draft,
                    |f| f.po_amount.clone(),
                    |f, v| f.po_amount = v,
                )}
                {form_input(
                    "On Arrival Amount",
                    "preorder-on-arrival",
                    "number",
                    draft,
                    |f| f.on_arrival_amount.clone(),
                    |f, v| f.on_arrival_amount = v,
                )}
                <div class="form-group">
                    <label for="preorder-status">"Delivery Status"</label>
                    <select
                        id="preorder-status"
                        on:change=move |ev| {
                            let status = DeliveryStatus::from_label(&event_target_value(&ev));
                            draft.update(|f| f.delivery_status = status);
                        }
                    >
                        {DeliveryStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option
                                    value=status.as_str()
                                    prop:selected=move || draft.with(|f| f.delivery_status == status)
                                >
                                    {status.as_str()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                {move || error.get().map(|message| view! {
                    <div class="alert alert-error">{message}</div>
                })}
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Preorder" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
