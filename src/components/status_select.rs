//! Inline Delivery Status Selector
//!
//! Saves on change, locks while the request is in flight and snaps back
//! to the saved value when it fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_notices;
use crate::controllers::{PreorderBoard, StatusControl};
use crate::models::{DeliveryStatus, Preorder};

#[component]
pub fn StatusSelect(
    preorder: Preorder,
    board: StoredValue<PreorderBoard, LocalStorage>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let control = RwSignal::new(StatusControl::new(preorder.delivery_status));
    let preorder = StoredValue::new(preorder);

    let on_change = move |ev: web_sys::Event| {
        let next = DeliveryStatus::from_label(&event_target_value(&ev));
        let mut started = false;
        control.update(|c| started = c.begin(next));
        if !started {
            return;
        }
        let board = board.get_value();
        let preorder = preorder.get_value();
        spawn_local(async move {
            let result = board.change_status(&preorder, next).await;
            control.update(|c| c.settle(result.is_ok()));
            match result {
                Ok(message) => {
                    notices.success(message);
                    on_changed.run(());
                }
                Err(e) => notices.error(format!("Failed to update status: {}", e)),
            }
        });
    };

    view! {
        <select
            class=move || format!("status-select {}", control.with(|c| c.shown.css_class()))
            disabled=move || control.with(|c| c.busy)
            on:change=on_change
        >
            {DeliveryStatus::ALL
                .into_iter()
                .map(|status| view! {
                    <option
                        value=status.as_str()
                        prop:selected=move || control.with(|c| c.shown == status)
                    >
                        {status.as_str()}
                    </option>
                })
                .collect_view()}
        </select>
    }
}
