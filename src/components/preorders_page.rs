//! Preorders Page Component
//!
//! Statistics cards above the preorder table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{PreorderModal, StatisticsPanel, StatusSelect};
use crate::context::{use_client, use_notices};
use crate::controllers::{DeleteConsent, PreorderBoard};
use crate::error::ActionError;
use crate::format::{format_eta, money_cell, text_cell};
use crate::forms::{PreorderForm, DELETE_CONFIRMATION};
use crate::models::{Preorder, Statistics};

#[component]
pub fn PreordersPage() -> impl IntoView {
    let notices = use_notices();
    let board = StoredValue::new_local(PreorderBoard::new(use_client()));
    let preorders = RwSignal::new(Vec::<Preorder>::new());
    let statistics = RwSignal::new(Statistics::zeroed());
    let loading = RwSignal::new(false);
    let list_error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<PreorderForm>);

    let reload = move || {
        let board = board.get_value();
        loading.set(true);
        spawn_local(async move {
            let snapshot = board.load().await;
            loading.set(false);
            statistics.set(snapshot.statistics);
            match snapshot.preorders {
                Ok(list) => {
                    list_error.set(None);
                    preorders.set(list);
                }
                Err(e) => list_error.set(Some(format!("Failed to load preorders: {}", e))),
            }
        });
    };
    reload();

    let delete = move |serial: i64, question: String| {
        let window = window();
        let confirmed = window.confirm_with_message(&question).unwrap_or(false);
        let typed = if confirmed {
            window
                .prompt_with_message(&format!("Type {} to confirm", DELETE_CONFIRMATION))
                .ok()
                .flatten()
        } else {
            None
        };
        let board = board.get_value();
        spawn_local(async move {
            let consent = if confirmed {
                DeleteConsent::Typed(typed.as_deref())
            } else {
                DeleteConsent::Declined
            };
            match board.delete(serial, consent).await {
                Ok(Some(message)) => {
                    notices.success(message);
                    reload();
                }
                Ok(None) => log::debug!("[PreordersPage] Delete of {} cancelled", serial),
                Err(ActionError::Invalid(e)) => notices.error(e.to_string()),
                Err(e) => notices.error(format!("Failed to delete preorder: {}", e)),
            }
        });
    };

    let table = move || {
        let rows = preorders.get();
        if rows.is_empty() {
            return view! {
                <div class="no-data">"No preorders found. Click \"Add Preorder\" to get started."</div>
            }
            .into_any();
        }
        let body = rows
            .into_iter()
            .map(|preorder| {
                let serial_label = preorder.serial_label();
                let seller = text_cell(preorder.seller.as_deref());
                let models = text_cell(preorder.models.as_deref());
                let eta = format_eta(preorder.eta.as_deref());
                let total_price = money_cell(preorder.total_price);
                let po_amount = money_cell(preorder.po_amount);
                let on_arrival = money_cell(preorder.on_arrival_amount);
                let controls = match (preorder.serial, PreorderForm::edit(&preorder)) {
                    (Some(serial), Some(form)) => {
                        let question = PreorderBoard::delete_question(&preorder);
                        view! {
                            <td>
                                <StatusSelect preorder=preorder board=board on_changed=move |_| reload() />
                            </td>
                            <td class="actions">
                                <button class="btn btn-edit" on:click=move |_| editing.set(Some(form.clone()))>
                                    "Edit"
                                </button>
                                <button class="btn btn-delete" on:click=move |_| delete(serial, question.clone())>
                                    "Delete"
                                </button>
                            </td>
                        }
                        .into_any()
                    }
                    _ => {
                        let status = preorder.delivery_status;
                        let class = format!("status-badge {}", status.css_class());
                        view! {
                            <td><span class=class>{status.as_str()}</span></td>
                            <td class="actions"></td>
                        }
                        .into_any()
                    }
                };
                view! {
                    <tr>
                        <td>{serial_label}</td>
                        <td>{seller}</td>
                        <td>{models}</td>
                        <td>{eta}</td>
                        <td>{total_price}</td>
                        <td>{po_amount}</td>
                        <td>{on_arrival}</td>
                        {controls}
                    </tr>
                }
            })
            .collect_view();

        view! {
            <table class="data-table preorders-table">
                <thead>
                    <tr>
                        <th>"S.No"</th>
                        <th>"Seller"</th>
                        <th>"Models"</th>
                        <th>"ETA"</th>
                        <th>"Total Price"</th>
                        <th>"PO Amount"</th>
                        <th>"On Arrival"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="preorders-page">
            <div class="toolbar">
                <button class="btn btn-primary" on:click=move |_| editing.set(Some(PreorderForm::create()))>
                    "Add Preorder"
                </button>
                <button class="btn btn-secondary" on:click=move |_| reload()>"Refresh"</button>
            </div>

            <StatisticsPanel statistics=statistics />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            {move || list_error.get().map(|message| view! {
                <div class="alert alert-error">{message}</div>
            })}

            {table}

            {move || editing.get().map(|form| view! {
                <PreorderModal
                    form=form
                    board=board
                    on_close=move |_| editing.set(None)
                    on_saved=move |_| {
                        editing.set(None);
                        reload();
                    }
                />
            })}
        </div>
    }
}
