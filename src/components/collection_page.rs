//! Collection Page Component
//!
//! Searchable table of every record with edit, delete and CSV export.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::{DeleteModal, EditModal};
use crate::context::{use_client, use_notices};
use crate::controllers::{TableBrowser, TableState, TableStateStoreFields};
use crate::export::{download_csv, export_filename};
use crate::forms::EditForm;
use crate::models::{record_text, Record};
use crate::table::format_column_name;

#[component]
pub fn CollectionPage() -> impl IntoView {
    let notices = use_notices();
    let browser = StoredValue::new_local(TableBrowser::new(use_client()));
    let state = Store::new(TableState::default());
    let search_text = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<EditForm>);
    let deleting = RwSignal::new(None::<Record>);

    let reload = move || {
        let browser = browser.get_value();
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = browser.load().await;
            state.update(|s| s.finish_load(result));
        });
    };
    reload();

    let run_search = move || state.update(|s| s.search(search_text.get_untracked()));

    let clear_search = move |_: web_sys::MouseEvent| {
        search_text.set(String::new());
        state.update(|s| s.clear_search());
    };

    let export = move |_: web_sys::MouseEvent| {
        let Some(csv) = state.with_untracked(|s| s.export()) else {
            notices.error("No data to export");
            return;
        };
        let filename = export_filename(chrono::Local::now().date_naive());
        match download_csv(&csv, &filename) {
            Ok(()) => log::info!("[CollectionPage] Exported {}", filename),
            Err(e) => notices.error(format!("Failed to export CSV: {}", e)),
        }
    };

    let filtered = Memo::new(move |_| state.with(|s| s.filtered()));

    let table = move || {
        let rows = filtered.get();
        if rows.is_empty() {
            return view! { <div class="no-data">"No data found"</div> }.into_any();
        }
        let columns = state.with(|s| s.display_columns(&rows));
        let header = columns
            .iter()
            .map(|column| view! { <th>{format_column_name(column)}</th> })
            .collect_view();
        let body = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = columns
                    .iter()
                    .map(|column| view! { <td>{record_text(&row, column)}</td> })
                    .collect_view();
                let row_class = if i % 2 == 0 { "row-even" } else { "row-odd" };
                let edit_row = row.clone();
                view! {
                    <tr class=row_class>
                        {cells}
                        <td class="actions">
                            <button
                                class="btn btn-edit"
                                on:click=move |_| {
                                    let declared = state.columns().get_untracked();
                                    editing.set(Some(EditForm::open(&edit_row, &declared)));
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn-delete"
                                on:click=move |_| deleting.set(Some(row.clone()))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <table class="data-table">
                <thead>
                    <tr>{header}<th>"Actions"</th></tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="collection-page">
            <div class="toolbar">
                <div class="search-box">
                    <input
                        type="text"
                        id="search-input"
                        placeholder="Search models..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| {
                            search_text.set(event_target_value(&ev));
                            run_search();
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                run_search();
                            }
                        }
                    />
                    <Show when=move || !search_text.get().is_empty()>
                        <button class="btn btn-clear" on:click=clear_search>"Clear"</button>
                    </Show>
                </div>
                <button class="btn btn-secondary" on:click=move |_| reload()>"Refresh"</button>
                <button class="btn btn-primary" on:click=export>"Export CSV"</button>
            </div>

            <div class="counters">
                <span>"Total records: " {move || state.total_records().get()}</span>
                <span>"Showing: " {move || filtered.with(|rows| rows.len())}</span>
            </div>

            <Show when=move || state.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>
            {move || state.error().get().map(|message| view! {
                <div class="alert alert-error">{message}</div>
            })}

            {table}

            {move || editing.get().map(|form| view! {
                <EditModal
                    form=form
                    browser=browser
                    on_close=move |_| editing.set(None)
                    on_saved=move |_| {
                        editing.set(None);
                        reload();
                    }
                />
            })}
            {move || deleting.get().map(|record| view! {
                <DeleteModal
                    record=record
                    columns=state.columns().get_untracked()
                    browser=browser
                    on_close=move |_| deleting.set(None)
                    on_deleted=move |_| {
                        deleting.set(None);
                        reload();
                    }
                />
            })}
        </div>
    }
}
