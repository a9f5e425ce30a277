//! Die-cast Collection Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controllers;
mod error;
mod export;
mod format;
mod forms;
mod models;
mod table;

use std::rc::Rc;

use app::{App, Page};
use leptos::prelude::*;

use crate::api::{FetchClient, HttpClient};
use crate::context::ClientContext;

/// Print the buffered log tail before the usual panic report
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let tail = console_logger::recent_lines();
        if !tail.is_empty() {
            web_sys::console::error_1(&format!("Last {} log lines:\n{}", tail.len(), tail.join("\n")).into());
        }
        console_error_panic_hook::hook(info);
    }));
}

fn main() {
    install_panic_hook();
    if let Err(e) = console_logger::init_logger(config::log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    let path = window().location().pathname().unwrap_or_default();
    let page = Page::from_path(&path);
    log::info!("[main] {} -> {:?}", path, page);

    let client: Rc<dyn HttpClient> = Rc::new(FetchClient::default());
    mount_to_body(move || {
        provide_context(ClientContext::new(client));
        view! { <App page=page /> }
    });
}
