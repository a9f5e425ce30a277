//! Application Context
//!
//! Shared state provided via Leptos Context API: the backend client and the
//! page-level notice banners.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpClient;
use crate::config::SUCCESS_BANNER_MS;

/// Backend client shared by every page
#[derive(Clone, Copy)]
pub struct ClientContext(StoredValue<Rc<dyn HttpClient>, LocalStorage>);

impl ClientContext {
    pub fn new(client: Rc<dyn HttpClient>) -> Self {
        Self(StoredValue::new_local(client))
    }

    pub fn client(&self) -> Rc<dyn HttpClient> {
        self.0.get_value()
    }
}

pub fn use_client() -> Rc<dyn HttpClient> {
    expect_context::<ClientContext>().client()
}

/// Success and error banners
#[derive(Clone, Copy)]
pub struct NoticeContext {
    /// Success banner text - read
    pub success: ReadSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
    /// Error banner text - read
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    /// Bumped per success banner so only the latest one auto-hides
    shown: StoredValue<u64>,
}

impl NoticeContext {
    pub fn new() -> Self {
        let (success, set_success) = signal(None);
        let (error, set_error) = signal(None);
        Self { success, set_success, error, set_error, shown: StoredValue::new(0) }
    }

    /// Show a success banner that hides itself after a few seconds
    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("[Notice] {}", message);
        self.set_error.set(None);
        self.set_success.set(Some(message));

        self.shown.update_value(|n| *n += 1);
        let ticket = self.shown.get_value();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
            if this.shown.get_value() == ticket {
                this.set_success.set(None);
            }
        });
    }

    /// Show an error banner until dismissed or replaced
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("[Notice] {}", message);
        self.set_success.set(None);
        self.set_error.set(Some(message));
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }

    pub fn clear(&self) {
        self.set_success.set(None);
        self.set_error.set(None);
    }
}

pub fn use_notices() -> NoticeContext {
    expect_context::<NoticeContext>()
}
