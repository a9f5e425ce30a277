//! Die-cast Collection App
//!
//! Page selection and the shared sidebar layout.

use leptos::prelude::*;

use crate::components::{AddFieldPage, AddModelPage, CollectionPage, NoticeBanner, PreordersPage, Sidebar};
use crate::context::NoticeContext;

/// One page per served path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Collection,
    AddModel,
    AddField,
    Preorders,
}

impl Page {
    /// Sidebar order
    pub const NAV: [Page; 4] = [Self::Collection, Self::AddModel, Self::AddField, Self::Preorders];

    /// Unknown paths fall back to the collection
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/add-model" | "/add" => Self::AddModel,
            "/add-field" => Self::AddField,
            "/preorders" => Self::Preorders,
            _ => Self::Collection,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Self::Collection => "/",
            Self::AddModel => "/add-model",
            Self::AddField => "/add-field",
            Self::Preorders => "/preorders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Collection => "Collection",
            Self::AddModel => "Add Model",
            Self::AddField => "Add Field",
            Self::Preorders => "Preorders",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Collection => "🏎",
            Self::AddModel => "➕",
            Self::AddField => "🧩",
            Self::Preorders => "📦",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Collection => "Die-cast Collection",
            Self::AddModel => "Add New Model",
            Self::AddField => "Add New Field",
            Self::Preorders => "Preorders",
        }
    }
}

#[component]
pub fn App(page: Page) -> impl IntoView {
    provide_context(NoticeContext::new());

    let content = match page {
        Page::Collection => view! { <CollectionPage /> }.into_any(),
        Page::AddModel => view! { <AddModelPage /> }.into_any(),
        Page::AddField => view! { <AddFieldPage /> }.into_any(),
        Page::Preorders => view! { <PreordersPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <Sidebar current=page />
            <main class="main-content">
                <h1 class="page-title">{page.title()}</h1>
                <NoticeBanner />
                {content}
            </main>
        </div>
    }
}
