//! Sidebar Component
//!
//! Page links plus a collapse toggle that survives reloads.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::Page;
use crate::controllers::{BrowserStorage, SidebarController};

#[component]
pub fn Sidebar(current: Page) -> impl IntoView {
    let controller = StoredValue::new_local(SidebarController::new(Rc::new(BrowserStorage)));
    let collapsed = RwSignal::new(controller.with_value(|c| c.is_collapsed()));

    view! {
        <nav class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <button
                class="sidebar-toggle"
                title="Toggle sidebar"
                on:click=move |_| collapsed.set(controller.with_value(|c| c.toggle()))
            >
                "☰"
            </button>
            <ul class="sidebar-links">
                {Page::NAV
                    .into_iter()
                    .map(|page| {
                        let class = if page == current { "sidebar-link active" } else { "sidebar-link" };
                        view! {
                            <li>
                                <a href=page.href() class=class>
                                    <span class="sidebar-icon">{page.icon()}</span>
                                    <span class="sidebar-label">{page.label()}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
