//! UI Components
//!
//! Leptos views over the page controllers.

mod add_field_page;
mod add_model_page;
mod banner;
mod collection_page;
mod delete_modal;
mod edit_modal;
mod modal;
mod preorder_modal;
mod preorders_page;
mod sidebar;
mod statistics_panel;
mod status_select;

pub use add_field_page::AddFieldPage;
pub use add_model_page::AddModelPage;
pub use banner::NoticeBanner;
pub use collection_page::CollectionPage;
pub use delete_modal::DeleteModal;
pub use edit_modal::EditModal;
pub use modal::Modal;
pub use preorder_modal::PreorderModal;
pub use preorders_page::PreordersPage;
pub use sidebar::Sidebar;
pub use statistics_panel::StatisticsPanel;
pub use status_select::StatusSelect;
