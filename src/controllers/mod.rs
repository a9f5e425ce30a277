//! Page Controllers
//!
//! One controller per page. Each is built with an injected `HttpClient`
//! (or `KeyValueStore`) and never touches the DOM; components own the
//! signals and drive these types.

mod preorder_board;
mod record_creator;
mod sidebar;
mod table_browser;

pub use preorder_board::{DeleteConsent, PreorderBoard, StatusControl};
pub use record_creator::{ModelDraft, RecordCreator};
pub use sidebar::{BrowserStorage, SidebarController};
pub use table_browser::{TableBrowser, TableState, TableStateStoreFields};
