// Periscope Browser Library Entry Point
// This file exposes all modules so they can be imported by main.rs
// and tested independently.

// Core modules
pub mod fetcher;
pub mod history;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules (no I/O)
pub mod modules;

pub use fetcher::{FetchError, PageFetcher, ProxyFetcher};
pub use history::HistoryStack;
pub use modules::bookmarks::BookmarkSet;
pub use modules::logger::{LogEntry, LogKind, StatusLog};
pub use modules::session::{BrowserSession, PendingNavigation, INVALID_URL_MESSAGE};
pub use settings::Settings;
pub use state::{NavigationOutcome, Theme, ViewState};
