// Root controller - owns every piece of session state and drives the
// Empty -> Loading -> Loaded | Failed state machine in response to the
// user's actions (navigate, back, forward, bookmark, toggle theme).
//
// Navigation is split into begin/finish so the fetch can run anywhere:
// `begin_navigation` validates and enters Loading, `finish_navigation`
// applies the outcome. Each begin bumps a generation counter and the
// outcome carries the generation it was started under; an outcome from a
// superseded navigation is dropped instead of overwriting newer state.
// Stale results are ignored, never cancelled.

use crate::fetcher::PageFetcher;
use crate::history::HistoryStack;
use crate::modules::bookmarks::BookmarkSet;
use crate::modules::logger::StatusLog;
use crate::settings::Settings;
use crate::state::{NavigationOutcome, Theme, ViewState};

pub const INVALID_URL_MESSAGE: &str = "❌ Please enter a valid http(s) URL";

/// Handle for a navigation whose fetch has not completed yet.
#[derive(Debug)]
pub struct PendingNavigation {
    generation: u64,
    url: String,
    record_history: bool,
}

impl PendingNavigation {
    /// Target URL to fetch.
    pub fn url(&self) -> &str {
        &self.url
    }
}

pub struct BrowserSession {
    fetcher: Box<dyn PageFetcher>,
    log: StatusLog,
    history: HistoryStack,
    bookmarks: BookmarkSet,
    theme: Theme,
    view: ViewState,
    current_url: Option<String>,
    generation: u64,
}

impl BrowserSession {
    pub fn new(settings: &Settings, fetcher: Box<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            log: StatusLog::new(),
            history: HistoryStack::new(),
            bookmarks: BookmarkSet::new(),
            theme: settings.default_theme,
            view: ViewState::Empty,
            current_url: None,
            generation: 0,
        }
    }

    /// Navigate to `url`, recording it in history. Runs the fetch inline and
    /// applies the outcome before returning.
    pub fn navigate(&mut self, url: &str) {
        self.navigate_with(url, true);
    }

    fn navigate_with(&mut self, url: &str, record_history: bool) {
        let Some(pending) = self.begin_navigation(url, record_history) else {
            return;
        };
        let outcome = match self.fetcher.fetch(pending.url()) {
            Ok(html) => NavigationOutcome::Loaded(html),
            Err(e) => NavigationOutcome::Failed(e.to_string()),
        };
        self.finish_navigation(pending, outcome);
    }

    /// Validate and enter Loading. Returns None (leaving all state except
    /// the log untouched) when the URL fails the http(s) prefix check.
    pub fn begin_navigation(&mut self, url: &str, record_history: bool) -> Option<PendingNavigation> {
        if !url.starts_with("http") {
            self.log.push_error(INVALID_URL_MESSAGE);
            return None;
        }

        self.log.clear();
        self.view = ViewState::Loading;
        self.log.push_info(format!("🔍 Fetching {}", url));
        self.generation += 1;

        Some(PendingNavigation {
            generation: self.generation,
            url: url.to_string(),
            record_history,
        })
    }

    /// Apply a fetch outcome. Outcomes from a superseded navigation are
    /// dropped without touching any state. The view always leaves Loading
    /// for a current-generation outcome, success or failure.
    pub fn finish_navigation(&mut self, pending: PendingNavigation, outcome: NavigationOutcome) {
        if pending.generation != self.generation {
            log::debug!(
                "[Session] Dropping stale fetch result for {} (generation {} < {})",
                pending.url,
                pending.generation,
                self.generation
            );
            return;
        }

        match outcome {
            NavigationOutcome::Loaded(html) => {
                self.view = ViewState::Loaded { html };
                self.log.push_info("✅ Site loaded successfully.");
                self.current_url = Some(pending.url.clone());
                if pending.record_history {
                    self.history.visit(&pending.url);
                }
            }
            NavigationOutcome::Failed(message) => {
                self.log.push_error(format!("🚨 Error loading site: {}", message));
                self.view = ViewState::Failed;
            }
        }
    }

    /// Step back in history and re-load that page. The cursor move is the
    /// only history mutation; the re-navigation does not record.
    pub fn go_back(&mut self) {
        if let Some(url) = self.history.back() {
            self.navigate_with(&url, false);
        }
    }

    /// Step forward in history and re-load that page.
    pub fn go_forward(&mut self) {
        if let Some(url) = self.history.forward() {
            self.navigate_with(&url, false);
        }
    }

    /// Bookmark the current page. Silent no-op when nothing is loaded or
    /// the URL is already bookmarked.
    pub fn bookmark_current(&mut self) {
        let Some(url) = self.current_url.clone() else {
            return;
        };
        if self.bookmarks.add(&url) {
            self.log.push_info("🔖 Bookmarked!");
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // --- Read surface for the rendering layer ---

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn status_log(&self) -> &StatusLog {
        &self.log
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Full session state as JSON, for auditing (and the shell's `state`
    /// command).
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "view": self.view,
            "theme": self.theme,
            "currentUrl": self.current_url,
            "history": {
                "entries": self.history.entries(),
                "cursor": self.history.cursor(),
            },
            "bookmarks": self.bookmarks.iter().collect::<Vec<_>>(),
            "log": self.log.entries(),
        })
    }
}
