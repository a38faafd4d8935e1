// Shared state types for the session engine.
// These are used by the session controller and the shell, and carry no I/O.

use serde::{Deserialize, Serialize};

/// What the content area is currently showing.
///
/// `Failed` intentionally renders the same placeholder as `Empty`: a failed
/// load ends with no content, not with a dedicated error page. The error
/// itself lives in the status log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewState {
    Empty,
    Loading,
    Loaded { html: String },
    Failed,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Rendered HTML, if any.
    pub fn html(&self) -> Option<&str> {
        match self {
            ViewState::Loaded { html } => Some(html.as_str()),
            _ => None,
        }
    }
}

/// UI-wide color scheme. Toggled, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Global style class the rendering layer applies. The renderer reads
    /// this derived value; nothing mutates styling behind its back.
    pub fn style_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

/// Result of one fetch, handed from the fetch edge back to the controller.
/// Transient: applied to the session once, never stored.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationOutcome {
    Loaded(String),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn style_class_matches_mode() {
        assert_eq!(Theme::Dark.style_class(), "theme-dark");
        assert_eq!(Theme::Light.style_class(), "theme-light");
    }

    #[test]
    fn view_state_html_accessor() {
        let loaded = ViewState::Loaded {
            html: "<p>hi</p>".to_string(),
        };
        assert_eq!(loaded.html(), Some("<p>hi</p>"));
        assert_eq!(ViewState::Empty.html(), None);
        assert_eq!(ViewState::Failed.html(), None);
        assert!(ViewState::Loading.is_loading());
    }
}
