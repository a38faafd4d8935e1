use serde::{Deserialize, Serialize};

use crate::state::Theme;

/// Session settings. In-memory only: the browser deliberately has no config
/// file and nothing survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// CORS proxy endpoint. The target URL is passed as the `quest` query
    /// parameter, URL-encoded.
    pub proxy_base: String,
    pub default_theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proxy_base: "https://api.codetabs.com/v1/proxy".to_string(),
            default_theme: Theme::Dark,
        }
    }
}

impl Settings {
    /// Build the full proxy request URL for a target page.
    pub fn proxy_url(&self, target: &str) -> String {
        let q = urlencoding::encode(target);
        format!("{}?quest={}", self.proxy_base, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_url_encodes_target() {
        let settings = Settings::default();
        assert_eq!(
            settings.proxy_url("https://example.com/a b?x=1&y=2"),
            "https://api.codetabs.com/v1/proxy?quest=https%3A%2F%2Fexample.com%2Fa%20b%3Fx%3D1%26y%3D2"
        );
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.proxy_base, "https://api.codetabs.com/v1/proxy");
        assert_eq!(settings.default_theme, Theme::Dark);
    }
}
