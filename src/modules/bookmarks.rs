// Bookmark list - pure logic, no I/O.
// Ordered, deduplicated, append-only (the UI exposes no removal).

use url::Url;

#[derive(Debug, Default)]
pub struct BookmarkSet {
    urls: Vec<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a URL. Returns true if it was newly inserted, false if it was
    /// already bookmarked (order preserved, no duplicate created).
    pub fn add(&mut self, url: &str) -> bool {
        if self.urls.iter().any(|u| u == url) {
            return false;
        }
        self.urls.push(url.to_string());
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Short label for the bookmark bar: the hostname when the URL parses,
    /// the raw string otherwise.
    pub fn label(url: &str) -> String {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .unwrap_or_else(|| url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_deduplicates_and_keeps_order() {
        let mut bookmarks = BookmarkSet::new();
        assert!(bookmarks.add("https://a.com"));
        assert!(bookmarks.add("https://b.com"));
        assert!(!bookmarks.add("https://a.com"));

        assert_eq!(bookmarks.len(), 2);
        let urls: Vec<_> = bookmarks.iter().collect();
        assert_eq!(urls, ["https://a.com", "https://b.com"]);
    }

    #[test]
    fn contains_and_get() {
        let mut bookmarks = BookmarkSet::new();
        bookmarks.add("https://a.com");
        assert!(bookmarks.contains("https://a.com"));
        assert!(!bookmarks.contains("https://b.com"));
        assert_eq!(bookmarks.get(0), Some("https://a.com"));
        assert_eq!(bookmarks.get(1), None);
    }

    #[test]
    fn label_is_hostname_when_parseable() {
        assert_eq!(BookmarkSet::label("https://docs.rs/my-crate"), "docs.rs");
        assert_eq!(BookmarkSet::label("nonsense"), "nonsense");
    }
}
