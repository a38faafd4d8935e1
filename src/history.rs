//! Session history: an ordered list of visited URLs with a cursor.
//!
//! Classic browser semantics: visiting a new URL while the cursor is not at
//! the tail discards everything after the cursor (branch truncation), while
//! `back`/`forward` only move the cursor and never truncate.

#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to `url`. Truncates forward entries first if the
    /// cursor is not at the tail.
    pub fn visit(&mut self, url: &str) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(url.to_string());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Move the cursor one step back. Returns the URL now under the cursor,
    /// or None at the start of history. Never truncates.
    pub fn back(&mut self) -> Option<String> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        Some(self.entries[cursor - 1].clone())
    }

    /// Move the cursor one step forward. Returns the URL now under the
    /// cursor, or None at the tail. Never truncates.
    pub fn forward(&mut self) -> Option<String> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        Some(self.entries[cursor + 1].clone())
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// URL under the cursor, if any.
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|c| self.entries[c].as_str())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stack_of(urls: &[&str]) -> HistoryStack {
        let mut stack = HistoryStack::new();
        for url in urls {
            stack.visit(url);
        }
        stack
    }

    #[test]
    fn starts_empty() {
        let stack = HistoryStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), None);
        assert_eq!(stack.current(), None);
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn visit_appends_and_moves_cursor_to_tail() {
        let stack = stack_of(&["https://a.com", "https://b.com"]);
        assert_eq!(stack.entries(), &["https://a.com", "https://b.com"]);
        assert_eq!(stack.cursor(), Some(1));
        assert_eq!(stack.current(), Some("https://b.com"));
    }

    #[test]
    fn back_at_start_is_noop() {
        let mut stack = stack_of(&["https://a.com"]);
        assert_eq!(stack.back(), None);
        assert_eq!(stack.cursor(), Some(0));
    }

    #[test]
    fn forward_at_tail_is_noop() {
        let mut stack = stack_of(&["https://a.com", "https://b.com"]);
        assert_eq!(stack.forward(), None);
        assert_eq!(stack.cursor(), Some(1));
    }

    #[test]
    fn back_then_forward_replays_without_truncating() {
        let mut stack = stack_of(&["https://a.com", "https://b.com", "https://c.com"]);

        assert_eq!(stack.back(), Some("https://b.com".to_string()));
        assert_eq!(stack.back(), Some("https://a.com".to_string()));
        assert_eq!(stack.forward(), Some("https://b.com".to_string()));

        // Full list untouched by cursor movement.
        assert_eq!(
            stack.entries(),
            &["https://a.com", "https://b.com", "https://c.com"]
        );
    }

    #[test]
    fn visit_from_non_tail_truncates_forward_entries() {
        let mut stack = stack_of(&["https://a.com", "https://b.com", "https://c.com"]);
        stack.back();
        stack.visit("https://d.com");

        assert_eq!(
            stack.entries(),
            &["https://a.com", "https://b.com", "https://d.com"]
        );
        assert_eq!(stack.cursor(), Some(2));
        assert!(!stack.can_go_forward());
    }

    #[rstest]
    #[case(&[], false, false)]
    #[case(&["https://a.com"], false, false)]
    #[case(&["https://a.com", "https://b.com"], true, false)]
    fn affordances_at_tail(
        #[case] urls: &[&str],
        #[case] can_back: bool,
        #[case] can_forward: bool,
    ) {
        let stack = stack_of(urls);
        assert_eq!(stack.can_go_back(), can_back);
        assert_eq!(stack.can_go_forward(), can_forward);
    }

    #[test]
    fn affordances_after_going_back() {
        let mut stack = stack_of(&["https://a.com", "https://b.com"]);
        stack.back();
        assert!(!stack.can_go_back());
        assert!(stack.can_go_forward());
    }
}
