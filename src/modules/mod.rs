// Module exports for pure logic
pub mod bookmarks; // Bookmark list
pub mod logger; // User-visible status log
pub mod session; // Root controller / state machine
