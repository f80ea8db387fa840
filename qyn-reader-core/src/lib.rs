//! QYN Reader Core Library
//!
//! This crate provides the chapter reader: a content loader that fetches a
//! chapter and keeps its load state consistent under overlapping requests,
//! a navigation controller that resolves next/previous/jump requests into
//! routes, session display preferences, and the formatter that turns raw
//! chapter text into paragraphs.

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod navigation;
pub mod reader;
pub mod route;
pub mod service;
pub mod types;

pub use config::{ReaderConfig, ReaderContext};
pub use error::{ReaderError, Result, ServiceError, CONTENT_UNAVAILABLE};
pub use format::format_content;
pub use loader::{ChapterLoader, Commit, LoadOutcome, LoadTicket, PendingLoad};
pub use navigation::{Navigation, NavigationController};
pub use reader::{ChapterOption, ChapterReader, ChapterView, ReaderView};
pub use route::{ChannelNavigator, Navigator, Route};
pub use service::{ChapterService, HttpChapterService, MemoryChapterService, Operation};
pub use types::{
    Block, Chapter, ChapterId, ChapterListing, DisplayPreferences, FontFamily, LoadState,
    ReaderId, StoryId, StorySummary, Theme, DEFAULT_FONT_SIZE, FONT_SIZE_STEP, MIN_FONT_SIZE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_creation() {
        let story = StorySummary::new(StoryId::parse("1").unwrap(), "Test Story", "Tester");
        let chapter = Chapter::new(ChapterId::parse("10").unwrap(), "Opening", story)
            .with_content("Hello\n\nWorld");
        assert_eq!(chapter.title, "Opening");
        assert_eq!(format_content(chapter.content.as_deref()).len(), 3);
    }

    #[test]
    fn test_font_size_constants_at_root() {
        let mut prefs = DisplayPreferences::default();
        assert_eq!(prefs.font_size, DEFAULT_FONT_SIZE);

        prefs.set_font_size(MIN_FONT_SIZE);
        prefs.increase_font_size();
        assert_eq!(prefs.font_size, MIN_FONT_SIZE + FONT_SIZE_STEP);
    }
}
