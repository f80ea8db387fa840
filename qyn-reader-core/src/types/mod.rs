//! Core types shared by the loader, the navigation controller and the view

mod block;
mod chapter;
mod ids;
mod preferences;
mod state;

pub use block::Block;
pub use chapter::{Chapter, ChapterListing, StorySummary};
pub use ids::{ChapterId, ReaderId, StoryId};
pub use preferences::{
    DisplayPreferences, FontFamily, Theme, DEFAULT_FONT_SIZE, FONT_SIZE_STEP, MIN_FONT_SIZE,
};
pub use state::LoadState;
