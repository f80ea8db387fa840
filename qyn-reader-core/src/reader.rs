//! The chapter reader component and its render snapshot

use crate::config::ReaderContext;
use crate::format::format_content;
use crate::loader::{ChapterLoader, Commit, LoadOutcome, PendingLoad};
use crate::navigation::{Navigation, NavigationController};
use crate::route::Navigator;
use crate::service::ChapterService;
use crate::types::{
    Block, ChapterId, ChapterListing, DisplayPreferences, FontFamily, LoadState, Theme,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Reads one chapter at a time.
///
/// Combines the content loader, the navigation controller and the
/// session's display preferences. Preferences survive every load.
pub struct ChapterReader {
    loader: ChapterLoader,
    navigation: NavigationController,
    preferences: DisplayPreferences,
}

impl ChapterReader {
    pub fn new(
        service: Arc<dyn ChapterService>,
        navigator: Arc<dyn Navigator>,
        context: ReaderContext,
    ) -> Self {
        Self {
            loader: ChapterLoader::new(Arc::clone(&service), context),
            navigation: NavigationController::new(service, navigator),
            preferences: DisplayPreferences::default(),
        }
    }

    /// Start the session with the given preferences instead of the defaults
    pub fn with_preferences(mut self, preferences: DisplayPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn preferences(&self) -> &DisplayPreferences {
        &self.preferences
    }

    /// Load a chapter and wait for it
    pub async fn open(&mut self, id: ChapterId) -> &LoadState {
        self.loader.load(id).await
    }

    /// Start loading a chapter without waiting; see [`ChapterLoader::request`]
    pub fn begin_open(&mut self, id: ChapterId) -> PendingLoad {
        self.loader.request(id)
    }

    /// Apply a fetch started with [`begin_open`](Self::begin_open)
    pub fn finish_open(&mut self, outcome: LoadOutcome) -> Commit {
        self.loader.commit(outcome)
    }

    pub async fn go_next(&self) -> Navigation {
        self.navigation.go_next(self.loader.state()).await
    }

    pub async fn go_previous(&self) -> Navigation {
        self.navigation.go_previous(self.loader.state()).await
    }

    pub fn jump_to(&self, selected: &ChapterId) -> Navigation {
        self.navigation.jump_to(self.loader.state(), selected)
    }

    pub fn back_to_story(&self) -> Navigation {
        self.navigation.back_to_story(self.loader.state())
    }

    pub fn can_go_next(&self) -> bool {
        self.state().chapter().is_some_and(|c| c.has_next())
    }

    pub fn can_go_previous(&self) -> bool {
        self.state().chapter().is_some_and(|c| c.has_previous())
    }

    /// Options of the chapter selector: exactly the loaded chapter's list
    pub fn chapter_options(&self) -> &[ChapterListing] {
        self.state()
            .chapter()
            .map(|c| c.chapters_list.as_slice())
            .unwrap_or_default()
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.preferences.set_font_size(size);
        debug!(font_size = self.preferences.font_size, "Font size changed");
    }

    pub fn increase_font_size(&mut self) {
        self.preferences.increase_font_size();
        debug!(font_size = self.preferences.font_size, "Font size increased");
    }

    pub fn decrease_font_size(&mut self) {
        self.preferences.decrease_font_size();
        debug!(font_size = self.preferences.font_size, "Font size decreased");
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        debug!(%family, "Font family changed");
        self.preferences.set_font_family(family);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!(%theme, "Theme changed");
        self.preferences.set_theme(theme);
    }

    /// Snapshot of everything needed to draw the reader
    pub fn view(&self) -> ReaderView {
        match self.state() {
            LoadState::Loading => ReaderView::Loading,
            LoadState::Failed(message) => ReaderView::Failed {
                message: message.clone(),
            },
            LoadState::Loaded(chapter) => ReaderView::Chapter(ChapterView {
                id: chapter.id.clone(),
                title: chapter.title.clone(),
                story_title: chapter.story.title.clone(),
                author: chapter.story.author.clone(),
                word_count: chapter.word_count,
                views: chapter.views,
                can_go_previous: chapter.has_previous(),
                can_go_next: chapter.has_next(),
                options: chapter
                    .chapters_list
                    .iter()
                    .map(|entry| ChapterOption {
                        id: entry.id.clone(),
                        label: entry.label(),
                        selected: entry.id == chapter.id,
                    })
                    .collect(),
                blocks: format_content(chapter.content.as_deref()),
                preferences: self.preferences,
            }),
        }
    }
}

/// Render snapshot of the reader
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReaderView {
    Loading,
    Failed { message: String },
    Chapter(ChapterView),
}

/// A loaded chapter, ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterView {
    pub id: ChapterId,
    pub title: String,
    pub story_title: String,
    pub author: String,
    pub word_count: Option<u64>,
    pub views: Option<u64>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub options: Vec<ChapterOption>,
    pub blocks: Vec<Block>,
    pub preferences: DisplayPreferences,
}

/// One entry of the chapter selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterOption {
    pub id: ChapterId,
    pub label: String,
    pub selected: bool,
}
