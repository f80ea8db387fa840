//! Navigation controller: turns next/previous/jump requests into routes

use crate::route::{Navigator, Route};
use crate::service::ChapterService;
use crate::types::{ChapterId, LoadState};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The navigator was asked to show this route
    Navigated(Route),

    /// No chapter is loaded
    NotLoaded,

    /// The loaded chapter has no adjacency field in that direction
    Disabled,

    /// The service reports no chapter in that direction
    NoChapter,

    /// The adjacency lookup failed; the current chapter stays displayed
    LookupFailed,

    /// The selected id is not in the loaded chapter's list
    NotListed,
}

impl Navigation {
    pub fn route(&self) -> Option<&Route> {
        match self {
            Navigation::Navigated(route) => Some(route),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }
}

/// Resolves navigation against the currently loaded chapter
pub struct NavigationController {
    service: Arc<dyn ChapterService>,
    navigator: Arc<dyn Navigator>,
}

impl NavigationController {
    pub fn new(service: Arc<dyn ChapterService>, navigator: Arc<dyn Navigator>) -> Self {
        Self { service, navigator }
    }

    /// Go to the chapter after the loaded one, as reported by the service
    pub async fn go_next(&self, state: &LoadState) -> Navigation {
        self.step(state, Direction::Next).await
    }

    /// Go to the chapter before the loaded one, as reported by the service
    pub async fn go_previous(&self, state: &LoadState) -> Navigation {
        self.step(state, Direction::Previous).await
    }

    async fn step(&self, state: &LoadState, direction: Direction) -> Navigation {
        let Some(chapter) = state.chapter() else {
            debug!(direction = direction.name(), "No chapter loaded, ignoring");
            return Navigation::NotLoaded;
        };

        let enabled = match direction {
            Direction::Next => chapter.has_next(),
            Direction::Previous => chapter.has_previous(),
        };
        if !enabled {
            debug!(chapter_id = %chapter.id, direction = direction.name(), "Navigation disabled");
            return Navigation::Disabled;
        }

        // The service is authoritative; the adjacency fields only gate the request.
        let current = chapter.id.clone();
        let lookup = match direction {
            Direction::Next => self.service.next_chapter(&current).await,
            Direction::Previous => self.service.previous_chapter(&current).await,
        };

        match lookup {
            Ok(Some(target)) => self.go(Route::Chapter(target.id)),
            Ok(None) => {
                debug!(chapter_id = %current, direction = direction.name(), "No adjacent chapter");
                Navigation::NoChapter
            }
            Err(error) => {
                warn!(
                    chapter_id = %current,
                    direction = direction.name(),
                    %error,
                    "Adjacent chapter lookup failed"
                );
                Navigation::LookupFailed
            }
        }
    }

    /// Go straight to a chapter picked from the loaded chapter's list
    pub fn jump_to(&self, state: &LoadState, selected: &ChapterId) -> Navigation {
        let Some(chapter) = state.chapter() else {
            debug!(chapter_id = %selected, "No chapter loaded, ignoring jump");
            return Navigation::NotLoaded;
        };

        if !chapter.lists(selected) {
            warn!(chapter_id = %selected, story_id = %chapter.story.id, "Jump target not in chapter list");
            return Navigation::NotListed;
        }

        self.go(Route::Chapter(selected.clone()))
    }

    /// Go to the page of the loaded chapter's story
    pub fn back_to_story(&self, state: &LoadState) -> Navigation {
        match state.chapter() {
            Some(chapter) => self.go(Route::Story(chapter.story.id.clone())),
            None => Navigation::NotLoaded,
        }
    }

    fn go(&self, route: Route) -> Navigation {
        info!(%route, "Navigating");
        self.navigator.navigate(route.clone());
        Navigation::Navigated(route)
    }
}
