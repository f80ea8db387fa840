//! Load lifecycle of the displayed chapter

use super::Chapter;
use std::sync::Arc;

/// What the reader is currently showing.
///
/// The chapter is shared behind an [`Arc`] so that preference changes and
/// view snapshots never copy or replace it; only a new load does.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Arc<Chapter>),
    Failed(String),
}

impl LoadState {
    /// The loaded chapter, if any
    pub fn chapter(&self) -> Option<&Arc<Chapter>> {
        match self {
            LoadState::Loaded(chapter) => Some(chapter),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// User-facing failure message, if the last load failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
