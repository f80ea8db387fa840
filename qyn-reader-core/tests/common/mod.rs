//! Shared fixtures for the reader integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use qyn_reader_core::service::ServiceResult;
use qyn_reader_core::{
    Chapter, ChapterId, ChapterListing, ChapterService, MemoryChapterService, Navigator,
    ReaderId, Route, StoryId, StorySummary,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn id(s: &str) -> ChapterId {
    ChapterId::parse(s).unwrap()
}

pub fn story() -> StorySummary {
    StorySummary::new(StoryId::parse("7").unwrap(), "The Long Road", "Lan Anh")
}

/// Three chapters of one story: c1 has no previous, c3 has no next
pub fn story_chapters() -> Vec<Chapter> {
    let list = vec![
        ChapterListing::new(id("c1"), 1, "Departure"),
        ChapterListing::new(id("c2"), 2, "The River"),
        ChapterListing::new(id("c3"), 3, "Arrival"),
    ];

    vec![
        Chapter::new(id("c1"), "Departure", story())
            .with_content("They left at dawn.\n\nNobody waved.")
            .with_chapters_list(list.clone())
            .with_adjacent(None, Some(id("c2"))),
        Chapter::new(id("c2"), "The River", story())
            .with_content("The water was cold.")
            .with_chapters_list(list.clone())
            .with_adjacent(Some(id("c1")), Some(id("c3"))),
        Chapter::new(id("c3"), "Arrival", story())
            .with_content("At last.")
            .with_chapters_list(list)
            .with_adjacent(Some(id("c2")), None),
    ]
}

pub fn memory_service() -> Arc<MemoryChapterService> {
    Arc::new(MemoryChapterService::with_chapters(story_chapters()))
}

/// Let detached tasks run on the current-thread test runtime
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Navigator that remembers every route it was asked for
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Wraps the memory service and delays chapter fetches per id
pub struct DelayedService {
    inner: Arc<MemoryChapterService>,
    delays: HashMap<ChapterId, Duration>,
}

impl DelayedService {
    pub fn new(inner: Arc<MemoryChapterService>, delays: &[(&str, u64)]) -> Self {
        Self {
            inner,
            delays: delays
                .iter()
                .map(|(chapter, ms)| (id(chapter), Duration::from_millis(*ms)))
                .collect(),
        }
    }
}

#[async_trait]
impl ChapterService for DelayedService {
    async fn chapter_with_content(&self, id: &ChapterId) -> ServiceResult<Chapter> {
        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.chapter_with_content(id).await
    }

    async fn next_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>> {
        self.inner.next_chapter(id).await
    }

    async fn previous_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>> {
        self.inner.previous_chapter(id).await
    }

    async fn mark_as_read(&self, chapter: &ChapterId, reader: &ReaderId) -> ServiceResult<()> {
        self.inner.mark_as_read(chapter, reader).await
    }
}
