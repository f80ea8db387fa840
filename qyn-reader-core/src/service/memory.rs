//! In-memory chapter service (for tests and offline fixtures)

use super::{ChapterService, ServiceResult};
use crate::error::ServiceError;
use crate::types::{Chapter, ChapterId, ChapterListing, ReaderId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Operations of [`ChapterService`], used to count calls and inject failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Next,
    Previous,
    MarkAsRead,
}

/// Chapter service backed by a map of chapters.
///
/// Adjacency follows each chapter's own sibling list ordered by chapter
/// number, so fixtures only need consistent `chaptersList` entries.
#[derive(Debug, Default)]
pub struct MemoryChapterService {
    chapters: RwLock<HashMap<ChapterId, Chapter>>,
    reads: RwLock<Vec<(ChapterId, ReaderId)>>,
    failures: RwLock<HashMap<Operation, ServiceError>>,
    calls: RwLock<HashMap<Operation, usize>>,
}

impl MemoryChapterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service holding the given chapters
    pub fn with_chapters(chapters: impl IntoIterator<Item = Chapter>) -> Self {
        let service = Self::new();
        for chapter in chapters {
            service.insert(chapter);
        }
        service
    }

    /// Parse a JSON array of chapters in the API's format
    pub fn from_json(json: &str) -> ServiceResult<Self> {
        let chapters: Vec<Chapter> =
            serde_json::from_str(json).map_err(|e| ServiceError::Malformed(e.to_string()))?;
        Ok(Self::with_chapters(chapters))
    }

    /// Add or replace a chapter
    pub fn insert(&self, chapter: Chapter) {
        self.chapters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(chapter.id.clone(), chapter);
    }

    /// Make every later call of `operation` fail with `error`
    pub fn fail(&self, operation: Operation, error: ServiceError) {
        self.failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation, error);
    }

    /// Undo [`fail`](Self::fail) for `operation`
    pub fn recover(&self, operation: Operation) {
        self.failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&operation);
    }

    /// How many times `operation` has been called
    pub fn calls(&self, operation: Operation) -> usize {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of calls across all operations
    pub fn total_calls(&self) -> usize {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }

    /// Read-marks recorded so far, oldest first
    pub fn reads(&self) -> Vec<(ChapterId, ReaderId)> {
        self.reads
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn enter(&self, operation: Operation) -> ServiceResult<()> {
        *self
            .calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(operation)
            .or_insert(0) += 1;

        match self
            .failures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&operation)
        {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn get(&self, id: &ChapterId) -> ServiceResult<Chapter> {
        self.chapters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("chapter {}", id)))
    }

    /// The sibling `offset` places away from `id` in chapter-number order
    fn sibling(&self, id: &ChapterId, offset: isize) -> ServiceResult<Option<ChapterListing>> {
        let chapter = self.get(id)?;
        let mut siblings = chapter.chapters_list;
        siblings.sort_by_key(|entry| entry.chapter_number);

        let Some(position) = siblings.iter().position(|entry| &entry.id == id) else {
            return Ok(None);
        };

        Ok(position
            .checked_add_signed(offset)
            .and_then(|target| siblings.get(target))
            .cloned())
    }
}

#[async_trait]
impl ChapterService for MemoryChapterService {
    async fn chapter_with_content(&self, id: &ChapterId) -> ServiceResult<Chapter> {
        self.enter(Operation::Fetch)?;
        self.get(id)
    }

    async fn next_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>> {
        self.enter(Operation::Next)?;
        self.sibling(id, 1)
    }

    async fn previous_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>> {
        self.enter(Operation::Previous)?;
        self.sibling(id, -1)
    }

    async fn mark_as_read(&self, chapter: &ChapterId, reader: &ReaderId) -> ServiceResult<()> {
        self.enter(Operation::MarkAsRead)?;
        self.get(chapter)?;
        self.reads
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((chapter.clone(), reader.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StoryId, StorySummary};

    fn id(s: &str) -> ChapterId {
        ChapterId::parse(s).unwrap()
    }

    fn story() -> Vec<Chapter> {
        let summary = StorySummary::new(StoryId::parse("s1").unwrap(), "Story", "Author");
        // Listed out of order on purpose; adjacency must use chapter numbers.
        let list = vec![
            ChapterListing::new(id("c3"), 3, "Three"),
            ChapterListing::new(id("c1"), 1, "One"),
            ChapterListing::new(id("c2"), 2, "Two"),
        ];
        ["c1", "c2", "c3"]
            .into_iter()
            .map(|c| {
                Chapter::new(id(c), c, summary.clone()).with_chapters_list(list.clone())
            })
            .collect()
    }

    #[tokio::test]
    async fn test_memory_adjacency() {
        let service = MemoryChapterService::with_chapters(story());

        let next = service.next_chapter(&id("c1")).await.unwrap();
        assert_eq!(next.map(|c| c.id), Some(id("c2")));

        let previous = service.previous_chapter(&id("c1")).await.unwrap();
        assert!(previous.is_none());

        let next = service.next_chapter(&id("c3")).await.unwrap();
        assert!(next.is_none());

        let previous = service.previous_chapter(&id("c3")).await.unwrap();
        assert_eq!(previous.map(|c| c.id), Some(id("c2")));

        assert_eq!(service.calls(Operation::Next), 2);
        assert_eq!(service.calls(Operation::Previous), 2);
    }

    #[tokio::test]
    async fn test_memory_missing_chapter() {
        let service = MemoryChapterService::new();
        let err = service.chapter_with_content(&id("nope")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_memory_injected_failure() {
        let service = MemoryChapterService::with_chapters(story());
        service.fail(Operation::Fetch, ServiceError::Network("offline".into()));
        assert_eq!(
            service.chapter_with_content(&id("c1")).await.unwrap_err(),
            ServiceError::Network("offline".into())
        );

        service.recover(Operation::Fetch);
        assert!(service.chapter_with_content(&id("c1")).await.is_ok());
        assert_eq!(service.calls(Operation::Fetch), 2);
    }

    #[tokio::test]
    async fn test_memory_records_reads() {
        let service = MemoryChapterService::with_chapters(story());
        let reader = ReaderId::parse("7").unwrap();
        service.mark_as_read(&id("c2"), &reader).await.unwrap();
        service.mark_as_read(&id("c2"), &reader).await.unwrap();
        assert_eq!(service.reads().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = MemoryChapterService::from_json("{not json").unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }
}
