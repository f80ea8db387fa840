//! Content loader: fetches chapters and keeps the load state current
//!
//! A load is split in three steps so an event loop can run several fetches
//! at once: [`ChapterLoader::request`] moves the state to `Loading` and
//! hands out a [`PendingLoad`], the pending load resolves without touching
//! the loader, and [`ChapterLoader::commit`] applies the outcome only if it
//! answers the most recent request.

use crate::config::ReaderContext;
use crate::error::{ServiceError, CONTENT_UNAVAILABLE};
use crate::service::ChapterService;
use crate::types::{Chapter, ChapterId, LoadState};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Identifies one request; only the newest ticket may commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    chapter_id: ChapterId,
}

impl LoadTicket {
    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }
}

/// A fetch that has been requested but not yet resolved
pub struct PendingLoad {
    ticket: LoadTicket,
    service: Arc<dyn ChapterService>,
}

impl PendingLoad {
    pub fn ticket(&self) -> &LoadTicket {
        &self.ticket
    }

    /// Run the fetch. Dropping the pending load instead discards it.
    pub async fn resolve(self) -> LoadOutcome {
        let result = self
            .service
            .chapter_with_content(&self.ticket.chapter_id)
            .await;
        LoadOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Result of a resolved fetch, waiting to be committed
#[derive(Debug)]
pub struct LoadOutcome {
    ticket: LoadTicket,
    result: Result<Chapter, ServiceError>,
}

impl LoadOutcome {
    pub fn ticket(&self) -> &LoadTicket {
        &self.ticket
    }
}

/// What [`ChapterLoader::commit`] did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Loaded,
    Failed,
    /// A newer request exists; the outcome was dropped
    Stale,
}

/// Owns the load state of the displayed chapter
pub struct ChapterLoader {
    service: Arc<dyn ChapterService>,
    context: ReaderContext,
    state: LoadState,
    generation: u64,
}

impl ChapterLoader {
    pub fn new(service: Arc<dyn ChapterService>, context: ReaderContext) -> Self {
        Self {
            service,
            context,
            state: LoadState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Start loading `id`. Any outcome of an earlier request becomes stale.
    pub fn request(&mut self, id: ChapterId) -> PendingLoad {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;
        debug!(chapter_id = %id, generation = self.generation, "Loading chapter");

        PendingLoad {
            ticket: LoadTicket {
                generation: self.generation,
                chapter_id: id,
            },
            service: Arc::clone(&self.service),
        }
    }

    /// Apply a resolved fetch if it belongs to the newest request
    pub fn commit(&mut self, outcome: LoadOutcome) -> Commit {
        let LoadOutcome { ticket, result } = outcome;
        if ticket.generation != self.generation {
            debug!(
                chapter_id = %ticket.chapter_id,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale chapter response"
            );
            return Commit::Stale;
        }

        let result = result.and_then(|chapter| {
            if chapter.id == ticket.chapter_id {
                Ok(chapter)
            } else {
                Err(ServiceError::Malformed(format!(
                    "requested chapter {} but received {}",
                    ticket.chapter_id, chapter.id
                )))
            }
        });

        match result {
            Ok(chapter) => {
                info!(chapter_id = %chapter.id, title = %chapter.title, "Chapter loaded");
                self.state = LoadState::Loaded(Arc::new(chapter));
                self.spawn_mark_as_read(ticket.chapter_id);
                Commit::Loaded
            }
            Err(error) => {
                warn!(chapter_id = %ticket.chapter_id, %error, "Failed to load chapter");
                self.state = LoadState::Failed(CONTENT_UNAVAILABLE.to_string());
                Commit::Failed
            }
        }
    }

    /// Request, fetch and commit `id` in one go
    pub async fn load(&mut self, id: ChapterId) -> &LoadState {
        let pending = self.request(id);
        let outcome = pending.resolve().await;
        self.commit(outcome);
        &self.state
    }

    /// Mark the chapter as read in a detached task; the result only reaches
    /// the log.
    fn spawn_mark_as_read(&self, chapter_id: ChapterId) {
        let Some(reader_id) = self.context.reader_id().cloned() else {
            debug!(chapter_id = %chapter_id, "No reader id, not marking as read");
            return;
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(chapter_id = %chapter_id, "No async runtime, not marking as read");
            return;
        };

        let service = Arc::clone(&self.service);
        runtime.spawn(async move {
            match service.mark_as_read(&chapter_id, &reader_id).await {
                Ok(()) => debug!(chapter_id = %chapter_id, reader_id = %reader_id, "Marked as read"),
                Err(error) => warn!(
                    chapter_id = %chapter_id,
                    reader_id = %reader_id,
                    %error,
                    "Failed to mark chapter as read"
                ),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{MemoryChapterService, Operation};
    use crate::types::{StoryId, StorySummary};

    fn id(s: &str) -> ChapterId {
        ChapterId::parse(s).unwrap()
    }

    fn service() -> Arc<MemoryChapterService> {
        let story = StorySummary::new(StoryId::parse("s").unwrap(), "Story", "Author");
        Arc::new(MemoryChapterService::with_chapters([
            Chapter::new(id("1"), "One", story.clone()),
            Chapter::new(id("2"), "Two", story),
        ]))
    }

    #[tokio::test]
    async fn test_request_sets_loading() {
        let mut loader = ChapterLoader::new(service(), ReaderContext::anonymous());
        loader.load(id("1")).await;
        assert!(loader.state().chapter().is_some());

        let _pending = loader.request(id("2"));
        assert!(loader.state().is_loading());
    }

    #[tokio::test]
    async fn test_stale_outcome_is_dropped() {
        let mut loader = ChapterLoader::new(service(), ReaderContext::anonymous());
        let first = loader.request(id("1"));
        let second = loader.request(id("2"));

        let first = first.resolve().await;
        let second = second.resolve().await;

        assert_eq!(loader.commit(second), Commit::Loaded);
        assert_eq!(loader.commit(first), Commit::Stale);
        assert_eq!(loader.state().chapter().unwrap().id, id("2"));
    }

    #[tokio::test]
    async fn test_mismatched_chapter_fails() {
        let service = service();
        // The answer to "3" claims to be chapter "1"
        let story = StorySummary::new(StoryId::parse("s").unwrap(), "Story", "Author");
        let mut loader = ChapterLoader::new(service.clone(), ReaderContext::anonymous());
        let pending = loader.request(id("3"));
        let outcome = LoadOutcome {
            ticket: pending.ticket().clone(),
            result: Ok(Chapter::new(id("1"), "One", story)),
        };

        assert_eq!(loader.commit(outcome), Commit::Failed);
        assert_eq!(loader.state().failure(), Some(CONTENT_UNAVAILABLE));
        assert_eq!(service.calls(Operation::Fetch), 0);
    }

    #[tokio::test]
    async fn test_anonymous_reader_skips_read_mark() {
        let service = service();
        let mut loader = ChapterLoader::new(service.clone(), ReaderContext::anonymous());
        loader.load(id("1")).await;
        tokio::task::yield_now().await;
        assert_eq!(service.calls(Operation::MarkAsRead), 0);
    }
}
