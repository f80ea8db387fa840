//! Chapter service contract and its clients

mod http;
mod memory;

pub use http::HttpChapterService;
pub use memory::{MemoryChapterService, Operation};

use crate::error::ServiceError;
use crate::types::{Chapter, ChapterId, ChapterListing, ReaderId};
use async_trait::async_trait;

/// Result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Remote source of chapters, adjacency and read history
#[async_trait]
pub trait ChapterService: Send + Sync {
    /// Fetch a chapter with its content and navigation metadata
    async fn chapter_with_content(&self, id: &ChapterId) -> ServiceResult<Chapter>;

    /// The chapter after `id` in reading order, if any
    async fn next_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>>;

    /// The chapter before `id` in reading order, if any
    async fn previous_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>>;

    /// Record that `reader` has read `chapter`. Repeating it is harmless.
    async fn mark_as_read(&self, chapter: &ChapterId, reader: &ReaderId) -> ServiceResult<()>;
}
