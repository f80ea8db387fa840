//! HTTP client for the chapter REST API

use super::{ChapterService, ServiceResult};
use crate::config::ReaderConfig;
use crate::error::ServiceError;
use crate::types::{Chapter, ChapterId, ChapterListing, ReaderId};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Header carrying the reader id on read-mark requests
const READER_HEADER: &str = "X-User-ID";

/// Chapter service talking JSON to `{base}/api/chapters`
#[derive(Debug, Clone)]
pub struct HttpChapterService {
    client: Client,
    base_url: String,
}

impl HttpChapterService {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ServiceResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("qyn-reader/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ReaderConfig) -> ServiceResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    fn chapter_url(&self, id: &ChapterId, suffix: &str) -> String {
        format!(
            "{}/api/chapters/{}{}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            suffix
        )
    }

    async fn get(&self, url: &str) -> ServiceResult<Response> {
        debug!(%url, "GET");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))
    }

    /// Fetch an adjacent chapter. The API answers 404 when there is none.
    async fn adjacent(&self, id: &ChapterId, suffix: &str) -> ServiceResult<Option<ChapterListing>> {
        let response = self.get(&self.chapter_url(id, suffix)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = success_body(response).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode::<Option<ChapterListing>>(&body)
    }
}

/// Body of a successful response, or the matching error
async fn success_body(response: Response) -> ServiceResult<Vec<u8>> {
    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Network(format!("unexpected status {}", status)));
    }

    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| ServiceError::Network(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> ServiceResult<T> {
    serde_json::from_slice(body).map_err(|e| ServiceError::Malformed(e.to_string()))
}

#[async_trait]
impl ChapterService for HttpChapterService {
    async fn chapter_with_content(&self, id: &ChapterId) -> ServiceResult<Chapter> {
        let response = self.get(&self.chapter_url(id, "/content")).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(format!("chapter {}", id)));
        }

        let body = success_body(response).await?;
        decode(&body)
    }

    async fn next_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>> {
        self.adjacent(id, "/next").await
    }

    async fn previous_chapter(&self, id: &ChapterId) -> ServiceResult<Option<ChapterListing>> {
        self.adjacent(id, "/previous").await
    }

    async fn mark_as_read(&self, chapter: &ChapterId, reader: &ReaderId) -> ServiceResult<()> {
        let url = self.chapter_url(chapter, "/read");
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .header(READER_HEADER, reader.as_str())
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound(format!("chapter {}", chapter))),
            status if status.is_success() => Ok(()),
            status => Err(ServiceError::Network(format!("unexpected status {}", status))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_url_encodes_id() {
        let service =
            HttpChapterService::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        let id = ChapterId::parse("a b/c").unwrap();
        assert_eq!(
            service.chapter_url(&id, "/next"),
            "http://localhost:8080/api/chapters/a%20b%2Fc/next"
        );
    }
}
