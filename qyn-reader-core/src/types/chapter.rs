//! Chapter type as delivered by the chapter API

use super::{ChapterId, StoryId};
use serde::{Deserialize, Deserializer, Serialize};

/// A single chapter with its content and navigation metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,

    pub title: String,

    /// Raw chapter text with line breaks
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub word_count: Option<u64>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub previous_chapter_id: Option<ChapterId>,

    #[serde(default)]
    pub next_chapter_id: Option<ChapterId>,

    /// Every chapter of the same story, in reading order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters_list: Vec<ChapterListing>,

    /// The story this chapter belongs to
    pub story: StorySummary,
}

impl Chapter {
    /// Create a chapter with a title and no navigation metadata
    pub fn new(id: ChapterId, title: impl Into<String>, story: StorySummary) -> Self {
        Self {
            id,
            title: title.into(),
            content: None,
            word_count: None,
            views: None,
            previous_chapter_id: None,
            next_chapter_id: None,
            chapters_list: Vec::new(),
            story,
        }
    }

    /// Set the raw content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the sibling list
    pub fn with_chapters_list(mut self, chapters_list: Vec<ChapterListing>) -> Self {
        self.chapters_list = chapters_list;
        self
    }

    /// Set the adjacency fields
    pub fn with_adjacent(
        mut self,
        previous: Option<ChapterId>,
        next: Option<ChapterId>,
    ) -> Self {
        self.previous_chapter_id = previous;
        self.next_chapter_id = next;
        self
    }

    pub fn has_previous(&self) -> bool {
        self.previous_chapter_id.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next_chapter_id.is_some()
    }

    /// Whether `id` is one of this chapter's siblings
    pub fn lists(&self, id: &ChapterId) -> bool {
        self.chapters_list.iter().any(|entry| &entry.id == id)
    }
}

/// One entry of a story's chapter list.
///
/// The adjacency endpoints answer with this shape as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterListing {
    pub id: ChapterId,

    #[serde(default)]
    pub chapter_number: u32,

    #[serde(default)]
    pub title: String,
}

impl ChapterListing {
    pub fn new(id: ChapterId, chapter_number: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            chapter_number,
            title: title.into(),
        }
    }

    /// Label used in the chapter selector
    pub fn label(&self) -> String {
        format!("Chapter {}: {}", self.chapter_number, self.title)
    }
}

/// Summary of the parent story
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorySummary {
    pub id: StoryId,

    pub title: String,

    #[serde(default)]
    pub author: String,
}

impl StorySummary {
    pub fn new(id: StoryId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": 12,
            "title": "The Gate",
            "content": "First line\n\nSecond line",
            "wordCount": 4,
            "views": 1200,
            "previousChapterId": 11,
            "nextChapterId": null,
            "chaptersList": [
                {"id": 11, "chapterNumber": 1, "title": "Arrival"},
                {"id": 12, "chapterNumber": 2, "title": "The Gate"}
            ],
            "story": {"id": 3, "title": "Long Road", "author": "Minh"}
        }"#;

        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.id.as_str(), "12");
        assert_eq!(chapter.word_count, Some(4));
        assert!(chapter.has_previous());
        assert!(!chapter.has_next());
        assert_eq!(chapter.chapters_list.len(), 2);
        assert_eq!(chapter.chapters_list[1].label(), "Chapter 2: The Gate");
        assert_eq!(chapter.story.author, "Minh");
    }

    #[test]
    fn test_null_chapters_list_is_empty() {
        let json = r#"{
            "id": "a",
            "title": "Solo",
            "chaptersList": null,
            "story": {"id": "s", "title": "One Shot"}
        }"#;

        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert!(chapter.chapters_list.is_empty());
        assert!(chapter.content.is_none());
        assert_eq!(chapter.story.author, "");
    }
}
