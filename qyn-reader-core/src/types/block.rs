//! Renderable blocks produced from raw chapter text

use serde::{Deserialize, Serialize};

/// One renderable unit of chapter text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Block {
    /// A non-blank line, kept exactly as written
    Paragraph(String),

    /// A blank line
    LineBreak,
}

impl Block {
    /// Create a paragraph block
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    /// Text of a paragraph, `None` for line breaks
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Paragraph(text) => Some(text),
            Block::LineBreak => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_text() {
        assert_eq!(Block::paragraph("Nobody waved.").text(), Some("Nobody waved."));
        assert_eq!(Block::LineBreak.text(), None);
    }
}
