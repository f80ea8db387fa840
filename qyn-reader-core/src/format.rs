//! Turns raw chapter text into renderable blocks

use crate::types::Block;

/// Split raw chapter text into paragraphs and line breaks.
///
/// Every line becomes exactly one block, in order. Lines that are blank
/// after trimming become [`Block::LineBreak`]; all others become a
/// [`Block::Paragraph`] holding the line untouched, except that a `\r`
/// directly before the `\n` is dropped: `\r\n` counts as one line break.
/// A `\r` anywhere else stays in the text. Missing or empty text yields no
/// blocks.
pub fn format_content(raw: Option<&str>) -> Vec<Block> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };

    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            if line.trim().is_empty() {
                Block::LineBreak
            } else {
                Block::paragraph(line)
            }
        })
        .collect()
}
