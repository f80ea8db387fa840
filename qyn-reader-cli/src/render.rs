//! Plain-text rendering of the reader view

use qyn_reader_core::{Block, ChapterView, DisplayPreferences, ReaderView};
use std::fmt::Write;

/// Render a reader view as terminal text
pub fn render_view(view: &ReaderView) -> String {
    match view {
        ReaderView::Loading => "Loading...\n".to_string(),
        ReaderView::Failed { message } => format!("{}\n", message),
        ReaderView::Chapter(chapter) => render_chapter(chapter),
    }
}

fn render_chapter(chapter: &ChapterView) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", chapter.title);
    let _ = writeln!(out, "{} by {}", chapter.story_title, chapter.author);
    let _ = writeln!(out, "{}", render_preferences(&chapter.preferences));
    out.push('\n');

    for block in &chapter.blocks {
        match block {
            Block::Paragraph(text) => {
                let _ = writeln!(out, "{}", text);
            }
            Block::LineBreak => out.push('\n'),
        }
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Words: {}  Views: {}",
        chapter.word_count.map(group_thousands).unwrap_or_else(|| "-".into()),
        chapter.views.map(group_thousands).unwrap_or_else(|| "-".into()),
    );

    let previous = if chapter.can_go_previous { "< previous" } else { "" };
    let next = if chapter.can_go_next { "next >" } else { "" };
    if !previous.is_empty() || !next.is_empty() {
        let _ = writeln!(out, "{:<12}{}", previous, next);
    }

    if !chapter.options.is_empty() {
        out.push_str("Chapters:\n");
        for option in &chapter.options {
            let marker = if option.selected { '*' } else { ' ' };
            let _ = writeln!(out, "{} [{}] {}", marker, option.id, option.label);
        }
    }

    out
}

/// One-line summary of the display preferences
pub fn render_preferences(preferences: &DisplayPreferences) -> String {
    format!(
        "[{}px {} | {}]",
        preferences.font_size, preferences.font_family, preferences.theme
    )
}

/// Format a count with comma thousands separators
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
