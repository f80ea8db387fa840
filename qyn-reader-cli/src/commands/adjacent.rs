//! Next/previous command implementations

use super::open_reader;
use crate::setup::ConnectOptions;
use anyhow::{Context, Result};
use qyn_reader_core::{ChapterId, DisplayPreferences, Navigation, ReaderView, Route};

/// Print the chapter after `chapter`
pub async fn next(options: &ConnectOptions, chapter: &str) -> Result<()> {
    adjacent(options, chapter, true).await
}

/// Print the chapter before `chapter`
pub async fn previous(options: &ConnectOptions, chapter: &str) -> Result<()> {
    adjacent(options, chapter, false).await
}

async fn adjacent(options: &ConnectOptions, chapter: &str, forward: bool) -> Result<()> {
    let id = ChapterId::parse(chapter).context("Invalid chapter id")?;
    let (mut reader, _routes) = open_reader(options.connect()?, DisplayPreferences::default());

    reader.open(id).await;
    if let ReaderView::Failed { message } = reader.view() {
        anyhow::bail!("{}", message);
    }

    let navigation = if forward {
        reader.go_next().await
    } else {
        reader.go_previous().await
    };
    let direction = if forward { "next" } else { "previous" };

    match navigation {
        Navigation::Navigated(Route::Chapter(target)) => {
            let label = reader
                .chapter_options()
                .iter()
                .find(|entry| entry.id == target)
                .map(|entry| entry.label())
                .unwrap_or_else(|| format!("Chapter {}", target));
            println!("{} ({})", label, Route::Chapter(target).path());
        }
        Navigation::Disabled | Navigation::NoChapter => {
            println!("No {} chapter", direction);
        }
        Navigation::LookupFailed => {
            anyhow::bail!("Could not look up the {} chapter", direction);
        }
        other => {
            anyhow::bail!("Unexpected navigation result: {:?}", other);
        }
    }

    Ok(())
}
