//! Read command implementation

use super::open_reader;
use crate::render::render_view;
use crate::setup::ConnectOptions;
use anyhow::{Context, Result};
use qyn_reader_core::{ChapterId, DisplayPreferences, ReaderView};

/// Load one chapter and print it
pub async fn read(
    options: &ConnectOptions,
    chapter: &str,
    preferences: DisplayPreferences,
    json: bool,
) -> Result<()> {
    let id = ChapterId::parse(chapter).context("Invalid chapter id")?;
    let (mut reader, _routes) = open_reader(options.connect()?, preferences);

    reader.open(id).await;
    let view = reader.view();

    if let ReaderView::Failed { message } = &view {
        anyhow::bail!("{}", message);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_view(&view));
    }

    Ok(())
}
