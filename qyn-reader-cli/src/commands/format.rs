//! Format command implementation

use anyhow::{Context, Result};
use qyn_reader_core::{format_content, Block};
use std::io::Read;
use std::path::Path;

/// Split text into blocks and print them, one per line
pub fn format(input: Option<&Path>, json: bool) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let blocks = format_content(Some(&text));

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    for block in &blocks {
        match block {
            Block::Paragraph(text) => println!("[p] {}", text),
            Block::LineBreak => println!("[br]"),
        }
    }

    Ok(())
}
