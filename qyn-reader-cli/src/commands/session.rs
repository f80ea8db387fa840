//! Interactive reading session

use super::open_reader;
use crate::render::{render_preferences, render_view};
use crate::setup::ConnectOptions;
use anyhow::{Context, Result};
use qyn_reader_core::{
    ChapterId, ChapterReader, DisplayPreferences, FontFamily, Navigation, Route, Theme,
};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

const HELP: &str = "\
Commands:
  n, next            go to the next chapter
  p, prev            go to the previous chapter
  j, jump <id>       jump to a chapter of this story
  +, -               bigger / smaller text
  font <family>      Arial, Times New Roman, Georgia, Courier New
  theme <name>       light, dark, sepia
  s, story           back to the story page
  show               show the current chapter again
  h, help            this help
  q, quit            leave";

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Next,
    Previous,
    Jump(ChapterId),
    Bigger,
    Smaller,
    Font(FontFamily),
    Theme(Theme),
    Story,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "n" | "next" => SessionCommand::Next,
            "p" | "prev" | "previous" => SessionCommand::Previous,
            "j" | "jump" => {
                let id = ChapterId::parse(rest).map_err(|_| "Usage: jump <id>".to_string())?;
                SessionCommand::Jump(id)
            }
            "+" => SessionCommand::Bigger,
            "-" => SessionCommand::Smaller,
            "font" => SessionCommand::Font(rest.parse().map_err(|e| format!("{}", e))?),
            "theme" => SessionCommand::Theme(rest.parse().map_err(|e| format!("{}", e))?),
            "s" | "story" => SessionCommand::Story,
            "show" => SessionCommand::Show,
            "h" | "help" | "?" => SessionCommand::Help,
            "q" | "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("Unknown command: {} (try 'help')", other)),
        };
        Ok(command)
    }
}

/// Read interactively from stdin until `quit` or end of input
pub async fn session(
    options: &ConnectOptions,
    chapter: &str,
    preferences: DisplayPreferences,
) -> Result<()> {
    let start = ChapterId::parse(chapter).context("Invalid chapter id")?;
    let (mut reader, mut routes) = open_reader(options.connect()?, preferences);

    reader.open(start).await;
    print!("{}", render_view(&reader.view()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            SessionCommand::Next => report(reader.go_next().await, "next"),
            SessionCommand::Previous => report(reader.go_previous().await, "previous"),
            SessionCommand::Jump(id) => report(reader.jump_to(&id), "selected"),
            SessionCommand::Bigger => {
                reader.increase_font_size();
                println!("{}", render_preferences(reader.preferences()));
            }
            SessionCommand::Smaller => {
                reader.decrease_font_size();
                println!("{}", render_preferences(reader.preferences()));
            }
            SessionCommand::Font(family) => {
                reader.set_font_family(family);
                println!("{}", render_preferences(reader.preferences()));
            }
            SessionCommand::Theme(theme) => {
                reader.set_theme(theme);
                println!("{}", render_preferences(reader.preferences()));
            }
            SessionCommand::Story => report(reader.back_to_story(), "story"),
            SessionCommand::Show => print!("{}", render_view(&reader.view())),
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => break,
        }

        follow_routes(&mut reader, &mut routes).await;
    }

    Ok(())
}

/// Load every chapter the reader asked to navigate to
async fn follow_routes(reader: &mut ChapterReader, routes: &mut UnboundedReceiver<Route>) {
    while let Ok(route) = routes.try_recv() {
        match route {
            Route::Chapter(id) => {
                reader.open(id).await;
                print!("{}", render_view(&reader.view()));
            }
            Route::Story(_) => println!("Story page: {}", route.path()),
        }
    }
}

/// Explain navigations that did not lead anywhere
fn report(navigation: Navigation, what: &str) {
    match navigation {
        Navigation::Navigated(_) => {}
        Navigation::NotLoaded => println!("No chapter is loaded"),
        Navigation::Disabled | Navigation::NoChapter => println!("No {} chapter", what),
        Navigation::LookupFailed => println!("Could not look up the {} chapter", what),
        Navigation::NotListed => println!("That chapter is not part of this story"),
    }
}
