//! QYN Reader CLI - read serialized stories chapter by chapter

mod commands;
mod render;
mod setup;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use qyn_reader_core::{DisplayPreferences, FontFamily, Theme, DEFAULT_FONT_SIZE};
use setup::ConnectOptions;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qyn-reader")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the chapter API (overrides QYN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Reader id used to mark chapters as read (overrides QYN_READER_ID)
    #[arg(long, global = true)]
    reader_id: Option<String>,

    /// Request timeout in seconds (overrides QYN_REQUEST_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<String>,

    /// Read chapters from a JSON file instead of the API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a chapter
    Read {
        /// Chapter id
        chapter: String,

        #[command(flatten)]
        display: DisplayArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the chapter after the given one
    Next {
        /// Chapter id
        chapter: String,
    },

    /// Show the chapter before the given one
    Previous {
        /// Chapter id
        chapter: String,
    },

    /// Split chapter text into paragraphs and line breaks
    Format {
        /// Text file to format (stdin when omitted)
        input: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read interactively, starting at a chapter
    Session {
        /// Chapter id to start at
        chapter: String,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

/// Initial display preferences
#[derive(Args)]
struct DisplayArgs {
    /// Font size in pixels (at least 12)
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: u32,

    /// Font family (Arial, Times New Roman, Georgia, Courier New)
    #[arg(long, default_value = "Arial")]
    font_family: FontFamily,

    /// Theme (light, dark, sepia)
    #[arg(long, default_value = "light")]
    theme: Theme,
}

impl DisplayArgs {
    fn preferences(&self) -> DisplayPreferences {
        let mut preferences = DisplayPreferences {
            font_size: DEFAULT_FONT_SIZE,
            font_family: self.font_family,
            theme: self.theme,
        };
        preferences.set_font_size(self.font_size);
        preferences
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("qyn_reader_cli=debug,qyn_reader_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "qyn_reader_cli=info,qyn_reader_core=warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = ConnectOptions {
        api_url: cli.api_url,
        reader_id: cli.reader_id,
        timeout: cli.timeout,
        fixture: cli.fixture,
    };

    match cli.command {
        Commands::Read {
            chapter,
            display,
            json,
        } => commands::read(&options, &chapter, display.preferences(), json).await,

        Commands::Next { chapter } => commands::next(&options, &chapter).await,

        Commands::Previous { chapter } => commands::previous(&options, &chapter).await,

        Commands::Format { input, json } => commands::format(input.as_deref(), json),

        Commands::Session { chapter, display } => {
            commands::session(&options, &chapter, display.preferences()).await
        }
    }
}
