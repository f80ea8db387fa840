//! CLI command implementations

mod adjacent;
mod format;
mod read;
mod session;

pub use adjacent::{next, previous};
pub use format::format;
pub use read::read;
pub use session::session;

use crate::setup::Connection;
use qyn_reader_core::{ChannelNavigator, ChapterReader, DisplayPreferences, Route};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// A reader whose requested routes arrive on the returned receiver
fn open_reader(
    connection: Connection,
    preferences: DisplayPreferences,
) -> (ChapterReader, UnboundedReceiver<Route>) {
    let (navigator, routes) = ChannelNavigator::channel();
    let reader = ChapterReader::new(connection.service, Arc::new(navigator), connection.context)
        .with_preferences(preferences);
    (reader, routes)
}
