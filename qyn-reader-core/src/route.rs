//! View transitions requested from the surrounding routing layer

use crate::types::{ChapterId, StoryId};
use std::fmt;
use tokio::sync::mpsc;
use tracing::debug;

/// A page the reader can ask the application to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Chapter(ChapterId),
    Story(StoryId),
}

impl Route {
    /// Path of the page, e.g. `/chapter/12`
    pub fn path(&self) -> String {
        match self {
            Route::Chapter(id) => format!("/chapter/{}", id),
            Route::Story(id) => format!("/story/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Receives view transition requests
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that forwards routes over a channel to an event loop
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    /// Create a navigator and the receiver its routes arrive on
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        // Ignore errors (receiver gone)
        if self.tx.send(route).is_err() {
            debug!("Route dropped, no receiver");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        let chapter = Route::Chapter(ChapterId::parse("12").unwrap());
        let story = Route::Story(StoryId::parse("3").unwrap());
        assert_eq!(chapter.path(), "/chapter/12");
        assert_eq!(story.to_string(), "/story/3");
    }

    #[test]
    fn test_channel_navigator_delivers_in_order() {
        let (navigator, mut rx) = ChannelNavigator::channel();
        navigator.navigate(Route::Chapter(ChapterId::parse("1").unwrap()));
        navigator.navigate(Route::Chapter(ChapterId::parse("2").unwrap()));

        assert_eq!(rx.try_recv().unwrap().path(), "/chapter/1");
        assert_eq!(rx.try_recv().unwrap().path(), "/chapter/2");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_navigator_without_receiver() {
        let (navigator, rx) = ChannelNavigator::channel();
        drop(rx);
        navigator.navigate(Route::Story(StoryId::parse("3").unwrap()));
    }
}
