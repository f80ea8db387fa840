//! Opaque identifiers for chapters, stories and readers

use crate::error::ReaderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier as it appears on the wire.
///
/// The chapter API uses numeric ids, but nothing here depends on that, so
/// string ids are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, rejecting empty or whitespace-only input
            pub fn parse(value: impl Into<String>) -> Result<Self, ReaderError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ReaderError::EmptyIdentifier(stringify!($name)));
                }
                Ok(Self(value))
            }

            /// Borrow the identifier as a string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = RawId::deserialize(deserializer)?;
                Self::parse(raw.into_string()).map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ReaderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a single chapter
    ChapterId
);

opaque_id!(
    /// Identifier of the story a chapter belongs to
    StoryId
);

opaque_id!(
    /// Identifier of the person reading, used for read-marking
    ReaderId
);
