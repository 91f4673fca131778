use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a quest in the library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl QuestId {
    /// Create a quest id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The science subject a quest belongs to. Extensible via `Custom(String)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// Reactions, mixtures, and things that fizz.
    Chemistry,
    /// Heat, light, and motion.
    Physics,
    /// Living things and how they grow.
    Biology,
    /// A subject not covered by the built-in kinds.
    Custom(String),
}

impl Subject {
    /// Parse a subject from a string (case-insensitive).
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "chemistry" => Self::Chemistry,
            "physics" => Self::Physics,
            "biology" => Self::Biology,
            _ => Self::Custom(s.to_string()),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chemistry => write!(f, "chemistry"),
            Self::Physics => write!(f, "physics"),
            Self::Biology => write!(f, "biology"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

/// A fixed, read-only record describing one guided science activity.
///
/// Quests are created once when the library is built and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier for this quest.
    pub id: QuestId,
    /// Display title of the quest.
    pub title: String,
    /// The science subject the quest belongs to.
    pub subject: Subject,
    /// Display text for how long the quest takes ("20 mins", "3 days").
    /// Never parsed, only shown.
    pub duration: String,
}

impl Quest {
    /// Create a new quest record.
    pub fn new(
        id: impl Into<QuestId>,
        title: impl Into<String>,
        subject: Subject,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subject,
            duration: duration.into(),
        }
    }
}
