use crate::quest::QuestId;

/// Alias for `Result<T, QlError>`.
pub type QlResult<T> = Result<T, QlError>;

/// Errors that can occur when manipulating the quest library.
#[derive(Debug, thiserror::Error)]
pub enum QlError {
    /// No quest matched the given id or title.
    #[error("quest not found: \"{0}\"")]
    QuestNotFound(String),

    /// A quest with the same id already exists in the library.
    #[error("duplicate quest id: {0}")]
    DuplicateId(QuestId),
}
