use crate::DbUrl;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Constraint violation: comment {0} appears more than once in the thread")]
    DuplicateComment(DbUrl),

    #[error("Invalid timestamp {0:?}")]
    InvalidTimestamp(String),
}
