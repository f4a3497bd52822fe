use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{CommentNode, CommentValue, CommunityRef, DbUrl, RecordRef, ReplyContext};

mod error;
pub use error::Error;

mod post;
pub use post::{BlobRef, Media, MediaBlobs, PostNode, PostValue};

mod user;
pub use user::{Author, UserId};

/// Parses an RFC 3339 timestamp, as used on the wire
pub fn parse_time(s: &str) -> Result<Time, Error> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp(String::from(s)))
}
