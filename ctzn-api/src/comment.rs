use std::fmt;

use crate::{Author, Time, UserId};

/// Location of a record in its author's database, unique across the network
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct DbUrl(pub String);

impl DbUrl {
    pub fn new(url: impl Into<String>) -> DbUrl {
        DbUrl(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DbUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRef {
    pub db_url: DbUrl,
    pub author_id: UserId,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyContext {
    /// Post at the top of the thread
    pub root: RecordRef,

    /// Comment being replied to, only set when it is not the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordRef>,
}

impl ReplyContext {
    /// Returns the parent if this is a reply to something else than the thread root
    pub fn non_root_parent(&self) -> Option<&RecordRef> {
        self.parent.as_ref().filter(|p| p.db_url != self.root.db_url)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRef {
    pub user_id: UserId,
    pub db_url: DbUrl,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentValue {
    #[serde(default)]
    pub text: String,

    pub created_at: Time,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityRef>,
}

/// A comment as returned by the thread RPC, with its direct replies nested inside
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentNode {
    pub key: String,

    /// Identity of this comment
    pub url: DbUrl,

    pub author: Author,

    pub value: CommentValue,

    /// Direct replies, in the order the backend returned them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, this one included
    pub fn count(&self) -> usize {
        let mut res = 0;
        let mut todo = vec![self];
        while let Some(c) = todo.pop() {
            res += 1;
            todo.extend(c.replies.iter());
        }
        res
    }
}
