//! Unfolding of nested comment threads into one chronological list
//!
//! Threads are rendered as a flat discussion log rather than as a tree. Replies to something
//! else than the thread root carry a [`ReplyPreview`] instead, so the reader can still tell what
//! they answer.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    api::{Author, CommentNode, CommunityRef, DbUrl, Error, ReplyContext, Time},
    strings::{avatar_url, shorten},
};

const SNIPPET_LEN: usize = 64;

/// A comment taken out of its reply tree
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatComment {
    pub key: String,
    pub db_url: DbUrl,
    pub author: Author,
    pub text: String,
    pub created_at: Time,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityRef>,
}

/// What a comment replies to, when that is not the thread root
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ReplyPreview {
    #[serde(rename_all = "camelCase")]
    Available {
        parent: DbUrl,
        snippet: String,
        avatar_url: String,
        display_name: String,
    },

    /// The parent is not part of the thread, eg. because it was deleted
    #[serde(rename_all = "camelCase")]
    Unavailable { parent: DbUrl },
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableComment {
    #[serde(flatten)]
    pub comment: FlatComment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_preview: Option<ReplyPreview>,
}

/// Comments of a thread, by identity
pub type ThreadIndex<'a> = HashMap<&'a DbUrl, &'a FlatComment>;

/// Lists every comment of the forest exactly once, parents before their replies
///
/// Order is a depth-first pre-order walk, siblings keeping the order they were listed in.
pub fn flatten(forest: Vec<CommentNode>) -> Vec<FlatComment> {
    let mut res = Vec::with_capacity(forest.iter().map(CommentNode::count).sum());
    let mut todo = forest;
    todo.reverse();
    while let Some(node) = todo.pop() {
        let CommentNode {
            key,
            url,
            author,
            value,
            replies,
        } = node;
        todo.extend(replies.into_iter().rev());
        res.push(FlatComment {
            key,
            db_url: url,
            author,
            text: value.text,
            created_at: value.created_at,
            reply: value.reply,
            community: value.community,
        });
    }
    res
}

pub fn index_thread(comments: &[FlatComment]) -> Result<ThreadIndex<'_>, Error> {
    let mut res = HashMap::with_capacity(comments.len());
    for c in comments {
        match res.entry(&c.db_url) {
            Entry::Occupied(_) => return Err(Error::DuplicateComment(c.db_url.clone())),
            Entry::Vacant(e) => {
                e.insert(c);
            }
        }
    }
    Ok(res)
}

/// Builds the preview of what `comment` replies to
///
/// Returns `None` for comments that reply directly to the thread root, or that have no reply
/// context at all.
pub fn reply_preview(comment: &FlatComment, index: &ThreadIndex<'_>) -> Option<ReplyPreview> {
    let parent = comment.reply.as_ref()?.non_root_parent()?;
    Some(match index.get(&parent.db_url) {
        Some(p) => ReplyPreview::Available {
            parent: parent.db_url.clone(),
            snippet: shorten(&p.text, SNIPPET_LEN),
            avatar_url: avatar_url(&p.author.user_id),
            display_name: String::from(p.author.name()),
        },
        None => {
            tracing::warn!(
                comment = %comment.db_url,
                parent = %parent.db_url,
                "reply parent is not part of the thread"
            );
            ReplyPreview::Unavailable {
                parent: parent.db_url.clone(),
            }
        }
    })
}

/// Flattens a comment forest into a chronological list, annotating non-root replies
pub fn unfold_thread(forest: Vec<CommentNode>) -> Result<Vec<RenderableComment>, Error> {
    let comments = flatten(forest);
    let previews = {
        let index = index_thread(&comments)?;
        comments
            .iter()
            .map(|c| reply_preview(c, &index))
            .collect::<Vec<_>>()
    };
    let mut res = comments
        .into_iter()
        .zip(previews)
        .map(|(comment, reply_preview)| RenderableComment {
            comment,
            reply_preview,
        })
        .collect::<Vec<_>>();
    // must be stable: same-time comments keep their walk order
    res.sort_by_key(|c| c.comment.created_at);
    tracing::debug!(num_comments = res.len(), "unfolded comment thread");
    Ok(res)
}
