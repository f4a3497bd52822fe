use crate::{
    api::{Author, CommentNode, CommunityRef, DbUrl, Error, Media, PostNode, Time},
    linkify,
    strings::{avatar_url, blob_url, comment_url, post_url, shorten},
    time_ago, unfold_thread, RenderableComment,
};

const COMMUNITY_FEED_TEXT_LEN: usize = 96;

/// A comment with everything its template needs
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub url: String,
    pub avatar_url: String,
    pub time_ago: String,

    /// `comment.text` is already linkified
    #[serde(flatten)]
    pub comment: RenderableComment,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    pub original_url: String,
    pub thumb_url: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub key: String,
    pub url: String,
    pub db_url: DbUrl,
    pub author: Author,
    pub avatar_url: String,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_text: Option<String>,

    pub created_at: Time,
    pub time_ago: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityRef>,

    pub media: Vec<MediaView>,
}

pub fn prep_comment(c: RenderableComment, now: Time) -> CommentView {
    let RenderableComment {
        mut comment,
        reply_preview,
    } = c;
    comment.text = linkify(&comment.text);
    CommentView {
        url: comment_url(&comment.author.user_id, &comment.key),
        avatar_url: avatar_url(&comment.author.user_id),
        time_ago: time_ago(comment.created_at, now),
        comment: RenderableComment {
            comment,
            reply_preview,
        },
    }
}

/// Unfolds a thread and prepares each of its comments for rendering
pub fn prep_thread(forest: Vec<CommentNode>, now: Time) -> Result<Vec<CommentView>, Error> {
    Ok(unfold_thread(forest)?
        .into_iter()
        .map(|c| prep_comment(c, now))
        .collect())
}

fn prep_media(author: &Author, m: Media) -> MediaView {
    MediaView {
        caption: m.caption,
        mime_type: m.blobs.original.mime_type,
        original_url: blob_url(&author.user_id, &m.blobs.original.blob_name),
        thumb_url: blob_url(&author.user_id, &m.blobs.thumb.blob_name),
    }
}

/// Prepares a post for rendering
///
/// Community feeds only show a shortened, unlinked excerpt of each post.
pub fn prep_post(post: PostNode, is_community: bool, now: Time) -> PostView {
    let PostNode {
        key,
        url,
        author,
        value,
    } = post;
    let text = match is_community {
        true => shorten(&value.text, COMMUNITY_FEED_TEXT_LEN),
        false => linkify(&value.text),
    };
    let media = value
        .media
        .into_iter()
        .map(|m| prep_media(&author, m))
        .collect();
    PostView {
        url: post_url(&author.user_id, &key),
        avatar_url: avatar_url(&author.user_id),
        key,
        db_url: url,
        text,
        extended_text: value.extended_text.as_deref().map(linkify),
        created_at: value.created_at,
        time_ago: time_ago(value.created_at, now),
        community: value.community,
        media,
        author,
    }
}
