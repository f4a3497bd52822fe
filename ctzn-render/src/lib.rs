mod linkify;
pub use linkify::{linkify, split_trailing};

mod prep;
pub use prep::{prep_comment, prep_post, prep_thread, CommentView, MediaView, PostView};

pub mod strings;

mod thread;
pub use thread::{
    flatten, index_thread, reply_preview, unfold_thread, FlatComment, RenderableComment,
    ReplyPreview, ThreadIndex,
};

mod time_ago;
pub use time_ago::time_ago;

#[cfg(test)]
mod fuzz;

pub mod api {
    pub use ctzn_api::*;
}
