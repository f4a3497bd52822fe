#![cfg(test)]

use regex::Regex;

use crate::{
    api::{CommentNode, RecordRef, UserId},
    linkify,
    thread::tests::{comment, db_url},
    unfold_thread, ReplyPreview,
};

/// What the `i`-th generated comment replies to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Reply {
    NoContext,
    Root,
    ExplicitRoot,
    Parent,
}

/// Builds a forest out of `(parent selector, minute, reply kind)` triples
///
/// Comment `i` is a reply to comment `selector % (i + 1)`, or top-level if that is `i` itself.
fn build_forest(shape: &[(u8, u8, u8)]) -> (Vec<CommentNode>, Vec<Reply>) {
    let mut parents = Vec::with_capacity(shape.len());
    let mut kinds = Vec::with_capacity(shape.len());
    let mut nodes = Vec::with_capacity(shape.len());
    for (i, &(sel, minute, kind)) in shape.iter().enumerate() {
        let parent = Some(sel as usize % (i + 1)).filter(|p| *p != i);
        let kind = match kind % 4 {
            0 => Reply::NoContext,
            1 => Reply::Root,
            2 => Reply::ExplicitRoot,
            _ => Reply::Parent,
        };
        let key = format!("c{i}");
        let mut c = comment(&key, minute as i64, None, Vec::new());
        match kind {
            Reply::NoContext => c.value.reply = None,
            Reply::Root => (),
            Reply::ExplicitRoot => {
                let reply = c.value.reply.as_mut().unwrap();
                reply.parent = Some(reply.root.clone());
            }
            Reply::Parent => {
                // top-level comments then point to a comment that is not in the thread
                let parent_key = match parent {
                    Some(p) => format!("c{p}"),
                    None => String::from("deleted"),
                };
                c.value.reply.as_mut().unwrap().parent = Some(RecordRef {
                    db_url: db_url(&parent_key),
                    author_id: UserId::new("alice@ctzn.one"),
                });
            }
        }
        parents.push(parent);
        kinds.push(kind);
        nodes.push(Some(c));
    }

    // children always come after their parent, so build bottom-up
    let mut children = vec![Vec::new(); shape.len()];
    let mut forest = Vec::new();
    for i in (0..shape.len()).rev() {
        let mut node = nodes[i].take().unwrap();
        node.replies = std::mem::take(&mut children[i]);
        node.replies.reverse();
        match parents[i] {
            Some(p) => children[p].push(node),
            None => forest.push(node),
        }
    }
    forest.reverse();
    (forest, kinds)
}

fn preorder_keys(forest: &[CommentNode]) -> Vec<String> {
    forest
        .iter()
        .flat_map(|c| std::iter::once(c.key.clone()).chain(preorder_keys(&c.replies)))
        .collect()
}

fn key_index(key: &str) -> usize {
    key[1..].parse().unwrap()
}

#[test]
fn unfold_properties() {
    bolero::check!()
        .with_type::<Vec<(u8, u8, u8)>>()
        .for_each(|shape| {
            let (forest, kinds) = build_forest(shape);
            let mut expected = preorder_keys(&forest);
            expected.sort_by_key(|k| shape[key_index(k)].1);

            let res = unfold_thread(forest).unwrap();

            // completeness, chronological order and stability
            let keys = res.iter().map(|c| c.comment.key.clone()).collect::<Vec<_>>();
            assert_eq!(keys, expected);
            assert!(res
                .windows(2)
                .all(|w| w[0].comment.created_at <= w[1].comment.created_at));

            // annotation rule
            for c in res {
                let i = key_index(&c.comment.key);
                match (kinds[i], c.reply_preview) {
                    (Reply::Parent, Some(ReplyPreview::Available { parent, .. })) => {
                        assert_eq!(parent, c.comment.reply.unwrap().parent.unwrap().db_url)
                    }
                    (Reply::Parent, Some(ReplyPreview::Unavailable { parent })) => {
                        assert_eq!(parent, db_url("deleted"))
                    }
                    (Reply::Parent, None) => panic!("reply to a comment has no preview"),
                    (_, None) => (),
                    (_, Some(p)) => panic!("reply to the root has a preview {p:?}"),
                }
            }
        });
}

lazy_static::lazy_static! {
    static ref LINK_RE: Regex =
        Regex::new(r#"<a class="text-blue-600 hover:underline" href="[^"]*">|</a>"#).unwrap();
}

#[test]
fn linkify_keeps_text() {
    bolero::check!().with_type::<String>().for_each(|text| {
        let res = linkify(text);
        if !text.contains("://") {
            assert_eq!(&res, text);
        }
        // markup-free input comes back once the inserted links are removed
        if !text.contains(|c: char| matches!(c, '<' | '>' | '"')) {
            assert_eq!(&LINK_RE.replace_all(&res, ""), text);
        }
    });
}
