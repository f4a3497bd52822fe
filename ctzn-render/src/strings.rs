//! Helpers deriving display strings and links from record identifiers

use crate::api::UserId;

/// Cuts `s` down to its first `n` characters followed by `...`
///
/// Strings at most 3 characters longer than `n` are returned as-is, as the ellipsis would not
/// make them any shorter.
pub fn shorten(s: &str, n: usize) -> String {
    if s.chars().count() > n + 3 {
        let mut res = s.chars().take(n).collect::<String>();
        res.push_str("...");
        res
    } else {
        String::from(s)
    }
}

/// Joins path segments with exactly one `/` between each pair
pub fn join_path(parts: &[&str]) -> String {
    let mut parts = parts.iter();
    let mut res = String::from(parts.next().copied().unwrap_or(""));
    for p in parts {
        match (res.ends_with('/'), p.starts_with('/')) {
            (true, true) => res.push_str(&p[1..]),
            (false, false) => {
                res.push('/');
                res.push_str(p);
            }
            _ => res.push_str(p),
        }
    }
    res
}

fn host_of(user: &UserId) -> String {
    format!("https://{}", user.domain())
}

pub fn avatar_url(user: &UserId) -> String {
    join_path(&[&host_of(user), "ctzn/avatar", user.username()])
}

pub fn blob_url(user: &UserId, blob_name: &str) -> String {
    join_path(&[&host_of(user), "ctzn/blobs", user.as_str(), blob_name])
}

pub fn comment_url(author: &UserId, key: &str) -> String {
    format!("/{}", join_path(&[author.as_str(), "ctzn.network/comment", key]))
}

pub fn post_url(author: &UserId, key: &str) -> String {
    format!("/{}", join_path(&[author.as_str(), "ctzn.network/post", key]))
}
