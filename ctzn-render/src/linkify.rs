use regex::{Captures, Regex};

const LINK_CLASS: &str = "text-blue-600 hover:underline";

lazy_static::lazy_static! {
    static ref URL_RE: Regex = Regex::new(
        r"(?i-u)(?:https?|hyper)://[a-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]+"
    )
    .expect("invalid url regex");
}

/// Splits trailing punctuation off a URL candidate
///
/// Returns `(url, trailing)`, both in their original order. A closing bracket is kept in the
/// URL as long as it does not close more brackets than the URL opened, so that
/// `http://x.org/Foo_(bar)` survives while `(see http://x.org)` loses its last parenthesis.
pub fn split_trailing(candidate: &str) -> (&str, &str) {
    let mut end = candidate.len();
    while let Some(c) = candidate[..end].chars().next_back() {
        if c.is_ascii_alphanumeric() {
            break;
        }
        let url = &candidate[..end];
        let opening = match c {
            ')' => Some('('),
            ']' => Some('['),
            _ => None,
        };
        if let Some(opening) = opening {
            if url.matches(c).count() <= url.matches(opening).count() {
                break;
            }
        }
        end -= c.len_utf8();
    }
    candidate.split_at(end)
}

/// Wraps every URL of `text` in a link
///
/// Nothing is escaped: this is meant to run exactly once, on raw text that the templates
/// embed verbatim.
pub fn linkify(text: &str) -> String {
    URL_RE
        .replace_all(text, |caps: &Captures| {
            let (url, trailing) = split_trailing(&caps[0]);
            format!(r#"<a class="{LINK_CLASS}" href="{url}">{url}</a>{trailing}"#)
        })
        .into_owned()
}
