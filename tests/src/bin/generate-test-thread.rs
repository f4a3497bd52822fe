use chrono::{Duration, Utc};
use ctzn_api::{
    Author, CommentNode, CommentValue, DbUrl, RecordRef, ReplyContext, Time, UserId,
};
use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

const USERS: [(&str, &str); 4] = [
    ("alice@ctzn.one", "Alice"),
    ("bob@ctzn.one", "Bob"),
    ("carla@ctzn.social", "Carla"),
    ("dan@ctzn.social", "Dan"),
];

const NUM_TOP_LEVEL: usize = 12;
const MAX_REPLIES: usize = 3;
const MAX_DEPTH: usize = 5;
const COMMENT_WORD_COUNT: usize = 25;

const URLS: [&str; 4] = [
    "https://ctzn.network",
    "http://en.wikipedia.org/wiki/Rust_(programming_language)",
    "hyper://1f968afe/ctzn.network/post/ms9dxn",
    "https://example.com/?q=threads&page=2",
];

struct Gen {
    rng: ThreadRng,
    root: RecordRef,
    next_key: usize,
}

impl Gen {
    fn gen_author(&mut self) -> Author {
        let (user_id, name) = USERS.choose(&mut self.rng).copied().unwrap_or(USERS[0]);
        Author {
            user_id: UserId::new(user_id),
            // some users never set a display name
            display_name: self.rng.gen_bool(0.8).then(|| String::from(name)),
        }
    }

    fn gen_text(&mut self) -> String {
        let mut text = lipsum::lipsum_words(self.rng.gen_range(1..COMMENT_WORD_COUNT));
        if self.rng.gen_bool(0.3) {
            let url = URLS.choose(&mut self.rng).copied().unwrap_or(URLS[0]);
            let wrapped = match self.rng.gen_range(0..3) {
                0 => format!(" {url}"),
                1 => format!(" ({url})"),
                _ => format!(" see {url}."),
            };
            text.push_str(&wrapped);
        }
        text
    }

    fn gen_comment(&mut self, parent: Option<&RecordRef>, after: Time, depth: usize) -> CommentNode {
        let key = format!("ms{:05}", self.next_key);
        self.next_key += 1;
        let author = self.gen_author();
        let url = DbUrl(format!("hyper://{}/ctzn.network/comment/{key}", author.user_id.username()));
        let created_at = after + Duration::minutes(self.rng.gen_range(1..600));
        let me = RecordRef {
            db_url: url.clone(),
            author_id: author.user_id.clone(),
        };
        let num_replies = match depth < MAX_DEPTH {
            true => self.rng.gen_range(0..=MAX_REPLIES),
            false => 0,
        };
        let replies = (0..num_replies)
            .map(|_| self.gen_comment(Some(&me), created_at, depth + 1))
            .collect();
        CommentNode {
            key,
            url,
            value: CommentValue {
                text: self.gen_text(),
                created_at,
                reply: Some(ReplyContext {
                    root: self.root.clone(),
                    parent: parent.cloned(),
                }),
                community: None,
            },
            author,
            replies,
        }
    }
}

fn main() {
    let mut generator = Gen {
        rng: rand::thread_rng(),
        root: RecordRef {
            db_url: DbUrl::new("hyper://1f968afe/ctzn.network/post/ms9dxn"),
            author_id: UserId::new("alice@ctzn.one"),
        },
        next_key: 0,
    };
    let start = Utc::now() - Duration::days(30);
    let forest = (0..NUM_TOP_LEVEL)
        .map(|_| generator.gen_comment(None, start, 0))
        .collect::<Vec<_>>();
    println!(
        "{}",
        serde_json::to_string_pretty(&forest).expect("serializing generated thread")
    );
}
