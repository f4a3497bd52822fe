use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use ctzn_render::{
    api::{self, CommentNode, PostNode, Time},
    CommentView, PostView,
};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Render a comment thread dump into template-ready JSON
    Thread {
        /// JSON array of comments as returned by comments.getThread, `-` for stdin
        #[structopt(parse(from_os_str))]
        comments: PathBuf,

        /// JSON post the thread belongs to
        #[structopt(long, parse(from_os_str))]
        post: Option<PathBuf>,

        /// Render the post the way community feeds do
        #[structopt(long)]
        community: bool,

        /// Reference time for relative timestamps, RFC 3339 (defaults to now)
        #[structopt(long)]
        now: Option<String>,
    },

    /// Wrap the URLs of some text in links
    Linkify {
        text: String,
    },
}

#[derive(serde::Serialize)]
struct ThreadPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    post: Option<PostView>,
    comments: Vec<CommentView>,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let mut res = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut res)
            .context("reading standard input")?;
    } else {
        res = std::fs::read_to_string(path)
            .with_context(|| format!("reading file {:?}", path))?;
    }
    Ok(res)
}

fn parse_json<T: serde::de::DeserializeOwned>(data: &str) -> anyhow::Result<T> {
    let mut de = serde_json::Deserializer::from_str(data);
    // reply chains nest without bound, grow the stack instead of capping depth
    de.disable_recursion_limit();
    let res = serde::Deserialize::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(res)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data = read_input(path)?;
    parse_json(&data).with_context(|| format!("parsing json from {:?}", path))
}

fn reference_time(now: Option<String>) -> anyhow::Result<Time> {
    match now {
        None => Ok(chrono::Utc::now()),
        Some(now) => Ok(api::parse_time(&now).context("parsing --now")?),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    match opt.cmd {
        Command::Thread {
            comments,
            post,
            community,
            now,
        } => {
            let now = reference_time(now)?;
            let forest: Vec<CommentNode> = read_json(&comments)?;
            tracing::info!(num_top_level = forest.len(), "rendering comment thread");
            let post = post
                .map(|p| read_json::<PostNode>(&p))
                .transpose()?
                .map(|p| ctzn_render::prep_post(p, community, now));
            let comments = ctzn_render::prep_thread(forest, now)
                .with_context(|| format!("preparing thread from {:?}", comments))?;
            let page = ThreadPage { post, comments };
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            serde_json::to_writer_pretty(&mut stdout, &page).context("writing rendered thread")?;
            writeln!(stdout).context("writing rendered thread")?;
        }
        Command::Linkify { text } => {
            println!("{}", ctzn_render::linkify(&text));
        }
    }

    Ok(())
}
