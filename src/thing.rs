// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. This
//! module encapsulates the one kind of thing we care about, the post
//! (a "link" or `t3` in Reddit parlance), and provides an easy way to
//! turn listing JSON from the Reddit API into posts.

use crate::filter::Searchable;
use crate::text::convert_html_entities;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// The author name Reddit reports for posts whose author deleted their account.
const DELETED_AUTHOR: &str = "[deleted]";

/// A Reddit post.
///
/// Posts are read-only values; they are only ever created from Reddit API
/// responses or, for callers supplying their own data, with [`Post::build()`].
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    id: String,
    title: String,
    body: String,
    author: Option<String>,
    score: i64,
    num_comments: u64,
    created_utc: DateTime<Utc>,
    permalink: String,
    subreddit: String,
}

impl Post {
    /// Incrementally builds a new post.
    ///
    /// # Examples
    ///
    /// ```
    /// use subfind::thing::Post;
    /// let post = Post::build("abc123", "Async IO in Python", "python")
    ///     .author("guido")
    ///     .score(42)
    ///     .build();
    /// assert_eq!(post.title(), "Async IO in Python");
    /// assert_eq!(post.author(), Some("guido"));
    /// assert_eq!(post.body(), "");
    /// ```
    pub fn build(
        id: impl Into<String>,
        title: impl Into<String>,
        subreddit: impl Into<String>,
    ) -> PostBuilder {
        PostBuilder::new(id.into(), title.into(), subreddit.into())
    }

    /// The post's unique base-36 identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The post's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text of a self post, or an empty string for link posts.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The post author's username, or `None` if the account was deleted.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Net upvotes.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of comments on the post.
    pub fn num_comments(&self) -> u64 {
        self.num_comments
    }

    /// When the post was submitted.
    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    /// Path to the post, relative to the Reddit domain.
    pub fn permalink(&self) -> &str {
        &self.permalink
    }

    /// Absolute URL of the post.
    pub fn url(&self) -> String {
        format!("https://reddit.com{}", self.permalink)
    }

    /// Name of the subreddit the post was submitted to, without the `r/`.
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }
}

/// A builder for posts.
///
/// Call [`Post::build()`] instead of using this directly.
#[derive(Debug)]
#[must_use]
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    fn new(id: String, title: String, subreddit: String) -> Self {
        let permalink = format!("/r/{subreddit}/comments/{id}/");
        let post = Post {
            id,
            title,
            body: String::new(),
            author: None,
            score: 0,
            num_comments: 0,
            created_utc: DateTime::UNIX_EPOCH,
            permalink,
            subreddit,
        };
        Self { post }
    }

    /// Sets the body of a self post.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.post.body = body.into();
        self
    }

    /// Sets the author's username.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.post.author = Some(author.into());
        self
    }

    /// Sets the score.
    pub fn score(mut self, score: i64) -> Self {
        self.post.score = score;
        self
    }

    /// Sets the number of comments.
    pub fn num_comments(mut self, num_comments: u64) -> Self {
        self.post.num_comments = num_comments;
        self
    }

    /// Sets the submission time.
    pub fn created_utc(mut self, created_utc: DateTime<Utc>) -> Self {
        self.post.created_utc = created_utc;
        self
    }

    /// Sets the permalink, which should be relative to the Reddit domain.
    pub fn permalink(mut self, permalink: impl Into<String>) -> Self {
        self.post.permalink = permalink.into();
        self
    }

    /// Finalizes the [`Post`].
    pub fn build(self) -> Post {
        self.post
    }
}

/// One page of a Reddit listing.
#[derive(Debug)]
pub struct Page {
    posts: Vec<Post>,
    after: Option<String>,
}

impl Page {
    /// Parses the JSON body of a listing response, such as the response to
    /// `/r/<subreddit>/hot.json` or `/r/<subreddit>/search.json`.
    pub fn parse(data: &str) -> Result<Self, Error> {
        let listing: RawListing = serde_json::from_str(data)?;
        let after = listing.data.after;
        let posts = listing
            .data
            .children
            .into_iter()
            .map(|child| Post::try_from(child.data))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { posts, after })
    }

    /// The posts on this page, in the order Reddit returned them.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Cursor for the next page, if there is one.
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Splits the page into its posts and its next-page cursor.
    pub fn into_parts(self) -> (Vec<Post>, Option<String>) {
        (self.posts, self.after)
    }
}

/// An error parsing Reddit data.
#[derive(Debug, Error)]
pub enum Error {
    /// The response was not a well-formed listing.
    #[error("could not parse listing: {0}")]
    Json(#[from] serde_json::Error),

    /// A post carried a creation time that cannot be represented.
    #[error("invalid timestamp for post {id}: {timestamp}")]
    Timestamp { id: String, timestamp: f64 },
}

#[derive(Debug, Deserialize)]
struct RawListing {
    data: RawListingData,
}

#[derive(Debug, Deserialize)]
struct RawListingData {
    children: Vec<RawChild>,
    after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChild {
    data: RawPost,
}

#[derive(Debug, Deserialize)]
struct RawPost {
    id: String,
    title: String,
    #[serde(default)]
    selftext: String,
    author: Option<String>,
    score: i64,
    num_comments: u64,
    created_utc: f64,
    permalink: String,
    subreddit: String,
}

impl TryFrom<RawPost> for Post {
    type Error = Error;

    fn try_from(raw: RawPost) -> Result<Self, Self::Error> {
        let created_utc = DateTime::from_timestamp(raw.created_utc.trunc() as i64, 0)
            .ok_or_else(|| Error::Timestamp {
                id: raw.id.clone(),
                timestamp: raw.created_utc,
            })?;
        let author = raw.author.filter(|author| author != DELETED_AUTHOR);
        Ok(Post {
            id: raw.id,
            title: convert_html_entities(&raw.title),
            body: convert_html_entities(&raw.selftext),
            author,
            score: raw.score,
            num_comments: raw.num_comments,
            created_utc,
            permalink: raw.permalink,
            subreddit: raw.subreddit,
        })
    }
}
