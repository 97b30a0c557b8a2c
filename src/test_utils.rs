// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use crate::http::{HTTPError, HTTPResult};
use crate::reddit::client::{Error, Source};
use crate::reddit::service::{Query, Service};
use crate::sort::{ListingSort, SearchSort};
use crate::thing::Post;
use chrono::DateTime;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::fs;
use std::num::NonZeroU32;
use std::sync::Mutex;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .unwrap_or_else(|_| panic!("could not load test data from {filename}"))
            .trim_end(),
    )
}

pub fn limit(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("limit must be positive")
}

/// Replays listings from `tests/data` instead of contacting Reddit.
///
/// A request for `/r/python/hot` is answered with `r_python_hot.json`;
/// if the request carries an `after` cursor, `_after_<cursor>` is appended
/// to the file name. Requests for which there is no file fail with a 404.
#[derive(Debug, Default)]
pub struct TestService {
    requests: Mutex<Vec<String>>,
}

impl TestService {
    /// Every request made so far, as `path?name=value&...`, unencoded.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn fixture_name(path: &str, query: &Query) -> String {
        let mut name = path.trim_start_matches('/').replace('/', "_");
        if let Some((_, cursor)) = query.iter().find(|(key, _)| *key == "after") {
            name = format!("{name}_after_{cursor}");
        }
        name
    }
}

impl Service for TestService {
    async fn get_listing(&self, path: &str, query: &Query<'_>) -> HTTPResult<String> {
        let qs = query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        self.requests.lock().unwrap().push(format!("{path}?{qs}"));

        let filename = format!("tests/data/{}.json", Self::fixture_name(path, query));
        fs::read_to_string(&filename).map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

/// A source that hands back canned posts and remembers what it was asked.
#[derive(Debug, Default)]
pub struct StaticSource {
    posts: HashMap<String, Vec<Post>>,
    calls: Mutex<Vec<String>>,
}

impl StaticSource {
    /// Adds `count` posts for `community`, with IDs like `python-1`.
    pub fn with_community(mut self, community: &str, count: usize) -> Self {
        let posts = (1..=count)
            .map(|n| {
                Post::build(format!("{community}-{n}"), format!("Post {n}"), community).build()
            })
            .collect();
        self.posts.insert(community.to_string(), posts);
        self
    }

    /// Every call made so far, as `listing:<community>:<sort>` or
    /// `search:<community>:<query>:<sort>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn take(&self, community: &str, limit: NonZeroU32) -> Result<Vec<Post>, Error> {
        let posts = self
            .posts
            .get(community)
            .ok_or(Error::Service(HTTPError::Http(StatusCode::NOT_FOUND)))?;
        Ok(posts.iter().take(limit.get() as usize).cloned().collect())
    }
}

impl Source for StaticSource {
    async fn listing(
        &self,
        community: &str,
        sort: ListingSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("listing:{community}:{sort}"));
        self.take(community, limit)
    }

    async fn search(
        &self,
        community: &str,
        query: &str,
        sort: SearchSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search:{community}:{query}:{sort}"));
        self.take(community, limit)
    }
}

impl Post {
    /// A fully populated post that can be used for testing purposes.
    pub fn test(id: &str, title: &str, body: &str) -> Post {
        Post::build(id, title, "python")
            .body(body)
            .author("alice")
            .score(42)
            .num_comments(7)
            .created_utc(DateTime::from_timestamp(1700000000, 0).unwrap())
            .permalink(format!("/r/python/comments/{id}/test_post/"))
            .build()
    }
}
