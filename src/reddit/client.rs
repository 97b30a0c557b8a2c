// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading subreddit data from the Reddit API.

use crate::conf::Credentials;
use crate::http;
use crate::reddit::service::{RedditService, Service};
use crate::sort::{ListingSort, SearchSort};
use crate::thing::{self, Page, Post};
use log::trace;
use std::num::NonZeroU32;
use thiserror::Error;

/// Reddit never returns more than this many items in one page of a listing.
pub const PAGE_SIZE: usize = 100;

/// A read-only source of posts, organized by subreddit.
///
/// [`Subreddits`] is the real implementation; tests and other callers
/// may supply their own.
pub trait Source {
    /// Up to `limit` posts from the subreddit named `community`, in the
    /// order given by `sort`.
    fn listing(
        &self,
        community: &str,
        sort: ListingSort,
        limit: NonZeroU32,
    ) -> impl Future<Output = Result<Vec<Post>, Error>>;

    /// Up to `limit` posts from the subreddit named `community` that
    /// match `query`, in the order given by `sort`.
    fn search(
        &self,
        community: &str,
        query: &str,
        sort: SearchSort,
        limit: NonZeroU32,
    ) -> impl Future<Output = Result<Vec<Post>, Error>>;
}

/// Reads posts from subreddits.
#[derive(Debug)]
pub struct Subreddits<S: Service> {
    service: S,
}

impl Subreddits<RedditService> {
    /// Creates a new client that authenticates with Reddit using the
    /// given credentials.
    ///
    /// Returns an [`enum@Error`] if Reddit refuses the credentials or
    /// cannot be reached.
    pub async fn connect(credentials: &Credentials) -> Result<Self, Error> {
        let service = RedditService::connect(credentials).await?;
        Ok(Self::new_with_service(service))
    }
}

impl<S: Service> Subreddits<S> {
    /// Creates a new client backed by `service`, the actual service
    /// implementation that will be used to retrieve listings.
    pub fn new_with_service(service: S) -> Self {
        Self { service }
    }

    /// Follows a listing's pages until `limit` posts have been read or
    /// the listing runs out.
    async fn paginate(
        &self,
        path: &str,
        params: &[(&str, String)],
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        let limit = limit.get() as usize;
        let mut posts = Vec::with_capacity(limit.min(PAGE_SIZE));
        let mut after: Option<String> = None;

        loop {
            let remaining = limit - posts.len();
            let mut query = params.to_vec();
            query.push(("limit", remaining.min(PAGE_SIZE).to_string()));
            if let Some(cursor) = after.take() {
                query.push(("after", cursor));
            }

            let data = self.service.get_listing(path, &query).await?;
            let (page, cursor) = Page::parse(&data)?.into_parts();
            let fetched = page.len();
            trace!("Read {fetched} posts from {path}, next page: {cursor:?}");
            posts.extend(page.into_iter().take(remaining));

            match cursor {
                Some(cursor) if fetched > 0 && posts.len() < limit => after = Some(cursor),
                _ => break,
            }
        }

        Ok(posts)
    }
}

/// Checks that `community` looks like a subreddit name, which may only
/// contain ASCII letters, digits, and underscores.
fn check_community(community: &str) -> Result<&str, Error> {
    let valid = !community.is_empty()
        && community
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(community)
    } else {
        Err(Error::InvalidCommunity(community.to_string()))
    }
}

impl<S: Service> Source for Subreddits<S> {
    async fn listing(
        &self,
        community: &str,
        sort: ListingSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        let community = check_community(community)?;
        let path = format!("/r/{community}/{sort}");
        let params = match sort {
            ListingSort::Top => vec![("t", String::from("all"))],
            _ => vec![],
        };
        self.paginate(&path, &params, limit).await
    }

    async fn search(
        &self,
        community: &str,
        query: &str,
        sort: SearchSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        let community = check_community(community)?;
        let path = format!("/r/{community}/search");
        let params = vec![
            ("q", query.to_string()),
            ("restrict_sr", String::from("1")),
            ("sort", sort.to_string()),
            ("syntax", String::from("lucene")),
            ("t", String::from("all")),
        ];
        self.paginate(&path, &params, limit).await
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),

    /// A subreddit name containing characters Reddit never allows.
    #[error("Invalid subreddit name: {0:?}")]
    InvalidCommunity(String),

    /// An error reading one particular subreddit.
    #[error("r/{community}: {source}")]
    Community {
        community: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the name of the subreddit that was being read.
    pub fn in_community(self, community: &str) -> Self {
        Error::Community {
            community: community.to_string(),
            source: Box::new(self),
        }
    }
}
