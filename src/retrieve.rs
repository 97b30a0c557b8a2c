// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Retrieves posts from several subreddits at once.
//!
//! Retrieval fans out across subreddits, a bounded number at a time, but
//! results always come back in the order the subreddits were given, with
//! each subreddit's posts in the order Reddit returned them. Posts that
//! show up in more than one subreddit are kept every time they appear.
//!
//! The first failure from any subreddit aborts the whole retrieval.

use crate::reddit::client::{Error, Source};
use crate::sort::{ListingSort, SearchSort};
use crate::thing::Post;
use futures::stream::{self, StreamExt, TryStreamExt};
use log::info;
use std::num::{NonZeroU32, NonZeroUsize};

/// Number of subreddits fetched at once unless configured otherwise.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// How posts are retrieved from each subreddit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Browse each subreddit's listing in the given order.
    Browse(ListingSort),

    /// Search each subreddit for `query`.
    Search { query: String, sort: SearchSort },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Browse(ListingSort::default())
    }
}

/// Trims subreddit names and drops the blank ones.
///
/// # Examples
///
/// ```
/// use subfind::retrieve::normalize_communities;
/// let names = normalize_communities(["python", "  ", " rust "]);
/// assert_eq!(names, vec!["python", "rust"]);
/// ```
pub fn normalize_communities<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Retrieves posts from a [`Source`] for a list of subreddits.
#[derive(Debug)]
pub struct Retriever<'a, S: Source> {
    source: &'a S,
    concurrency: NonZeroUsize,
}

impl<'a, S: Source> Retriever<'a, S> {
    /// Creates a new retriever for `source`.
    pub fn new(source: &'a S) -> Self {
        let concurrency = DEFAULT_CONCURRENCY;
        Self {
            source,
            concurrency,
        }
    }

    /// Sets the maximum number of subreddits fetched at once.
    ///
    /// A concurrency of 1 fetches subreddits strictly one after another.
    pub fn concurrency(self, concurrency: NonZeroUsize) -> Self {
        Self {
            concurrency,
            ..self
        }
    }

    /// Retrieves up to `limit` posts from each subreddit using `mode`.
    pub async fn retrieve<T: AsRef<str>>(
        &self,
        communities: &[T],
        mode: &Mode,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        match mode {
            Mode::Browse(sort) => self.browse(communities, *sort, limit).await,
            Mode::Search { query, sort } => self.search(communities, query, *sort, limit).await,
        }
    }

    /// Retrieves up to `limit` posts from each subreddit's listing.
    ///
    /// Blank subreddit names are skipped.
    pub async fn browse<T: AsRef<str>>(
        &self,
        communities: &[T],
        sort: ListingSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        let communities = normalize_communities(communities);
        let batches: Vec<Vec<Post>> = stream::iter(&communities)
            .map(|community| self.browse_one(community, sort, limit))
            .buffered(self.concurrency.get())
            .try_collect()
            .await?;

        let posts: Vec<Post> = batches.into_iter().flatten().collect();
        info!(
            "Total: {} posts fetched from {} subreddit(s)",
            posts.len(),
            communities.len()
        );
        Ok(posts)
    }

    /// Searches each subreddit for up to `limit` posts matching `query`.
    ///
    /// Blank subreddit names are skipped.
    pub async fn search<T: AsRef<str>>(
        &self,
        communities: &[T],
        query: &str,
        sort: SearchSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        let communities = normalize_communities(communities);
        let batches: Vec<Vec<Post>> = stream::iter(&communities)
            .map(|community| self.search_one(community, query, sort, limit))
            .buffered(self.concurrency.get())
            .try_collect()
            .await?;

        let posts: Vec<Post> = batches.into_iter().flatten().collect();
        info!("Total: {} search results", posts.len());
        Ok(posts)
    }

    async fn browse_one(
        &self,
        community: &str,
        sort: ListingSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        info!("Fetching {limit} {sort} posts from r/{community} ...");
        let posts = self
            .source
            .listing(community, sort, limit)
            .await
            .map_err(|err| err.in_community(community))?;
        info!("Fetched {} posts from r/{community}", posts.len());
        Ok(posts)
    }

    async fn search_one(
        &self,
        community: &str,
        query: &str,
        sort: SearchSort,
        limit: NonZeroU32,
    ) -> Result<Vec<Post>, Error> {
        info!("Searching r/{community} for \"{query}\" (sort={sort}, limit={limit}) ...");
        let posts = self
            .source
            .search(community, query, sort, limit)
            .await
            .map_err(|err| err.in_community(community))?;
        info!("Found {} results in r/{community}", posts.len());
        Ok(posts)
    }
}
